use crate::core::entry::Entry;

/// Observer of account list events.
///
/// `None` means the directory had no record for the selected name (an empty
/// list, or an account removed out-of-band). Listeners must handle it.
pub trait AccountListListener {
    /// The cursor landed on a row (or the list was activated).
    fn on_entry_selected(&mut self, entry: Option<&Entry>);

    /// Enter was pressed on a row.
    fn on_edit_requested(&mut self, entry: Option<&Entry>);
}
