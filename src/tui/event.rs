use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// TUI-specific input events
pub enum TuiEvent {
    Key(KeyEvent),
    Paste(String), // Bracketed paste
    Resize,
}

/// Block until the terminal delivers an event we care about.
pub fn poll_event() -> std::io::Result<TuiEvent> {
    loop {
        match event::read()? {
            // Only presses; releases arrive when keyboard enhancement is on
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                return Ok(TuiEvent::Key(key_event));
            }
            Event::Paste(data) => return Ok(TuiEvent::Paste(data)),
            Event::Resize(_, _) => return Ok(TuiEvent::Resize),
            _ => {}
        }
    }
}
