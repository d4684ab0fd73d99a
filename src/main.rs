use clap::Parser;
use roster::core::JsonDirectory;
use roster::core::config::{self, CliOverrides, StartupLog};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roster", version, about = "Browse and add accounts in a terminal")]
struct Args {
    /// Directory holding accounts.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.roster/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level: error, warn, info, debug, trace
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut startup = StartupLog::default();
    let file_config = match config::load_config(args.config.as_deref(), &mut startup) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            data_dir: args.data_dir.as_deref(),
            log_level: args.log_level.as_deref(),
        },
        &mut startup,
    );

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = resolved.log_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    startup.replay();
    log::info!("Roster starting up with data dir {}", resolved.data_dir.display());

    let directory = JsonDirectory::open(resolved.data_dir.clone())?;
    roster::tui::run(resolved, Box::new(directory))
}
