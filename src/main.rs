use anyhow::{Context, Result};
use clap::Parser;

use linkchord::cli::{CliArgs, CliCommand};
use linkchord::commands;
use linkchord::opener::{LinkOpener, LogOpener, SystemOpener};
use linkchord::{BindingStore, EditorSession, FileStore, Settings};

mod runtime;

fn main() -> Result<()> {
    linkchord::tracing::init();

    let args = CliArgs::parse();
    let settings = Settings::load();

    let storage_path = args
        .store
        .clone()
        .or_else(|| settings.storage_file())
        .context("No config directory available, pass --store")?;
    tracing::debug!("Using binding store {}", storage_path.display());

    let store = BindingStore::new(FileStore::new(storage_path));
    let mut session = EditorSession::with_placeholders(store, settings.placeholders());

    let mut opener: Box<dyn LinkOpener> = if args.dry_run || !settings.open_links {
        Box::new(LogOpener)
    } else {
        Box::new(SystemOpener)
    };

    match args.command() {
        CliCommand::Listen { record } => runtime::run(session, opener, record.as_deref()),
        command => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            commands::execute(&command, &mut session, opener.as_mut(), &mut out)
        }
    }
}
