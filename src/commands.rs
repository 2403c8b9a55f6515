//! Running CLI subcommands against an editor session
//!
//! Each subcommand maps onto one editor operation. Lookups that miss are
//! reported on the output and are not errors; only unparsable input fails.

use std::io::Write;

use anyhow::{bail, ensure, Context, Result};

use crate::chord::Chord;
use crate::cli::CliCommand;
use crate::editor::{EditorSession, KeyOutcome};
use crate::matcher::find_catch_all;
use crate::opener::LinkOpener;
use crate::store::KeyValueStore;

fn parse_chord(chord: &str) -> Result<Chord> {
    chord
        .parse::<Chord>()
        .with_context(|| format!("Invalid chord {:?}", chord))
}

/// Run one subcommand, writing human-readable results to `out`
///
/// `listen` needs a window and is handled by the binary.
pub fn execute<S: KeyValueStore>(
    command: &CliCommand,
    session: &mut EditorSession<S>,
    opener: &mut dyn LinkOpener,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        CliCommand::List => list(session, out)?,

        CliCommand::Add { link, chord } => {
            ensure!(!link.trim().is_empty(), "Link must not be empty");
            let chord = chord.as_deref().map(parse_chord).transpose()?;

            if session.row_for_link(link).is_some() {
                writeln!(out, "Binding for {} already exists", link)?;
                return Ok(());
            }

            let row = session.add_row();
            session.update_link(row, link);
            if let Some(chord) = chord {
                session.record_shortcut(row, chord);
            }
            let label = session.chord_label(row).unwrap_or_default();
            writeln!(out, "Added {} [{}]", link, label)?;
        }

        CliCommand::SetLink { old, new } => match session.row_for_link(old) {
            Some(row) => {
                session.update_link(row, new);
                writeln!(out, "Renamed {} to {}", old, new)?;
            }
            None => writeln!(out, "No binding for {}", old)?,
        },

        CliCommand::Delete { link } => match session.row_for_link(link) {
            Some(row) => {
                session.delete_row(row);
                writeln!(out, "Deleted {}", link)?;
            }
            None => writeln!(out, "No binding for {}", link)?,
        },

        CliCommand::Record { link, chord } => {
            let chord = parse_chord(chord)?;
            match session.row_for_link(link) {
                Some(row) => {
                    session.start_listening(row);
                    let outcome = session.handle_chord(chord.clone(), opener);
                    report(session, &outcome, &chord, out)?;
                }
                None => writeln!(out, "No binding for {}", link)?,
            }
        }

        CliCommand::Press { chord } => {
            let chord = parse_chord(chord)?;
            let outcome = session.handle_chord(chord.clone(), opener);
            report(session, &outcome, &chord, out)?;
        }

        CliCommand::Listen { .. } => bail!("`listen` needs a window"),
    }

    Ok(())
}

fn report<S: KeyValueStore>(
    session: &EditorSession<S>,
    outcome: &KeyOutcome,
    chord: &Chord,
    out: &mut dyn Write,
) -> Result<()> {
    match outcome {
        KeyOutcome::Recorded { row, chord } => {
            let link = session.link_label(*row).unwrap_or_default();
            writeln!(out, "Recorded {} for {}", chord, link)?;
        }
        KeyOutcome::NotStored(row) => {
            let link = session.link_label(*row).unwrap_or_default();
            writeln!(out, "No binding for {}, nothing recorded", link)?;
        }
        KeyOutcome::Opened(binding) => writeln!(out, "Opened {}", binding.link)?,
        KeyOutcome::NoMatch => writeln!(out, "No binding for {}", chord)?,
    }
    Ok(())
}

/// Print the session's rows as an editor would show them
fn list<S: KeyValueStore>(session: &EditorSession<S>, out: &mut dyn Write) -> Result<()> {
    let bindings = session.store().get();
    if bindings.is_empty() {
        writeln!(out, "No bindings")?;
        return Ok(());
    }

    for (i, row) in session.rows().iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} [{}]",
            i + 1,
            session.link_label(row.id()).unwrap_or_default(),
            session.chord_label(row.id()).unwrap_or_default()
        )?;
    }

    if let Some(idx) = find_catch_all(&bindings) {
        writeln!(
            out,
            "warning: binding {} has no chord and matches every key press",
            idx + 1
        )?;
    }

    Ok(())
}
