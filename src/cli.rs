//! Command-line argument parsing
//!
//! Supports:
//! - Listing, adding, renaming and deleting bindings
//! - Recording a chord for a binding
//! - Simulating a key press
//! - A window that listens for real key presses

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Open links with keyboard chords
#[derive(Parser, Debug)]
#[command(name = "linkchord", version, about = "Open links with keyboard chords")]
pub struct CliArgs {
    /// Binding storage file (overrides the config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Log matched links instead of opening them
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show all bindings
    List,

    /// Add a binding for LINK
    Add {
        link: String,

        /// Chord to record right away, e.g. "ctrl+shift+k"
        #[arg(long)]
        chord: Option<String>,
    },

    /// Change the link of an existing binding
    SetLink { old: String, new: String },

    /// Remove the binding for LINK
    Delete { link: String },

    /// Record CHORD as the shortcut for LINK
    Record { link: String, chord: String },

    /// Act as if CHORD was pressed
    Press { chord: String },

    /// Open a window and react to real key presses
    Listen {
        /// Capture the first key press as the chord for this link
        #[arg(long, value_name = "LINK")]
        record: Option<String>,
    },
}

impl CliArgs {
    /// Subcommand to run, `list` when none was given
    pub fn command(&self) -> CliCommand {
        self.command.clone().unwrap_or(CliCommand::List)
    }
}
