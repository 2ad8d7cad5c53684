/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Alicegrid.

Alicegrid is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Alicegrid is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Alicegrid. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! The options build the [`Settings`] object that is injected into the game
//! state machine and the storage gateway; the game core itself never reads
//! the command line. Most options are intended for developers testing
//! puzzles: jump to a round, reveal the groupings, raise the error budget.

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;

use crate::settings::{DEFAULT_ERRORS_PER_ROUND, Settings};

/// Play the Alicegrid daily grouping puzzle in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Path to the puzzle document (JSON keyed by date)
    #[arg(short, long, default_value = "puzzles.json")]
    puzzles: PathBuf,

    /// Play the puzzle for this date instead of today (YYYY-MM-DD)
    #[arg(short = 'D', long)]
    date: Option<String>,

    /// Number of allowed errors per round
    #[arg(short, long, default_value_t = DEFAULT_ERRORS_PER_ROUND)]
    errors: usize,

    /// Do not save or restore any game record
    #[arg(long, default_value_t = false)]
    no_storage: bool,

    /// Enable developer features and debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Jump to a specific round on load (requires --debug)
    #[arg(short, long)]
    round: Option<usize>,

    /// Show all valid groupings of the round (cheat mode for testing)
    #[arg(long, default_value_t = false)]
    show_groupings: bool,

    /// Disable animations
    #[arg(long, default_value_t = false)]
    no_animations: bool,
}

/// Options resolved from the command line.
pub struct Options {
    /// Game configuration passed to the core.
    pub settings: Settings,

    /// Path to the puzzle document.
    pub puzzles_file: PathBuf,

    /// Requested puzzle date, or None for today.
    pub date: Option<String>,
}

/// Build the [`Options`] object from parsed arguments.
fn build_options(args: Args) -> Options {
    Options {
        settings: Settings {
            enable_storage: !args.no_storage,
            errors_per_round: args.errors,
            debug_mode: args.debug,
            skip_to_round: args.round,
            show_all_groupings: args.show_groupings,
            enable_animations: !args.no_animations,
            animation_speed: 1.0,
        },
        puzzles_file: args.puzzles,
        date: args.date,
    }
}

/// Parse and process command-line options.
pub fn parse() -> Options {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let options: Options = build_options(args);
    debug!(
        "Options: puzzles {:?}, date {:?}, {:?}",
        options.puzzles_file, options.date, options.settings
    );
    options
}
