/*
app.rs

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

//! Terminal host for the game.
//!
//! The host loads the puzzle document, drives the [`Game`] state machine
//! from line-oriented commands, and persists the session snapshot, stats,
//! and completed dates through the storage gateway. It holds no game rules
//! of its own: every decision comes back from the state machine.

use chrono::{Local, NaiveDate};
use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::cli_options::Options;
use crate::game::{Game, GameStatus};
use crate::puzzle::{PuzzleSet, group_color};
use crate::puzzle_types;
use crate::saver::store::Store;
use crate::saver::{game as saver_game, stats as saver_stats};

/// Grid width used for display (the grids are 3x3).
const GRID_COLUMNS: usize = 3;

/// Validate the requested date, or default to today.
fn resolve_date(requested: Option<&str>) -> Result<String, Box<dyn Error>> {
    match requested {
        Some(date) => {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
            Ok(date.to_string())
        }
        None => Ok(Local::now().date_naive().format("%Y-%m-%d").to_string()),
    }
}

/// Print the current round: header, instructions, grid, selection, and
/// remaining guesses.
fn render(game: &Game) {
    println!();
    println!(
        "Round {}/{} - {} ({})",
        game.current_round(),
        game.total_rounds(),
        game.theme(),
        match puzzle_types::get_puzzle_type(game.round_kind()) {
            Some(t) => t.name,
            None => game.round_kind(),
        }
    );
    println!("{}", puzzle_types::get_instructions(game.round_kind()));
    println!();

    for (i, tile) in game.grid().iter().enumerate() {
        let cell: String = match game.solved_color(i) {
            Some(color) => format!("({tile}:{})", group_color(color)),
            None => format!("[{}] {tile}", i + 1),
        };
        print!("{cell:<18}");
        if (i + 1) % GRID_COLUMNS == 0 {
            println!();
        }
    }
    println!();

    for found in game.found_groups() {
        println!("Found: {} ({})", found.result, group_color(found.color));
    }
    if !game.selected_tiles().is_empty() {
        let words: Vec<&str> = game
            .selected_tiles()
            .iter()
            .map(|&i| game.grid()[i].as_str())
            .collect();
        println!("Selection: {}", words.join(" + "));
    }
    println!(
        "Groups found: {}/{} - remaining guesses: {}",
        game.found_groups().len(),
        game.groups_to_find(),
        game.remaining_errors()
    );
}

/// Print the valid groupings of the current round (developer option).
fn render_groupings(game: &Game) {
    if let Some(round) = game.current_round_data() {
        for grouping in &round.groupings {
            println!("{} = {}", grouping.words.join(" + "), grouping.result);
        }
    }
}

fn render_help() {
    println!("Commands:");
    println!("  1-9     select or deselect the tile");
    println!("  s       submit the selection");
    println!("  c       clear the selection");
    println!("  n       go to the next round");
    println!("  reset   restart the puzzle from round 1");
    println!("  q       save and quit");
}

/// Record the end of the game: stats, completed date on a win, and cleanup
/// of the saved session.
fn finish(store: &Store, game: &Game, won: bool) {
    if won {
        println!();
        println!("You won! {}", game.final_phrase());
        if !game.alices().is_empty() {
            println!("Collected: {}", game.alices().join(", "));
        }
        if let Some(date) = game.date() {
            saver_stats::add_completed_date(store, date);
        }
    } else {
        println!();
        println!("Out of guesses. Better luck tomorrow!");
    }

    let stats = saver_stats::record_game_result(store, won);
    saver_game::clear_current_game(store);
    println!(
        "Played: {} - won: {} - streak: {} (best: {})",
        stats.played, stats.won, stats.current_streak, stats.max_streak
    );
}

/// Load the puzzle for the requested date and run the game loop until the
/// game ends or the player quits.
pub fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let puzzles: PuzzleSet = PuzzleSet::from_file(&options.puzzles_file)?;
    let date: String = resolve_date(options.date.as_deref())?;
    debug!("Date: {date}, {} puzzles available", puzzles.len());

    let Some(puzzle) = puzzles.get(&date) else {
        return Err(format!(
            "no puzzle for {date} in {} (available: {})",
            options.puzzles_file.display(),
            puzzles.dates().join(", ")
        )
        .into());
    };

    let store: Store = Store::open(options.settings.enable_storage);
    let mut game: Game = Game::new(options.settings.clone());
    game.load_puzzle(puzzle.clone(), &date);

    if let Some(snapshot) = saver_game::load_current_game(&store) {
        if game.restore_from_storage(&snapshot) {
            println!("Resuming the saved game at round {}", game.current_round());
        }
    }
    if let Some(round) = options.settings.skip_to_round {
        game.skip_to_round(round);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&game);
        if options.settings.show_all_groupings {
            render_groupings(&game);
        }

        match game.status() {
            GameStatus::GameWon => {
                finish(&store, &game, true);
                return Ok(());
            }
            GameStatus::GameLost => {
                finish(&store, &game, false);
                return Ok(());
            }
            GameStatus::RoundComplete => {
                println!("Round complete! Type \"n\" for the next round.");
            }
            GameStatus::Playing => {}
        }

        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            // End of input: keep the session resumable
            saver_game::save_current_game(&store, &game.state_for_storage());
            return Ok(());
        };
        let line: String = line?;
        let command: &str = line.trim();

        match command {
            "" => {}
            "s" | "submit" => match game.submit_group() {
                Ok(result) => println!("Correct: {result}"),
                Err(error) => println!("{error}"),
            },
            "c" | "clear" => game.clear_selection(),
            "n" | "next" => game.next_round(),
            "reset" => game.reset_game(),
            "g" | "groupings" if options.settings.debug_mode => render_groupings(&game),
            "q" | "quit" => {
                saver_game::save_current_game(&store, &game.state_for_storage());
                println!("Saved. See you tomorrow!");
                return Ok(());
            }
            "h" | "help" | "?" => render_help(),
            _ => match command.parse::<usize>() {
                Ok(number) if (1..=game.grid().len()).contains(&number) => {
                    game.select_tile(number - 1);
                }
                _ => println!("Unknown command \"{command}\" (type \"h\" for help)"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date_validates_format() {
        assert_eq!(resolve_date(Some("2025-01-18")).unwrap(), "2025-01-18");
        assert!(resolve_date(Some("18/01/2025")).is_err());
        assert!(resolve_date(Some("2025-13-01")).is_err());
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(resolve_date(None).unwrap(), today);
    }
}
