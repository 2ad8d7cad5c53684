/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object owns the full session state: the loaded puzzle, the
//! current round's grid and selection, the found groups, the error counters,
//! and the cross-round progress (collected alices, errors per round). The
//! host mutates it through the operations ([`Game::select_tile`],
//! [`Game::submit_group`], [`Game::next_round`], ...) and reads the derived
//! state back through the accessors; no state is reachable any other way.

use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use strum_macros::Display;

use crate::puzzle::{FoundGroup, Puzzle, Round, TileContent};
use crate::saver::game::GameSnapshot;
use crate::settings::Settings;

/// Number of distinct colors assigned to found groups.
const GROUP_COLOR_COUNT: usize = 4;

/// Overall status of the game session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum GameStatus {
    /// The player is selecting tiles in the current round.
    #[default]
    Playing,

    /// All groups of the current round are found; more rounds remain.
    RoundComplete,

    /// All groups of the last round are found.
    GameWon,

    /// The player ran out of guesses.
    GameLost,
}

/// Rejected group submission.
///
/// These are expected, recoverable player mistakes; they never abort the
/// session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Fewer than two tiles are selected.
    NotEnoughTiles,

    /// No puzzle round is loaded.
    NoRound,

    /// The selection does not match any grouping.
    Incorrect,

    /// The selection does not match and the error budget is now exhausted.
    OutOfGuesses,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SubmitError::NotEnoughTiles => write!(f, "Select at least 2 tiles"),
            SubmitError::NoRound => write!(f, "No round data"),
            SubmitError::Incorrect => write!(f, "Incorrect grouping"),
            SubmitError::OutOfGuesses => write!(f, "Out of guesses"),
        }
    }
}

impl Error for SubmitError {}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Puzzle loaded for the session.
    puzzle: Option<Puzzle>,

    /// Date of the loaded puzzle (`YYYY-MM-DD`).
    date: Option<String>,

    /// Current round number, starting at 1.
    current_round: usize,

    /// Tile contents of the current round's grid.
    grid: Vec<String>,

    /// Indices of the selected tiles, in selection order.
    selected_tiles: Vec<usize>,

    /// Groups found in the current round.
    found_groups: Vec<FoundGroup>,

    /// Tile index to group color index, for the solved tiles.
    solved_tiles: HashMap<usize, u8>,

    /// Number of groups to find in the current round.
    groups_to_find: usize,

    /// Alice words collected on completed rounds.
    alices: Vec<String>,

    /// Number of errors the player made in each completed round.
    errors_per_round: Vec<usize>,

    /// Number of errors the player made in the current round.
    errors_this_round: usize,

    /// Puzzle type identifier of the current round.
    round_kind: String,

    /// Theme of the current round.
    theme: String,

    /// Kind of content on the current round's tiles.
    tile_content: TileContent,

    /// Overall session status.
    status: GameStatus,

    /// Whether the session was restored from a saved snapshot.
    restored_from_storage: bool,

    /// Game configuration.
    settings: Settings,
}

impl Game {
    /// Create a [`Game`] object with no puzzle loaded.
    pub fn new(settings: Settings) -> Self {
        Self {
            puzzle: None,
            date: None,
            current_round: 1,
            grid: Vec::new(),
            selected_tiles: Vec::new(),
            found_groups: Vec::new(),
            solved_tiles: HashMap::new(),
            groups_to_find: 0,
            alices: Vec::new(),
            errors_per_round: Vec::new(),
            errors_this_round: 0,
            round_kind: String::new(),
            theme: String::new(),
            tile_content: TileContent::Text,
            status: GameStatus::Playing,
            restored_from_storage: false,
            settings,
        }
    }

    /// Load a puzzle for the given date, discarding any session in progress.
    ///
    /// The game restarts at round 1 in the [`GameStatus::Playing`] status.
    pub fn load_puzzle(&mut self, puzzle: Puzzle, date: &str) {
        debug!(
            "Loading the puzzle for {date}: {} rounds",
            puzzle.rounds.len()
        );
        self.puzzle = Some(puzzle);
        self.date = Some(date.to_string());
        self.current_round = 1;
        self.alices.clear();
        self.errors_per_round.clear();
        self.status = GameStatus::Playing;
        self.restored_from_storage = false;

        self.load_round(1);
    }

    /// Load a specific round's data into the working state.
    fn load_round(&mut self, round_number: usize) {
        let Some(round) = self.round_data(round_number).cloned() else {
            return;
        };

        self.groups_to_find = round.required_groups();
        self.grid = round.grid;
        self.selected_tiles.clear();
        self.found_groups.clear();
        self.solved_tiles.clear();
        self.errors_this_round = 0;
        self.round_kind = round.kind;
        self.theme = round.theme;
        self.tile_content = round.tile_content;
        self.status = GameStatus::Playing;
    }

    /// Select or deselect the tile at the given grid index.
    ///
    /// Selecting an already selected tile removes it and every tile selected
    /// after it, so the player can undo the selection back to a given point.
    /// Solved tiles cannot be selected, and the selection is frozen outside
    /// of the [`GameStatus::Playing`] status.
    pub fn select_tile(&mut self, index: usize) {
        if self.status != GameStatus::Playing {
            return;
        }
        if index >= self.grid.len() || self.solved_tiles.contains_key(&index) {
            return;
        }

        match self.selected_tiles.iter().position(|&i| i == index) {
            // Deselect: remove this tile and all tiles selected after it
            Some(position) => self.selected_tiles.truncate(position),
            // Select: add to the sequence
            None => self.selected_tiles.push(index),
        }
    }

    /// Clear the current selection.
    pub fn clear_selection(&mut self) {
        self.selected_tiles.clear();
    }

    /// Submit the current selection as a group attempt.
    ///
    /// On a match, return the grouping result and mark the selected tiles as
    /// solved. On a miss, count the error, and end the game when the error
    /// budget is exhausted.
    pub fn submit_group(&mut self) -> Result<String, SubmitError> {
        if self.selected_tiles.len() < 2 {
            return Err(SubmitError::NotEnoughTiles);
        }

        let Some(round) = self.current_round_data() else {
            return Err(SubmitError::NoRound);
        };

        // Contents of the selected tiles, in selection order
        let selected_words: Vec<String> = self
            .selected_tiles
            .iter()
            .map(|&i| self.grid[i].clone())
            .collect();

        let matched: Option<String> = round
            .groupings
            .iter()
            .find(|g| g.matches(&selected_words))
            .map(|g| g.result.clone());

        match matched {
            Some(result) => {
                let color = (self.found_groups.len() % GROUP_COLOR_COUNT + 1) as u8;
                debug!("Correct grouping \"{result}\": color {color}");

                // The tiles stay on the grid, marked as solved
                for &i in &self.selected_tiles {
                    self.solved_tiles.insert(i, color);
                }
                self.found_groups.push(FoundGroup {
                    words: selected_words,
                    result: result.clone(),
                    color,
                });
                self.clear_selection();

                if self.found_groups.len() >= self.groups_to_find {
                    self.complete_round();
                }

                Ok(result)
            }
            None => {
                self.errors_this_round += 1;
                debug!(
                    "Wrong grouping {selected_words:?}: error {} of {}",
                    self.errors_this_round, self.settings.errors_per_round
                );
                self.clear_selection();

                if self.errors_this_round >= self.settings.errors_per_round {
                    self.lose_game();
                    return Err(SubmitError::OutOfGuesses);
                }

                Err(SubmitError::Incorrect)
            }
        }
    }

    /// Complete the current round and collect the alice.
    fn complete_round(&mut self) {
        if let Some(alice) = self.current_round_data().and_then(|r| r.alice.clone()) {
            self.alices.push(alice);
        }
        self.errors_per_round.push(self.errors_this_round);

        self.status = if self.current_round >= self.total_rounds() {
            GameStatus::GameWon
        } else {
            GameStatus::RoundComplete
        };
        debug!("Round {} complete: {}", self.current_round, self.status);
    }

    /// End the game after the player exhausted the error budget.
    fn lose_game(&mut self) {
        self.errors_per_round.push(self.errors_this_round);
        self.status = GameStatus::GameLost;
        debug!("Game lost on round {}", self.current_round);
    }

    /// Advance to the next round.
    ///
    /// This is a no-op when the current round is the last one.
    pub fn next_round(&mut self) {
        if self.current_round >= self.total_rounds() {
            return;
        }

        self.current_round += 1;
        self.load_round(self.current_round);
    }

    /// Restart the loaded puzzle from round 1, discarding all progress.
    pub fn reset_game(&mut self) {
        if let (Some(puzzle), Some(date)) = (self.puzzle.clone(), self.date.clone()) {
            self.load_puzzle(puzzle, &date);
        }
    }

    /// Jump to a specific round (developer option).
    ///
    /// Requires [`Settings::debug_mode`]; out-of-range rounds are ignored.
    pub fn skip_to_round(&mut self, round_number: usize) {
        if !self.settings.debug_mode {
            return;
        }
        if round_number < 1 || round_number > self.total_rounds() {
            return;
        }

        debug!("Skipping to round {round_number}");
        self.current_round = round_number;
        self.load_round(round_number);
    }

    /// Build the snapshot persisted between sessions.
    ///
    /// The snapshot only records the cross-round progress; the working state
    /// of the round in progress (selection, found groups) is not saved.
    pub fn state_for_storage(&self) -> GameSnapshot {
        GameSnapshot {
            date: self.date.clone().unwrap_or_default(),
            round: self.current_round,
            alices: self.alices.clone(),
            errors_used: self.errors_per_round.clone(),
        }
    }

    /// Restore the cross-round progress from a saved snapshot.
    ///
    /// A puzzle for the snapshot's date must already be loaded, and the
    /// snapshot's round must exist in that puzzle; otherwise the snapshot is
    /// rejected and the state is left unchanged. The target round restarts
    /// fresh: the snapshot does not record mid-round state.
    ///
    /// Return whether the snapshot was applied.
    pub fn restore_from_storage(&mut self, snapshot: &GameSnapshot) -> bool {
        if self.date.as_deref() != Some(snapshot.date.as_str()) {
            debug!(
                "Ignoring the saved game for {}: the loaded puzzle is for {:?}",
                snapshot.date, self.date
            );
            return false;
        }
        if snapshot.round < 1 || snapshot.round > self.total_rounds() {
            debug!(
                "Ignoring the saved game: round {} out of range",
                snapshot.round
            );
            return false;
        }

        self.alices = snapshot.alices.clone();
        self.errors_per_round = snapshot.errors_used.clone();
        self.current_round = snapshot.round;
        self.load_round(snapshot.round);
        self.restored_from_storage = true;
        debug!(
            "Restored the saved game for {} at round {}",
            snapshot.date, snapshot.round
        );
        true
    }

    /// Return the data of the given round number, or None if out of range.
    fn round_data(&self, round_number: usize) -> Option<&Round> {
        if round_number < 1 {
            return None;
        }
        self.puzzle.as_ref()?.rounds.get(round_number - 1)
    }

    /// Return the data of the current round, or None if no puzzle is loaded.
    pub fn current_round_data(&self) -> Option<&Round> {
        self.round_data(self.current_round)
    }

    /// Current round number, starting at 1.
    pub fn current_round(&self) -> usize {
        self.current_round
    }

    /// Number of rounds in the loaded puzzle.
    pub fn total_rounds(&self) -> usize {
        match &self.puzzle {
            Some(p) => p.rounds.len(),
            None => 0,
        }
    }

    /// Tile contents of the current round's grid.
    pub fn grid(&self) -> &[String] {
        &self.grid
    }

    /// Indices of the selected tiles, in selection order.
    pub fn selected_tiles(&self) -> &[usize] {
        &self.selected_tiles
    }

    /// Groups found in the current round.
    pub fn found_groups(&self) -> &[FoundGroup] {
        &self.found_groups
    }

    /// Color index of the solved tile at the given grid index, or None if the
    /// tile is not solved.
    pub fn solved_color(&self, index: usize) -> Option<u8> {
        self.solved_tiles.get(&index).copied()
    }

    /// Number of groups to find in the current round.
    pub fn groups_to_find(&self) -> usize {
        self.groups_to_find
    }

    /// Alice words collected on completed rounds.
    pub fn alices(&self) -> &[String] {
        &self.alices
    }

    /// Number of errors the player made in each completed round.
    pub fn errors_per_round(&self) -> &[usize] {
        &self.errors_per_round
    }

    /// Number of errors the player made in the current round.
    pub fn errors_this_round(&self) -> usize {
        self.errors_this_round
    }

    /// Number of errors left before the game is lost.
    pub fn remaining_errors(&self) -> usize {
        self.settings
            .errors_per_round
            .saturating_sub(self.errors_this_round)
    }

    /// Puzzle type identifier of the current round.
    pub fn round_kind(&self) -> &str {
        &self.round_kind
    }

    /// Theme of the current round.
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Kind of content on the current round's tiles.
    pub fn tile_content(&self) -> TileContent {
        self.tile_content
    }

    /// Overall session status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether all groups of the current round are found.
    pub fn is_round_complete(&self) -> bool {
        self.groups_to_find > 0 && self.found_groups.len() >= self.groups_to_find
    }

    /// Whether the player won the game.
    pub fn is_game_won(&self) -> bool {
        self.status == GameStatus::GameWon
    }

    /// Whether the player lost the game.
    pub fn is_game_lost(&self) -> bool {
        self.status == GameStatus::GameLost
    }

    /// Phrase revealed when the last round is completed.
    pub fn final_phrase(&self) -> &str {
        match &self.puzzle {
            Some(p) => &p.final_phrase,
            None => "",
        }
    }

    /// Date of the loaded puzzle (`YYYY-MM-DD`), or None if no puzzle is
    /// loaded.
    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Whether the session was restored from a saved snapshot.
    pub fn is_restored_from_storage(&self) -> bool {
        self.restored_from_storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::Grouping;

    fn grouping(words: &[&str], result: &str) -> Grouping {
        Grouping {
            words: words.iter().map(|w| w.to_string()).collect(),
            result: result.to_string(),
        }
    }

    fn round(grid: &[&str], groupings: Vec<Grouping>, alice: Option<&str>) -> Round {
        Round {
            grid: grid.iter().map(|w| w.to_string()).collect(),
            groupings,
            groups_to_find: None,
            kind: "sounds-like".to_string(),
            theme: "BREAKFAST".to_string(),
            tile_content: TileContent::Text,
            alice: alice.map(|a| a.to_string()),
        }
    }

    /// Two-round puzzle: one grouping in round 1, two in round 2.
    fn puzzle() -> Puzzle {
        Puzzle {
            rounds: vec![
                round(
                    &["PAN", "CAKE", "X1", "X2", "X3", "X4", "X5", "X6", "X7"],
                    vec![grouping(&["PAN", "CAKE"], "Pancake")],
                    Some("RABBIT"),
                ),
                round(
                    &["SUN", "FLOWER", "TEA", "POT", "Y1", "Y2", "Y3", "Y4", "Y5"],
                    vec![
                        grouping(&["SUN", "FLOWER"], "Sunflower"),
                        grouping(&["TEA", "POT"], "Teapot"),
                    ],
                    None,
                ),
            ],
            final_phrase: "DOWN THE RABBIT HOLE".to_string(),
        }
    }

    fn game() -> Game {
        let mut game = Game::new(Settings::default());
        game.load_puzzle(puzzle(), "2025-01-18");
        game
    }

    #[test]
    fn test_load_puzzle_resets_state() {
        let game = game();
        assert_eq!(game.current_round(), 1);
        assert_eq!(game.total_rounds(), 2);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.found_groups().is_empty());
        assert!(game.selected_tiles().is_empty());
        assert_eq!(game.groups_to_find(), 1);
        assert_eq!(game.errors_this_round(), 0);
        assert_eq!(game.round_kind(), "sounds-like");
        assert_eq!(game.theme(), "BREAKFAST");
    }

    #[test]
    fn test_select_appends_in_order() {
        let mut game = game();
        game.select_tile(4);
        game.select_tile(0);
        game.select_tile(7);
        assert_eq!(game.selected_tiles(), &[4, 0, 7]);
    }

    #[test]
    fn test_reselect_removes_single_trailing_tile() {
        let mut game = game();
        game.select_tile(3);
        game.select_tile(3);
        assert!(game.selected_tiles().is_empty());
    }

    #[test]
    fn test_reselect_truncates_back_to_tile() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        game.select_tile(0);
        assert!(game.selected_tiles().is_empty());

        game.select_tile(0);
        game.select_tile(1);
        game.select_tile(2);
        game.select_tile(1);
        assert_eq!(game.selected_tiles(), &[0]);
    }

    #[test]
    fn test_select_ignores_out_of_range_index() {
        let mut game = game();
        game.select_tile(9);
        game.select_tile(100);
        assert!(game.selected_tiles().is_empty());
    }

    #[test]
    fn test_submit_requires_two_tiles() {
        let mut game = game();
        game.select_tile(0);
        assert_eq!(game.submit_group(), Err(SubmitError::NotEnoughTiles));
        assert_eq!(game.selected_tiles(), &[0]);
        assert_eq!(game.errors_this_round(), 0);
    }

    #[test]
    fn test_submit_match_solves_tiles() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        let result = game.submit_group();
        assert_eq!(result, Ok("Pancake".to_string()));
        assert_eq!(game.found_groups().len(), 1);
        assert_eq!(game.found_groups()[0].color, 1);
        assert_eq!(game.solved_color(0), Some(1));
        assert_eq!(game.solved_color(1), Some(1));
        assert!(game.selected_tiles().is_empty());
    }

    #[test]
    fn test_submit_match_is_order_sensitive() {
        let mut game = game();
        game.select_tile(1);
        game.select_tile(0);
        assert_eq!(game.submit_group(), Err(SubmitError::Incorrect));
        assert_eq!(game.errors_this_round(), 1);
        assert!(game.selected_tiles().is_empty());
    }

    #[test]
    fn test_solved_tiles_cannot_be_reselected() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();

        game.next_round();
        assert_eq!(game.status(), GameStatus::Playing);

        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        game.select_tile(0);
        assert!(game.selected_tiles().is_empty());
    }

    #[test]
    fn test_round_completion_collects_alice() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        assert_eq!(game.status(), GameStatus::RoundComplete);
        assert_eq!(game.alices(), &["RABBIT".to_string()]);
        assert_eq!(game.errors_per_round(), &[0]);
        assert!(game.is_round_complete());
    }

    #[test]
    fn test_next_round_reloads_working_state() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        game.next_round();

        assert_eq!(game.current_round(), 2);
        assert_eq!(game.status(), GameStatus::Playing);
        assert_eq!(game.grid()[0], "SUN");
        assert!(game.found_groups().is_empty());
        assert!(game.selected_tiles().is_empty());
        assert_eq!(game.groups_to_find(), 2);
        assert_eq!(game.errors_this_round(), 0);
        assert!(game.solved_color(0).is_none());
    }

    #[test]
    fn test_winning_the_last_round() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        game.next_round();

        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        assert_eq!(game.status(), GameStatus::Playing);

        game.select_tile(2);
        game.select_tile(3);
        game.submit_group().unwrap();
        assert_eq!(game.status(), GameStatus::GameWon);
        assert!(game.is_game_won());
        assert_eq!(game.final_phrase(), "DOWN THE RABBIT HOLE");
        assert_eq!(game.errors_per_round(), &[0, 0]);
    }

    #[test]
    fn test_color_cycles_over_four() {
        let mut game = game();
        game.next_round();

        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        game.select_tile(2);
        game.select_tile(3);
        game.submit_group().unwrap();
        assert_eq!(game.found_groups()[0].color, 1);
        assert_eq!(game.found_groups()[1].color, 2);
    }

    #[test]
    fn test_out_of_guesses_loses_the_game() {
        let mut game = game();
        for attempt in 1..=3 {
            game.select_tile(2);
            game.select_tile(3);
            let result = game.submit_group();
            if attempt < 3 {
                assert_eq!(result, Err(SubmitError::Incorrect));
                assert_eq!(game.status(), GameStatus::Playing);
            } else {
                assert_eq!(result, Err(SubmitError::OutOfGuesses));
            }
        }
        assert_eq!(game.status(), GameStatus::GameLost);
        assert!(game.is_game_lost());
        assert_eq!(game.errors_per_round(), &[3]);
        assert_eq!(game.remaining_errors(), 0);

        // Terminal state: the selection is frozen
        game.select_tile(0);
        assert!(game.selected_tiles().is_empty());
        assert_eq!(game.submit_group(), Err(SubmitError::NotEnoughTiles));
        assert_eq!(game.status(), GameStatus::GameLost);
    }

    #[test]
    fn test_custom_error_budget() {
        let settings = Settings {
            errors_per_round: 1,
            ..Settings::default()
        };
        let mut game = Game::new(settings);
        game.load_puzzle(puzzle(), "2025-01-18");

        game.select_tile(2);
        game.select_tile(3);
        assert_eq!(game.submit_group(), Err(SubmitError::OutOfGuesses));
        assert_eq!(game.status(), GameStatus::GameLost);
    }

    #[test]
    fn test_reset_game_restarts_from_round_one() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        game.next_round();

        game.reset_game();
        assert_eq!(game.current_round(), 1);
        assert_eq!(game.status(), GameStatus::Playing);
        assert!(game.alices().is_empty());
        assert!(game.errors_per_round().is_empty());
        assert_eq!(game.grid()[0], "PAN");
    }

    #[test]
    fn test_skip_to_round_requires_debug_mode() {
        let mut game = game();
        game.skip_to_round(2);
        assert_eq!(game.current_round(), 1);

        let settings = Settings {
            debug_mode: true,
            ..Settings::default()
        };
        let mut game = Game::new(settings);
        game.load_puzzle(puzzle(), "2025-01-18");
        game.skip_to_round(2);
        assert_eq!(game.current_round(), 2);
        assert_eq!(game.groups_to_find(), 2);

        // Out-of-range targets are ignored
        game.skip_to_round(0);
        game.skip_to_round(3);
        assert_eq!(game.current_round(), 2);
    }

    #[test]
    fn test_next_round_is_noop_on_last_round() {
        let mut game = game();
        game.next_round();
        assert_eq!(game.current_round(), 2);
        game.next_round();
        assert_eq!(game.current_round(), 2);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = game();
        game.select_tile(0);
        game.select_tile(1);
        game.submit_group().unwrap();
        game.next_round();

        let snapshot = game.state_for_storage();
        assert_eq!(snapshot.date, "2025-01-18");
        assert_eq!(snapshot.round, 2);
        assert_eq!(snapshot.alices, vec!["RABBIT".to_string()]);
        assert_eq!(snapshot.errors_used, vec![0]);

        let mut restored = Game::new(Settings::default());
        restored.load_puzzle(puzzle(), "2025-01-18");
        assert!(restored.restore_from_storage(&snapshot));
        assert!(restored.is_restored_from_storage());
        assert_eq!(restored.current_round(), 2);
        assert_eq!(restored.alices(), &["RABBIT".to_string()]);
        assert_eq!(restored.errors_per_round(), &[0]);
        assert_eq!(restored.status(), GameStatus::Playing);
        // The round restarts fresh
        assert!(restored.found_groups().is_empty());
        assert!(restored.selected_tiles().is_empty());
    }

    #[test]
    fn test_snapshot_rejected_for_other_date() {
        let game = game();
        let snapshot = game.state_for_storage();

        let mut other = Game::new(Settings::default());
        other.load_puzzle(puzzle(), "2025-01-19");
        assert!(!other.restore_from_storage(&snapshot));
        assert!(!other.is_restored_from_storage());
    }

    #[test]
    fn test_snapshot_rejected_for_out_of_range_round() {
        let mut game = game();
        let mut snapshot = game.state_for_storage();
        snapshot.round = 5;
        assert!(!game.restore_from_storage(&snapshot));
        assert_eq!(game.current_round(), 1);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::Playing.to_string(), "playing");
        assert_eq!(GameStatus::RoundComplete.to_string(), "round-complete");
        assert_eq!(GameStatus::GameWon.to_string(), "game-won");
        assert_eq!(GameStatus::GameLost.to_string(), "game-lost");
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::NotEnoughTiles.to_string(),
            "Select at least 2 tiles"
        );
        assert_eq!(SubmitError::Incorrect.to_string(), "Incorrect grouping");
        assert_eq!(SubmitError::OutOfGuesses.to_string(), "Out of guesses");
    }
}
