/*
stats.rs

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

//! Save and restore the player stats and the completed puzzle dates.
//!
//! The saved objects are serializations of the [`Stats`] object and of the
//! list of completed dates in JSON format by using [`serde`].

use super::store::{KEY_COMPLETED, KEY_STATS, Store};
use crate::stats::Stats;

/// Retrieve the list of completed puzzle dates, oldest first.
pub fn completed_dates(store: &Store) -> Vec<String> {
    store.load(KEY_COMPLETED, Vec::new())
}

/// Add a date to the completed puzzles.
///
/// The list is append-only and keeps one occurrence per date; adding a date
/// twice leaves the list unchanged.
pub fn add_completed_date(store: &Store, date: &str) {
    let mut completed: Vec<String> = completed_dates(store);
    if !completed.iter().any(|d| d == date) {
        completed.push(date.to_string());
        store.save(KEY_COMPLETED, &completed);
    }
}

/// Retrieve the player stats, or fresh zeroed stats when there is no record.
pub fn stats(store: &Store) -> Stats {
    store.load(KEY_STATS, Stats::default())
}

/// Apply an update to the player stats and persist the result.
///
/// Return the updated stats.
pub fn update_stats<F>(store: &Store, update: F) -> Stats
where
    F: FnOnce(&mut Stats),
{
    let mut stats: Stats = stats(store);
    update(&mut stats);
    store.save(KEY_STATS, &stats);
    stats
}

/// Record the end of a game in the player stats and persist the result.
///
/// Return the updated stats.
pub fn record_game_result(store: &Store, won: bool) -> Stats {
    update_stats(store, |stats| stats.record_result(won))
}
