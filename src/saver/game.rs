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

//! Save and restore the game in progress between sessions.
//!
//! The saved object is a [`GameSnapshot`]: the minimal cross-round progress
//! of a session, serialized in JSON format by using [`serde`]. The snapshot
//! deliberately omits the mid-round working state (selection, found groups,
//! solved tiles); restoring puts the player at the start of the saved round.
//! See [`crate::game::Game::restore_from_storage`].

use serde::{Deserialize, Serialize};

use super::store::{KEY_CURRENT, Store};

/// Cross-round progress of a game session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Date of the puzzle (`YYYY-MM-DD`).
    pub date: String,

    /// Round the player reached, starting at 1.
    pub round: usize,

    /// Alice words collected on completed rounds.
    pub alices: Vec<String>,

    /// Number of errors the player made in each completed round.
    pub errors_used: Vec<usize>,
}

/// Save the current game snapshot.
///
/// Return whether the snapshot was stored.
pub fn save_current_game(store: &Store, snapshot: &GameSnapshot) -> bool {
    store.save(KEY_CURRENT, snapshot)
}

/// Retrieve the saved game snapshot, or None if there is no saved game.
pub fn load_current_game(store: &Store) -> Option<GameSnapshot> {
    store.load(KEY_CURRENT, None)
}

/// Delete the saved game snapshot.
pub fn clear_current_game(store: &Store) {
    store.remove(KEY_CURRENT)
}
