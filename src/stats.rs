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

//! Aggregate player statistics.
//!
//! The [`Stats`] object counts the games played and won, and the win streaks.
//! It is saved when a game ends and restored when Alicegrid starts.
//! See the [`crate::saver::stats`] module that saves and restores the
//! [`Stats`] object.

use serde::{Deserialize, Serialize};

/// Aggregate counters for the player.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Number of games played.
    pub played: u32,

    /// Number of games won.
    pub won: u32,

    /// Number of consecutive games won, reset on any loss.
    pub current_streak: u32,

    /// Longest win streak.
    pub max_streak: u32,
}

impl Stats {
    /// Record the end of a game.
    ///
    /// A win extends the current streak and possibly the longest one; a loss
    /// resets the current streak.
    pub fn record_result(&mut self, won: bool) {
        self.played += 1;

        if won {
            self.won += 1;
            self.current_streak += 1;
            if self.current_streak > self.max_streak {
                self.max_streak = self.current_streak;
            }
        } else {
            self.current_streak = 0;
        }
    }
}
