/*
settings.rs

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

//! Game configuration.
//!
//! The [`Settings`] object is built once from the command-line options and
//! passed to the game state machine and to the storage gateway at
//! construction time. Nothing in the core reads configuration from a global.

/// Default number of allowed errors per round.
pub const DEFAULT_ERRORS_PER_ROUND: usize = 3;

/// Game configuration, read-only at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Whether game state, stats, and completed dates are persisted.
    pub enable_storage: bool,

    /// Number of allowed errors per round before the game is lost.
    pub errors_per_round: usize,

    /// Enable developer features ([`crate::game::Game::skip_to_round`]).
    pub debug_mode: bool,

    /// Jump to a specific round on load (developer option).
    pub skip_to_round: Option<usize>,

    /// Show all valid groupings of the round (developer option).
    pub show_all_groupings: bool,

    /// Whether the host plays animations.
    pub enable_animations: bool,

    /// Animation speed multiplier (0.5 = slow, 1 = normal, 2 = fast).
    pub animation_speed: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enable_storage: true,
            errors_per_round: DEFAULT_ERRORS_PER_ROUND,
            debug_mode: false,
            skip_to_round: None,
            show_all_groupings: false,
            enable_animations: true,
            animation_speed: 1.0,
        }
    }
}
