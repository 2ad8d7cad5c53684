/*
puzzle.rs

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

//! Puzzle data model.
//!
//! Puzzles are distributed as a JSON document keyed by date (`YYYY-MM-DD`).
//! Each puzzle holds a list of rounds, and each round a 3x3 grid of tiles and
//! the list of valid groupings for that grid.
//! The [`PuzzleSet`] object loads the document and serves one [`Puzzle`] per
//! date; the game state machine only ever sees a single [`Puzzle`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use strum_macros::Display;

/// Kind of content displayed on the tiles of a round.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TileContent {
    /// Word or word fragment.
    #[default]
    Text,

    /// Image reference.
    Image,

    /// Both text and image tiles in the same grid.
    Mixed,
}

/// A valid answer for a round: an ordered sequence of tile contents.
///
/// The player's selection must match `words` exactly, in length and in order,
/// for the grouping to count as found.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    /// Tile contents, in the order the player must select them.
    pub words: Vec<String>,

    /// Resulting word or phrase, displayed when the grouping is found.
    pub result: String,
}

impl Grouping {
    /// Whether the given selection matches this grouping (same length, same
    /// order).
    pub fn matches(&self, selection: &[String]) -> bool {
        self.words.len() == selection.len() && self.words[..] == selection[..]
    }
}

/// One round of a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Tile contents for the 3x3 grid (9 items).
    pub grid: Vec<String>,

    /// Valid answers for this grid.
    pub groupings: Vec<Grouping>,

    /// Number of groups the player must find to complete the round.
    /// When absent, every grouping must be found.
    #[serde(default)]
    pub groups_to_find: Option<usize>,

    /// Puzzle type identifier ("sounds-like", "phrases", ...).
    /// See [`crate::puzzle_types`].
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Round theme, displayed to the player ("BREAKFAST", ...).
    #[serde(default)]
    pub theme: String,

    /// Kind of content on the tiles.
    #[serde(default)]
    pub tile_content: TileContent,

    /// Reward word collected when the round is completed.
    #[serde(default)]
    pub alice: Option<String>,
}

impl Round {
    /// Number of groups to find before the round is complete.
    pub fn required_groups(&self) -> usize {
        self.groups_to_find.unwrap_or(self.groupings.len())
    }
}

/// A complete daily puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Rounds, played in order.
    pub rounds: Vec<Round>,

    /// Phrase revealed when the last round is completed.
    #[serde(default)]
    pub final_phrase: String,
}

/// A group that the player found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundGroup {
    /// Tile contents of the group, in selection order.
    pub words: Vec<String>,

    /// Resulting word or phrase.
    pub result: String,

    /// Color index for the group, between 1 and 4.
    pub color: u8,
}

/// Document of puzzles keyed by date (`YYYY-MM-DD`).
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PuzzleSet {
    #[serde(flatten)]
    puzzles: HashMap<String, Puzzle>,
}

impl PuzzleSet {
    /// Load a puzzle document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let set: PuzzleSet = serde_json::from_reader(reader)?;
        Ok(set)
    }

    /// Return the puzzle for the given date, or None if there is none.
    pub fn get(&self, date: &str) -> Option<&Puzzle> {
        self.puzzles.get(date)
    }

    /// Sorted list of the dates that have a puzzle.
    pub fn dates(&self) -> Vec<&str> {
        let mut dates: Vec<&str> = self.puzzles.keys().map(String::as_str).collect();
        dates.sort_unstable();
        dates
    }

    /// Number of puzzles in the document.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Whether the document has no puzzle.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

/// Display colors for a found group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupColor {
    /// Color name.
    pub name: &'static str,

    /// Foreground color.
    pub hex: &'static str,

    /// Background color.
    pub bg: &'static str,
}

impl fmt::Display for GroupColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Palette for the group color indices 1 to 4.
const GROUP_COLORS: [GroupColor; 4] = [
    GroupColor {
        name: "blue",
        hex: "#3B82F6",
        bg: "#DBEAFE",
    },
    GroupColor {
        name: "green",
        hex: "#10B981",
        bg: "#D1FAE5",
    },
    GroupColor {
        name: "purple",
        hex: "#8B5CF6",
        bg: "#EDE9FE",
    },
    GroupColor {
        name: "orange",
        hex: "#F59E0B",
        bg: "#FEF3C7",
    },
];

/// Return the color configuration for a 1-based group color index.
///
/// Out-of-range indices fall back to the first color.
pub fn group_color(index: u8) -> &'static GroupColor {
    match index {
        1..=4 => &GROUP_COLORS[usize::from(index) - 1],
        _ => &GROUP_COLORS[0],
    }
}
