/*
puzzle_types.rs

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

//! Puzzle type registry.
//!
//! Each puzzle type describes one way of grouping tiles ("sounds-like",
//! "phrases", ...). The round data carries the type identifier; the host uses
//! this registry to display the matching name, description, and player
//! instructions. The registry is a static table with pure lookups.

use crate::puzzle::TileContent;

/// Instructions displayed when the puzzle type is unknown.
const GENERIC_INSTRUCTIONS: &str = "Select tiles to form groups";

/// Example shown in the tooltip for a puzzle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeExample {
    /// Tiles of the example, in selection order.
    pub tiles: &'static [&'static str],

    /// Resulting word or phrase.
    pub result: &'static str,
}

/// Metadata for one puzzle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleType {
    /// Unique identifier, matching the `type` field in the puzzle data.
    pub id: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Longer explanation of the puzzle type.
    pub description: &'static str,

    /// What to show the player.
    pub instructions: &'static str,

    /// Kind of content on the tiles.
    pub tile_content: TileContent,

    /// Optional example for the tooltip.
    pub example: Option<TypeExample>,
}

/// The available puzzle types.
const PUZZLE_TYPES: [PuzzleType; 6] = [
    PuzzleType {
        id: "sounds-like",
        name: "Sounds Like",
        description: "Combine tiles that sound like a word when spoken together",
        instructions:
            "Select tiles in order that sound like a word when combined (e.g., PAN + CAKE = Pancake)",
        tile_content: TileContent::Text,
        example: Some(TypeExample {
            tiles: &["PAN", "CAKE"],
            result: "Pancake",
        }),
    },
    PuzzleType {
        id: "phrases",
        name: "Phrase Builder",
        description: "Combine tiles to form common phrases or expressions",
        instructions: "Select tiles that form a common phrase or saying",
        tile_content: TileContent::Text,
        example: Some(TypeExample {
            tiles: &["BREAK", "THE", "ICE"],
            result: "Break the ice",
        }),
    },
    PuzzleType {
        id: "compound-words",
        name: "Compound Words",
        description: "Combine tiles to form compound words",
        instructions: "Select tiles that combine into a compound word",
        tile_content: TileContent::Text,
        example: Some(TypeExample {
            tiles: &["SUN", "FLOWER"],
            result: "Sunflower",
        }),
    },
    PuzzleType {
        id: "categories",
        name: "Categories",
        description: "Group items that belong to the same category",
        instructions: "Select items that share a common category",
        tile_content: TileContent::Text,
        example: Some(TypeExample {
            tiles: &["APPLE", "BANANA", "ORANGE"],
            result: "Fruits",
        }),
    },
    PuzzleType {
        id: "visual",
        name: "Visual Match",
        description: "Match images that belong together",
        instructions: "Select images that form a group or sequence",
        tile_content: TileContent::Image,
        example: None,
    },
    PuzzleType {
        id: "mixed",
        name: "Mixed Media",
        description: "Combine text and images",
        instructions: "Match text with corresponding images",
        tile_content: TileContent::Mixed,
        example: None,
    },
];

/// Return the puzzle type configuration for the given identifier, or None if
/// the identifier is unknown.
pub fn get_puzzle_type(id: &str) -> Option<&'static PuzzleType> {
    PUZZLE_TYPES.iter().find(|t| t.id == id)
}

/// Return the player instructions for the given puzzle type identifier.
///
/// Unknown identifiers get a generic instruction string.
pub fn get_instructions(id: &str) -> &'static str {
    match get_puzzle_type(id) {
        Some(t) => t.instructions,
        None => GENERIC_INSTRUCTIONS,
    }
}
