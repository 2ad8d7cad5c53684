/*
main.rs

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

mod app;
mod cli_options;
mod game;
mod puzzle;
mod puzzle_types;
mod saver;
mod settings;
mod stats;

use std::process::ExitCode;

fn main() -> ExitCode {
    let options: cli_options::Options = cli_options::parse();

    if let Err(error) = app::run(options) {
        eprintln!("Error: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
