// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use thiserror::Error;

/// Structural failures while shredding or reconstructing an image.
///
/// None of these are transient, running again with the same input
/// fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("strip width must be positive")]
    ZeroStripWidth,

    #[error("image of width {width} holds {count} strip(s) of width {strip_width}, at least 2 are needed")]
    TooFewStrips {
        width: usize,
        strip_width: usize,
        count: usize,
    },

    #[error("image width {width} is not a multiple of strip width {strip_width}")]
    UnevenWidth { width: usize, strip_width: usize },

    #[error("cannot estimate strip width: no significant column breaks found")]
    WidthEstimation,

    #[error("cycle detected before visiting all strips: strip {index} revisited after {visited} of {total}")]
    Cycle {
        index: usize,
        visited: usize,
        total: usize,
    },

    #[error("strip {from} links to nonexistent strip {to}")]
    InvalidLink { from: usize, to: usize },
}
