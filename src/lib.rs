//! Library to put a shredded image back together.
//!
//! An image cut into equal-width vertical strips and shuffled can be
//! reassembled with [unshred]. The ordering is inferred from how well
//! the boundary columns of every pair of strips line up:
//!
//! * Strip width is estimated from column breaks when not given.
//! * Every strip picks the strip whose left edge best continues its right edge.
//! * The leftmost strip is resolved, then the neighbor chain is walked.
//!
//! The inverse, [shred], cuts an image into randomly ordered strips.
//! Pixel access goes through the [Raster] trait, so any decoded image
//! (or a plain `ndarray` buffer) can be fed in.

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//

pub mod chain;
pub mod distance;
mod error;
pub mod leftmost;
pub mod matcher;
pub mod raster;
mod shuffle;
pub mod strip;
mod unshred;
pub mod width;

#[cfg(test)]
mod test_utils;

#[doc(inline)]
pub use crate::error::Error;
#[doc(inline)]
pub use crate::leftmost::{Confidence, Leftmost};
#[doc(inline)]
pub use crate::matcher::NeighborLink;
#[doc(inline)]
pub use crate::raster::Raster;
#[doc(inline)]
pub use crate::shuffle::{permute_strips, reassemble, shred};
#[doc(inline)]
pub use crate::strip::Strip;
#[doc(inline)]
pub use crate::unshred::{unshred, Config, ConfigBuilder, Reconstruction};
