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

use log::warn;

use crate::Error;

/// Vertical slice of an image.
///
/// Only describes where the strip lies, the pixels stay in the raster
/// it was partitioned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub index: usize,
    pub offset: usize,
    pub width: usize,
    pub height: usize,
}

impl Strip {
    /// Leftmost column, in image coordinates.
    pub fn left(&self) -> usize {
        self.offset
    }

    /// Rightmost column, in image coordinates.
    pub fn right(&self) -> usize {
        self.offset + self.width - 1
    }

    /// Image column of the `i`-th column inside the strip, clamped to the strip.
    pub fn column(&self, i: usize) -> usize {
        self.offset + i.min(self.width - 1)
    }

    /// Image column of the `i`-th column counted from the right edge,
    /// clamped to the strip.
    pub fn column_rev(&self, i: usize) -> usize {
        self.right() - i.min(self.width - 1)
    }
}

/// Cut an image into strips of `strip_width`.
///
/// Leftover columns past the last whole strip are dropped, unless
/// `strict` is set, in which case they are an error.
pub fn partition(
    width: usize,
    height: usize,
    strip_width: usize,
    strict: bool,
) -> Result<Vec<Strip>, Error> {
    if strip_width == 0 {
        return Err(Error::ZeroStripWidth);
    }

    let count = width / strip_width;
    if count < 2 {
        return Err(Error::TooFewStrips {
            width,
            strip_width,
            count,
        });
    }

    let rem = width % strip_width;
    if rem != 0 {
        if strict {
            return Err(Error::UnevenWidth { width, strip_width });
        }
        warn!("Image width {width} is not a multiple of {strip_width}, dropping {rem} column(s)");
    }

    Ok((0..count)
        .map(|index| Strip {
            index,
            offset: index * strip_width,
            width: strip_width,
            height,
        })
        .collect())
}
