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

use ndarray::prelude::*;

/// Gray levels whose gaps halve left to right, so every strip's
/// closest color is the one to its right (and the last one's is to its left).
pub const STAIRCASE: [u8; 8] = [0, 128, 192, 224, 240, 248, 252, 254];

pub fn staircase_color(v: u8) -> [u8; 3] {
    [v, 255 - v, v / 2]
}

/// One solid color per strip.
pub fn solid_strips(levels: &[u8], strip_width: usize, height: usize) -> Array3<u8> {
    let mut arr = Array3::zeros((height, levels.len() * strip_width, 3));
    for ((_, x, c), v) in arr.indexed_iter_mut() {
        *v = staircase_color(levels[x / strip_width])[c];
    }
    arr
}

fn seam_pattern(k: usize, y: usize) -> [u8; 3] {
    [
        ((k * 37 + y * 11) % 256) as u8,
        ((k * 91 + y * 3) % 256) as u8,
        ((k * 53) % 256) as u8,
    ]
}

/// Strips whose right edge column is repeated as the next strip's left edge.
pub fn seamless_strips(count: usize, strip_width: usize, height: usize) -> Array3<u8> {
    let mut arr = Array3::zeros((height, count * strip_width, 3));
    for ((y, x, c), v) in arr.indexed_iter_mut() {
        let k = x / strip_width;
        let k = if x % strip_width < strip_width / 2 { k } else { k + 1 };
        *v = seam_pattern(k, y)[c];
    }
    arr
}
