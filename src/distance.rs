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

use crate::Raster;

/// Dissimilarity between columns `x1` and `x2` of a raster.
///
/// Sums the Euclidean RGB distance of every `row_stride`-th row.
/// The sum is not normalized, so it is only meaningful compared against
/// other distances over the same rows. A stride of 0 means 1.
pub fn edge_distance<R>(raster: &R, x1: usize, x2: usize, row_stride: usize) -> f64
where
    R: Raster + ?Sized,
{
    (0..raster.height())
        .step_by(row_stride.max(1))
        .map(|y| {
            let [r1, g1, b1] = raster.rgb(x1, y);
            let [r2, g2, b2] = raster.rgb(x2, y);

            let dr = f64::from(r1 as i16 - r2 as i16);
            let dg = f64::from(g1 as i16 - g2 as i16);
            let db = f64::from(b1 as i16 - b2 as i16);

            (dr * dr + dg * dg + db * db).sqrt()
        })
        .sum()
}
