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

//! Strip width estimation.

use std::collections::BTreeMap;

use log::debug;
use rayon::prelude::*;

use crate::distance::edge_distance;
use crate::Raster;

/// Distance between every column and the one right of it.
fn column_distances<R>(raster: &R, row_stride: usize) -> Vec<f64>
where
    R: Raster + ?Sized,
{
    (1..raster.width())
        .into_par_iter()
        .map(|x| edge_distance(raster, x - 1, x, row_stride))
        .collect()
}

/// Guess the strip width of a shredded image.
///
/// A column boundary counts as a break when its distance jumps above the
/// previous boundary's by more than two standard deviations. The gaps
/// between consecutive breaks vote, and the most common gap wins
/// (smaller width on ties).
///
/// Returns `None` if no break is found.
pub fn estimate_strip_width<R>(raster: &R, row_stride: usize) -> Option<usize>
where
    R: Raster + ?Sized,
{
    let dist = column_distances(raster, row_stride);
    if dist.len() < 2 {
        return None;
    }

    let n = dist.len() as f64;
    let mean = dist.iter().sum::<f64>() / n;
    let std = (dist.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n).sqrt();
    debug!("Column distance mean {mean:.2}, standard deviation {std:.2}");

    let mut votes = BTreeMap::<usize, usize>::new();
    let mut last = 0;
    for (x, w) in dist.windows(2).enumerate() {
        if w[1] - w[0] > 2.0 * std {
            // dist[x + 1] sits between columns x + 1 and x + 2
            let edge = x + 2;
            *votes.entry(edge - last).or_default() += 1;
            last = edge;
        }
    }

    // Iteration is by ascending width, so strict > keeps the smallest on ties.
    let mut best = None;
    for (&width, &count) in &votes {
        match best {
            Some((_, c)) if c >= count => (),
            _ => best = Some((width, count)),
        }
    }

    debug!("Strip width votes: {votes:?}");
    best.map(|(w, _)| w)
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::Array3;

    use crate::test_utils::*;

    #[test]
    fn finds_width_of_solid_strips() {
        let arr = solid_strips(&STAIRCASE, 32, 64);

        assert_eq!(estimate_strip_width(&arr, 1), Some(32));
        assert_eq!(estimate_strip_width(&arr, 4), Some(32));
    }

    #[test]
    fn finds_narrow_width() {
        let arr = solid_strips(&STAIRCASE, 5, 8);

        assert_eq!(estimate_strip_width(&arr, 1), Some(5));
    }

    #[test]
    fn uniform_image_has_no_breaks() {
        let arr = Array3::<u8>::from_elem((8, 64, 3), 100);

        assert_eq!(estimate_strip_width(&arr, 1), None);
    }

    #[test]
    fn tiny_image_has_no_breaks() {
        let arr = Array3::<u8>::zeros((8, 2, 3));

        assert_eq!(estimate_strip_width(&arr, 1), None);
    }
}
