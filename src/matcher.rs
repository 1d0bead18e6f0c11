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

use log::debug;
use rayon::prelude::*;

use crate::distance::edge_distance;
use crate::{Raster, Strip};

/// Best right-hand neighbor of a strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborLink {
    /// Index of the neighbor strip.
    pub index: usize,
    /// Distance between the strip's right edge and the neighbor's left edge.
    pub distance: f64,
}

/// Find the strip whose left edge best continues the right edge of `strips[i]`.
///
/// The first strip with the smallest distance wins.
/// Panics if there are fewer than 2 strips.
pub fn neighbor_for<R>(raster: &R, strips: &[Strip], i: usize, row_stride: usize) -> NeighborLink
where
    R: Raster + ?Sized,
{
    let x = strips[i].right();

    strips
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, s)| NeighborLink {
            index: j,
            distance: edge_distance(raster, x, s.left(), row_stride),
        })
        .reduce(|best, link| {
            if link.distance < best.distance {
                link
            } else {
                best
            }
        })
        .expect("Need at least 2 strips")
}

/// Compute [NeighborLink] of every strip, in strip order.
pub fn find_neighbors<R>(raster: &R, strips: &[Strip], row_stride: usize) -> Vec<NeighborLink>
where
    R: Raster + ?Sized,
{
    let links: Vec<_> = (0..strips.len())
        .into_par_iter()
        .map(|i| neighbor_for(raster, strips, i, row_stride))
        .collect();

    for (i, link) in links.iter().enumerate() {
        debug!(
            "Right neighbor for {i} = {} (distance {:.1})",
            link.index, link.distance
        );
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::Array3;

    use crate::strip::partition;
    use crate::test_utils::*;

    #[test]
    fn seamless_neighbors_have_zero_distance() {
        let arr = seamless_strips(6, 4, 16);
        let strips = partition(24, 16, 4, true).unwrap();

        let links = find_neighbors(&arr, &strips, 1);

        assert_eq!(links.len(), 6);
        for (i, link) in links.iter().enumerate().take(5) {
            assert_eq!(link.index, i + 1);
            assert_eq!(link.distance, 0.0);
        }
        assert!(links[5].distance > 0.0);
    }

    #[test]
    fn staircase_picks_closest_color() {
        let arr = solid_strips(&STAIRCASE, 4, 8);
        let strips = partition(32, 8, 4, true).unwrap();

        let links: Vec<_> = find_neighbors(&arr, &strips, 1)
            .iter()
            .map(|l| l.index)
            .collect();

        assert_eq!(links, [1, 2, 3, 4, 5, 6, 7, 6]);
    }

    #[test]
    fn ties_go_to_first_strip() {
        let arr = Array3::<u8>::zeros((4, 9, 3));
        let strips = partition(9, 4, 3, true).unwrap();

        assert_eq!(neighbor_for(&arr, &strips, 0, 1).index, 1);
        assert_eq!(neighbor_for(&arr, &strips, 1, 1).index, 0);
        assert_eq!(neighbor_for(&arr, &strips, 2, 1).index, 0);
    }

    #[test]
    fn never_links_to_self() {
        let arr = solid_strips(&[10, 200], 2, 2);
        let strips = partition(4, 2, 2, true).unwrap();

        let links = find_neighbors(&arr, &strips, 1);

        assert_eq!(links[0].index, 1);
        assert_eq!(links[1].index, 0);
    }
}
