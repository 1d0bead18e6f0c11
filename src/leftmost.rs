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

//! Deciding which strip starts the image.
//!
//! Two heuristics are tried in order:
//!
//! 1. The left edge is the one strip nobody picked as right neighbor.
//! 2. Otherwise the strip whose link looks least like an internal join
//!    is taken as the right edge. Its link is dropped, and the strip
//!    that starts the longest chain ending there is the left edge.
//!
//! Only the first one is trusted, see [Confidence].

use log::debug;

use crate::distance::edge_distance;
use crate::{NeighborLink, Raster, Strip};

/// How much a [Leftmost] result can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    /// Exactly one strip has no left neighbor.
    High,
    /// Guessed from the right edge, may well be wrong.
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leftmost {
    pub index: usize,
    pub confidence: Confidence,
    /// Strip judged to be the right edge, if that was needed.
    pub rightmost: Option<usize>,
}

/// The single strip never chosen as anyone's neighbor, if any.
pub fn unmatched_strip(links: &[NeighborLink]) -> Option<usize> {
    let mut seen = vec![false; links.len()];
    for l in links {
        seen[l.index] = true;
    }

    let mut it = seen.iter().enumerate().filter(|&(_, &s)| !s).map(|(i, _)| i);
    match (it.next(), it.next()) {
        (Some(i), None) => Some(i),
        _ => None,
    }
}

/// How far a link distance is off from the column differences around it.
fn relative_error(distance: f64, avg: f64) -> f64 {
    if avg > 0.0 {
        (distance - avg).abs() / avg
    } else if distance > 0.0 {
        f64::INFINITY
    } else {
        0.0
    }
}

/// Strip whose link is least consistent with the texture on both sides of it.
///
/// Every link is compared against the average difference of the two
/// column pairs just inside the strip's right edge and the two just inside
/// the neighbor's left edge. The largest relative error wins, first one on ties.
pub fn rightmost_strip<R>(
    raster: &R,
    strips: &[Strip],
    links: &[NeighborLink],
    row_stride: usize,
) -> usize
where
    R: Raster + ?Sized,
{
    let mut best = (0, f64::NEG_INFINITY);

    for (i, link) in links.iter().enumerate() {
        let s = &strips[i];
        let d0 = edge_distance(raster, s.column_rev(2), s.column_rev(1), row_stride);
        let d1 = edge_distance(raster, s.column_rev(1), s.column_rev(0), row_stride);

        let s = &strips[link.index];
        let d2 = edge_distance(raster, s.column(0), s.column(1), row_stride);
        let d3 = edge_distance(raster, s.column(1), s.column(2), row_stride);

        let avg = (d0 + d1 + d2 + d3) / 4.0;
        let err = relative_error(link.distance, avg);
        if err > best.1 {
            best = (i, err);
        }
    }

    best.0
}

/// Number of strips visited walking from `start` until `stop`, a revisit,
/// or running out of strips. `stop` itself counts.
fn chain_len(links: &[NeighborLink], start: usize, stop: usize) -> usize {
    let mut visited = vec![false; links.len()];
    let mut n = start;
    let mut len = 0;

    while !visited[n] {
        visited[n] = true;
        len += 1;
        if n == stop {
            break;
        }
        n = links[n].index;
    }

    len
}

/// Left edge found by elimination, given the strip at the right edge.
///
/// Candidates are strips with no incoming link once `rightmost`'s link is
/// dropped. There is always one: the remaining N - 1 links cannot cover N strips.
pub fn leftmost_from_rightmost(links: &[NeighborLink], rightmost: usize) -> usize {
    let mut seen = vec![false; links.len()];
    for (i, l) in links.iter().enumerate() {
        if i != rightmost {
            seen[l.index] = true;
        }
    }

    let mut best = (rightmost, 0);
    for i in (0..links.len()).filter(|&i| !seen[i]) {
        let len = chain_len(links, i, rightmost);
        debug!("Leftmost candidate {i} starts a chain of {len}");
        if len > best.1 {
            best = (i, len);
        }
    }

    best.0
}

/// Pick the strip at the left edge of the image.
pub fn resolve_leftmost<R>(
    raster: &R,
    strips: &[Strip],
    links: &[NeighborLink],
    row_stride: usize,
) -> Leftmost
where
    R: Raster + ?Sized,
{
    if let Some(index) = unmatched_strip(links) {
        return Leftmost {
            index,
            confidence: Confidence::High,
            rightmost: None,
        };
    }

    let rightmost = rightmost_strip(raster, strips, links, row_stride);
    debug!("No unique unmatched strip, guessing {rightmost} as rightmost");

    Leftmost {
        index: leftmost_from_rightmost(links, rightmost),
        confidence: Confidence::Low,
        rightmost: Some(rightmost),
    }
}
