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

use ndarray::parallel::prelude::*;
use ndarray::prelude::*;
use ndarray::Slice;
use rand::prelude::*;

use crate::strip::partition;
use crate::{Error, Strip};

/// Move whole strips of an array around.
///
/// Strip `k` of the output is strip `sources[k]` of the input.
/// Strips are `strip_width` wide along the second axis (columns),
/// anything past the last strip in `sources` is copied unchanged.
///
/// Parameters:
/// * `arr` : Input array view. Can be multidimensional,
///   but the first 2 dimension must be rows and columns.
/// * `strip_width` : Width of every strip. Must not be 0.
/// * `sources` : Source strip of every output strip. Must be a permutation,
///   otherwise it panics.
pub fn permute_strips<'a, A, D>(
    arr: ArrayView<'_, A, D>,
    strip_width: usize,
    sources: &[usize],
) -> Array<A, D>
where
    A: 'a + Clone + Send + Sync,
    D: Dimension,
{
    let count = sources.len();
    if count * strip_width > arr.shape()[1] {
        panic!(
            "{} strips of width {} do not fit in width {}",
            count,
            strip_width,
            arr.shape()[1],
        );
    }

    let mut seen = vec![false; count];
    for &s in sources {
        if s >= count || seen[s] {
            panic!("Strip order is not a permutation (strip {s})");
        }
        seen[s] = true;
    }

    let mut out = arr.to_owned();

    {
        let out = out.view_mut();
        sources.par_iter().enumerate().for_each(move |(i, &j)| {
            let mut arr = arr.view();
            arr.slice_axis_inplace(Axis(1), Slice::from(j * strip_width..(j + 1) * strip_width));

            let mut out = out.raw_view();
            out.slice_axis_inplace(Axis(1), Slice::from(i * strip_width..(i + 1) * strip_width));

            // SAFETY: Output slices is guaranteed to be non-overlapping
            azip!((d in out, s in arr) unsafe {
                (*(d as *mut A)).clone_from(s)
            });
        });
    }

    out
}

/// Cut an array into strips and shuffle them.
///
/// Returns the shuffled array and, for every output strip,
/// the index of the input strip placed there.
pub fn shred<'a, A, D, R>(
    arr: ArrayView<'_, A, D>,
    strip_width: usize,
    random: &mut R,
) -> Result<(Array<A, D>, Vec<usize>), Error>
where
    A: 'a + Clone + Send + Sync,
    D: Dimension,
    R: Rng,
{
    let strips = partition(arr.shape()[1], arr.shape()[0], strip_width, false)?;

    let mut indices: Vec<_> = (0..strips.len()).collect();
    indices.shuffle(&mut *random);

    Ok((permute_strips(arr, strip_width, &indices), indices))
}

/// Render strips in the given left to right order.
pub fn reassemble<'a, A, D>(arr: ArrayView<'_, A, D>, strips: &[Strip], ordering: &[usize]) -> Array<A, D>
where
    A: 'a + Clone + Send + Sync,
    D: Dimension,
{
    let strip_width = strips.first().map_or(0, |s| s.width);
    permute_strips(arr, strip_width, ordering)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn permute_moves_columns() {
        let arr = Array2::from_shape_fn((2, 7), |(y, x)| y * 10 + x);

        let out = permute_strips(arr.view(), 2, &[2, 0, 1]);

        assert_eq!(
            out,
            array![[4, 5, 0, 1, 2, 3, 6], [14, 15, 10, 11, 12, 13, 16]]
        );
    }

    #[test]
    #[should_panic]
    fn permute_rejects_duplicates() {
        let arr = Array2::<u8>::zeros((1, 4));

        permute_strips(arr.view(), 2, &[1, 1]);
    }

    #[test]
    fn shred_is_undone_by_reassemble() {
        let arr = Array3::from_shape_fn((3, 40, 3), |(y, x, c)| (y * 7 + x * 3 + c) as u8);
        let mut random = Xoshiro256StarStar::seed_from_u64(7);

        let (shredded, order) = shred(arr.view(), 8, &mut random).unwrap();
        let strips = partition(40, 3, 8, true).unwrap();

        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4]);

        // Output strip k came from input strip order[k], so input strip
        // j sits at the position of j in order.
        let mut inverse = vec![0; order.len()];
        for (k, &j) in order.iter().enumerate() {
            inverse[j] = k;
        }
        assert_eq!(reassemble(shredded.view(), &strips, &inverse), arr);
    }

    #[test]
    fn shred_rejects_single_strip() {
        let arr = Array3::<u8>::zeros((2, 10, 3));
        let mut random = Xoshiro256StarStar::seed_from_u64(0);

        assert!(shred(arr.view(), 8, &mut random).is_err());
    }
}
