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

//! Read-only RGB pixel access.

use std::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel};
use ndarray::{ArrayBase, Data, Ix3};

/// Anything that can be sampled as RGB at `(x, y)`.
///
/// Implementations must accept every `x < width()` and `y < height()`.
/// `Sync` is required because neighbor matching runs in parallel.
pub trait Raster: Sync {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn rgb(&self, x: usize, y: usize) -> [u8; 3];
}

impl<T: Raster + ?Sized> Raster for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        (**self).rgb(x, y)
    }
}

/// Array laid out as `(height, width, channels)`.
///
/// One or two channels are luma (with alpha), three or more are RGB
/// followed by whatever else (alpha is ignored).
impl<S> Raster for ArrayBase<S, Ix3>
where
    S: Data<Elem = u8> + Sync,
{
    fn width(&self) -> usize {
        self.shape()[1]
    }

    fn height(&self) -> usize {
        self.shape()[0]
    }

    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        if self.shape()[2] >= 3 {
            [self[[y, x, 0]], self[[y, x, 1]], self[[y, x, 2]]]
        } else {
            let l = self[[y, x, 0]];
            [l, l, l]
        }
    }
}

impl<P, C> Raster for ImageBuffer<P, C>
where
    P: Pixel<Subpixel = u8> + Sync,
    C: Deref<Target = [u8]> + Sync,
{
    fn width(&self) -> usize {
        ImageBuffer::width(self) as _
    }

    fn height(&self) -> usize {
        ImageBuffer::height(self) as _
    }

    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        self.get_pixel(x as _, y as _).to_rgb().0
    }
}

impl Raster for DynamicImage {
    fn width(&self) -> usize {
        GenericImageView::width(self) as _
    }

    fn height(&self) -> usize {
        GenericImageView::height(self) as _
    }

    fn rgb(&self, x: usize, y: usize) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x as _, y as _).0;
        [r, g, b]
    }
}
