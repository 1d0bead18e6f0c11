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

use log::{info, warn};

use crate::chain::assemble;
use crate::leftmost::resolve_leftmost;
use crate::matcher::find_neighbors;
use crate::strip::partition;
use crate::width::estimate_strip_width;
use crate::{Confidence, Error, Leftmost, NeighborLink, Raster, Strip};

/// Reconstruction settings. Use [ConfigBuilder] to make one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    strip_width: Option<usize>,
    row_stride: usize,
    strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_width: None,
            row_stride: 1,
            strict: false,
        }
    }
}

impl Config {
    pub fn strip_width(&self) -> Option<usize> {
        self.strip_width
    }

    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strip width in pixels. 0 means estimate it from the image.
    pub fn strip_width(mut self, width: usize) -> Self {
        self.config.strip_width = (width != 0).then_some(width);
        self
    }

    /// Only compare every `stride`-th row. 0 is treated as 1.
    pub fn row_stride(mut self, stride: usize) -> Self {
        self.config.row_stride = stride.max(1);
        self
    }

    /// Reject images whose width is not a multiple of the strip width.
    pub fn strict(mut self, strict: bool) -> Self {
        self.config.strict = strict;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Result of [unshred].
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    pub strip_width: usize,
    pub strips: Vec<Strip>,
    /// Right neighbor of every strip.
    pub links: Vec<NeighborLink>,
    pub leftmost: Leftmost,
    /// Strip indices from left to right.
    pub ordering: Vec<usize>,
}

impl Reconstruction {
    pub fn confidence(&self) -> Confidence {
        self.leftmost.confidence
    }
}

/// Infer the original left to right order of a shredded image's strips.
pub fn unshred<R>(raster: &R, config: &Config) -> Result<Reconstruction, Error>
where
    R: Raster + ?Sized,
{
    let strip_width = match config.strip_width {
        Some(w) => w,
        None => {
            let w = estimate_strip_width(raster, config.row_stride)
                .ok_or(Error::WidthEstimation)?;
            info!("Estimated strip width: {w}");
            w
        }
    };

    let strips = partition(raster.width(), raster.height(), strip_width, config.strict)?;
    let links = find_neighbors(raster, &strips, config.row_stride);
    let leftmost = resolve_leftmost(raster, &strips, &links, config.row_stride);

    match leftmost.confidence {
        Confidence::High => info!("Using strip {} as leftmost", leftmost.index),
        Confidence::Low => warn!(
            "Using strip {} as leftmost, guessed from strip {} as rightmost (low confidence)",
            leftmost.index,
            leftmost.rightmost.unwrap_or(leftmost.index),
        ),
    }

    let ordering = assemble(leftmost.index, &links)?;
    info!("Strip order: {ordering:?}");

    Ok(Reconstruction {
        strip_width,
        strips,
        links,
        leftmost,
        ordering,
    })
}
