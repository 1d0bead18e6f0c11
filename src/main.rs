//! Main Program for Unshred
//! Run with `--help` for more instruction

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

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Error};
use clap::Parser;
use image::io::Reader as ImageReader;
use image::{save_buffer, DynamicImage};
use log::{info, warn, LevelFilter};
use ndarray::prelude::*;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use unshred::{ConfigBuilder, Confidence};

#[derive(Parser, Debug)]
#[command(author, version)]
struct Args {
    /// Input file
    input: PathBuf,

    /// Strip width in pixels (0 or absent to estimate, required for --shred)
    #[arg(short = 'w', long)]
    strip_width: Option<usize>,

    /// Shred the input instead of reconstructing it
    #[arg(long)]
    shred: bool,

    /// Random seed (shred only)
    #[arg(long)]
    seed: Option<String>,

    /// Compare only every n-th row
    #[arg(long, default_value_t = 1)]
    row_stride: usize,

    /// Reject images whose width is not a multiple of the strip width
    #[arg(long)]
    strict: bool,

    /// Log every neighbor match
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Output file
    #[arg(short = 'o', long)]
    output: PathBuf,
}

fn main() -> Result<(), Error> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .parse_default_env()
        .init();

    let im = ImageReader::new(BufReader::new(File::open(&args.input)?))
        .with_guessed_format()?
        .decode()?;
    info!("Image is {}x{}", im.width(), im.height());

    let arr = <ArrayView3<u8>>::from_shape(
        (
            im.height() as usize,
            im.width() as usize,
            match im {
                DynamicImage::ImageLuma8(_) => 1,
                DynamicImage::ImageLumaA8(_) => 2,
                DynamicImage::ImageRgb8(_) => 3,
                DynamicImage::ImageRgba8(_) => 4,
                DynamicImage::ImageLuma16(_) => 2,
                DynamicImage::ImageLumaA16(_) => 4,
                DynamicImage::ImageRgb16(_) => 6,
                DynamicImage::ImageRgba16(_) => 8,
                DynamicImage::ImageRgb32F(_) => 12,
                DynamicImage::ImageRgba32F(_) => 16,
                _ => unreachable!("Unsupported image format"),
            },
        ),
        im.as_bytes(),
    )?;

    let out = if args.shred {
        let strip_width = match args.strip_width {
            Some(w) if w > 0 => w,
            _ => bail!("--shred needs a positive --strip-width"),
        };

        let mut random = if let Some(seed) = args.seed {
            let mut hasher = Sha256::new();
            hasher.update(seed);

            rand_xoshiro::Xoshiro256StarStar::from_seed(hasher.finalize().into())
        } else {
            rand_xoshiro::Xoshiro256StarStar::from_entropy()
        };

        let (out, order) = unshred::shred(arr, strip_width, &mut random)?;
        info!("Shredded strip order: {order:?}");
        out
    } else {
        let config = ConfigBuilder::new()
            .strip_width(args.strip_width.unwrap_or(0))
            .row_stride(args.row_stride)
            .strict(args.strict)
            .build();

        let r = unshred::unshred(&im, &config)?;
        if r.confidence() == Confidence::Low {
            warn!("Leftmost strip was guessed, the result may be wrong");
        }

        unshred::reassemble(arr, &r.strips, &r.ordering)
    };

    save_buffer(
        &args.output,
        out.as_slice().expect("Should be standard-layout"),
        im.width(),
        im.height(),
        im.color(),
    )?;
    info!("Written to {}", args.output.display());

    Ok(())
}
