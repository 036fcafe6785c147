//! Loading pixel grids and writing masks and reports.
//!
//! The core modules never touch the filesystem; everything that does lives here.


use std::path::{Path, PathBuf};

use common::{BitBuffer2, Buffer2};
use image::{Rgb, RgbImage};

use crate::pixel::PixelGrid;
use crate::report::ComponentReport;

const FOREGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Failed to process image '{path}': {source}")]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to access file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Decodes any format supported by `image` into 8-bit RGB.
pub fn load_pixel_grid(path: impl AsRef<Path>) -> Result<PixelGrid<u8>, IoError> {
    let path = path.as_ref();
    let img = open_image(path)?.to_rgb8();
    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded image"
    );
    Ok(rgb_to_grid(&img))
}

/// Decodes into float RGB with channels normalised to `[0, 1]`.
pub fn load_pixel_grid_normalized(path: impl AsRef<Path>) -> Result<PixelGrid<f32>, IoError> {
    let path = path.as_ref();
    let img = open_image(path)?.to_rgb32f();
    tracing::info!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "loaded image (normalized)"
    );
    Ok(Buffer2::from_fn(
        img.width() as usize,
        img.height() as usize,
        |x, y| img.get_pixel(x as u32, y as u32).0,
    ))
}

pub fn rgb_to_grid(img: &RgbImage) -> PixelGrid<u8> {
    Buffer2::from_fn(img.width() as usize, img.height() as usize, |x, y| {
        img.get_pixel(x as u32, y as u32).0
    })
}

/// Renders foreground white and background black.
pub fn mask_to_rgb(mask: &BitBuffer2) -> RgbImage {
    RgbImage::from_fn(mask.width() as u32, mask.height() as u32, |x, y| {
        if mask.get_xy(x as usize, y as usize) {
            FOREGROUND
        } else {
            BACKGROUND
        }
    })
}

/// Saves `mask` as an image; the format follows the file extension.
pub fn save_mask(path: impl AsRef<Path>, mask: &BitBuffer2) -> Result<(), IoError> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    mask_to_rgb(mask)
        .save(path)
        .map_err(|source| IoError::Image {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::info!(
        path = %path.display(),
        foreground = mask.count_ones(),
        "saved mask"
    );
    Ok(())
}

/// Writes `report` as text, replacing any existing file.
pub fn write_report(path: impl AsRef<Path>, report: &ComponentReport) -> Result<(), IoError> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    std::fs::write(path, report.to_string()).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        components = report.components().len(),
        "wrote component report"
    );
    Ok(())
}

fn open_image(path: &Path) -> Result<image::DynamicImage, IoError> {
    image::open(path).map_err(|source| IoError::Image {
        path: path.to_path_buf(),
        source,
    })
}

fn create_parent_dir(path: &Path) -> Result<(), IoError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| IoError::Io {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
