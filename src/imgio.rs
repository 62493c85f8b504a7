// File in / file out. Decodes whatever `image` can sniff into our RGBA
// PixelBuffer, and encodes the current render back out in the format the
// user picked.

use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// The raster formats the save command can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Webp,
}

impl ExportFormat {
    /// File extension for the output path.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Webp => "webp",
        }
    }

    /// Short uppercase tag for the HUD.
    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPEG",
            ExportFormat::Webp => "WEBP",
        }
    }

    /// The next format in the cycle (PNG -> JPEG -> WEBP -> PNG).
    pub fn next(self) -> Self {
        match self {
            ExportFormat::Png => ExportFormat::Jpeg,
            ExportFormat::Jpeg => ExportFormat::Webp,
            ExportFormat::Webp => ExportFormat::Png,
        }
    }

    fn image_format(self) -> ImageFormat {
        match self {
            ExportFormat::Png => ImageFormat::Png,
            ExportFormat::Jpeg => ImageFormat::Jpeg,
            ExportFormat::Webp => ImageFormat::WebP,
        }
    }
}

/// Decode the image at `path` into an RGBA pixel buffer.
/// Format is sniffed from the file contents; anything `image` understands
/// works. Decode failure is reported, never papered over.
pub fn load(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?
        .to_rgba8();
    let (w, h) = img.dimensions();
    Ok(PixelBuffer::from_rgba_bytes(w as usize, h as usize, img.into_raw()))
}

/// Encode `buffer` to `path` in the chosen format.
/// JPEG has no alpha channel, so that path flattens RGBA to RGB first.
pub fn save(buffer: &PixelBuffer, path: &Path, format: ExportFormat) -> Result<()> {
    let img = RgbaImage::from_raw(buffer.width as u32, buffer.height as u32, buffer.pixels.clone())
        .ok_or_else(|| Error::ImageSave("pixel buffer size does not match its dimensions".into()))?;

    let result = match format {
        ExportFormat::Jpeg => {
            DynamicImage::ImageRgba8(img).to_rgb8().save_with_format(path, format.image_format())
        }
        _ => img.save_with_format(path, format.image_format()),
    };
    result.map_err(|e| Error::ImageSave(format!("{}: {e}", path.display())))
}
