use std::path::Path;

use image::RgbImage;
use plotters::style::RGBColor;

use crate::error::{Error, Result};
use crate::figure::Figure;

/// Pixels of padding kept around the content when cropping.
const TIGHT_PAD_PX: u32 = 6;

/// Save `figure` to `path`, cropped tight around its content.
///
/// The output format follows the path extension, per the encoder's
/// convention. The written image is always opaque RGB; a figure with no
/// content is saved uncropped. Encoder and filesystem errors propagate
/// unchanged.
pub fn save_figure<P: AsRef<Path>>(figure: &Figure, path: P) -> Result<()> {
    let path = path.as_ref();
    let (width, height) = figure.dimensions();
    let RGBColor(r, g, b) = figure.background();

    let (x0, y0, x1, y1) = match content_bounds(figure.buffer(), width, height, (r, g, b)) {
        Some((x0, y0, x1, y1)) => (
            x0.saturating_sub(TIGHT_PAD_PX),
            y0.saturating_sub(TIGHT_PAD_PX),
            (x1 + TIGHT_PAD_PX).min(width - 1),
            (y1 + TIGHT_PAD_PX).min(height - 1),
        ),
        None => (0, 0, width - 1, height - 1),
    };

    let (cw, ch) = (x1 - x0 + 1, y1 - y0 + 1);
    let mut cropped = Vec::with_capacity(cw as usize * ch as usize * 3);
    for y in y0..=y1 {
        let start = (y as usize * width as usize + x0 as usize) * 3;
        cropped.extend_from_slice(&figure.buffer()[start..start + cw as usize * 3]);
    }

    let img = RgbImage::from_raw(cw, ch, cropped)
        .ok_or_else(|| Error::Render("figure buffer does not match its dimensions".to_owned()))?;
    img.save(path)?;

    info!("saved figure to {}", path.display());
    Ok(())
}

/// Inclusive bounding box of every pixel differing from the background.
pub(crate) fn content_bounds(
    buf: &[u8],
    width: u32,
    height: u32,
    background: (u8, u8, u8),
) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for y in 0..height {
        for x in 0..width {
            let i = (y as usize * width as usize + x as usize) * 3;
            if (buf[i], buf[i + 1], buf[i + 2]) != background {
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: (u8, u8, u8) = (255, 255, 255);

    fn blank(width: u32, height: u32) -> Vec<u8> {
        vec![255; width as usize * height as usize * 3]
    }

    fn set_pixel(buf: &mut [u8], width: u32, x: u32, y: u32) {
        let i = (y as usize * width as usize + x as usize) * 3;
        buf[i] = 0;
        buf[i + 1] = 0;
        buf[i + 2] = 0;
    }

    #[test]
    fn all_background_has_no_bounds() {
        assert_eq!(content_bounds(&blank(8, 4), 8, 4, BG), None);
    }

    #[test]
    fn bounds_enclose_every_marked_pixel() {
        let mut buf = blank(10, 10);
        set_pixel(&mut buf, 10, 2, 3);
        set_pixel(&mut buf, 10, 7, 5);
        assert_eq!(content_bounds(&buf, 10, 10, BG), Some((2, 3, 7, 5)));
    }

    #[test]
    fn single_pixel_bounds() {
        let mut buf = blank(5, 5);
        set_pixel(&mut buf, 5, 4, 0);
        assert_eq!(content_bounds(&buf, 5, 5, BG), Some((4, 0, 4, 0)));
    }
}
