use crate::surface::{for_each_disc_pixel, Rgb, Surface};
use crate::trajectory::render_frame;
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use log::info;
use std::path::Path;
use std::time::Instant;

/// Offscreen RGBA surface.
pub(crate) struct ImageSurface {
    pub(crate) img: RgbaImage,
}

impl ImageSurface {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }
}

fn rgba(c: Rgb) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}

impl Surface for ImageSurface {
    fn width(&self) -> u32 {
        self.img.width()
    }

    fn height(&self) -> u32 {
        self.img.height()
    }

    fn clear(&mut self, color: Rgb) {
        let p = rgba(color);
        for px in self.img.pixels_mut() {
            *px = p;
        }
    }

    fn fill_circle(&mut self, cx: f64, cy: f64, diameter: f64, color: Rgb) {
        let p = rgba(color);
        let (w, h) = self.img.dimensions();
        let img = &mut self.img;
        for_each_disc_pixel(cx, cy, diameter, w, h, |x, y| img.put_pixel(x, y, p));
    }
}

/// Render one frame at `width` x `height` and write it as PNG.
pub(crate) fn export_png(path: &Path, width: u32, height: u32) -> Result<()> {
    let started = Instant::now();
    let mut surface = ImageSurface::new(width, height);
    let draws = render_frame(&mut surface);
    info!(
        "rendered {} draws at {}x{} in {:.1?}",
        draws,
        width,
        height,
        started.elapsed()
    );

    surface
        .img
        .save(path)
        .with_context(|| format!("could not write {}", path.display()))?;
    info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory::{BACKGROUND, SEEDED_RUNS};
    use image::GenericImageView;

    #[test]
    fn clear_paints_every_pixel() {
        let mut s = ImageSurface::new(3, 2);
        s.clear(Rgb::new(1, 2, 3));
        assert!(s.img.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }

    #[test]
    fn frame_uses_only_background_and_trajectory_colors() {
        let mut s = ImageSurface::new(160, 120);
        assert_eq!(render_frame(&mut s), 150_000);

        let allowed: Vec<Rgba<u8>> = std::iter::once(BACKGROUND)
            .chain(SEEDED_RUNS.iter().map(|r| r.color))
            .map(rgba)
            .collect();
        assert!(s.img.pixels().all(|p| allowed.contains(p)));

        // The last run paints over the others, so red must be visible.
        assert!(s.img.pixels().any(|p| *p == rgba(Rgb::RED)));
        // Top-left corner maps to (x=-25, z=50), far from the attractor.
        assert_eq!(*s.img.get_pixel(0, 0), rgba(BACKGROUND));
    }

    #[test]
    fn png_is_written() {
        let path = std::env::temp_dir().join(format!("lorenz-export-{}.png", std::process::id()));
        export_png(&path, 64, 48).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!(img.dimensions(), (64, 48));
        std::fs::remove_file(&path).ok();
    }
}
