//! PNG rendering for generated canvases and point fields.
use std::path::Path;

use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tri_hatch::canvas::{Canvas, Viewbox};

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Output settings for PNG rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image size in pixels.
    pub image_size: (u32, u32),
    /// World-space region mapped onto the image.
    pub viewbox: Viewbox,
    pub background: [u8; 3],
    /// Triangle outline color; `None` hides outlines.
    pub outline: Option<[u8; 3]>,
    /// Stripe colors, picked per triangle by index.
    pub palette: Vec<[u8; 3]>,
    /// Point marker color and radius in pixels.
    pub points: Option<([u8; 3], i32)>,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), viewbox: Viewbox) -> Self {
        Self {
            image_size,
            viewbox,
            background: [250, 248, 242],
            outline: Some([64, 64, 64]),
            palette: vec![[180, 180, 180]],
            points: None,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    pub fn with_outline(mut self, outline: Option<[u8; 3]>) -> Self {
        self.outline = outline;
        self
    }

    pub fn with_palette(mut self, palette: Vec<[u8; 3]>) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_points(mut self, color: [u8; 3], radius: i32) -> Self {
        self.points = Some((color, radius));
        self
    }

    fn to_pixel(&self, p: Vec2) -> Vec2 {
        let size = Vec2::new(self.image_size.0 as f32, self.image_size.1 as f32);
        (p - self.viewbox.min) / self.viewbox.size * size
    }

    fn stripe_color(&self, index: usize) -> [u8; 3] {
        if self.palette.is_empty() {
            return [0, 0, 0];
        }
        self.palette[index % self.palette.len()]
    }
}

/// Renders triangles, their stripes, and optionally the sampled points.
pub fn render_canvas_to_png(
    canvas: &Canvas,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = blank(config);

    for (index, hatched) in canvas.triangles.iter().enumerate() {
        let color = config.stripe_color(index);
        for line in &hatched.lines {
            draw_line(&mut img, config.to_pixel(line.from), config.to_pixel(line.to), color);
        }
    }

    if let Some(outline) = config.outline {
        for hatched in &canvas.triangles {
            for (s, e) in hatched.triangle.edges() {
                draw_line(&mut img, config.to_pixel(s), config.to_pixel(e), outline);
            }
        }
    }

    if let Some((color, radius)) = config.points {
        for p in &canvas.points {
            draw_disk(&mut img, config.to_pixel(*p), radius, color);
        }
    }

    save(img, path.as_ref())
}

/// Renders a bare point field.
pub fn render_points_to_png(
    points: &[Vec2],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let mut img = blank(config);
    let (color, radius) = config.points.unwrap_or(([30, 30, 30], 2));
    for p in points {
        draw_disk(&mut img, config.to_pixel(*p), radius, color);
    }
    save(img, path.as_ref())
}

fn blank(config: &RenderConfig) -> RgbImage {
    RgbImage::from_pixel(config.image_size.0, config.image_size.1, Rgb(config.background))
}

fn save(img: RgbImage, path: &Path) -> anyhow::Result<()> {
    img.save(path)?;
    info!("Wrote {}.", path.display());
    Ok(())
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: [u8; 3]) {
    if x < 0 || y < 0 || x >= img.width() as i64 || y >= img.height() as i64 {
        return;
    }
    img.put_pixel(x as u32, y as u32, Rgb(color));
}

fn draw_line(img: &mut RgbImage, from: Vec2, to: Vec2, color: [u8; 3]) {
    let steps = (to - from).abs().max_element().ceil().max(1.0) as i64;
    for s in 0..=steps {
        let p = from.lerp(to, s as f32 / steps as f32);
        put(img, p.x.round() as i64, p.y.round() as i64, color);
    }
}

fn draw_disk(img: &mut RgbImage, center: Vec2, radius: i32, color: [u8; 3]) {
    let (cx, cy) = (center.x.round() as i64, center.y.round() as i64);
    let r = radius.max(0) as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig::new(
            (100, 50),
            Viewbox {
                min: Vec2::new(10.0, 10.0),
                size: Vec2::new(200.0, 100.0),
            },
        )
    }

    #[test]
    fn viewbox_maps_onto_image() {
        let config = config();
        assert_eq!(config.to_pixel(Vec2::new(10.0, 10.0)), Vec2::ZERO);
        assert_eq!(config.to_pixel(Vec2::new(210.0, 110.0)), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn palette_cycles_by_index() {
        let config = config().with_palette(vec![[1, 1, 1], [2, 2, 2]]);
        assert_eq!(config.stripe_color(0), [1, 1, 1]);
        assert_eq!(config.stripe_color(3), [2, 2, 2]);
    }

    #[test]
    fn lines_clip_to_image() {
        let mut img = RgbImage::new(10, 10);
        draw_line(&mut img, Vec2::new(-5.0, 5.0), Vec2::new(15.0, 5.0), [255, 0, 0]);
        assert_eq!(img.get_pixel(0, 5).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(9, 5).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(5, 4).0, [0, 0, 0]);
    }
}
