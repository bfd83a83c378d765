use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Point, SurfaceBounds};
use crate::foundation::error::{SpiroError, SpiroResult};
use crate::surface::recording::RecordingSurface;

/// Rendered RGBA8 image of a drawing surface.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA8 value of pixel `(x, y)`, top-left origin.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Write the frame as a PNG, creating parent directories as needed.
    pub fn save_png(&self, path: &Path) -> SpiroResult<()> {
        ensure_parent_dir(path)?;

        let mut straight = self.data.clone();
        if self.premultiplied {
            unpremultiply_in_place(&mut straight);
        }

        image::save_buffer_with_format(
            path,
            &straight,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Appearance of rasterized strokes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterStyle {
    /// Straight RGBA8 background.
    pub background: [u8; 4],
    /// Stroke width in pixels.
    pub line_width: f64,
}

impl Default for RasterStyle {
    fn default() -> Self {
        Self {
            background: [255, 255, 255, 255],
            line_width: 1.0,
        }
    }
}

/// Create the parent directory of `path` if it does not exist.
pub fn ensure_parent_dir(path: &Path) -> SpiroResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Stroke every recorded polyline onto a `bounds`-sized image.
///
/// Surface coordinates have their origin at the image center with y pointing
/// up, so `(0, 0)` lands on pixel `(width / 2, height / 2)`.
#[tracing::instrument(skip(surface, style))]
pub fn rasterize(
    surface: &RecordingSurface,
    bounds: SurfaceBounds,
    style: &RasterStyle,
) -> SpiroResult<FrameRGBA> {
    if !style.line_width.is_finite() || style.line_width <= 0.0 {
        return Err(SpiroError::export(format!(
            "line width must be positive, got {}",
            style.line_width
        )));
    }
    let width: u16 = bounds.width.try_into().map_err(|_| {
        SpiroError::export(format!("surface width {} exceeds u16", bounds.width))
    })?;
    let height: u16 = bounds.height.try_into().map_err(|_| {
        SpiroError::export(format!("surface height {} exceeds u16", bounds.height))
    })?;

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    let mut ctx = vello_cpu::RenderContext::new(width, height);

    let [r, g, b, a] = style.background;
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));

    ctx.set_transform(surface_to_pixels(bounds));
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(style.line_width));

    let mut strokes = 0usize;
    for (_, stroke) in surface.all_strokes() {
        let [r, g, b, a] = stroke.color.to_rgba8();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.stroke_path(&polyline_to_cpu(&stroke.points));
        strokes += 1;
    }
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    tracing::debug!(strokes, "rasterized surface");

    Ok(FrameRGBA {
        width: bounds.width,
        height: bounds.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn surface_to_pixels(bounds: SurfaceBounds) -> vello_cpu::kurbo::Affine {
    let cx = f64::from(bounds.width) / 2.0;
    let cy = f64::from(bounds.height) / 2.0;
    vello_cpu::kurbo::Affine::new([1.0, 0.0, 0.0, -1.0, cx, cy])
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn polyline_to_cpu(points: &[Point]) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        out.move_to(point_to_cpu(first));
    }
    for &p in iter {
        out.line_to(point_to_cpu(p));
    }
    out
}

fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/raster.rs"]
mod tests;
