//! PNG export of curves with outline stroke and translucent fill

use crate::geometry::Curve;
use crate::io::configuration::{
    BACKGROUND_COLOR, FILL_COLOR, IMAGE_HEIGHT, IMAGE_MARGIN, IMAGE_WIDTH, STROKE_COLOR,
    STROKE_WIDTH,
};
use crate::io::error::{Result, SnowflakeError, WithPath};
use crate::render::caption::{GLYPH_HEIGHT, draw_text, text_width};
use crate::render::{CoverageMask, Viewport};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Canvas size, colours and stroke settings for rendering a curve
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Blank border around the curve in pixels
    pub margin: u32,
    /// Stroke width in pixels
    pub line_width: f64,
    /// Outline colour (RGBA)
    pub stroke_color: [u8; 4],
    /// Interior colour (RGBA); its alpha controls translucency
    pub fill_color: [u8; 4],
    /// Background colour (RGBA)
    pub background: [u8; 4],
    /// Whether the enclosed area is filled
    pub fill: bool,
    /// Text drawn in the top margin, in the stroke colour
    pub caption: Option<String>,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
            margin: IMAGE_MARGIN,
            line_width: STROKE_WIDTH,
            stroke_color: STROKE_COLOR,
            fill_color: FILL_COLOR,
            background: BACKGROUND_COLOR,
            fill: true,
            caption: None,
        }
    }
}

impl RenderStyle {
    /// The same style with `caption` drawn above the curve
    #[must_use]
    pub fn with_caption(&self, caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            ..self.clone()
        }
    }

    // Top-left corner and font scale for centring `text` in the top margin, if it fits
    fn caption_layout(&self, text: &str) -> Option<(usize, usize, usize)> {
        let margin = self.margin as usize;
        let scale = (margin / 8).max(1);
        let text_height = GLYPH_HEIGHT * scale;
        let left = (self.width as usize).saturating_sub(text_width(text, scale)) / 2;
        (text_height < margin).then(|| (left, (margin - text_height) / 2, scale))
    }

    /// Viewport that frames `curve` on this style's canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is empty or cannot be fitted to the canvas
    pub fn viewport_for(&self, curve: &Curve) -> Result<Viewport> {
        let bounds = curve.bounds().ok_or(SnowflakeError::EmptyCurve)?;
        Viewport::fit(&bounds, self.width, self.height, self.margin)
    }
}

/// Render a curve framed to fill the canvas
///
/// # Errors
///
/// Returns an error if the curve is empty or cannot be fitted to the canvas
pub fn render_curve(curve: &Curve, style: &RenderStyle) -> Result<RgbaImage> {
    let viewport = style.viewport_for(curve)?;
    render_curve_in(curve, style, &viewport)
}

/// Render a curve through a caller-supplied viewport
///
/// Used when several curves must share one framing, as in animations.
///
/// # Errors
///
/// Returns an error if the curve has no segments
pub fn render_curve_in(
    curve: &Curve,
    style: &RenderStyle,
    viewport: &Viewport,
) -> Result<RgbaImage> {
    if curve.is_empty() {
        return Err(SnowflakeError::EmptyCurve);
    }

    let mut fill = CoverageMask::new(style.width, style.height);
    if style.fill {
        let outline: Vec<_> = curve
            .vertices()
            .into_iter()
            .map(|vertex| viewport.to_pixel(vertex))
            .collect();
        fill.fill_polygon(&outline);
    }

    let mut stroke = CoverageMask::new(style.width, style.height);
    for segment in curve {
        stroke.stroke_segment(
            viewport.to_pixel(segment.start),
            viewport.to_pixel(segment.end),
            style.line_width,
        );
    }

    if let Some(text) = &style.caption
        && let Some((left, top, scale)) = style.caption_layout(text)
    {
        draw_text(&mut stroke, text, left, top, scale);
    }

    let mut img = RgbaImage::from_pixel(style.width, style.height, Rgba(style.background));
    for (col, row, pixel) in img.enumerate_pixels_mut() {
        let (col, row) = (col as usize, row as usize);
        let mut color = pixel.0;
        color = blend(color, style.fill_color, fill.coverage(col, row));
        color = blend(color, style.stroke_color, stroke.coverage(col, row));
        *pixel = Rgba(color);
    }

    Ok(img)
}

/// Composite `src` over `dst` with the source alpha scaled by `coverage`
pub fn blend(dst: [u8; 4], src: [u8; 4], coverage: f32) -> [u8; 4] {
    let alpha = f32::from(src[3]) / 255.0 * coverage.clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return dst;
    }

    let dst_alpha = f32::from(dst[3]) / 255.0;
    let out_alpha = dst_alpha.mul_add(1.0 - alpha, alpha);
    if out_alpha <= 0.0 {
        return [0, 0, 0, 0];
    }

    let channel = |s: u8, d: u8| {
        let value = f32::from(s)
            .mul_add(alpha, f32::from(d) * dst_alpha * (1.0 - alpha))
            / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ]
}

/// Render a curve and save it as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The curve is empty or cannot be fitted to the canvas
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_curve_as_png(curve: &Curve, style: &RenderStyle, output_path: &Path) -> Result<()> {
    let img = render_curve(curve, style)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    img.save(output_path)
        .map_err(|e| SnowflakeError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
