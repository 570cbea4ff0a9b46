//! Animated GIF showing a snowflake growing level by level

use crate::algorithm::snowflake::build_snowflake;
use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::error::{Result, SnowflakeError, WithPath};
use crate::io::image::{RenderStyle, render_curve_in};
use image::{Delay, Frame};
use std::path::Path;

/// Render one frame per level from 0 to `max_level`
///
/// Every frame is framed by the bounds of the final level so the outline grows in place
/// instead of rescaling between frames. The last frame stays on screen
/// [`FINAL_FRAME_HOLD`] times longer. Each frame is captioned with its level.
///
/// # Errors
///
/// Returns an error if the final curve cannot be fitted to the canvas
pub fn growth_frames(
    max_level: u32,
    size: f64,
    style: &RenderStyle,
    frame_delay_ms: u32,
) -> Result<Vec<Frame>> {
    let final_curve = build_snowflake(max_level, size);
    let viewport = style.viewport_for(&final_curve)?;

    let mut frames = Vec::with_capacity(max_level as usize + 1);
    for level in 0..=max_level {
        let curve = if level == max_level {
            final_curve.clone()
        } else {
            build_snowflake(level, size)
        };
        let delay_ms = if level == max_level {
            frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD)
        } else {
            frame_delay_ms
        };
        let frame_style = style.with_caption(format!("LEVEL {level}"));
        let img = render_curve_in(&curve, &frame_style, &viewport)?;
        frames.push(Frame::from_parts(
            img,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ));
    }

    Ok(frames)
}

/// Export the growth animation from level 0 to `max_level` as a GIF
///
/// # Errors
///
/// Returns an error if:
/// - Frame rendering fails
/// - File system operations fail
/// - GIF encoding fails
pub fn export_growth_gif(
    max_level: u32,
    size: f64,
    style: &RenderStyle,
    output_path: &Path,
    frame_delay_ms: u32,
) -> Result<()> {
    let frames = growth_frames(max_level, size, style, frame_delay_ms)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    let file = std::fs::File::create(output_path).with_path(output_path, "create file")?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .set_repeat(image::codecs::gif::Repeat::Infinite)
        .map_err(|e| SnowflakeError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;
    encoder
        .encode_frames(frames)
        .map_err(|e| SnowflakeError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
