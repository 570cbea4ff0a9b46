//! Command-line interface for batch and interactive snowflake rendering

use crate::algorithm::level::{RecursionLevel, check_cap};
use crate::algorithm::snowflake::{build_snowflake, expected_segment_count};
use crate::io::configuration::{
    ANIMATION_PREFIX, DEFAULT_SIDE_LENGTH, GIF_FRAME_DELAY_MS, IMAGE_HEIGHT, IMAGE_MARGIN,
    IMAGE_WIDTH, MAX_RECURSION_LEVEL, OUTPUT_DIR, OUTPUT_PREFIX,
};
use crate::io::display::show_image;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{RenderStyle, export_curve_as_png};
use crate::io::progress::ProgressManager;
use crate::io::prompt::{OutputMode, RenderOutcome, Session};
use crate::io::visualization::export_growth_gif;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "kochflake")]
#[command(
    author,
    version,
    about = "Render Koch snowflakes at chosen recursion levels"
)]
/// Command-line arguments for the snowflake renderer
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Recursion levels to render; prompts interactively when none are given
    #[arg(value_name = "LEVEL", allow_negative_numbers = true)]
    pub levels: Vec<i64>,

    /// Side length of the initial triangle
    #[arg(short, long, default_value_t = DEFAULT_SIDE_LENGTH)]
    pub size: f64,

    /// Directory receiving rendered images
    #[arg(short, long, default_value = OUTPUT_DIR)]
    pub output: PathBuf,

    /// Highest recursion level accepted
    #[arg(short = 'M', long, default_value_t = MAX_RECURSION_LEVEL)]
    pub max_level: u32,

    /// Open each image in the system viewer after saving
    #[arg(short = 'd', long)]
    pub show: bool,

    /// Also export an animated GIF growing from level 0 to the highest requested level
    #[arg(short, long)]
    pub animate: bool,

    /// Draw the outline only, without filling the interior
    #[arg(long)]
    pub no_fill: bool,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = IMAGE_WIDTH)]
    pub width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = IMAGE_HEIGHT)]
    pub height: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render levels even if their output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if levels should be prompted for instead of taken from arguments
    pub const fn is_interactive(&self) -> bool {
        self.levels.is_empty()
    }

    /// Output mode implied by the `--show` flag
    pub const fn output_mode(&self) -> OutputMode {
        if self.show {
            OutputMode::FileAndDisplay
        } else {
            OutputMode::FileOnly
        }
    }

    /// Rendering settings derived from the arguments
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            width: self.width,
            height: self.height,
            fill: !self.no_fill,
            ..RenderStyle::default()
        }
    }

    /// Validate arguments that do not depend on a particular level
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The side length is not a positive finite number
    /// - The level cap exceeds the hard ceiling
    /// - The canvas is not larger than twice the margin
    pub fn validate(&self) -> Result<()> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(invalid_parameter(
                "size",
                &self.size,
                &"must be a positive number",
            ));
        }

        check_cap(self.max_level)?;

        let minimum = IMAGE_MARGIN * 2;
        if self.width <= minimum || self.height <= minimum {
            return Err(invalid_parameter(
                "canvas",
                &format!("{}x{}", self.width, self.height),
                &format!("both dimensions must exceed {minimum}px"),
            ));
        }

        Ok(())
    }

    /// Validate every requested level against the level cap
    ///
    /// # Errors
    ///
    /// Returns an error for the first level outside `0..=max_level`
    pub fn requested_levels(&self) -> Result<Vec<RecursionLevel>> {
        self.levels
            .iter()
            .map(|&level| RecursionLevel::new(level, self.max_level))
            .collect()
    }
}

/// Path of the PNG for `level` inside `dir`
pub fn output_path_for(dir: &Path, level: RecursionLevel) -> PathBuf {
    dir.join(format!("{OUTPUT_PREFIX}{level}.png"))
}

/// Path of the growth GIF ending at `level` inside `dir`
pub fn animation_path_for(dir: &Path, level: RecursionLevel) -> PathBuf {
    dir.join(format!("{ANIMATION_PREFIX}{level}.gif"))
}

/// Orchestrates building, exporting and displaying snowflakes
pub struct SnowflakeRenderer {
    cli: Cli,
    style: RenderStyle,
}

impl SnowflakeRenderer {
    /// Create a renderer for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let style = cli.render_style();
        Self { cli, style }
    }

    /// Render according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation fails, if a batch render fails, or if the
    /// terminal cannot be read in interactive mode
    pub fn process(&self) -> Result<()> {
        self.cli.validate()?;

        if self.cli.is_interactive() {
            let mut session = Session::new(
                std::io::stdin().lock(),
                std::io::stdout().lock(),
                self.cli.max_level,
            );
            let rendered = session.run(|level, mode| self.render_level(level, mode));
            drop(session);
            rendered?;
            return Ok(());
        }

        self.process_batch()
    }

    /// Render every level given on the command line
    ///
    /// # Errors
    ///
    /// Returns an error if a level is out of range or an export fails
    pub fn process_batch(&self) -> Result<()> {
        let levels = self.cli.requested_levels()?;

        let mut progress_manager = self.cli.should_show_progress().then(ProgressManager::new);
        if let Some(pm) = progress_manager.as_mut() {
            pm.initialize(levels.len());
        }

        for &level in &levels {
            let output_path = self.output_path(level);
            if self.cli.skip_existing() && output_path.exists() {
                if let Some(pm) = &progress_manager {
                    pm.skip_level(level, &output_path);
                }
                continue;
            }

            let start_time = Instant::now();
            if let Some(pm) = &progress_manager {
                pm.start_level(level);
            }

            let outcome = self.render_level(level, self.cli.output_mode())?;

            if let Some(pm) = &progress_manager {
                if let Some(err) = &outcome.display_error {
                    pm.report(&format!("{err} (the file was still saved)"));
                }
                let segments = expected_segment_count(level.get()).unwrap_or_default();
                pm.complete_level(level, segments, &outcome.path, start_time.elapsed());
            }
        }

        if self.cli.animate
            && let Some(&highest) = levels.iter().max()
        {
            let animation_path = animation_path_for(&self.cli.output, highest);
            export_growth_gif(
                highest.get(),
                self.cli.size,
                &self.style,
                &animation_path,
                GIF_FRAME_DELAY_MS,
            )?;
            if let Some(pm) = &progress_manager {
                pm.report(&format!("Animation -> {}", animation_path.display()));
            }
        }

        if let Some(pm) = &progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Build, save and optionally display the snowflake for one level
    ///
    /// Display failures are returned inside the outcome rather than as errors, since the
    /// image has already been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the image cannot be rendered or saved
    pub fn render_level(&self, level: RecursionLevel, mode: OutputMode) -> Result<RenderOutcome> {
        let curve = build_snowflake(level.get(), self.cli.size);
        let path = self.output_path(level);
        let style = self.style.with_caption(format!("LEVEL {level}"));
        export_curve_as_png(&curve, &style, &path)?;

        let display_error = if mode.shows_image() {
            show_image(&path).err()
        } else {
            None
        };

        Ok(RenderOutcome {
            path,
            display_error,
        })
    }

    /// Output path for a level under the configured directory
    pub fn output_path(&self, level: RecursionLevel) -> PathBuf {
        output_path_for(&self.cli.output, level)
    }
}
