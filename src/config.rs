//! Render command configuration

use std::path::{Path, PathBuf};

use crate::cli::{Cli, NetworkMode, OutputFormat};
use crate::common::ConfigBuilder;
use crate::constants::{canvas, layout};
use crate::error::GenoPhenoError;
use crate::style::LabelScope;
use crate::utils::path::image_output_path;

/// Validated options for one rendering run
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub mode: NetworkMode,
    pub input: PathBuf,
    pub output: PathBuf,
    pub label_scope: LabelScope,
    pub iterations: usize,
    pub format: OutputFormat,
    pub quiet: bool,
    pub width: u32,
    pub height: u32,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    /// Where the PNG is written
    pub fn image_path(&self) -> PathBuf {
        image_output_path(&self.output)
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    mode: Option<NetworkMode>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    label_scope: Option<LabelScope>,
    iterations: Option<usize>,
    format: Option<OutputFormat>,
    quiet: Option<bool>,
    width: Option<u32>,
    height: Option<u32>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: NetworkMode) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_input(mut self, input: impl AsRef<Path>) -> Self {
        self.input = Some(input.as_ref().to_path_buf());
        self
    }

    pub fn with_output(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_label_scope(mut self, label_scope: LabelScope) -> Self {
        self.label_scope = Some(label_scope);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

impl ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, GenoPhenoError> {
        let iterations = self.iterations.unwrap_or(layout::DEFAULT_ITERATIONS);
        if iterations == 0 {
            return Err(GenoPhenoError::ConfigurationError {
                message: "iterations must be greater than zero".to_string(),
            });
        }

        let (width, height) = (
            self.width.unwrap_or(canvas::WIDTH),
            self.height.unwrap_or(canvas::HEIGHT),
        );
        if width == 0 || height == 0 {
            return Err(GenoPhenoError::ConfigurationError {
                message: format!("canvas size {width}x{height} must be non-zero"),
            });
        }

        Ok(RenderOptions {
            mode: self
                .mode
                .ok_or_else(|| GenoPhenoError::ConfigurationError {
                    message: "Missing required field: mode".to_string(),
                })?,
            input: self
                .input
                .ok_or_else(|| GenoPhenoError::ConfigurationError {
                    message: "Missing required field: input".to_string(),
                })?,
            output: self
                .output
                .ok_or_else(|| GenoPhenoError::ConfigurationError {
                    message: "Missing required field: output".to_string(),
                })?,
            label_scope: self.label_scope.unwrap_or_default(),
            iterations,
            format: self.format.unwrap_or(OutputFormat::Human),
            quiet: self.quiet.unwrap_or(false),
            width,
            height,
        })
    }
}

impl TryFrom<Cli> for RenderOptions {
    type Error = GenoPhenoError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        RenderOptions::builder()
            .with_mode(cli.mode)
            .with_input(&cli.input)
            .with_output(&cli.output)
            .with_label_scope(LabelScope::from_name_or_none(&cli.labels))
            .with_iterations(cli.iterations)
            .with_format(cli.format)
            .with_quiet(cli.quiet)
            .build()
    }
}
