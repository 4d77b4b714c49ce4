//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::error::EulerError;

/// Options for drawing a single graph
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Graph file to draw
    pub file: PathBuf,
    /// Drawing format
    pub format: GraphFormat,
    /// Output file (stdout if None)
    pub output: Option<PathBuf>,
    /// Mark vertices that break the Eulerian condition
    pub highlight: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    file: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self {
            file: None,
            format: None,
            output: None,
            highlight: None,
        }
    }

    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, EulerError> {
        Ok(RenderOptions {
            file: self.file.ok_or_else(|| EulerError::ConfigurationError {
                message: "Missing required field: file".to_string(),
            })?,
            format: self.format.unwrap_or(GraphFormat::Ascii),
            output: self.output,
            highlight: self.highlight.unwrap_or(true),
        })
    }
}
