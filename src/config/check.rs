//! Check command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::EulerError;

/// Configuration for the check command
///
/// This struct contains all options for deciding and reporting Eulerian
/// cycles over a batch of graph files.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Files, directories or glob patterns to search for graphs
    pub paths: Vec<PathBuf>,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if any graph fails
    pub error_on_failure: bool,
    /// Maximum number of vertices listed per graph (None = all)
    pub max_details: Option<usize>,
}

impl CheckConfig {
    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CheckConfigBuilder {
    paths: Option<Vec<PathBuf>>,
    format: Option<OutputFormat>,
    error_on_failure: Option<bool>,
    max_details: Option<Option<usize>>,
}

impl CheckConfigBuilder {
    pub fn new() -> Self {
        Self {
            paths: None,
            format: None,
            error_on_failure: None,
            max_details: None,
        }
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = Some(paths);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_failure(mut self, error_on_failure: bool) -> Self {
        self.error_on_failure = Some(error_on_failure);
        self
    }

    pub fn with_max_details(mut self, max_details: Option<usize>) -> Self {
        self.max_details = Some(max_details);
        self
    }
}

impl crate::common::ConfigBuilder for CheckConfigBuilder {
    type Config = CheckConfig;

    fn build(self) -> Result<Self::Config, EulerError> {
        let max_details = self.max_details.unwrap_or(None);
        if max_details == Some(0) {
            return Err(EulerError::ConfigurationError {
                message: "--max-details must be at least 1".to_string(),
            });
        }

        Ok(CheckConfig {
            paths: self
                .paths
                .ok_or_else(|| EulerError::ConfigurationError {
                    message: "Missing required field: paths".to_string(),
                })?,
            format: self
                .format
                .ok_or_else(|| EulerError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
            error_on_failure: self.error_on_failure.unwrap_or(false),
            max_details,
        })
    }
}
