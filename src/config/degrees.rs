//! Degrees command configuration

use std::path::PathBuf;

use crate::cli::DegreeFormat;
use crate::error::EulerError;

#[derive(Debug, Clone)]
pub struct DegreesConfig {
    pub file: PathBuf,
    pub format: DegreeFormat,
    /// Skip vertices whose in-degree equals their out-degree
    pub unbalanced_only: bool,
}

impl DegreesConfig {
    pub fn builder() -> DegreesConfigBuilder {
        DegreesConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct DegreesConfigBuilder {
    file: Option<PathBuf>,
    format: Option<DegreeFormat>,
    unbalanced_only: bool,
}

impl DegreesConfigBuilder {
    pub fn with_file(mut self, file: PathBuf) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_format(mut self, format: DegreeFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_unbalanced_only(mut self, unbalanced_only: bool) -> Self {
        self.unbalanced_only = unbalanced_only;
        self
    }
}

impl crate::common::ConfigBuilder for DegreesConfigBuilder {
    type Config = DegreesConfig;

    fn build(self) -> Result<Self::Config, EulerError> {
        Ok(DegreesConfig {
            file: self.file.ok_or_else(|| EulerError::ConfigurationError {
                message: "Missing required field: file".to_string(),
            })?,
            format: self.format.ok_or_else(|| EulerError::ConfigurationError {
                message: "Missing required field: format".to_string(),
            })?,
            unbalanced_only: self.unbalanced_only,
        })
    }
}
