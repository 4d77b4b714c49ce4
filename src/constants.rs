//! Configuration constants for eulerian-check

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames: a walk tracing a closed loop
    pub const SPINNER_FRAMES: &[&str] = &["◜", "◝", "◞", "◟", "◠", "◡", "○", "●"];
}

/// Graph file limits
pub mod input {
    /// Largest `vertices` count accepted from a graph file
    pub const MAX_VERTICES: usize = 1 << 26;
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default graph drawing format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 8);
    }

    #[test]
    fn test_input_constants() {
        assert_eq!(input::MAX_VERTICES, 67_108_864);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "ascii");
    }
}
