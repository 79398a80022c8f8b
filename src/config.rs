use clap::ValueEnum;
use std::path::PathBuf;

/// Default directory scanned for ledger workbooks
pub const DEFAULT_INPUT_DIR: &str = "input";

/// Default consolidated workbook path
pub const DEFAULT_OUTPUT_FILE: &str = "output.xlsx";

/// What to do when a worksheet carries no `BP04` marker at D6 or C6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LayoutPolicy {
    /// Fail the whole run
    #[default]
    Abort,
    /// Log a warning and continue with the next worksheet
    SkipSheet,
}

#[derive(Debug, Clone)]
pub struct MergeConfig {
    pub input_dir: PathBuf,
    pub output: PathBuf,
    pub on_missing_layout: LayoutPolicy,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            on_missing_layout: LayoutPolicy::Abort,
        }
    }
}

impl MergeConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    pub fn with_layout_policy(mut self, policy: LayoutPolicy) -> Self {
        self.on_missing_layout = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_batch_script_layout() {
        let config = MergeConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.output, PathBuf::from("output.xlsx"));
        assert_eq!(config.on_missing_layout, LayoutPolicy::Abort);
    }

    #[test]
    fn test_with_layout_policy() {
        let config = MergeConfig::new("in", "out.xlsx").with_layout_policy(LayoutPolicy::SkipSheet);
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.on_missing_layout, LayoutPolicy::SkipSheet);
    }
}
