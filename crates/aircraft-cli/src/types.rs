use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Pipeline stage, in run order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Faa,
    OpenSky,
    Merge,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Faa => "faa",
            Self::OpenSky => "opensky",
            Self::Merge => "merge",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A file written by a stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub rows: usize,
    /// Lower-case hex SHA-256 of the file contents.
    pub sha256: String,
}

/// Set sizes reported by the merge stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCounts {
    pub faa: usize,
    pub opensky: usize,
    pub intersection: usize,
    pub union: usize,
}

#[derive(Debug, Clone)]
pub struct StageOutcome {
    pub stage: Stage,
    /// Rows read from the stage's primary input.
    pub input_rows: usize,
    pub outputs: Vec<OutputFile>,
    pub merge_counts: Option<MergeCounts>,
    pub duration: Duration,
}

/// Everything a command did, for the summary.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub data_dir: PathBuf,
    pub stages: Vec<StageOutcome>,
}
