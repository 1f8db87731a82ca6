//! Fixed file layout under the data directory.

use std::path::{Path, PathBuf};

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

pub const FAA_ARCHIVE: &str = "faa_aircrafts.zip";
/// Registration table member of the FAA archive.
pub const FAA_MASTER_MEMBER: &str = "MASTER.txt";
/// Aircraft reference table member of the FAA archive.
pub const FAA_REFERENCE_MEMBER: &str = "ACFTREF.txt";
pub const FAA_MASTER: &str = "faa_aircrafts.csv";
pub const FAA_REFERENCE: &str = "faa_ref.csv";
pub const INTERESTING_FAA: &str = "interesting_faa_aircrafts.csv";

pub const OPENSKY: &str = "opensky_aircrafts.csv";
pub const INTERESTING_OPENSKY: &str = "interesting_opensky_aircrafts.csv";

pub const COMMON_OPENSKY: &str = "test_common_interesting_opensky_aircrafts.csv";
pub const COMMON_FAA: &str = "test_common_interesting_faa_aircrafts.csv";
pub const ONLY_OPENSKY: &str = "test_only_in_interesting_opensky_aircrafts.csv";
pub const ONLY_FAA: &str = "test_only_in_interesting_faa_aircrafts.csv";
pub const MERGED: &str = "interesting_aircrafts.csv";

/// Every input and output path of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: PathBuf,
    pub faa_archive: PathBuf,
    pub faa_master: PathBuf,
    pub faa_reference: PathBuf,
    pub interesting_faa: PathBuf,
    pub opensky: PathBuf,
    pub interesting_opensky: PathBuf,
    pub common_opensky: PathBuf,
    pub common_faa: PathBuf,
    pub only_opensky: PathBuf,
    pub only_faa: PathBuf,
    pub merged: PathBuf,
}

impl DataPaths {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            data_dir: data_dir.to_path_buf(),
            faa_archive: data_dir.join(FAA_ARCHIVE),
            faa_master: data_dir.join(FAA_MASTER),
            faa_reference: data_dir.join(FAA_REFERENCE),
            interesting_faa: data_dir.join(INTERESTING_FAA),
            opensky: data_dir.join(OPENSKY),
            interesting_opensky: data_dir.join(INTERESTING_OPENSKY),
            common_opensky: data_dir.join(COMMON_OPENSKY),
            common_faa: data_dir.join(COMMON_FAA),
            only_opensky: data_dir.join(ONLY_OPENSKY),
            only_faa: data_dir.join(ONLY_FAA),
            merged: data_dir.join(MERGED),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
