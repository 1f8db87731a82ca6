//! Zip member extraction.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::result::ZipError;

use crate::error::{IngestError, Result};

/// A named archive member and the file it is copied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    pub name: String,
    pub destination: PathBuf,
}

impl ArchiveMember {
    pub fn new(name: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
        }
    }
}

/// Copies each named member of the zip archive at `archive_path`, byte for
/// byte, to its destination. Returns the number of bytes written per member.
pub fn extract_members(archive_path: &Path, members: &[ArchiveMember]) -> Result<Vec<u64>> {
    debug!(archive = %archive_path.display(), "opening archive");
    let file = File::open(archive_path).map_err(|e| IngestError::read(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(file).map_err(|source| IngestError::ArchiveOpen {
        path: archive_path.to_path_buf(),
        source,
    })?;

    let mut sizes = Vec::with_capacity(members.len());
    for member in members {
        let mut entry = match archive.by_name(&member.name) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(IngestError::MissingMember {
                    path: archive_path.to_path_buf(),
                    member: member.name.clone(),
                });
            }
            Err(source) => {
                return Err(IngestError::MemberRead {
                    path: archive_path.to_path_buf(),
                    member: member.name.clone(),
                    source,
                });
            }
        };

        let mut bytes = Vec::new();
        entry
            .read_to_end(&mut bytes)
            .map_err(|e| IngestError::read(archive_path, e))?;
        fs::write(&member.destination, &bytes)
            .map_err(|e| IngestError::write(&member.destination, e))?;

        debug!(
            member = %member.name,
            destination = %member.destination.display(),
            bytes = bytes.len(),
            "extracted archive member"
        );
        sizes.push(bytes.len() as u64);
    }
    Ok(sizes)
}
