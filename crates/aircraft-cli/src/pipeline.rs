//! Stage drivers for the interesting aircraft pipeline.
//!
//! The stages run in this order, each to completion:
//! 1. **FAA**: Extract the registry archive, then filter and classify registrations
//! 2. **OpenSky**: Filter the OpenSky aircraft database
//! 3. **Merge**: Compare the two filtered tables and write their set algebra
//!
//! These functions are the only code that touches the filesystem; filtering
//! and merging are delegated to pure functions in the library crates.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use aircraft_filter::{
    FaaFilter, FaaFilterConfig, OpenSkyFilter, OpenSkyFilterConfig, ReferenceTable,
};
use aircraft_ingest::{
    ArchiveMember, TextEncoding, compute_file_sha256, extract_members, read_rows, write_records,
    write_rows,
};
use aircraft_merge::{KeyedRows, merge};

use crate::paths::{DataPaths, FAA_MASTER_MEMBER, FAA_REFERENCE_MEMBER};
use crate::types::{MergeCounts, OutputFile, Stage, StageOutcome};

/// Everything the stages need besides the data itself.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub paths: DataPaths,
    /// Encoding of the raw FAA and OpenSky inputs.
    pub input_encoding: TextEncoding,
    pub faa: FaaFilterConfig,
    pub opensky: OpenSkyFilterConfig,
}

impl PipelineSettings {
    pub fn new(paths: DataPaths) -> Self {
        Self {
            paths,
            input_encoding: TextEncoding::registry(),
            faa: FaaFilterConfig::default(),
            opensky: OpenSkyFilterConfig::default(),
        }
    }
}

/// Run every stage in order, stopping at the first failure.
pub fn run_all(settings: &PipelineSettings) -> Result<Vec<StageOutcome>> {
    Ok(vec![
        run_faa_stage(settings)?,
        run_opensky_stage(settings)?,
        run_merge_stage(settings)?,
    ])
}

// ============================================================================
// Stage 1: FAA
// ============================================================================

/// Extract `MASTER.txt` and `ACFTREF.txt`, then write the interesting
/// registrations with their classification codes.
pub fn run_faa_stage(settings: &PipelineSettings) -> Result<StageOutcome> {
    let paths = &settings.paths;
    let span = info_span!("faa", archive = %paths.faa_archive.display());
    let _guard = span.enter();
    let start = Instant::now();

    let members = [
        ArchiveMember::new(FAA_MASTER_MEMBER, paths.faa_master.clone()),
        ArchiveMember::new(FAA_REFERENCE_MEMBER, paths.faa_reference.clone()),
    ];
    let sizes = extract_members(&paths.faa_archive, &members)
        .with_context(|| format!("extract {}", paths.faa_archive.display()))?;
    debug!(bytes = sizes.iter().sum::<u64>(), "extracted FAA registry");

    let registrations = read_rows(&paths.faa_master, settings.input_encoding)
        .context("read FAA registrations")?;
    let reference_rows = read_rows(&paths.faa_reference, settings.input_encoding)
        .context("read FAA reference table")?;
    let reference =
        ReferenceTable::from_rows(reference_rows).context("index FAA reference table")?;

    let filter = FaaFilter::new(&settings.faa).context("compile FAA owner keywords")?;
    let records = filter
        .filter(&registrations, &reference)
        .context("filter FAA registrations")?;
    let written = write_records(&paths.interesting_faa, &records)
        .context("write interesting FAA aircraft")?;

    let outcome = StageOutcome {
        stage: Stage::Faa,
        input_rows: registrations.len(),
        outputs: vec![output_file(&paths.interesting_faa, written)?],
        merge_counts: None,
        duration: start.elapsed(),
    };
    info!(
        registrations = outcome.input_rows,
        reference_types = reference.len(),
        accepted = written,
        duration_ms = outcome.duration.as_millis(),
        "FAA stage complete"
    );
    Ok(outcome)
}

// ============================================================================
// Stage 2: OpenSky
// ============================================================================

pub fn run_opensky_stage(settings: &PipelineSettings) -> Result<StageOutcome> {
    let paths = &settings.paths;
    let span = info_span!("opensky", input = %paths.opensky.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rows = read_rows(&paths.opensky, settings.input_encoding)
        .context("read OpenSky aircraft database")?;
    let filter =
        OpenSkyFilter::new(&settings.opensky).context("compile OpenSky operator keywords")?;
    let records = filter.filter(&rows).context("filter OpenSky aircraft")?;
    let written = write_records(&paths.interesting_opensky, &records)
        .context("write interesting OpenSky aircraft")?;

    let outcome = StageOutcome {
        stage: Stage::OpenSky,
        input_rows: rows.len(),
        outputs: vec![output_file(&paths.interesting_opensky, written)?],
        merge_counts: None,
        duration: start.elapsed(),
    };
    info!(
        aircraft = outcome.input_rows,
        accepted = written,
        duration_ms = outcome.duration.as_millis(),
        "OpenSky stage complete"
    );
    Ok(outcome)
}

// ============================================================================
// Stage 3: Merge
// ============================================================================

/// Read both filtered tables back and write the intersection (one file per
/// side), both differences and the union.
pub fn run_merge_stage(settings: &PipelineSettings) -> Result<StageOutcome> {
    let paths = &settings.paths;
    let span = info_span!("merge", data_dir = %paths.data_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    // Both inputs were written by this pipeline, so they are UTF-8.
    let faa_rows = read_rows(&paths.interesting_faa, TextEncoding::utf8())
        .context("read interesting FAA aircraft")?;
    let opensky_rows = read_rows(&paths.interesting_opensky, TextEncoding::utf8())
        .context("read interesting OpenSky aircraft")?;
    let input_rows = faa_rows.len() + opensky_rows.len();

    let faa = KeyedRows::from_rows(faa_rows)
        .with_context(|| format!("key {}", paths.interesting_faa.display()))?;
    let opensky = KeyedRows::from_rows(opensky_rows)
        .with_context(|| format!("key {}", paths.interesting_opensky.display()))?;
    let report = merge(&faa, &opensky);

    let tables = [
        (&paths.common_opensky, &report.common_b),
        (&paths.common_faa, &report.common_a),
        (&paths.only_opensky, &report.only_b),
        (&paths.only_faa, &report.only_a),
        (&paths.merged, &report.union),
    ];
    let mut outputs = Vec::with_capacity(tables.len());
    for (path, rows) in tables {
        let written =
            write_rows(path, rows).with_context(|| format!("write {}", path.display()))?;
        outputs.push(output_file(path, written)?);
    }

    let counts = MergeCounts {
        faa: faa.len(),
        opensky: opensky.len(),
        intersection: report.intersection_len(),
        union: report.union.len(),
    };
    let outcome = StageOutcome {
        stage: Stage::Merge,
        input_rows,
        outputs,
        merge_counts: Some(counts),
        duration: start.elapsed(),
    };
    info!(
        faa = counts.faa,
        opensky = counts.opensky,
        intersection = counts.intersection,
        union = counts.union,
        duration_ms = outcome.duration.as_millis(),
        "merge stage complete"
    );
    Ok(outcome)
}

fn output_file(path: &Path, rows: usize) -> Result<OutputFile> {
    let sha256 =
        compute_file_sha256(path).with_context(|| format!("checksum {}", path.display()))?;
    debug!(path = %path.display(), rows, sha256 = %sha256, "wrote output");
    Ok(OutputFile {
        path: path.to_path_buf(),
        rows,
        sha256,
    })
}
