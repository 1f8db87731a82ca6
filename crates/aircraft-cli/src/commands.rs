use anyhow::{Context, Result};
use tracing::info_span;

use aircraft_cli::paths::DataPaths;
use aircraft_cli::pipeline::{
    PipelineSettings, run_all, run_faa_stage, run_merge_stage, run_opensky_stage,
};
use aircraft_cli::types::RunResult;
use aircraft_ingest::TextEncoding;

use crate::cli::{Cli, Command};

pub fn run(cli: &Cli) -> Result<RunResult> {
    let settings = settings_from_cli(cli)?;
    let span = info_span!("run", data_dir = %settings.paths.data_dir.display());
    let _guard = span.enter();

    let stages = match cli.command {
        Command::Faa => vec![run_faa_stage(&settings)?],
        Command::OpenSky => vec![run_opensky_stage(&settings)?],
        Command::Merge => vec![run_merge_stage(&settings)?],
        Command::All => run_all(&settings)?,
    };
    Ok(RunResult {
        data_dir: settings.paths.data_dir,
        stages,
    })
}

fn settings_from_cli(cli: &Cli) -> Result<PipelineSettings> {
    let input_encoding = TextEncoding::from_label(&cli.input_encoding)
        .context("resolve --input-encoding")?;
    Ok(PipelineSettings {
        input_encoding,
        ..PipelineSettings::new(DataPaths::new(&cli.data_dir))
    })
}
