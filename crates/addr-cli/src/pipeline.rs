//! Read → standardize → write, one batch at a time.

use std::path::PathBuf;
use std::time::Instant;

use addr_ingest::{CsvChunkReader, CsvChunkWriter, CsvOptions};
use addr_normalization::{
    BatchReport, DERIVED_COLUMNS, NormalizationError, RecordError, StandardizeOptions,
    standardize_batch,
};
use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use crate::logging::redact_value;
use crate::types::{IssueAction, MAX_RECORDED_ISSUES, RecordIssue, RunResult};

/// Everything a standardization run needs.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub csv: CsvOptions,
    pub standardize: StandardizeOptions,
}

/// Standardize `input_file` into `output_file`.
///
/// Batches are written strictly in input order. The output file is created
/// only after the input header has been read and both configured columns
/// were found in it.
pub fn standardize_file(config: &PipelineConfig) -> Result<RunResult> {
    let span = info_span!("standardize", input = %config.input_file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let mut reader = CsvChunkReader::open(&config.input_file, &config.csv)
        .with_context(|| format!("open input {}", config.input_file.display()))?;
    for column in [
        &config.standardize.housenum_column,
        &config.standardize.street_column,
    ] {
        if !reader.columns().contains(column) {
            return Err(NormalizationError::MissingColumn {
                column: column.clone(),
            })
            .with_context(|| format!("check columns of {}", config.input_file.display()));
        }
    }
    let mut writer = CsvChunkWriter::create(&config.output_file, &config.csv)
        .with_context(|| format!("create output {}", config.output_file.display()))?;

    let mut result = RunResult {
        input_file: config.input_file.clone(),
        output_file: config.output_file.clone(),
        ..RunResult::default()
    };

    while let Some(mut batch) = reader.next_batch().context("read input")? {
        let first_row = batch.first_row();
        let report = standardize_batch(&mut batch, &config.standardize)
            .with_context(|| format!("standardize batch starting at record {first_row}"))?;
        writer.write_batch(&batch).context("write output")?;

        debug!(
            batch = result.batches,
            first_row,
            records = report.input_rows,
            written = report.output_rows,
            written_total = writer.rows_written(),
            "batch complete"
        );
        record_report(&mut result, report);
    }

    if result.batches == 0 {
        writer
            .write_header(&output_columns(reader.columns()))
            .context("write output header")?;
    }
    let output = writer.path().display().to_string();
    result.records_written = writer.finish().with_context(|| format!("finish output {output}"))?;
    result.duration_ms = start.elapsed().as_millis();

    info!(
        records_read = result.records_read,
        records_written = result.records_written,
        records_skipped = result.records_skipped,
        batches = result.batches,
        duration_ms = result.duration_ms,
        "standardization complete"
    );
    Ok(result)
}

/// Input columns followed by the derived columns not already present.
pub fn output_columns(input: &[String]) -> Vec<String> {
    let mut columns = input.to_vec();
    for name in DERIVED_COLUMNS {
        if !columns.iter().any(|column| column == name) {
            columns.push(name.to_string());
        }
    }
    columns
}

fn record_report(result: &mut RunResult, report: BatchReport) {
    result.batches += 1;
    result.records_read += report.input_rows;
    result.records_skipped += report.skipped.len();
    result.records_kept_with_errors += report.kept.len();
    let errors = report
        .skipped
        .into_iter()
        .map(|error| (error, IssueAction::Skipped))
        .chain(report.kept.into_iter().map(|error| (error, IssueAction::Kept)));
    for (error, action) in errors {
        warn!(
            row = error.row,
            column = %error.column,
            value = redact_value(&error.value),
            action = ?action,
            "record not standardized"
        );
        if result.issues.len() < MAX_RECORDED_ISSUES {
            result.issues.push(issue(error, action));
        }
    }
}

fn issue(error: RecordError, action: IssueAction) -> RecordIssue {
    RecordIssue {
        row: error.row,
        column: error.column,
        action,
        message: error.source.to_string(),
    }
}
