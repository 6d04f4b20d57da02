use std::fs;

use addr_cli::pipeline::{PipelineConfig, standardize_file};
use addr_cli::types::RunResult;
use addr_ingest::{CsvOptions, parse_delimiter};
use addr_normalization::{StandardizeOptions, vocabulary};
use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use crate::cli::StandardizeArgs;
use crate::summary::apply_table_style;

pub fn run_vocabulary() -> Result<()> {
    for table in vocabulary_tables() {
        println!("{table}");
    }
    Ok(())
}

/// One table per vocabulary, surface form next to its canonical form.
fn vocabulary_tables() -> Vec<Table> {
    [
        ("Directional", vocabulary::directionals().collect::<Vec<_>>()),
        ("Suffix", vocabulary::suffixes().collect::<Vec<_>>()),
    ]
    .into_iter()
    .map(|(title, entries)| {
        let mut table = Table::new();
        table.set_header(vec![title, "Canonical"]);
        apply_table_style(&mut table);
        for (surface, canonical) in entries {
            table.add_row(vec![surface, canonical]);
        }
        table
    })
    .collect()
}

pub fn run_standardize(args: &StandardizeArgs) -> Result<RunResult> {
    let delimiter = parse_delimiter(&args.sep).context("parse --sep")?;
    let config = PipelineConfig {
        input_file: args.input_file.clone(),
        output_file: args.output_file.clone(),
        csv: CsvOptions::default()
            .with_delimiter(delimiter)
            .with_chunk_size(args.chunksize),
        standardize: StandardizeOptions::new(&args.housenum_column, &args.street_column)
            .with_error_policy(args.on_error.into()),
    };
    info!(
        housenum_column = %config.standardize.housenum_column,
        street_column = %config.standardize.street_column,
        chunk_size = config.csv.chunk_size,
        "starting standardization"
    );

    let result = standardize_file(&config)?;

    if let Some(path) = &args.summary_json {
        let json = serde_json::to_string_pretty(&result).context("serialize summary")?;
        fs::write(path, json).with_context(|| format!("write summary {}", path.display()))?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_tables() {
        let tables = vocabulary_tables();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].row_count(), vocabulary::directionals().count());
        assert_eq!(tables[1].row_count(), vocabulary::suffixes().count());

        let directionals = tables[0].to_string();
        assert!(directionals.contains("Directional"));
        assert!(directionals.contains("NORTHEAST"));
        let suffixes = tables[1].to_string();
        assert!(suffixes.contains("AVENUE"));
        assert!(suffixes.contains("HWY"));
    }
}
