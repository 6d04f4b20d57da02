//! Log output of a run with `--log-data` enabled.
//!
//! Installs the global subscriber, so it lives in its own test binary.

use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use addr_cli::logging::{LogConfig, LogFormat, init_logging_with_writer, redact_value};
use addr_cli::pipeline::{PipelineConfig, standardize_file};
use addr_ingest::CsvOptions;
use addr_normalization::{ErrorPolicy, StandardizeOptions};
use tempfile::TempDir;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_log_data_includes_record_values() {
    let logs = CapturedLogs::default();
    let config = LogConfig {
        use_env_filter: false,
        with_ansi: false,
        ..LogConfig::default()
    }
    .with_format(LogFormat::Json)
    .with_log_data(true);
    init_logging_with_writer(&config, logs.clone());

    assert_eq!(redact_value("12 ELM ST"), "12 ELM ST");

    let dir = TempDir::new().unwrap();
    let pipeline = PipelineConfig {
        input_file: dir.path().join("addresses.csv"),
        output_file: dir.path().join("standardized.csv"),
        csv: CsvOptions::default(),
        standardize: StandardizeOptions::new("HOUSENUM", "STREET")
            .with_error_policy(ErrorPolicy::Skip),
    };
    fs::write(&pipeline.input_file, "HOUSENUM,STREET\n1,ELM\n2,& &\n").unwrap();

    let result = standardize_file(&pipeline).unwrap();

    assert_eq!(result.records_skipped, 1);
    let output = logs.contents();
    let line = output
        .lines()
        .find(|line| line.contains("record not standardized"))
        .expect("warning for the skipped record");
    assert!(line.contains("\"value\":\"& &\""));
    assert!(line.contains("\"column\":\"STREET\""));
    assert!(!output.contains("[REDACTED]"));
}
