use std::path::Path;

use client_logging::{initialize, LogDestination, LogInitError};
use log::LevelFilter;

#[test]
fn unwritable_log_file_is_reported_as_such() {
    let path = Path::new("/nonexistent-lecture-dir/lecture_client.log");

    let err = initialize(LogDestination::File, LevelFilter::Info, path).unwrap_err();

    assert!(matches!(err, LogInitError::LogFile { .. }));
    let text = err.to_string();
    assert!(text.starts_with("could not create log file"), "{text}");
    assert!(text.contains("lecture_client.log"), "{text}");
}
