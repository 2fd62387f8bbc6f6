/*!
 * Common test utilities for the easyread test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use easyread::app_config::Config;

// Re-export the mock speech engine module
pub mod mock_speech;

/// Route library logs to the test output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a small RTF document for testing
pub fn create_test_rtf(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r"{\rtf1\ansi\deff0{\fonttbl{\f0 Helvetica;}}\f0\fs24 The quick brown fox\par jumps over the lazy dog.}";
    create_test_file(dir, filename, content)
}

/// Creates a small HTML document for testing
pub fn create_test_html(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"<!DOCTYPE html>
<html>
<head><title>Test</title></head>
<body>
<h1>Chapter one</h1>
<p>It was a bright cold day in April.</p>
</body>
</html>
"#;
    create_test_file(dir, filename, content)
}

/// Creates a single-page PDF showing `text` in Helvetica
///
/// Object offsets in the cross-reference table are computed as the file is
/// assembled, so strict parsers accept it.
pub fn create_test_pdf(dir: &Path, filename: &str, text: &str) -> Result<PathBuf> {
    let stream = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", text);
    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R \
         /Resources << /Font << /F1 5 0 R >> >> >>"
            .to_string(),
        format!("<< /Length {} >>\nstream\n{}\nendstream", stream.len(), stream),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
    ];

    let mut pdf = String::from("%PDF-1.4\n");
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", index + 1, body));
    }

    let xref_offset = pdf.len();
    pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
    for offset in offsets {
        pdf.push_str(&format!("{:010} 00000 n \n", offset));
    }
    pdf.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        xref_offset
    ));

    create_test_file(dir, filename, &pdf)
}

/// Opens a second, raw handle on a database file to set up unusual states
pub fn open_raw_connection(path: &Path) -> Result<rusqlite::Connection> {
    Ok(rusqlite::Connection::open(path)?)
}

/// Configuration pointing at a database inside `dir`
pub fn config_in(dir: &Path) -> Config {
    Config {
        database_path: Some(dir.join("easyread.db")),
        ..Config::default()
    }
}
