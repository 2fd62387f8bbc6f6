use anyhow::{Result, Context};
use std::fs;
use std::path::Path;

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    // @creates: Directory and parents if needed
    pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            fs::create_dir_all(path)?;
        }
        Ok(())
    }

    /// Read a file to a string
    pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))
    }

    /// Write a string to a file
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent().filter(|p| !p.as_os_str().is_empty()) {
            Self::ensure_dir(parent)?;
        }

        fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Lowercase extension of a path, or an empty string when it has none
    pub fn extension_of<P: AsRef<Path>>(path: P) -> String {
        path.as_ref()
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    /// Detect the document type of a file from its extension
    pub fn detect_file_type<P: AsRef<Path>>(path: P) -> FileType {
        match Self::extension_of(path).as_str() {
            "txt" => FileType::PlainText,
            "rtf" => FileType::RichText,
            "pdf" => FileType::Pdf,
            "html" | "htm" => FileType::Html,
            "docx" => FileType::WordOpenXml,
            "doc" => FileType::WordLegacy,
            _ => FileType::Unknown,
        }
    }
}

/// Enum representing the document types the reader recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Plain UTF-8 text
    PlainText,
    /// Rich Text Format
    RichText,
    /// Portable Document Format
    Pdf,
    /// HTML page
    Html,
    /// Word document (.docx), recognized but not decoded
    WordOpenXml,
    /// Legacy Word document (.doc), recognized but not decoded
    WordLegacy,
    /// Anything else
    Unknown,
}

impl FileType {
    /// Whether the reader can turn this file type into text
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::PlainText | Self::RichText | Self::Pdf | Self::Html)
    }
}
