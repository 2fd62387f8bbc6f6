/*!
 * Document import.
 *
 * Turns a file into the plain text the reader speaks. The decoder is chosen
 * from the file extension:
 * - `txt`: read as UTF-8
 * - `rtf`: control words and non-text destinations stripped
 * - `pdf`: text extracted from every page
 * - `html`/`htm`: converted to plain text
 *
 * Word documents are recognized but rejected with a hint to convert them.
 */

use encoding_rs::{Encoding, WINDOWS_1252};
use log::{debug, info};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

use crate::errors::DocumentError;
use crate::file_utils::{FileManager, FileType};

/// Line width used when rendering HTML to text
const HTML_WRAP_WIDTH: usize = 1000;

/// Message for .docx files
pub const DOCX_UNSUPPORTED: &str =
    "No docx converter for the time being. Save it as HTML or PDF and try again";

/// Message for .doc files
pub const DOC_UNSUPPORTED: &str =
    "No doc converter for the time being. Save it as HTML or PDF and try again";

/// Message for any other extension
pub const UNKNOWN_UNSUPPORTED: &str = "This type of file cannot be read";

/// Load a document from disk and return its text content
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<String, DocumentError> {
    let path = path.as_ref();
    let file_type = FileManager::detect_file_type(path);

    info!("Loading {:?} as {:?}", path, file_type);

    let text = match file_type {
        FileType::PlainText => read_text(path)?,
        FileType::RichText => rtf_to_text(&read_text(path)?),
        FileType::Html => html_to_text(&read_bytes(path)?),
        FileType::Pdf => pdf_to_text(path)?,
        FileType::WordOpenXml => return Err(unsupported(path, DOCX_UNSUPPORTED)),
        FileType::WordLegacy => return Err(unsupported(path, DOC_UNSUPPORTED)),
        FileType::Unknown => return Err(unsupported(path, UNKNOWN_UNSUPPORTED)),
    };

    debug!("Loaded {} characters from {:?}", text.chars().count(), path);
    Ok(text)
}

fn unsupported(path: &Path, message: &str) -> DocumentError {
    DocumentError::Unsupported {
        extension: FileManager::extension_of(path),
        message: message.to_string(),
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, DocumentError> {
    std::fs::read(path).map_err(|e| DocumentError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn read_text(path: &Path) -> Result<String, DocumentError> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|e| DocumentError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn pdf_to_text(path: &Path) -> Result<String, DocumentError> {
    pdf_extract::extract_text(path).map_err(|e| DocumentError::Decode {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Convert an HTML page to plain text
pub fn html_to_text(html: &[u8]) -> String {
    html2text::from_read(html, HTML_WRAP_WIDTH).trim().to_string()
}

// Groups starting with these control words hold no readable text
const RTF_SKIPPED_DESTINATIONS: &[&str] = &[
    "fonttbl", "colortbl", "stylesheet", "info", "pict", "header", "footer",
    "headerl", "headerr", "footerl", "footerr", "listtable", "listoverridetable",
    "rsidtbl", "generator", "themedata", "colorschememapping", "latentstyles",
    "datastore", "xmlnstbl", "object", "fldinst",
];

static RTF_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\\([a-zA-Z]+)(-?\d+)? ?|\\'([0-9a-fA-F]{2})|\\([^a-zA-Z])|([{}])|(\r?\n)|([^\\{}\r\n]+)",
    )
    .expect("RTF token pattern is valid")
});

// Text collected from an RTF body; `\'hh` bytes are buffered so multi-byte
// code pages decode as a whole run
struct RtfOutput {
    text: String,
    bytes: Vec<u8>,
    encoding: &'static Encoding,
}

impl RtfOutput {
    fn new(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            bytes: Vec::new(),
            encoding: WINDOWS_1252,
        }
    }

    fn push_byte(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    fn push(&mut self, ch: char) {
        self.flush_bytes();
        self.text.push(ch);
    }

    fn push_str(&mut self, s: &str) {
        self.flush_bytes();
        self.text.push_str(s);
    }

    fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.flush_bytes();
        self.encoding = encoding;
    }

    fn flush_bytes(&mut self) {
        if !self.bytes.is_empty() {
            let (decoded, _) = self.encoding.decode_without_bom_handling(&self.bytes);
            self.text.push_str(&decoded);
            self.bytes.clear();
        }
    }

    fn finish(mut self) -> String {
        self.flush_bytes();
        self.text.trim().to_string()
    }
}

// @returns: Encoding for an `\ansicpg` code page, None when unknown
fn encoding_for_codepage(codepage: i32) -> Option<&'static Encoding> {
    match codepage {
        1252 => Some(WINDOWS_1252),
        874 => Some(encoding_rs::WINDOWS_874),
        932 => Some(encoding_rs::SHIFT_JIS),
        936 => Some(encoding_rs::GBK),
        949 => Some(encoding_rs::EUC_KR),
        950 => Some(encoding_rs::BIG5),
        1250..=1258 => Encoding::for_label(format!("windows-{}", codepage).as_bytes()),
        10000 => Some(encoding_rs::MACINTOSH),
        65001 => Some(encoding_rs::UTF_8),
        _ => None,
    }
}

/// Convert RTF source to plain text
///
/// Paragraph and line breaks become newlines, `\tab` a tab, `\'hh` escapes
/// are decoded with the document code page (`\ansicpg`, Windows-1252 when
/// absent) and `\uN` as Unicode, skipping the `\ucN` fallback characters that
/// follow.
pub fn rtf_to_text(rtf: &str) -> String {
    let mut out = RtfOutput::new(rtf.len() / 2);
    let mut stack: Vec<(bool, usize)> = Vec::new();
    let mut ignorable = false;
    let mut fallback_len: usize = 1;
    let mut pending_skip: usize = 0;

    for caps in RTF_TOKEN.captures_iter(rtf) {
        if let Some(word) = caps.get(1) {
            let word = word.as_str();
            let param = caps.get(2).and_then(|p| p.as_str().parse::<i32>().ok());

            if RTF_SKIPPED_DESTINATIONS.contains(&word) {
                ignorable = true;
                continue;
            }
            match word {
                "uc" => {
                    fallback_len = param.unwrap_or(1).max(0) as usize;
                    continue;
                }
                "ansicpg" => {
                    match param.and_then(encoding_for_codepage) {
                        Some(encoding) => out.set_encoding(encoding),
                        None => debug!("Unknown RTF code page {:?}, keeping Windows-1252", param),
                    }
                    continue;
                }
                "mac" => {
                    out.set_encoding(encoding_rs::MACINTOSH);
                    continue;
                }
                _ => {}
            }
            if ignorable {
                continue;
            }
            match word {
                "par" | "line" | "sect" | "page" => out.push('\n'),
                "tab" => out.push('\t'),
                "emdash" => out.push('\u{2014}'),
                "endash" => out.push('\u{2013}'),
                "bullet" => out.push('\u{2022}'),
                "lquote" => out.push('\u{2018}'),
                "rquote" => out.push('\u{2019}'),
                "ldblquote" => out.push('\u{201C}'),
                "rdblquote" => out.push('\u{201D}'),
                "u" => {
                    if let Some(code) = param {
                        let code = if code < 0 { code + 65536 } else { code };
                        if let Some(ch) = char::from_u32(code as u32) {
                            out.push(ch);
                        }
                        pending_skip = fallback_len;
                    }
                }
                _ => {}
            }
        } else if let Some(hex) = caps.get(3) {
            if pending_skip > 0 {
                pending_skip -= 1;
            } else if !ignorable {
                if let Ok(byte) = u8::from_str_radix(hex.as_str(), 16) {
                    out.push_byte(byte);
                }
            }
        } else if let Some(symbol) = caps.get(4) {
            match symbol.as_str() {
                "*" => ignorable = true,
                "\\" | "{" | "}" if !ignorable => out.push_str(symbol.as_str()),
                "~" if !ignorable => out.push('\u{00A0}'),
                "_" if !ignorable => out.push('-'),
                "\n" | "\r" if !ignorable => out.push('\n'),
                _ => {}
            }
        } else if let Some(brace) = caps.get(5) {
            if brace.as_str() == "{" {
                stack.push((ignorable, fallback_len));
            } else if let Some((outer_ignorable, outer_fallback)) = stack.pop() {
                ignorable = outer_ignorable;
                fallback_len = outer_fallback;
            }
            pending_skip = 0;
        } else if caps.get(6).is_some() {
            // Raw line breaks in RTF source carry no meaning
        } else if let Some(text) = caps.get(7) {
            if ignorable {
                continue;
            }
            let mut chars = text.as_str().chars();
            while pending_skip > 0 && chars.next().is_some() {
                pending_skip -= 1;
            }
            out.push_str(chars.as_str());
        }
    }

    out.finish()
}
