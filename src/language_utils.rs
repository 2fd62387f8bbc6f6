use anyhow::{Result, anyhow};
use isolang::Language;
use serde::{Deserialize, Serialize};

/// Language utilities for choosing the speech language
///
/// This module maps the user's language choice to the tag handed to the
/// speech engine, detects the dominant language of a text, and validates
/// ISO 639-1 (2-letter) and ISO 639-3 (3-letter) language codes.
/// Language selected for reading
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageChoice {
    /// Detect the language from the text being read
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "es")]
    Spanish,
}

impl LanguageChoice {
    // @returns: Voice tag for a fixed choice, None for Auto
    pub fn fixed_tag(&self) -> Option<&'static str> {
        match self {
            Self::Auto => None,
            Self::Italian => Some("it-IT"),
            Self::English => Some("en-US"),
            Self::French => Some("fr-FR"),
            Self::Spanish => Some("es-ES"),
        }
    }

    /// Resolve the tag to speak `text` with
    ///
    /// Fixed choices map to their regional tag. `Auto` detects the dominant
    /// language and returns its ISO 639-1 code, or `None` when nothing could be
    /// detected, in which case the engine's default voice is used.
    pub fn resolve_tag(&self, text: &str) -> Option<String> {
        match self.fixed_tag() {
            Some(tag) => Some(tag.to_string()),
            None => detect_language(text).map(|detected| detected.code),
        }
    }
}

impl std::fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Italian => "it",
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for LanguageChoice {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(Self::Auto),
            "it" | "it-it" | "italian" => Ok(Self::Italian),
            "en" | "en-us" | "english" => Ok(Self::English),
            "fr" | "fr-fr" | "french" => Ok(Self::French),
            "es" | "es-es" | "spanish" => Ok(Self::Spanish),
            _ => Err(anyhow!("Invalid language choice: {}", s)),
        }
    }
}

/// A language detected in a text
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLanguage {
    /// ISO 639-1 code when one exists, ISO 639-3 otherwise
    pub code: String,
    /// English name of the language
    pub name: String,
    /// Detector confidence in `[0, 1]`
    pub confidence: f64,
}

/// Detect the dominant language of a text
pub fn detect_language(text: &str) -> Option<DetectedLanguage> {
    let info = whatlang::detect(text)?;
    let part3 = info.lang().code();
    let code = normalize_to_part1_or_part3(part3).ok()?;
    let name = get_language_name(&code).ok()?;

    Some(DetectedLanguage {
        code,
        name,
        confidence: info.confidence(),
    })
}

/// Validate if a language code is a valid ISO 639-1 or ISO 639-3 code
pub fn validate_language_code(code: &str) -> Result<()> {
    lookup(code).map(|_| ())
}

// @returns: isolang Language for a 2- or 3-letter code
fn lookup(code: &str) -> Result<Language> {
    let normalized_code = code.trim().to_lowercase();

    let language = match normalized_code.len() {
        2 => Language::from_639_1(&normalized_code),
        3 => Language::from_639_3(&normalized_code),
        _ => None,
    };

    language.ok_or_else(|| anyhow!("Invalid language code: {}", code))
}

/// Normalize a language code to ISO 639-1 (2-letter) format if possible
/// Falls back to ISO 639-3 if no ISO 639-1 code exists
pub fn normalize_to_part1_or_part3(code: &str) -> Result<String> {
    let lang = lookup(code)?;

    Ok(lang
        .to_639_1()
        .map(str::to_string)
        .unwrap_or_else(|| lang.to_639_3().to_string()))
}

/// Check if two language codes match (represent the same language)
pub fn language_codes_match(code1: &str, code2: &str) -> bool {
    match (lookup(code1), lookup(code2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Get the language name from a code
pub fn get_language_name(code: &str) -> Result<String> {
    Ok(lookup(code)?.to_name().to_string())
}
