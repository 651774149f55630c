//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::metadata::{AboutEntry, EnumMap, Route, SchemaMetadata};

/// Target languages with a bundled backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Java,
    CSharp,
    Python,
    TypeScript,
}

impl Language {
    /// Get the display name for this language
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::CSharp => "C#",
            Language::Python => "Python",
            Language::TypeScript => "TypeScript",
        }
    }

    /// Get the file extension for this language
    pub fn file_extension(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "cs",
            Language::Python => "py",
            Language::TypeScript => "ts",
        }
    }

    /// Directory name under the default destination root
    pub fn output_dir(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::CSharp => "CSharp",
            Language::Python => "python",
            Language::TypeScript => "typescript",
        }
    }

    /// Get all supported languages
    pub fn all() -> Vec<Language> {
        vec![
            Language::Java,
            Language::CSharp,
            Language::Python,
            Language::TypeScript,
        ]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Java => write!(f, "java"),
            Language::CSharp => write!(f, "csharp"),
            Language::Python => write!(f, "python"),
            Language::TypeScript => write!(f, "typescript"),
        }
    }
}

impl FromStr for Language {
    type Err = crate::generation::GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "java" => Ok(Language::Java),
            "csharp" | "c#" | "cs" => Ok(Language::CSharp),
            "python" | "py" => Ok(Language::Python),
            "typescript" | "ts" => Ok(Language::TypeScript),
            _ => Err(crate::generation::GenerationError::UnsupportedLanguage(
                s.to_string(),
            )),
        }
    }
}

/// Text handed to the file sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// A single block of text, written as one line
    Text(String),
    /// Lines written in order; `None` entries are skipped
    Lines(Vec<Option<String>>),
}

impl FileContent {
    /// Bytes as they land on disk: every line terminated by `\n`
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut push_line = |line: &str| {
            out.push_str(line);
            out.push('\n');
        };
        match self {
            FileContent::Text(text) => push_line(text),
            FileContent::Lines(lines) => lines.iter().flatten().for_each(|l| push_line(l)),
        }
        out
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        FileContent::Text(text)
    }
}

impl From<&str> for FileContent {
    fn from(text: &str) -> Self {
        FileContent::Text(text.to_string())
    }
}

impl From<Vec<Option<String>>> for FileContent {
    fn from(lines: Vec<Option<String>>) -> Self {
        FileContent::Lines(lines)
    }
}

impl From<Vec<String>> for FileContent {
    fn from(lines: Vec<String>) -> Self {
        FileContent::Lines(lines.into_iter().map(Some).collect())
    }
}

/// Generated artifact, its path relative to the destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: FileContent,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<FileContent>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Everything a backend may draw on, fetched once per run
#[derive(Debug, Clone, Default)]
pub struct MetadataSnapshot {
    pub schemas: Vec<SchemaMetadata>,
    pub enums: EnumMap,
    pub endpoint_groups: BTreeMap<String, Vec<Route>>,
    pub model_builders: JsonValue,
}

impl MetadataSnapshot {
    /// Names of the algorithms the server can build models for
    pub fn algorithms(&self) -> Vec<String> {
        match &self.model_builders {
            JsonValue::Object(builders) => builders.keys().cloned().collect(),
            JsonValue::Array(builders) => builders
                .iter()
                .filter_map(|b| b.get("algo").and_then(JsonValue::as_str))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Outcome of a generation run
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub language: Language,
    pub files_written: Vec<PathBuf>,
    pub server_status: Vec<AboutEntry>,
    /// Present when diagnostics were enabled
    pub translation_table: Option<String>,
    pub elapsed: Duration,
}
