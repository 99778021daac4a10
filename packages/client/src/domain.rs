//! Domain logic for client-side operations.
//!
//! Pure functions and the interactive editor state, kept free of I/O so
//! they are easy to test.

use std::path::Path;

use lintgate_server::domain::Language;
use reqwest::Url;

use crate::error::ClientError;

/// Language used by the interactive editor when none is given
pub const DEFAULT_LANGUAGE: &str = "typescript";

/// Append the credential to the gateway URL as the `token` query parameter.
///
/// The token is form-encoded, so `&`, `#`, `+` and spaces survive the trip.
pub fn build_url(base: &str, token: &str) -> Result<String, ClientError> {
    let mut url = Url::parse(base).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut().append_pair("token", token);
    Ok(url.into())
}

/// Guess the request language from a file extension.
pub fn language_from_path(path: &Path) -> Option<&'static str> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let language = match extension.as_str() {
        "ts" | "tsx" | "mts" | "cts" => "typescript",
        "js" | "jsx" | "mjs" | "cjs" => "javascript",
        "py" => "python",
        "dart" => "dart",
        "go" => "go",
        "cpp" | "cc" | "cxx" | "hpp" | "hh" | "h" => "cpp",
        _ => return None,
    };
    Some(language)
}

/// What the interactive loop should do after one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Line was buffered; keep reading
    Continue,
    /// Send the buffered code
    Submit { language: String, code: String },
    LanguageChanged(String),
    /// `:lang` with a language the gateway does not serve
    UnknownLanguage(String),
    Help,
    Quit,
}

/// Interactive editor state: the current language and the code typed so far.
///
/// Code lines are buffered until an empty line submits them. Lines starting
/// with `:` are commands and only recognized while the buffer is empty, so
/// code such as a Python slice on its own line is never mistaken for one.
#[derive(Debug, Clone)]
pub struct ReplState {
    language: String,
    buffer: Vec<String>,
}

impl ReplState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            buffer: Vec::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_buffering(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub fn handle_line(&mut self, line: &str) -> ReplAction {
        let line = line.trim_end_matches(['\r', '\n']);

        if self.buffer.is_empty() {
            let command = line.trim();
            if command == ":quit" || command == ":q" {
                return ReplAction::Quit;
            }
            if command == ":help" {
                return ReplAction::Help;
            }
            if let Some(name) = command.strip_prefix(":lang") {
                let name = name.trim();
                if Language::try_from(name).is_err() {
                    return ReplAction::UnknownLanguage(name.to_string());
                }
                self.language = name.to_string();
                return ReplAction::LanguageChanged(self.language.clone());
            }
            if command.is_empty() {
                return ReplAction::Continue;
            }
        } else if line.trim().is_empty() {
            let code = self.buffer.join("\n");
            self.buffer.clear();
            return ReplAction::Submit {
                language: self.language.clone(),
                code,
            };
        }

        self.buffer.push(line.to_string());
        ReplAction::Continue
    }
}
