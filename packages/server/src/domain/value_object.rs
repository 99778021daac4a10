//! Value objects.

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Opaque handle of one live WebSocket connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(Uuid);

impl ConnectionId {
    /// Generate a fresh random connection id
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stable user identifier returned by identity verification.
///
/// Used as the key of both the connection registry and the rate limiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyIdentity);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bearer credential presented by a client at connect time
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::EmptyCredential);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters of the credential, safe to put in logs
    pub fn redacted(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{}…", prefix)
    }
}

// Keep credentials out of `{:?}` output.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&self.redacted()).finish()
    }
}

/// Languages an analysis backend exists for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Dart,
    Go,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Dart,
        Language::Go,
        Language::Cpp,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Dart => "dart",
            Language::Go => "go",
            Language::Cpp => "cpp",
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = ValueObjectError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "typescript" => Ok(Language::TypeScript),
            "javascript" => Ok(Language::JavaScript),
            "python" => Ok(Language::Python),
            "dart" => Ok(Language::Dart),
            "go" | "golang" => Ok(Language::Go),
            "cpp" | "c++" => Ok(Language::Cpp),
            other => Err(ValueObjectError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unix timestamp in milliseconds (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_rejects_blank() {
        // テスト項目: 空白のみの Identity は作成できない
        // given (前提条件):
        let value = "   ".to_string();

        // when (操作):
        let result = Identity::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyIdentity));
    }

    #[test]
    fn test_credential_rejects_empty() {
        // テスト項目: 空の Credential は作成できない
        // given (前提条件):
        let value = String::new();

        // when (操作):
        let result = Credential::new(value);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::EmptyCredential));
    }

    #[test]
    fn test_credential_debug_does_not_leak_token() {
        // テスト項目: Debug 出力にトークン全体が含まれない
        // given (前提条件):
        let credential = Credential::new("supersecrettoken".to_string()).unwrap();

        // when (操作):
        let debug = format!("{:?}", credential);

        // then (期待する結果):
        assert!(debug.contains("supe"));
        assert!(!debug.contains("supersecrettoken"));
    }

    #[test]
    fn test_language_aliases() {
        // テスト項目: エイリアスが正規の言語に解決される
        // given (前提条件):
        let inputs = [("golang", Language::Go), ("c++", Language::Cpp)];

        for (input, expected) in inputs {
            // when (操作):
            let language = Language::try_from(input).unwrap();

            // then (期待する結果):
            assert_eq!(language, expected);
        }
    }

    #[test]
    fn test_language_round_trips_canonical_names() {
        // テスト項目: 正規名から変換した言語は同じ正規名を返す
        for language in Language::ALL {
            assert_eq!(Language::try_from(language.as_str()), Ok(language));
        }
    }

    #[test]
    fn test_language_unsupported() {
        // テスト項目: 未対応の言語はエラーになる（大文字小文字は区別する）
        assert_eq!(
            Language::try_from("cobol"),
            Err(ValueObjectError::UnsupportedLanguage("cobol".to_string()))
        );
        assert!(Language::try_from("Python").is_err());
    }
}
