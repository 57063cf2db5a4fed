use serde::Deserialize;

/// Default identifier alphabet: letters, digits, and URL-safe punctuation.
pub const DEFAULT_CHARACTERS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789$-_.+!*'(),";

/// Default identifier length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 5;

/// A configured tenant of the shortening service.
///
/// Applications are loaded once at startup and never mutated afterwards.
/// Each one owns a key namespace derived from its `id`, an API key
/// authorizing shorten requests, and the alphabet/length pair used to
/// generate identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    /// Unique tenant identifier, used (lower-cased) as the key-namespace prefix.
    pub id: String,
    /// API key authorizing shorten requests for this tenant.
    pub key: String,
    /// Base URL prepended to generated identifiers in responses.
    pub url: String,
    /// Optional human-readable label, used in startup logging only.
    #[serde(default)]
    pub name: Option<String>,
    /// Alphabet identifiers are drawn from.
    #[serde(default = "default_characters")]
    pub characters: String,
    /// Identifier length in characters.
    #[serde(default = "default_max_length", rename = "maxLength")]
    pub max_length: usize,
}

fn default_characters() -> String {
    DEFAULT_CHARACTERS.to_string()
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl Application {
    /// Number of distinct identifiers this tenant's alphabet/length pair
    /// can produce.
    ///
    /// The operator must keep this far above the expected record count;
    /// allocation degrades as the keyspace fills up.
    pub fn keyspace_size(&self) -> f64 {
        (self.characters.chars().count() as f64).powi(self.max_length as i32)
    }

    /// Label used for this application in logs.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}
