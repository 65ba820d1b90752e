use std::collections::BTreeMap;
use std::path;

use crate::Result;
use crate::Status;

/// Named design tokens, e.g. `colors` or `fontFamily`.
pub type TokenMap = BTreeMap<String, TokenValue>;

/// A single design token.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Value(String),
    /// e.g. a font stack
    List(Vec<String>),
    /// e.g. a palette of shades
    Map(TokenMap),
}

impl TokenValue {
    pub fn as_map(&self) -> Option<&TokenMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<TokenMap> for TokenValue {
    fn from(value: TokenMap) -> Self {
        Self::Map(value)
    }
}

/// Build a [`TokenMap`] from `(name, value)` pairs.
pub fn token_map<K, V, I>(entries: I) -> TokenMap
where
    K: Into<String>,
    V: Into<TokenValue>,
    I: IntoIterator<Item = (K, V)>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Design tokens owned by the CSS tool, which the extension entries build on.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BaseTheme {
    tokens: TokenMap,
}

impl BaseTheme {
    pub fn new(tokens: TokenMap) -> Self {
        Self { tokens }
    }

    /// The nested tokens under `key`; empty when the key is missing or not a map.
    pub fn section(&self, key: &str) -> TokenMap {
        self.tokens
            .get(key)
            .and_then(TokenValue::as_map)
            .cloned()
            .unwrap_or_default()
    }

    /// Load base tokens from a `.json`, `.yml` or `.yaml` file.
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read base theme")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        let theme = if is_json {
            serde_json::from_str(&content).map_err(|e| {
                Status::new("Failed to parse base theme")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        } else {
            serde_yaml::from_str(&content).map_err(|e| {
                Status::new("Failed to parse base theme")
                    .with_source(e)
                    .context_with(|c| c.insert("Path", path.display().to_string()))
            })?
        };
        Ok(theme)
    }
}

/// A theme entry computed from the base theme.
///
/// Resolving takes the base section named by `inherit` (if any) and overlays `tokens` on it, so
/// the result is always a superset of that section.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct TokenExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherit: Option<String>,
    pub tokens: TokenMap,
}

impl TokenExtension {
    pub fn inherit(key: impl Into<String>, tokens: TokenMap) -> Self {
        Self {
            inherit: Some(key.into()),
            tokens,
        }
    }

    pub fn standalone(tokens: TokenMap) -> Self {
        Self {
            inherit: None,
            tokens,
        }
    }

    pub fn apply(&self, base: &BaseTheme) -> TokenMap {
        let mut resolved = self
            .inherit
            .as_deref()
            .map(|key| base.section(key))
            .unwrap_or_default();
        resolved.extend(self.tokens.clone());
        resolved
    }
}
