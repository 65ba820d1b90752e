use std::fmt;

/// Whether unused utility classes are stripped, and which sources are scanned to decide.
///
/// Serializes the way the CSS tool expects: `false` when disabled, otherwise the glob list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Purge {
    #[default]
    Disabled,
    Enabled(Vec<String>),
}

impl Purge {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// Globs to scan; empty when disabled.
    pub fn globs(&self) -> &[String] {
        match self {
            Self::Disabled => &[],
            Self::Enabled(globs) => globs,
        }
    }
}

impl serde::Serialize for Purge {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Enabled(globs) => serializer.collect_seq(globs),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Purge {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Globs(Vec<String>),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(false) => Ok(Self::Disabled),
            Raw::Flag(true) => Err(serde::de::Error::custom(
                "`purge: true` needs a list of content globs",
            )),
            Raw::Globs(globs) => Ok(Self::Enabled(globs)),
        }
    }
}

impl fmt::Display for Purge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::Enabled(globs) => write!(f, "{}", globs.join(", ")),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn disabled_serializes_false() {
        assert_eq!(serde_json::to_string(&Purge::Disabled).unwrap(), "false");
    }

    #[test]
    fn enabled_serializes_list() {
        let purge = Purge::Enabled(vec!["./src/*.js".to_owned()]);
        assert_eq!(serde_json::to_string(&purge).unwrap(), r#"["./src/*.js"]"#);
    }

    #[test]
    fn deserialize_false() {
        let purge: Purge = serde_json::from_str("false").unwrap();
        assert_eq!(purge, Purge::Disabled);
        assert!(purge.globs().is_empty());
    }

    #[test]
    fn deserialize_true_is_rejected() {
        assert!(serde_json::from_str::<Purge>("true").is_err());
    }

    #[test]
    fn deserialize_list() {
        let purge: Purge = serde_yaml::from_str("- ./a/*.njk\n- ./b/*.js\n").unwrap();
        assert!(purge.is_enabled());
        assert_eq!(purge.globs(), ["./a/*.njk", "./b/*.js"]);
    }
}
