use std::fmt;

use crate::Environment;

/// Environment variable naming the build mode.
pub const MODE_VAR: &str = "NODE_ENV";

const PRODUCTION: &str = "production";

/// Which branch of the configuration a build takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildMode {
    Production,
    #[default]
    Development,
}

impl BuildMode {
    /// Only the exact name `production` selects [`BuildMode::Production`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(PRODUCTION) => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn from_env(env: &Environment) -> Self {
        Self::from_name(env.get(MODE_VAR))
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str(PRODUCTION),
            Self::Development => f.write_str("development"),
        }
    }
}
