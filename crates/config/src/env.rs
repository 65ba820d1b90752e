use std::collections::BTreeMap;
use std::path;

use crate::Result;
use crate::Status;

pub const DEFAULT_DOTENV: &str = ".env";

/// Snapshot of the variables a build runs with.
///
/// Loaded once at startup and handed to the providers by reference; the process environment is
/// never read again after the snapshot is taken.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the process environment, skipping entries that are not valid unicode.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Snapshot the process environment and layer a secrets file underneath it.
    pub fn load(dotenv: Option<&path::Path>) -> Self {
        let mut env = Self::from_process();
        if let Some(dotenv) = dotenv {
            env.load_dotenv(dotenv);
        }
        env
    }

    /// Merge a dotenv file into the snapshot.
    ///
    /// Variables that are already set are kept. A missing or unreadable file is not an error, and
    /// a malformed line only loses that line; the affected variables simply stay unset.
    pub fn load_dotenv<P: AsRef<path::Path>>(&mut self, path: P) {
        self.load_dotenv_internal(path.as_ref());
    }

    fn load_dotenv_internal(&mut self, path: &path::Path) {
        if !path.exists() {
            log::debug!("No secrets file at `{}`", path.display());
            return;
        }
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) => {
                let e = dotenv_status(e, path);
                log::warn!("Ignoring secrets file: {e}");
                return;
            }
        };

        let mut added = 0;
        for item in iter {
            match item {
                Ok((key, value)) => {
                    if !self.vars.contains_key(&key) {
                        self.vars.insert(key, value);
                        added += 1;
                    }
                }
                Err(e) => {
                    let e = dotenv_status(e, path);
                    log::warn!("Skipping entry in secrets file: {e}");
                }
            }
        }
        log::debug!("Loaded {added} variable(s) from `{}`", path.display());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }
}

/// Parse a dotenv file (`KEY=VALUE` lines, optional quoting, `#` comments).
///
/// Unquoted and double-quoted values expand `$VAR` and `${VAR}` from the process environment;
/// single-quoted values are taken verbatim. Any malformed line fails the whole file.
///
/// Parse errors never carry the offending line, only the character offset within it where
/// parsing stopped, so secrets stay out of logs.
pub fn read_dotenv<P: AsRef<path::Path>>(path: P) -> Result<Vec<(String, String)>> {
    read_dotenv_internal(path.as_ref())
}

fn read_dotenv_internal(path: &path::Path) -> Result<Vec<(String, String)>> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| dotenv_status(e, path))?;
    iter.map(|item| item.map_err(|e| dotenv_status(e, path)))
        .collect()
}

fn dotenv_status(err: dotenvy::Error, path: &path::Path) -> Status {
    let status = match err {
        dotenvy::Error::LineParse(_, offset) => Status::new("Failed to parse secrets file")
            .context_with(|c| c.insert("Offset", offset.to_string())),
        dotenvy::Error::Io(e) => Status::new("Failed to read secrets file").with_source(e),
        _ => Status::new("Failed to load secrets file"),
    };
    status.context_with(|c| c.insert("Path", path.display().to_string()))
}
