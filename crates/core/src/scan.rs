use crate::Result;
use crate::Status;

/// Files under a root that the purge globs select.
///
/// Globs follow gitignore rules relative to `root`: a pattern containing `/` is anchored to the
/// root and `*` does not cross directories. A leading `./` is accepted.
#[derive(Debug, Clone)]
pub struct ContentScan {
    root: std::path::PathBuf,
    globs: ignore::overrides::Override,
}

impl ContentScan {
    pub fn new<'g>(
        root: &std::path::Path,
        globs: impl IntoIterator<Item = &'g str>,
    ) -> Result<Self> {
        let mut builder = ignore::overrides::OverrideBuilder::new(root);
        for glob in globs.into_iter() {
            let glob = glob.strip_prefix("./").unwrap_or(glob);
            builder
                .add(glob)
                .map_err(|e| Status::new("Invalid purge glob").with_source(e))?;
        }
        let globs = builder
            .build()
            .map_err(|e| Status::new("Invalid purge glob").with_source(e))?;

        let scan = Self {
            root: root.to_owned(),
            globs,
        };
        Ok(scan)
    }

    /// Scan for the globs of `purge`; a disabled purge selects nothing.
    pub fn from_purge(root: &std::path::Path, purge: &siteconf_config::Purge) -> Result<Self> {
        Self::new(root, purge.globs().iter().map(String::as_str))
    }

    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    pub fn includes_file(&self, file: &std::path::Path) -> bool {
        if self.globs.is_empty() {
            return false;
        }
        match self.globs.matched(file, false) {
            ignore::Match::Whitelist(glob) => {
                log::trace!("{:?}: selected by {:?}", file, glob);
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = std::path::PathBuf> + '_ {
        walkdir::WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(move |p| self.includes_file(p))
    }
}
