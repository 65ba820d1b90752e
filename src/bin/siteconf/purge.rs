use std::path;

use siteconf_core::ContentScan;

use crate::args;
use crate::error::Result;

/// List the source files a production purge would scan
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct PurgeFilesArgs {
    /// Project root the purge globs are relative to
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub(crate) root: path::PathBuf,

    #[command(flatten)]
    pub(crate) mode: args::ModeArgs,

    #[command(flatten, next_help_heading = "Environment")]
    pub(crate) env: args::EnvArgs,
}

impl PurgeFilesArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let env = self.env.load_env();
        let mode = self.mode.build_mode(&env);
        let theme = siteconf::theme_config(mode);
        if !theme.purge.is_enabled() {
            log::info!("Purge is disabled for {mode} builds");
            return Ok(());
        }

        let scan = ContentScan::from_purge(&self.root, &theme.purge)?;
        let mut count = 0;
        for path in scan.iter() {
            let rel = path.strip_prefix(scan.root()).unwrap_or(&path);
            println!("{}", rel.display());
            count += 1;
        }
        log::info!("{count} file(s) selected by {}", theme.purge);
        Ok(())
    }
}
