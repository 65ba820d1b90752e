use std::path;

use siteconf_config::BaseTheme;

use crate::args;
use crate::error::Result;

/// Print the theme configuration for the CSS tool
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ThemeArgs {
    /// Base design tokens (JSON or YAML) to resolve computed entries against
    #[arg(long, value_name = "FILE", conflicts_with = "raw")]
    pub(crate) base: Option<path::PathBuf>,

    /// Print the configuration without resolving computed entries or plugins
    #[arg(long)]
    pub(crate) raw: bool,

    #[command(flatten)]
    pub(crate) mode: args::ModeArgs,

    #[command(flatten, next_help_heading = "Environment")]
    pub(crate) env: args::EnvArgs,

    #[command(flatten, next_help_heading = "Output")]
    pub(crate) output: args::OutputArgs,
}

impl ThemeArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let env = self.env.load_env();
        let theme = siteconf::theme_config(self.mode.build_mode(&env));
        if self.raw {
            return self.output.emit(&theme);
        }

        let base = match &self.base {
            Some(path) => {
                log::debug!("Resolving against `{}`", path.display());
                BaseTheme::from_file(path)?
            }
            None => BaseTheme::default(),
        };
        self.output.emit(&theme.resolve(&base))
    }
}
