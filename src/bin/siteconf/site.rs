use crate::args;
use crate::error::Result;

/// Print the global site data for templates
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct SiteArgs {
    #[command(flatten, next_help_heading = "Environment")]
    pub(crate) env: args::EnvArgs,

    #[command(flatten, next_help_heading = "Output")]
    pub(crate) output: args::OutputArgs,
}

impl SiteArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let env = self.env.load_env();
        let site = siteconf::site_config(&env);
        if site.algolia_search.enabled && !site.algolia_search.has_credentials() {
            log::warn!("Search is enabled but its credentials are incomplete");
        }
        self.output.emit(&site)
    }
}
