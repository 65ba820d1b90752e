use std::io::Write as _;
use std::path;

use siteconf::BuildMode;
use siteconf::Environment;

use crate::error::Result;

/// Build-time site metadata and theme configuration
#[derive(Debug, clap::Parser)]
#[command(about, version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
}

#[derive(Debug, clap::Subcommand)]
pub(crate) enum Command {
    Site(crate::site::SiteArgs),
    Theme(crate::theme::ThemeArgs),
    PurgeFiles(crate::purge::PurgeFilesArgs),
}

impl Command {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Site(cmd) => cmd.run(),
            Self::Theme(cmd) => cmd.run(),
            Self::PurgeFiles(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct EnvArgs {
    /// Secrets file to read variables from; variables already set take precedence
    #[arg(
        long,
        value_name = "FILE",
        default_value = siteconf_config::DEFAULT_DOTENV,
        conflicts_with = "no_env_file"
    )]
    pub(crate) env_file: path::PathBuf,

    /// Only use the process environment
    #[arg(long)]
    pub(crate) no_env_file: bool,
}

impl EnvArgs {
    pub(crate) fn load_env(&self) -> Environment {
        let dotenv = (!self.no_env_file).then_some(self.env_file.as_path());
        let env = Environment::load(dotenv);
        log::trace!("Loaded {} environment variable(s)", env.len());
        env
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ModeArgs {
    /// Build mode; only `production` enables purging [default: $NODE_ENV]
    #[arg(long, value_name = "NAME")]
    pub(crate) mode: Option<String>,
}

impl ModeArgs {
    pub(crate) fn build_mode(&self, env: &Environment) -> BuildMode {
        let mode = match self.mode.as_deref() {
            Some(name) => BuildMode::from_name(Some(name)),
            None => BuildMode::from_env(env),
        };
        log::debug!("Using {mode} build mode");
        mode
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, clap::ValueEnum)]
pub(crate) enum Format {
    #[default]
    Json,
    Yaml,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct OutputArgs {
    /// Serialization format
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: Format,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub(crate) output: Option<path::PathBuf>,
}

impl OutputArgs {
    pub(crate) fn emit<T: serde::Serialize>(&self, value: &T) -> Result<()> {
        let rendered = render(value, self.format)?;
        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, rendered).map_err(|e| {
                    anyhow::format_err!("Failed to write `{}`: {}", path.display(), e)
                })?;
                log::info!("Wrote {}", path.display());
            }
            None => {
                print!("{rendered}");
            }
        }
        Ok(())
    }
}

pub(crate) fn render<T: serde::Serialize>(value: &T, format: Format) -> Result<String> {
    let rendered = match format {
        Format::Json => {
            let mut json = serde_json::to_string_pretty(value)?;
            json.push('\n');
            json
        }
        Format::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}

pub(crate) fn init_logging(
    level: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,
    colored: bool,
) {
    let level = level.log_level_filter();
    if level == log::LevelFilter::Off {
        return;
    }

    let palette = if colored {
        Palette::colored()
    } else {
        Palette::plain()
    };

    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level);

    if level == log::LevelFilter::Trace {
        builder.format_timestamp_secs();
    } else {
        builder.format(move |f, record| {
            let style = palette.for_level(record.level());
            let level = format!("[{}]", record.level()).to_lowercase();
            writeln!(f, "{style}{level:8}{style:#} {}", record.args())
        });
    }

    builder.init();
}

#[derive(Copy, Clone, Default, Debug)]
struct Palette {
    error: anstyle::Style,
    warn: anstyle::Style,
    info: anstyle::Style,
    debug: anstyle::Style,
    trace: anstyle::Style,
}

impl Palette {
    fn colored() -> Self {
        Self {
            error: anstyle::AnsiColor::Red.on_default() | anstyle::Effects::BOLD,
            warn: anstyle::AnsiColor::Yellow.on_default(),
            info: anstyle::AnsiColor::Green.on_default(),
            debug: anstyle::AnsiColor::Blue.on_default(),
            trace: anstyle::AnsiColor::Cyan.on_default(),
        }
    }

    fn plain() -> Self {
        Self::default()
    }

    fn for_level(&self, level: log::Level) -> anstyle::Style {
        match level {
            log::Level::Error => self.error,
            log::Level::Warn => self.warn,
            log::Level::Info => self.info,
            log::Level::Debug => self.debug,
            log::Level::Trace => self.trace,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory as _;
        Cli::command().debug_assert();
    }

    #[test]
    fn render_json_ends_with_newline() {
        let rendered = render(&vec!["a"], Format::Json).unwrap();
        assert_eq!(rendered, "[\n  \"a\"\n]\n");
    }

    #[test]
    fn render_yaml() {
        let rendered = render(&vec!["a"], Format::Yaml).unwrap();
        assert_eq!(rendered, "- a\n");
    }

    #[test]
    fn mode_flag_wins_over_env() {
        let env: Environment = [("NODE_ENV", "production")].into_iter().collect();
        let args = ModeArgs {
            mode: Some("development".to_owned()),
        };
        assert_eq!(args.build_mode(&env), BuildMode::Development);
        let args = ModeArgs { mode: None };
        assert_eq!(args.build_mode(&env), BuildMode::Production);
    }
}
