use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use menumaker::config::ConfigWarning;
use menumaker::{Config, EchoMode, Verbosity};

use crate::demo;

/// MenuMaker demo - a nested record management menu on stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "menumaker-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the user config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Echo each selection line back to stdout
    #[arg(long, value_enum)]
    pub echo: Option<EchoArg>,

    /// Print the menu outline and exit
    #[arg(long)]
    pub print_tree: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoArg {
    Never,
    Always,
    Auto,
}

impl From<EchoArg> for EchoMode {
    fn from(arg: EchoArg) -> Self {
        match arg {
            EchoArg::Never => EchoMode::Never,
            EchoArg::Always => EchoMode::Always,
            EchoArg::Auto => EchoMode::Auto,
        }
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let (mut config, warnings) = load_config(self.config.as_deref())?;
        if let Some(echo) = self.echo {
            config.display.echo_input = echo.into();
        }

        setup_logging(self.verbose, config.output.verbosity);
        for warning in &warnings {
            report_warning(warning);
        }

        let (mut tree, root) = demo::build_demo_menu().context("failed to build demo menu")?;

        if self.print_tree {
            print!("{}", tree.outline(root)?);
            return Ok(());
        }

        let options = config.display_options(io::stdin().is_terminal());
        tracing::info!(echo = options.echo_input, "starting demo menu");
        tree.display_stdio_with_options(root, &options)
            .context("menu session failed")?;
        Ok(())
    }
}

fn load_config(path: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>)> {
    match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            Ok((config.with_env_overrides(), warnings))
        }
        None => Ok((Config::load_or_default(), Vec::new())),
    }
}

fn report_warning(warning: &ConfigWarning) {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => tracing::warn!(
            "unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key,
            location,
            suggestion
        ),
        None => tracing::warn!("unknown config key '{}' in {}", warning.key, location),
    }
}

fn level_for(verbose: u8, verbosity: Verbosity) -> tracing::Level {
    let from_flags = match verbose {
        0 => None,
        1 => Some(tracing::Level::INFO),
        2 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    };
    let from_config = match verbosity {
        Verbosity::Quiet => tracing::Level::ERROR,
        Verbosity::Normal => tracing::Level::WARN,
        Verbosity::Verbose => tracing::Level::INFO,
        Verbosity::Debug => tracing::Level::DEBUG,
    };

    // More verbose levels compare greater
    match from_flags {
        Some(level) if level > from_config => level,
        _ => from_config,
    }
}

fn setup_logging(verbose: u8, verbosity: Verbosity) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = level_for(verbose, verbosity);
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    // stdout carries the menu protocol
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
