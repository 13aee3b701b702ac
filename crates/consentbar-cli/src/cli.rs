// SPDX-License-Identifier: Apache-2.0
use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use consentbar_i18n::direction_for_culture;
use consentbar_theme::StyleSheet;
use tracing::info;

use crate::config::ThemeSource;
use crate::error::Result;
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "consentbar",
    about = "Resolve consentbar themes and render their style sheets",
    version
)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Theme to print; also the name a `--theme-file` is registered under.
    #[arg(long, default_value = "light")]
    pub name: String,

    #[command(flatten)]
    pub source: ThemeSource,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the fully resolved theme as JSON.
    Resolve(ThemeArgs),

    /// Print the style sheet generated for a theme.
    Css(ThemeArgs),

    /// Print the names of every available theme.
    #[command(name = "list-themes")]
    ListThemes(ThemeArgs),

    /// Print the layout direction (`ltr` or `rtl`) for a culture code.
    Direction { culture: String },
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_json)?;
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &mut out)
}

/// Run one command, writing its result to `out`.
pub fn execute(command: Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Resolve(args) => {
            let themes = args.source.load(&args.name)?;
            let theme = themes.require(&args.name)?;
            serde_json::to_writer_pretty(&mut *out, theme)?;
            writeln!(out)?;
            info!(theme = %args.name, "theme resolved");
        }
        Commands::Css(args) => {
            let themes = args.source.load(&args.name)?;
            let sheet = StyleSheet::from_theme(themes.require(&args.name)?);
            write!(out, "{sheet}")?;
        }
        Commands::ListThemes(args) => {
            for name in args.source.load(&args.name)?.names() {
                writeln!(out, "{name}")?;
            }
        }
        Commands::Direction { culture } => {
            writeln!(out, "{}", direction_for_culture(&culture).as_attr())?;
        }
    }
    Ok(())
}
