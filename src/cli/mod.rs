#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::{CommandFactory as _, Parser, Subcommand};

use crate::config;
use crate::tui;

#[derive(Debug, Parser)]
#[command(
    name = "tasktui",
    version,
    about = "To-do list with list and Gantt chart views"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Config(ConfigArgs),
    Completion(CompletionArgs),
    Version,
}

#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub cmd: ConfigCmd,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Print the resolved configuration
    List,
    /// Print one configuration value
    Get(ConfigGetArgs),
    /// Set one configuration value
    Set(ConfigSetArgs),
}

#[derive(Debug, Parser)]
pub struct ConfigGetArgs {
    pub key: String,
}

#[derive(Debug, Parser)]
pub struct ConfigSetArgs {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Parser)]
pub struct CompletionArgs {
    pub shell: clap_complete::Shell,
}

#[must_use]
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.cmd {
        None => cmd_default(),
        Some(Commands::Completion(args)) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "tasktui", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Config(args)) => match args.cmd {
            ConfigCmd::List => {
                print!("{}", config::list_resolved_toml()?);
                Ok(ExitCode::SUCCESS)
            }
            ConfigCmd::Set(set) => {
                config::set_value_string(&set.key, &set.value)?;
                println!("Set {} = {}", set.key, set.value);
                Ok(ExitCode::SUCCESS)
            }
            ConfigCmd::Get(get) => {
                let val = config::get_value_string(&get.key)?;
                match val {
                    Some(v) => {
                        println!("{v}");
                        Ok(ExitCode::SUCCESS)
                    }
                    None => anyhow::bail!(
                        "configuration key '{}' not found - use 'tasktui config list' to see available keys",
                        get.key
                    ),
                }
            }
        },
        Some(Commands::Version) => Ok(cmd_version()),
    }
}

fn cmd_default() -> anyhow::Result<ExitCode> {
    let (cfg, _paths) = config::load()?;

    if !tui::is_tty() {
        eprintln!("tasktui needs an interactive terminal (try running it directly in a shell)");
        return Ok(ExitCode::from(1));
    }

    // Keep the handle alive for the lifetime of the UI; a failed logger
    // setup is not fatal, the app just runs without diagnostics.
    let logger = crate::logging::init(&cfg.log);
    if let Err(err) = &logger {
        eprintln!("warning: logging disabled: {err:#}");
    }

    tui::app::run(cfg)?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_version() -> ExitCode {
    println!("tasktui version {}", env!("CARGO_PKG_VERSION"));
    println!("  rust: {}", rustc_version_runtime::version());
    println!(
        "  os/arch: {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
    ExitCode::SUCCESS
}
