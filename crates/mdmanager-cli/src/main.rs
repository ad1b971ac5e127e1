use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use mdmanager_config::Config;
use mdmanager_engine::MessageHandler;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

mod convert;
mod serve;

#[derive(Debug, Parser)]
#[command(
    name = "mdmanager",
    version,
    about = "Convert Markdown to HTML and answer viewer requests"
)]
struct Cli {
    /// Path to a config.toml (defaults to ~/.config/mdmanager/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a file, a directory of files, or stdin to HTML
    Convert {
        /// Markdown file or directory; reads stdin when absent or `-`
        input: Option<PathBuf>,

        /// Output file (or directory when converting a directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// Reject inputs larger than this many bytes (0 disables the limit)
        #[arg(long, value_name = "BYTES")]
        max_bytes: Option<usize>,
    },
    /// Answer line-delimited JSON requests on stdin
    Serve,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Convert {
            input,
            output,
            max_bytes,
        } => {
            if let Some(limit) = max_bytes {
                config.max_input_bytes = limit;
            }
            run_convert(&config, input.as_deref(), output.as_deref())
        }
        Command::Serve => {
            let mut handler =
                MessageHandler::new(config.converter()).with_settings(config.settings.clone());
            if io::stdin().is_terminal() {
                log::info!("Reading requests from the terminal, one JSON object per line");
            }
            serve::serve(&mut handler, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => {
            let Some(config) = Config::load_from_path(path)? else {
                bail!("Config file not found: {}", path.display());
            };
            Some(config)
        }
        None => Config::load()?,
    };

    match loaded {
        Some(config) => Ok(config),
        None => {
            log::debug!(
                "No config at {}, using defaults",
                Config::config_path().display()
            );
            Ok(Config::default())
        }
    }
}

fn run_convert(config: &Config, input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let converter = config.converter();

    match input {
        None => convert::convert_stream(&converter, io::stdin().lock(), io::stdout().lock()),
        Some(path) if path == Path::new("-") => {
            convert::convert_stream(&converter, io::stdin().lock(), io::stdout().lock())
        }
        Some(path) if path.is_dir() => {
            let out_dir = output.or(config.output_dir.as_deref());
            let report = convert::convert_directory(&converter, path, out_dir)?;
            log::info!(
                "Converted {} files, skipped {}",
                report.written.len(),
                report.skipped.len()
            );
            if !report.skipped.is_empty() {
                bail!("{} files were too large to convert", report.skipped.len());
            }
            Ok(())
        }
        Some(path) => convert::convert_file(&converter, path, output, io::stdout().lock()),
    }
}
