//! CLI entry point for lsx

use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use lsx::{ConsoleRenderer, Lister, ListingConfig, OutputConfig, PROGRAM_NAME};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostic log filter.
const LOG_ENV: &str = "LSX_LOG";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

// -h means human-readable here, so clap's built-in help/version flags are off
#[derive(Parser, Debug)]
#[command(name = "lsx")]
#[command(about = "List directory contents")]
#[command(version, disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Directory to list
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// List subdirectories recursively
    #[arg(short = 'R')]
    recursive: bool,

    /// Include hidden files
    #[arg(short = 'a')]
    all: bool,

    /// Human readable sizes (e.g., 1K 234M 2G)
    #[arg(short = 'h')]
    human_readable: bool,

    /// Sort by file size, largest first
    #[arg(short = 'S')]
    sort_by_size: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    sort_by_time: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Display this help and exit
    #[arg(long = "help", action = ArgAction::Help)]
    help: Option<bool>,

    /// Output version information and exit
    #[arg(long = "version", action = ArgAction::Version)]
    version: Option<bool>,
}

impl Args {
    fn listing_config(&self) -> ListingConfig {
        ListingConfig {
            long_listing: self.long,
            recursive: self.recursive,
            show_hidden: self.all,
            human_readable: self.human_readable,
            sort_by_time: self.sort_by_time,
            sort_by_size: self.sort_by_size,
            path: self.path.clone(),
        }
    }
}

/// Informational flags that end the program before normal parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EarlyExit {
    Help,
    Version,
}

/// Scan argv for `--help`/`--version`; the first one found wins.
fn find_early_exit(argv: &[OsString]) -> Option<EarlyExit> {
    argv.iter().skip(1).find_map(|arg| {
        if arg == "--help" {
            Some(EarlyExit::Help)
        } else if arg == "--version" {
            Some(EarlyExit::Version)
        } else {
            None
        }
    })
}

fn usage() -> String {
    format!("Usage: {} [-lRahSt] [path]", PROGRAM_NAME)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let argv: Vec<OsString> = std::env::args_os().collect();

    match find_early_exit(&argv) {
        Some(EarlyExit::Help) => {
            let mut cmd = Args::command();
            if let Err(e) = cmd.print_help() {
                eprintln!("{}: error writing output: {}", PROGRAM_NAME, e);
                process::exit(1);
            }
            process::exit(0);
        }
        Some(EarlyExit::Version) => {
            println!("{} version {}", PROGRAM_NAME, env!("CARGO_PKG_VERSION"));
            process::exit(0);
        }
        None => {}
    }

    let args = Args::try_parse_from(&argv).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "argument parsing failed");
        eprintln!("{}", usage());
        process::exit(1);
    });

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let mut renderer = ConsoleRenderer::stdout(output_config);
    let lister = Lister::new(args.listing_config());

    let result = lister.list(&mut renderer);
    let flushed = renderer.flush();

    match result {
        Ok(stats) => tracing::debug!(?stats, "listing complete"),
        // Reader closed early: stop quietly, like ls
        Err(e) if e.is_broken_pipe() => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", PROGRAM_NAME, e);
            process::exit(1);
        }
    }

    match flushed {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => process::exit(0),
        Err(e) => {
            eprintln!("{}: error writing output: {}", PROGRAM_NAME, e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<OsString> {
        std::iter::once("lsx")
            .chain(args.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_early_exit_help_anywhere() {
        assert_eq!(
            find_early_exit(&argv(&["-x", "dir", "--help"])),
            Some(EarlyExit::Help)
        );
    }

    #[test]
    fn test_early_exit_first_wins() {
        assert_eq!(
            find_early_exit(&argv(&["--version", "--help"])),
            Some(EarlyExit::Version)
        );
        assert_eq!(
            find_early_exit(&argv(&["--help", "--version"])),
            Some(EarlyExit::Help)
        );
    }

    #[test]
    fn test_early_exit_ignores_program_name() {
        let args = vec![OsString::from("--help")];
        assert_eq!(find_early_exit(&args), None);
    }

    #[test]
    fn test_combined_short_flags() {
        let args = Args::try_parse_from(argv(&["-lRahSt", "some/dir"])).unwrap();
        let config = args.listing_config();
        assert!(config.long_listing);
        assert!(config.recursive);
        assert!(config.show_hidden);
        assert!(config.human_readable);
        assert!(config.sort_by_size);
        assert!(config.sort_by_time);
        assert_eq!(config.path, PathBuf::from("some/dir"));
    }

    #[test]
    fn test_default_path() {
        let args = Args::try_parse_from(argv(&["-l"])).unwrap();
        assert_eq!(args.listing_config().path, PathBuf::from("."));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(argv(&["-z"])).is_err());
        assert!(Args::try_parse_from(argv(&["--bogus"])).is_err());
    }

    #[test]
    fn test_color_mode_parsing() {
        let args = Args::try_parse_from(argv(&["--color", "never"])).unwrap();
        assert!(!should_use_color(args.color));
        let args = Args::try_parse_from(argv(&["--color=always"])).unwrap();
        assert!(should_use_color(args.color));
        assert!(Args::try_parse_from(argv(&["--color", "sometimes"])).is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }
}
