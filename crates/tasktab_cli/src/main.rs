//! Interactive shell entry point for tasktab.
//!
//! # Responsibility
//! - Parse command-line flags and environment fallbacks.
//! - Wire logging, repository and service together for the shell.

use std::env;
use std::process;

use tasktab_core::{FlatFileTaskRepository, TaskService};

mod shell;

const DEFAULT_TASK_FILE: &str = "todos.txt";
const DEFAULT_LOG_DIR: &str = ".tasktab/logs";

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("run `tasktab --help` for usage");
            process::exit(2);
        }
    };

    if cli.help {
        print_help();
        return;
    }

    if cli.version {
        println!("tasktab {}", tasktab_core::core_version());
        return;
    }

    let config = Config::resolve(&cli);

    // An empty log dir turns file logging off entirely.
    if !config.log_dir.is_empty() {
        if let Err(message) = tasktab_core::init_logging(&config.log_level, &config.log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    let service = TaskService::new(FlatFileTaskRepository::new(&config.task_file));

    if let Err(err) = shell::run(&service, &config.task_file) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

/// CLI arguments parsed from the command line.
#[derive(Debug, Default)]
struct CliArgs {
    /// Show help.
    help: bool,
    /// Show version.
    version: bool,
    /// Path to the task file.
    file: Option<String>,
    /// Path to the log directory; empty disables file logging.
    log_dir: Option<String>,
    /// Log level for file logging.
    log_level: Option<String>,
}

/// Effective configuration after merging flags, environment and defaults.
///
/// Precedence: flags > environment > defaults.
#[derive(Debug)]
struct Config {
    task_file: String,
    log_dir: String,
    log_level: String,
}

impl Config {
    fn resolve(cli: &CliArgs) -> Self {
        let task_file = cli
            .file
            .clone()
            .or_else(|| env::var("TASKTAB_FILE").ok())
            .unwrap_or_else(|| DEFAULT_TASK_FILE.to_string());
        let log_dir = cli
            .log_dir
            .clone()
            .or_else(|| env::var("TASKTAB_LOG_DIR").ok())
            .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string());
        let log_level = cli
            .log_level
            .clone()
            .or_else(|| env::var("TASKTAB_LOG_LEVEL").ok())
            .unwrap_or_else(|| tasktab_core::default_log_level().to_string());

        Self {
            task_file,
            log_dir,
            log_level,
        }
    }
}

/// Parses CLI arguments from the raw argument list.
fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-f" | "--file" => cli.file = Some(take_value(&mut iter, arg)?),
            "--log-dir" => cli.log_dir = Some(take_value(&mut iter, arg)?),
            "--log-level" => cli.log_level = Some(take_value(&mut iter, arg)?),
            other => return Err(format!("unknown option: {other}")),
        }
    }

    Ok(cli)
}

fn take_value<'a>(
    iter: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<String, String> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("missing value for {flag}"))
}

fn print_help() {
    println!(
        r#"tasktab - personal task tracker with a flat-file store

USAGE:
    tasktab [OPTIONS]

Starts an interactive menu shell over the task file. Tasks are stored
one per line as tab-separated `status  owner  text` records.

OPTIONS:
    -h, --help            Show this help message
    -V, --version         Show version
    -f, --file <PATH>     Path to task file (default: todos.txt)
    --log-dir <PATH>      Log directory; empty disables file logging
                          (default: .tasktab/logs)
    --log-level <LEVEL>   Log level: trace|debug|info|warn|error

ENVIRONMENT:
    TASKTAB_FILE          Task file path (overridden by --file)
    TASKTAB_LOG_DIR       Log directory (overridden by --log-dir)
    TASKTAB_LOG_LEVEL     Log level (overridden by --log-level)
"#
    );
}

#[cfg(test)]
mod tests {
    use super::parse_args;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("tasktab")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_args_reads_flags_and_values() {
        let cli = parse_args(&args(&["-f", "work.txt", "--log-level", "debug"])).unwrap();

        assert_eq!(cli.file.as_deref(), Some("work.txt"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(!cli.help);
        assert!(!cli.version);
    }

    #[test]
    fn parse_args_accepts_help_and_version() {
        let cli = parse_args(&args(&["--help"])).unwrap();
        assert!(cli.help);

        let cli = parse_args(&args(&["-V"])).unwrap();
        assert!(cli.version);
    }

    #[test]
    fn parse_args_rejects_unknown_options() {
        let error = parse_args(&args(&["--bogus"])).unwrap_err();
        assert!(error.contains("unknown option"));
    }

    #[test]
    fn parse_args_rejects_missing_values() {
        let error = parse_args(&args(&["--file"])).unwrap_err();
        assert!(error.contains("missing value for --file"));
    }
}
