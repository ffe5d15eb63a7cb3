mod debug_report;

use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use chrono::Utc;
use safebite::{
    Dish, HistoryRecord, Profile, ProfileDocument, TermDictionary, analyze_verbose_with, evaluate_menu_with,
};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SAFEBITE_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging(config.verbose);

    if let Err(err) = run(&config) {
        eprintln!("{}", err.message);
        std::process::exit(err.code);
    }
}

struct CliConfig {
    input: Option<String>,
    profiles: Option<PathBuf>,
    dictionary: Option<PathBuf>,
    menu: Option<PathBuf>,
    json: bool,
    history: bool,
    color: bool,
    verbose: bool,
}

struct CliError {
    code: i32,
    message: String,
}

impl CliError {
    fn input(message: impl Into<String>) -> Self {
        CliError { code: 2, message: message.into() }
    }

    fn internal(message: impl Into<String>) -> Self {
        CliError { code: 1, message: message.into() }
    }
}

impl From<safebite::Error> for CliError {
    fn from(err: safebite::Error) -> Self {
        CliError::input(format!("error: {err}"))
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn run(config: &CliConfig) -> Result<(), CliError> {
    let dictionary = match &config.dictionary {
        Some(path) => TermDictionary::from_json(&read_file(path)?)?,
        None => TermDictionary::builtin().clone(),
    };
    let profiles = match &config.profiles {
        Some(path) => ProfileDocument::parse_many(&read_file(path)?)?,
        None => Vec::new(),
    };
    if profiles.is_empty() {
        tracing::warn!("no profiles given; every result will be safe");
    }

    if let Some(path) = &config.menu {
        return run_menu(config, path, &profiles, &dictionary);
    }

    let input = config.input.as_deref().unwrap_or_default();
    let report = analyze_verbose_with(input, &profiles, &dictionary)?;

    if config.history {
        let record = HistoryRecord::from_result(&report.result, Utc::now());
        print_json(&record)
    } else if config.json {
        print_json(&report.result)
    } else {
        debug_report::print_scan(input, &report, config.color);
        Ok(())
    }
}

fn run_menu(config: &CliConfig, path: &Path, profiles: &[Profile], dictionary: &TermDictionary) -> Result<(), CliError> {
    let dishes = Dish::from_json_list(&read_file(path)?)?;
    let results = evaluate_menu_with(&dishes, profiles, dictionary);

    if config.json {
        print_json(&results)
    } else {
        debug_report::print_menu(&results, config.color);
        Ok(())
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|err| CliError::internal(format!("error: failed to serialize output: {err}")))?;
    println!("{json}");
    Ok(())
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|err| CliError::input(format!("error: cannot read '{}': {err}", path.display())))
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut profiles: Option<PathBuf> = None;
    let mut dictionary: Option<PathBuf> = None;
    let mut menu: Option<PathBuf> = None;
    let mut json = false;
    let mut history = false;
    let mut color = io::stdout().is_terminal();
    let mut verbose = false;
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("safebite {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--history" => history = true,
            "-v" | "--verbose" => verbose = true,
            "--profiles" | "-p" => profiles = Some(expect_value(&mut args, "--profiles")?.into()),
            "--dictionary" => dictionary = Some(expect_value(&mut args, "--dictionary")?.into()),
            "--menu" => menu = Some(expect_value(&mut args, "--menu")?.into()),
            "--input" | "-i" => {
                let value = expect_value(&mut args, "--input")?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--profiles=") => profiles = Some(arg.trim_start_matches("--profiles=").into()),
            _ if arg.starts_with("--dictionary=") => {
                dictionary = Some(arg.trim_start_matches("--dictionary=").into());
            }
            _ if arg.starts_with("--menu=") => menu = Some(arg.trim_start_matches("--menu=").into()),
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=").to_string();
                set_input(&mut input, value)?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    if menu.is_some() {
        if input.is_some() {
            return Err("error: --menu does not take ingredient input".to_string());
        }
        if history {
            return Err("error: --history applies to ingredient scans, not menus".to_string());
        }
    } else {
        let text = match input {
            Some(value) => value,
            None => read_stdin_input()?,
        };
        if text.trim().is_empty() {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
        input = Some(text);
    }

    Ok(CliConfig { input, profiles, dictionary, menu, json, history, color, verbose })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "safebite {version}

Dietary safety matcher CLI.

Usage:
  safebite [OPTIONS] [--] <ingredients...>
  safebite [OPTIONS] --input <text>
  safebite [OPTIONS] --menu <file>

Options:
  -i, --input <text>         Ingredient text to scan. If omitted, reads remaining
                             args or stdin when no args are provided.
  -p, --profiles <file>      JSON file with one profile or an array of profiles.
  --dictionary <file>        JSON term dictionary replacing the built-in one
                             (built-in version: {terms_version}).
  --menu <file>              JSON file with menu dishes; checks every dish
                             against all profiles combined.
  --json                     Print the result as JSON.
  --history                  Print a history record (JSON) for the scan.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -v, --verbose              Debug logging on stderr (otherwise {log_env}).
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments, unreadable files, or no ingredients detected.
",
        version = env!("CARGO_PKG_VERSION"),
        terms_version = safebite::BUILTIN_TERMS_VERSION,
        log_env = LOG_ENV,
    )
}
