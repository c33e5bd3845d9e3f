use std::path::PathBuf;

use clap::Parser;
use csv_toolkit::Result;
use csv_toolkit::language::LinguaDetector;
use csv_toolkit::logging::init_logging;
use csv_toolkit::split::{SplitConfig, render_summary, split_by_language};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if error.use_stderr() => {
            eprint!("{}", error.render());
            std::process::exit(1);
        }
        Err(error) => {
            print!("{}", error.render());
            std::process::exit(0);
        }
    };

    if let Err(error) = init_logging(cli.verbose) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }

    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    let detector = LinguaDetector::new();
    let summary = split_by_language(&config, &detector)?;
    for line in render_summary(&config, summary) {
        println!("{line}");
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "split-by-language",
    version,
    about = "Split a CSV file into primary-language, other-language and empty rows."
)]
struct Cli {
    /// JSON file with any of: input, output_primary, output_other,
    /// output_empty, column, primary_language, delimiter.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// CSV file to split [default: input.csv].
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Output for rows in the primary language [default: italiano.csv].
    #[arg(long, value_name = "PATH")]
    output_primary: Option<PathBuf>,

    /// Output for rows in other or unknown languages [default: non_italiano.csv].
    #[arg(long, value_name = "PATH")]
    output_other: Option<PathBuf>,

    /// Output for rows with a blank column [default: vuoti.csv].
    #[arg(long, value_name = "PATH")]
    output_empty: Option<PathBuf>,

    /// Column to classify [default: description].
    #[arg(long)]
    column: Option<String>,

    /// ISO 639-1 code of the primary language [default: it].
    #[arg(long = "language", value_name = "CODE")]
    primary_language: Option<String>,

    /// Field delimiter [default: ,].
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Defaults, then the JSON file, then explicit flags.
    fn into_config(self) -> Result<SplitConfig> {
        let mut config = match &self.config {
            Some(path) => SplitConfig::from_json_file(path)?,
            None => SplitConfig::default(),
        };

        if let Some(input) = self.input {
            config.input = input;
        }
        if let Some(path) = self.output_primary {
            config.output_primary = path;
        }
        if let Some(path) = self.output_other {
            config.output_other = path;
        }
        if let Some(path) = self.output_empty {
            config.output_empty = path;
        }
        if let Some(column) = self.column {
            config.column = column;
        }
        if let Some(language) = self.primary_language {
            config.primary_language = language;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        Ok(config)
    }
}
