use std::path::PathBuf;

use clap::Parser;
use csv_toolkit::count::{count_rows, render_summary};
use csv_toolkit::io::parse_delimiter;
use csv_toolkit::logging::init_logging;
use csv_toolkit::{Result, ToolError};

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
        if matches!(error, ToolError::Usage(_)) {
            eprintln!("Usage: rowcount [filename]");
            eprintln!("Or set the CSV_FILE environment variable.");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli
        .file
        .ok_or_else(|| ToolError::Usage("no CSV file specified".to_string()))?;
    if !path.exists() {
        return Err(ToolError::MissingInput(path));
    }

    let delimiter = parse_delimiter(&cli.delimiter)?;
    let count = count_rows(&path, delimiter)?;
    for line in render_summary(&path, count, cli.exclude_header) {
        println!("{line}");
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "rowcount",
    version,
    about = "Count the logical rows of a CSV file, honouring quoted multi-line fields."
)]
struct Cli {
    /// CSV file to count.
    #[arg(env = "CSV_FILE")]
    file: Option<PathBuf>,

    /// Treat the first row as a header and report only data rows.
    #[arg(long)]
    exclude_header: bool,

    /// Field delimiter.
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
