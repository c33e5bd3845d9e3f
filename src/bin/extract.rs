use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use csv_toolkit::discovery::{ExplicitPath, GlobDiscovery, InputResolver};
use csv_toolkit::distinct::{
    ExtractOptions, ReportOptions, extract_distinct_values, list_columns, render_column_listing,
    render_report,
};
use csv_toolkit::io::{csv_write, parse_delimiter};
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
        match error {
            ToolError::Usage(_) => eprint!("{}", Cli::command().render_help()),
            ToolError::NoInputDiscovered { .. } => {
                eprintln!("Please specify the file path as an argument.");
            }
            _ => {}
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (column_name, csv_file) = cli.positionals();
    let resolver: Box<dyn InputResolver> = match csv_file {
        Some(path) => Box::new(ExplicitPath(path)),
        None => Box::new(GlobDiscovery::catalog_exports(cli.root.clone())),
    };
    let csv_file = resolver.resolve()?;
    let delimiter = parse_delimiter(&cli.delimiter)?;

    println!("Using CSV file: {}", csv_file.display());

    if cli.list_columns {
        let columns = list_columns(&csv_file, delimiter)?;
        for line in render_column_listing(&columns) {
            println!("{line}");
        }
        return Ok(());
    }

    let column = column_name.ok_or_else(|| {
        ToolError::Usage("column_name is required when not using --list-columns".to_string())
    })?;

    let values = extract_distinct_values(
        &csv_file,
        &column,
        ExtractOptions {
            delimiter,
            ignore_case: cli.ignore_case,
        },
    )?;
    let lines = render_report(
        &column,
        &values,
        ReportOptions {
            with_counts: cli.count,
            sorted: cli.sort,
        },
    );

    match &cli.output {
        Some(output) => {
            csv_write::write_lines(output, &lines)?;
            println!("Results written to: {}", output.display());
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }
    Ok(())
}

#[derive(Parser)]
#[command(
    name = "extract",
    version,
    about = "Extract distinct values from a CSV column.",
    after_help = "Examples:\n  \
                  extract product_type\n  \
                  extract categories --count --sort\n  \
                  extract sku var/export/catalog_product_20250623_161510.csv"
)]
struct Cli {
    /// Column to extract distinct values from.
    column_name: Option<String>,

    /// CSV file; searched for (catalog_product*.csv) when omitted.
    csv_file: Option<PathBuf>,

    /// Write results to this file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Show the count of each value.
    #[arg(short, long)]
    count: bool,

    /// Sort output alphabetically.
    #[arg(short, long)]
    sort: bool,

    /// CSV delimiter.
    #[arg(short, long, default_value = ",")]
    delimiter: String,

    /// List available columns and exit.
    #[arg(short, long)]
    list_columns: bool,

    /// Treat values differing only in case as the same value.
    #[arg(short, long)]
    ignore_case: bool,

    /// Directory searched when no CSV file is given.
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Column name and input file. With `--list-columns` no column is needed,
    /// so a lone positional names the file.
    fn positionals(&self) -> (Option<String>, Option<PathBuf>) {
        match (&self.column_name, &self.csv_file) {
            (Some(single), None) if self.list_columns => (None, Some(PathBuf::from(single))),
            (column, file) => (column.clone(), file.clone()),
        }
    }
}
