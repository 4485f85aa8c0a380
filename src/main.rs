use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use attendance_grader::attendance::{AttendanceBook, PolicyFactory};
use attendance_grader::config::{self, WriteOutcome};
use attendance_grader::{loader, output, stderr_buffer};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Score lines followed by the removal list
    Summary,
    /// Aligned columns, elimination candidates marked with x
    Table,
    /// Tab-separated: id, name, points, grade, eliminated
    Tsv,
    /// Full records as a JSON array
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Grade every participant found in an attendance file
    Report {
        /// File of whitespace-separated "name weekday" pairs
        input: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Summary)]
        format: Format,
    },
    /// Validate the config and print the effective policies
    CheckConfig,
    /// Write the default policies to a config file
    Init {
        /// Where to write (defaults to ~/.config/attendance-grader/config.yaml)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "attendance-grader")]
#[command(about = "Points, grades and elimination candidates from attendance logs", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/attendance-grader/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Load and validate the policy config, exiting with EXIT_CONFIG on failure.
fn load_policies(config_path: Option<PathBuf>, verbose: bool) -> config::PolicyConfig {
    if verbose {
        match config_path.as_ref() {
            Some(p) => eprintln!("Loading config from {}", p.display()),
            None => eprintln!("Using default config location"),
        }
    }
    let policy_config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&policy_config) {
        eprintln!("Policy config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    policy_config
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    match cli.command {
        Commands::Init { path, force } => {
            let Some(target) = path.or_else(config::get_config_path) else {
                eprintln!("Could not determine home directory; pass --path.");
                std::process::exit(EXIT_CONFIG);
            };
            match config::write_default_config(&target, force) {
                Ok(WriteOutcome::Written) => println!("Config written to {}", target.display()),
                Ok(WriteOutcome::AlreadyExists) => {
                    println!(
                        "Config already exists at {}. Use --force to overwrite.",
                        target.display()
                    );
                }
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            }
        }
        Commands::CheckConfig => {
            let policy_config = load_policies(config_path, cli.verbose);
            match serde_saphyr::to_string(&policy_config.effective()) {
                Ok(yaml) => {
                    println!("Config OK");
                    println!("{}", yaml);
                }
                Err(e) => {
                    eprintln!("Failed to render config: {}", e);
                    std::process::exit(EXIT_FAILURE);
                }
            }
        }
        Commands::Report { input, format } => {
            let policy_config = load_policies(config_path, cli.verbose);
            let mut book = AttendanceBook::from_bundle(policy_config.create());

            stderr_buffer::activate();
            let summary = loader::load_from_file(&mut book, &input);
            let warnings = stderr_buffer::drain();

            if cli.verbose {
                for warning in &warnings {
                    eprintln!("{}", warning);
                }
                eprintln!(
                    "Loaded {} records for {} participants from {} ({} skipped)",
                    summary.accepted,
                    book.len(),
                    input.display(),
                    summary.skipped.len()
                );
            } else {
                // Per-line skip warnings are only shown in verbose mode
                for warning in warnings.iter().filter(|w| !w.starts_with("warning: line ")) {
                    eprintln!("{}", warning);
                }
                if !summary.skipped.is_empty() {
                    eprintln!(
                        "Skipped {} invalid record(s); use --verbose for details",
                        summary.skipped.len()
                    );
                }
            }

            book.compute();
            let records = book.records();
            let use_colors = !cli.no_color && output::should_use_colors();

            match format {
                Format::Summary => print!("{}", output::format_summary(records)),
                Format::Table if cli.verbose && !records.is_empty() => {
                    for record in records {
                        println!("{}", output::format_detail(record, use_colors));
                        println!();
                    }
                }
                Format::Table => println!("{}", output::format_table(records, use_colors)),
                Format::Tsv => {
                    let tsv = output::format_tsv(records);
                    if !tsv.is_empty() {
                        println!("{}", tsv);
                    }
                }
                Format::Json => match output::format_json(records) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Failed to render JSON: {}", e);
                        std::process::exit(EXIT_FAILURE);
                    }
                },
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {} participants, {} elimination candidates in {:?}",
                    records.len(),
                    book.eliminated().count(),
                    start_time.elapsed()
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
