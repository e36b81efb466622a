use std::path::PathBuf;

use clap::Parser;
use ebook::{Config, Conversion};

#[derive(Parser)]
#[command(name = "ebook")]
#[command(about = "Convert a Markdown document to a single-page HTML ebook with a sidebar")]
struct Cli {
    /// Input Markdown file
    #[arg(default_value = "哲学的历程.md")]
    input: PathBuf,

    /// Output HTML file (defaults to input name with .html extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file (defaults to the bundled config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("html"));

    match ebook::generate_ebook(&cli.input, &output, &config) {
        Ok(Conversion::Written { output, .. }) => {
            println!("Created {}", output.display());
        }
        Ok(Conversion::InputMissing(path)) => {
            eprintln!("File not found: {}", path.display());
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
