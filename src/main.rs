// src/main.rs - Print runtime details for the demo script
use clap::Parser;

use runtime_info::print_runtime_details;

/// Report the script version, path, current time and Rust runtime details.
#[derive(Parser, Debug)]
#[command(name = "runtime-info", version, about = "Print runtime details for a script.")]
struct Cli {
    /// Log at debug level on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    print_runtime_details("Script", "1.0", "/path/to/script.py", None)?;
    Ok(())
}
