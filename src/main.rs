//! Dotlib - Liberty library reader
//!
//! Reads a Liberty file, reports diagnostics on stderr, and prints either
//! a summary or the parsed library.
//!
//! # Usage
//!
//! ```bash
//! dotlib my_cells.lib
//! dotlib my_cells.lib --dump > normalized.lib
//! RUST_LOG=dotlib_core=trace dotlib my_cells.lib
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dotlib_core::{catalog::AttrKind, config::DEFAULT_MAX_DEPTH, parse_file, Diagnostic, ParserConfig};

/// Liberty cell library reader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the Liberty file (.lib)
    #[arg(value_name = "LIB_FILE")]
    lib_file: PathBuf,

    /// Accept statements without a terminating ';'
    #[arg(long)]
    allow_no_semi: bool,

    /// Maximum group nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parsed library as Liberty text
    #[arg(long)]
    dump: bool,

    /// Print nothing on success
    #[arg(short, long)]
    quiet: bool,

    /// Log group and token activity
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "dotlib_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = ParserConfig::new()
        .with_allow_no_semicolon(args.allow_no_semi)
        .with_max_depth(args.max_depth);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let result = parse_file(&args.lib_file, &config, &mut diagnostics);

    for diag in &diagnostics {
        eprintln!("{}: {}", args.lib_file.display(), diag);
    }

    match result {
        Ok(library) => {
            if args.dump {
                print!("{}", library);
            } else if !args.quiet {
                println!(
                    "library {}: {} cells",
                    library.name().unwrap_or("<unnamed>"),
                    library.groups_of(AttrKind::Cell).count()
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            // parse errors were already reported as diagnostics
            if diagnostics.is_empty() {
                eprintln!("error: {}", err);
            }
            ExitCode::FAILURE
        }
    }
}
