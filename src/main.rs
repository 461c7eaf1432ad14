//! hilite - syntax highlight source code to HTML on the command line

use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

use hilite::{Highlighter, Result, Theme, TreeEngine};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut lang: Option<String> = None;
    let mut theme_path: Option<PathBuf> = None;
    let mut file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--lang" | "-l" => {
                i += 1;
                lang = args.get(i).cloned();
            }
            "--theme" | "-t" => {
                i += 1;
                theme_path = args.get(i).cloned().map(PathBuf::from);
            }
            arg if !arg.starts_with('-') => {
                file = Some(PathBuf::from(arg));
            }
            arg => {
                eprintln!("Unknown option: {}", arg);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let code = match &file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let theme = match &theme_path {
        Some(path) => Theme::load(path)?,
        None => Theme::default(),
    };

    let highlighter = Highlighter::with_theme(theme);
    let html = highlighter.highlight(&code, lang.as_deref())?;
    println!("{}", html);

    Ok(())
}

fn print_usage() {
    println!(
        "hilite {} - syntax highlight source code to HTML",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: hilite [OPTIONS] [FILE]");
    println!();
    println!("Reads FILE (or stdin) and writes an HTML fragment to stdout.");
    println!();
    println!("Options:");
    println!("  -l, --lang <NAME>   Language to highlight as (else auto-detected)");
    println!("  -t, --theme <FILE>  TOML theme file overriding the built-in styles");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
    println!();
    println!(
        "Languages (with grammar support): {}",
        TreeEngine::new().flags().join(", ")
    );
    println!("Other languages fall back to coarse keyword highlighting.");
    println!();
    println!("Diagnostics go to stderr; control them with RUST_LOG.");
}

fn print_version() {
    println!("hilite {}", env!("CARGO_PKG_VERSION"));
}
