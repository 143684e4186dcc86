//! mathvar CLI - scan, inspect and expand math variables in documents

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::Read;
#[cfg(feature = "cli")]
use mathvar::{
    expand_document, is_in_math, scan, suggest_completions, ExpanderError, ExpanderResult,
    KeywordConfig,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "mvx")]
#[command(version)]
#[command(about = "mathvar - in-editor math variable expander", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Settings file with { "defineKeyword": ..., "translateKeyword": ... }
    #[arg(short, long, global = true)]
    settings: Option<String>,

    /// Override the definition keyword (default "!!")
    #[arg(long, global = true)]
    define: Option<String>,

    /// Override the expansion keyword (default "@")
    #[arg(long, global = true)]
    translate: Option<String>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// List variables defined in a document
    Scan {
        /// Input file (reads from stdin if not provided)
        input: Option<String>,

        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand every known expansion site in a document
    Expand {
        /// Input file (reads from stdin if not provided)
        input: Option<String>,

        /// Output file (writes to stdout if not provided)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show completion candidates at a byte offset
    Complete {
        /// Byte offset of the cursor
        offset: usize,

        /// Input file (reads from stdin if not provided)
        input: Option<String>,
    },

    /// Report whether a byte offset lies inside math
    At {
        /// Byte offset of the cursor
        offset: usize,

        /// Input file (reads from stdin if not provided)
        input: Option<String>,
    },

    /// Show version and feature info
    Info,
}

#[cfg(feature = "cli")]
fn main() -> ExpanderResult<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Scan { ref input, json } => {
            let text = read_input(input.as_deref())?;
            let table = scan(&text, &config.define_keyword);

            if json {
                let entries: Vec<serde_json::Value> = table
                    .iter()
                    .map(|(name, expression)| {
                        serde_json::json!({ "name": name, "expression": expression })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&entries).unwrap_or_default()
                );
            } else if table.is_empty() {
                println!("No variables defined");
            } else {
                println!("Parsed {} math variable(s):", table.len());
                for (name, expression) in &table {
                    println!("  {} = {}", name, expression);
                }
            }
        }

        Commands::Expand { ref input, ref output } => {
            let text = read_input(input.as_deref())?;
            let table = scan(&text, &config.define_keyword);
            let expanded = expand_document(&text, &table, &config.translate_keyword);

            match output {
                Some(path) => fs::write(path, expanded)?,
                None => print!("{}", expanded),
            }
        }

        Commands::Complete { offset, ref input } => {
            let text = read_input(input.as_deref())?;
            let table = scan(&text, &config.define_keyword);

            match suggest_completions(&text, offset, &table, &config.translate_keyword) {
                Some(set) => {
                    println!(
                        "Completing span {}..{} with {} option(s):",
                        set.from,
                        set.to,
                        set.options.len()
                    );
                    for option in &set.options {
                        println!("  {} -> {}", option.name, option.expression);
                    }
                }
                None => println!("No suggestions"),
            }
        }

        Commands::At { offset, ref input } => {
            let text = read_input(input.as_deref())?;
            if offset > text.len() {
                return Err(ExpanderError::invalid(format!(
                    "offset {} is past the end of a {}-byte document",
                    offset,
                    text.len()
                )));
            }
            if is_in_math(&text, offset) {
                println!("math");
            } else {
                println!("text");
            }
        }

        Commands::Info => {
            println!("mathvar v{}", env!("CARGO_PKG_VERSION"));
            println!("Features:");
            println!("  - Definition scanning with configurable keywords");
            println!("  - Inline and display math-context detection");
            println!("  - Space-key and autocomplete expansion triggers");
            println!("  - Whole-document batch expansion");
            #[cfg(feature = "wasm")]
            println!("  - WASM bindings: enabled");
            #[cfg(not(feature = "wasm"))]
            println!("  - WASM bindings: disabled");
        }
    }

    Ok(())
}

/// Resolve the keyword configuration: settings file first, then flag
/// overrides on top, defaults for everything left unset.
#[cfg(feature = "cli")]
fn load_config(cli: &Cli) -> ExpanderResult<KeywordConfig> {
    let mut config = match &cli.settings {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            KeywordConfig::from_json_strict(&raw)?
        }
        None => KeywordConfig::default(),
    };

    if let Some(define) = &cli.define {
        config.define_keyword = define.clone();
    }
    if let Some(translate) = &cli.translate {
        config.translate_keyword = translate.clone();
    }

    Ok(config)
}

/// Read a document from a file, or stdin when no path is given.
#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> ExpanderResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install mathvar --features cli");
    eprintln!("  mvx <COMMAND> [OPTIONS]");
}
