//! Pairwise file ranking CLI.
//!
//! Run a comparison session over a directory of files and watch an Elo
//! leaderboard emerge from your answers.

mod color;
mod config;
mod discover;
mod session;
mod store;
mod ui;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use regex::Regex;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::session::SessionOptions;
use crate::store::Store;

/// Leaderboard size when neither config nor the command asks for one.
const DEFAULT_LEADERBOARD_SIZE: usize = 10;

fn print_usage() {
    println!("ranker - rank files with pairwise Elo comparisons");
    println!();
    println!("Usage:");
    println!("  ranker [dir] [--extension EXTS] [--power P]   run a comparison session");
    println!("  ranker top [N] [dir]                          show the leaderboard");
    println!("  ranker help                                   show this help");
    println!();
    println!("Options:");
    println!("  -e, --extension   File extensions to include (comma-separated, e.g. \"md,txt\")");
    println!("  -p, --power       Games-played balancing exponent (default 0 = off)");
    println!();
    println!("During a session:");
    println!("  A/B/t             First wins / second wins / tie");
    println!("  o                 Open both files");
    println!("  top [N]           Show the leaderboard");
    println!("  ren <old> <new>   Wildcard-rename files (one * in each pattern)");
    println!("  rem a/b/ab        Trash and remove contestant(s)");
    println!("  q                 Quit");
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            Ok(())
        }
        Some("top") => show_top(&args[1..]),
        _ => run_session(&args),
    };

    if let Err(e) = result {
        eprintln!("{}", color::red(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run_session(args: &[String]) -> Result<()> {
    let mut dir: Option<PathBuf> = None;
    let mut extensions: Option<String> = None;
    let mut power: Option<f64> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-e" | "--extension" => {
                i += 1;
                let value = args.get(i).context("--extension needs a value")?;
                extensions = Some(value.clone());
            }
            "-p" | "--power" => {
                i += 1;
                let value = args.get(i).context("--power needs a value")?;
                power = Some(value.parse().context("--power must be a number")?);
            }
            flag if flag.starts_with('-') => bail!("unknown option {:?}", flag),
            positional => {
                if dir.is_some() {
                    bail!("unexpected argument {:?}", positional);
                }
                dir = Some(PathBuf::from(positional));
            }
        }
        i += 1;
    }

    let dir = dir.unwrap_or_else(|| PathBuf::from("."));
    if !dir.is_dir() {
        bail!("{} is not a directory", dir.display());
    }

    let config = Config::load(&dir)?;
    let extensions = extensions.or(config.extensions);
    let power = power.or(config.power).unwrap_or(0.0);
    if !power.is_finite() || power < 0.0 {
        bail!("power must be a non-negative number (e.g. 0, 0.5, 1, 2)");
    }

    let pattern_src = match &extensions {
        Some(exts) => discover::extensions_to_pattern(exts),
        None => ".*".to_string(),
    };
    let pattern = Regex::new(&pattern_src).context("invalid file pattern")?;

    tracing::info!(dir = %dir.display(), pattern = %pattern_src, power, "starting session");

    session::run(&SessionOptions {
        dir,
        pattern,
        power,
        leaderboard_size: config.leaderboard_size.unwrap_or(DEFAULT_LEADERBOARD_SIZE),
    })
}

fn show_top(args: &[String]) -> Result<()> {
    let mut limit: Option<usize> = None;
    let mut dir = PathBuf::from(".");

    for arg in args {
        match arg.parse::<usize>() {
            Ok(n) if n > 0 && limit.is_none() => limit = Some(n),
            _ => dir = PathBuf::from(arg),
        }
    }

    let config = Config::load(&dir)?;
    let limit = limit
        .or(config.leaderboard_size)
        .unwrap_or(DEFAULT_LEADERBOARD_SIZE);

    let store = Store::load(&dir)?;
    if store.items.is_empty() {
        println!("No ranking data found. Run some comparisons first!");
        return Ok(());
    }
    ui::display_leaderboard(&store.items, limit);
    Ok(())
}
