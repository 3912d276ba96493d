//! The interactive comparison session.
//!
//! One strictly sequential loop: discover, select a matchup, ask, record,
//! persist, repeat. The store is written after every recorded game before
//! the next pair is requested.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;

use rank_core::{expected_score, rank_positions, select_pair, GameResult, Item};

use crate::color;
use crate::discover;
use crate::store::Store;
use crate::ui;

pub struct SessionOptions {
    pub dir: PathBuf,
    pub pattern: Regex,
    pub power: f64,
    pub leaderboard_size: usize,
}

/// One line of user input, parsed.
#[derive(Debug, PartialEq)]
enum Input {
    Result(GameResult),
    Open,
    Top(usize),
    Rename(String, String),
    Remove(RemoveTarget),
    Quit,
    Unknown,
}

#[derive(Debug, PartialEq, Clone, Copy)]
enum RemoveTarget {
    First,
    Second,
    Both,
}

pub fn run(opts: &SessionOptions) -> Result<()> {
    let mut store = Store::load(&opts.dir)?;
    ui::print_welcome();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    'matchup: loop {
        let discovered = discover::discover_files(&opts.dir, &opts.pattern)?;
        if store.sync(&discovered) > 0 {
            store.save(&opts.dir)?;
        }

        let active = store.active_indices(&opts.dir, &opts.pattern);
        match active.len() {
            0 => {
                println!("{}", color::yellow("No files found matching the pattern."));
                return Ok(());
            }
            1 => {
                println!(
                    "{}",
                    color::yellow("Only one file found. Need at least two files for comparison.")
                );
                return Ok(());
            }
            _ => {}
        }

        let view: Vec<Item> = active.iter().map(|&i| store.items[i].clone()).collect();
        let (first, second) = select_pair(&view, opts.power)?;
        let mut first_path = view[first].path.clone();
        let mut second_path = view[second].path.clone();

        let mut card = matchup_card(&store, &first_path, &second_path)?;
        println!("{}", card);

        loop {
            print!("Your choice (A/B/t/o/top [N]/ren <old> <new>/rem a/b/ab/q): ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!("\n{}", color::dim("Goodbye!"));
                return Ok(());
            };
            let line = line.context("failed to read input")?;

            match parse_input(&line, opts.leaderboard_size) {
                Input::Result(result) => {
                    let old_positions: HashMap<String, usize> = rank_positions(&store.items)
                        .into_iter()
                        .map(|(path, pos)| (path.to_string(), pos))
                        .collect();

                    store.record_game(&first_path, &second_path, result)?;
                    store.save(&opts.dir)?;
                    ui::display_ranking_changes(
                        &old_positions,
                        &store.items,
                        [first_path.as_str(), second_path.as_str()],
                    );
                    continue 'matchup;
                }
                Input::Open => {
                    open_files(&opts.dir, [&first_path, &second_path]);
                }
                Input::Top(n) => {
                    ui::display_leaderboard(&store.items, n);
                    println!("{}", card);
                }
                Input::Rename(old_pattern, new_pattern) => {
                    match apply_renames(
                        &mut store,
                        &opts.dir,
                        &old_pattern,
                        &new_pattern,
                        &mut first_path,
                        &mut second_path,
                    ) {
                        Ok(count) => {
                            println!("{}", color::green(&format!("Renamed {} file(s).", count)));
                            store.save(&opts.dir)?;
                            card = matchup_card(&store, &first_path, &second_path)?;
                            println!("{}", card);
                        }
                        Err(e) => println!("{}", color::red(&format!("Error: {}", e))),
                    }
                }
                Input::Remove(target) => {
                    let doomed: Vec<&str> = match target {
                        RemoveTarget::First => vec![first_path.as_str()],
                        RemoveTarget::Second => vec![second_path.as_str()],
                        RemoveTarget::Both => vec![first_path.as_str(), second_path.as_str()],
                    };
                    for path in doomed {
                        if let Err(e) = discover::trash_file(&opts.dir, path) {
                            println!("{}", color::yellow(&format!("Warning: {}", e)));
                        }
                        store.remove(path)?;
                        println!("{}", color::green(&format!("Removed {}.", path)));
                    }
                    store.save(&opts.dir)?;
                    continue 'matchup;
                }
                Input::Quit => {
                    println!("{}", color::dim("Goodbye!"));
                    return Ok(());
                }
                Input::Unknown => {
                    println!(
                        "{}",
                        color::yellow(
                            "Invalid input. Please enter A, B, t, o, top [N], \
                             ren <old> <new>, rem a/b/ab, or q"
                        )
                    );
                }
            }
        }
    }
}

/// Build the matchup card for two stored paths.
fn matchup_card(store: &Store, first: &str, second: &str) -> Result<String> {
    let a = &store.items[store
        .index_of(first)
        .with_context(|| format!("unknown item {:?}", first))?];
    let b = &store.items[store
        .index_of(second)
        .with_context(|| format!("unknown item {:?}", second))?];

    let positions = rank_positions(&store.items);
    let rank_a = positions.get(first).copied().unwrap_or(0);
    let rank_b = positions.get(second).copied().unwrap_or(0);
    let prob_a = expected_score(a.rating, b.rating);

    Ok(ui::format_matchup(a, b, rank_a, rank_b, prob_a))
}

/// Apply a wildcard rename on disk and in the store, tracking the current
/// contestants through the rename.
fn apply_renames(
    store: &mut Store,
    dir: &Path,
    old_pattern: &str,
    new_pattern: &str,
    first_path: &mut String,
    second_path: &mut String,
) -> Result<usize> {
    let renames = discover::wildcard_renames(old_pattern, new_pattern, dir)?;

    for (old, new) in &renames {
        std::fs::rename(dir.join(old), dir.join(new))
            .with_context(|| format!("failed to rename {} to {}", old, new))?;
        store.rename(old, new);

        if first_path == old {
            *first_path = new.clone();
        }
        if second_path == old {
            *second_path = new.clone();
        }
    }
    Ok(renames.len())
}

/// Launch the platform opener on both contestants.
fn open_files(dir: &Path, paths: [&str; 2]) {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    for path in paths {
        let full = dir.join(path);
        if let Err(e) = std::process::Command::new(opener).arg(&full).spawn() {
            println!(
                "{}",
                color::yellow(&format!("Could not open {}: {}", full.display(), e))
            );
        }
    }
}

fn parse_input(line: &str, default_top: usize) -> Input {
    let trimmed = line.trim();
    let lower = trimmed.to_ascii_lowercase();

    match lower.as_str() {
        "q" | "quit" => return Input::Quit,
        "o" => return Input::Open,
        "top" => return Input::Top(default_top),
        _ => {}
    }

    if let Some(rest) = lower.strip_prefix("top ") {
        return match rest.trim().parse::<usize>() {
            Ok(n) if n > 0 => Input::Top(n),
            _ => Input::Unknown,
        };
    }

    // Rename patterns keep their original case.
    if let Some(rest) = trimmed.strip_prefix("ren ") {
        let parts: Vec<&str> = rest.split_whitespace().collect();
        return match parts.as_slice() {
            [old, new] => Input::Rename(old.to_string(), new.to_string()),
            _ => Input::Unknown,
        };
    }

    if let Some(rest) = lower.strip_prefix("rem ") {
        return match rest.trim() {
            "a" => Input::Remove(RemoveTarget::First),
            "b" => Input::Remove(RemoveTarget::Second),
            "ab" => Input::Remove(RemoveTarget::Both),
            _ => Input::Unknown,
        };
    }

    match trimmed.parse::<GameResult>() {
        Ok(result) => Input::Result(result),
        Err(_) => Input::Unknown,
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
