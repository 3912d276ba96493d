//! Terminal presentation: matchups, leaderboard, ranking movement.

use std::collections::HashMap;
use std::path::Path;

use rank_core::{rank_positions, ranked, Item};

use crate::color;

/// Width of the leaderboard histogram bar in block characters.
const BAR_WIDTH: usize = 40;

/// Short display label for a file: base name without the last extension.
pub fn file_label(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

/// "12W-8L-2T" record string.
pub fn format_record(item: &Item) -> String {
    format!("{}W-{}L-{}T", item.wins, item.losses, item.ties)
}

/// Histogram bar scaled against the population's best rating.
fn histogram(rating: f64, max_rating: f64) -> String {
    if max_rating <= 0.0 {
        return " ".repeat(BAR_WIDTH);
    }
    let ratio = (rating / max_rating).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64) as usize;
    let mut bar = "\u{2588}".repeat(filled);
    bar.push_str(&" ".repeat(BAR_WIDTH - filled));
    bar
}

pub fn print_welcome() {
    println!();
    println!("{}", color::bold("Pairwise file ranking"));
    println!("Pick the better file each round; ratings converge as you go.");
    println!(
        "{}",
        color::dim("Commands: A/B/t result, o open, top [N], ren <old> <new>, rem a/b/ab, q quit")
    );
    println!();
}

/// The matchup card shown before each comparison.
pub fn format_matchup(
    first: &Item,
    second: &Item,
    rank_first: usize,
    rank_second: usize,
    prob_first: f64,
) -> String {
    // Always present the favored side's probability, so it reads >= 50%.
    let favored = if prob_first >= 0.5 {
        format!("{:.0}% A", prob_first * 100.0)
    } else {
        format!("{:.0}% B", (1.0 - prob_first) * 100.0)
    };

    let mut card = String::new();
    card.push('\n');
    card.push_str(&format!(
        "  {} {:<28} {:>5}  #{:<3} {}\n",
        color::bold("[A]"),
        color::cyan(&file_label(&first.path)),
        first.rating as i64,
        rank_first,
        format_record(first),
    ));
    card.push_str(&format!(
        "  {} {:<28} {:>5}  #{:<3} {}\n",
        color::bold("[B]"),
        color::cyan(&file_label(&second.path)),
        second.rating as i64,
        rank_second,
        format_record(second),
    ));
    card.push_str(&format!("  Win probability: {}\n", favored));
    card
}

/// Print the top `limit` items with a rating histogram.
pub fn display_leaderboard(items: &[Item], limit: usize) {
    println!("\nTop {} Files:", limit);
    if items.is_empty() {
        println!("No files found.\n");
        return;
    }

    let order = ranked(items);
    let max_rating = items[order[0]].rating;

    for (pos, &idx) in order.iter().take(limit).enumerate() {
        let item = &items[idx];
        println!(
            "{} {:>3}. {:>5} ({:<12}) {}",
            histogram(item.rating, max_rating),
            pos + 1,
            item.rating as i64,
            format_record(item),
            item.path,
        );
    }
    println!();
}

/// Print how the two contestants moved after a recorded game.
pub fn display_ranking_changes(
    old_positions: &HashMap<String, usize>,
    items: &[Item],
    contestants: [&str; 2],
) {
    let new_positions = rank_positions(items);

    println!("\nRankings:");
    for path in contestants {
        let Some(item) = items.iter().find(|i| i.path == path) else {
            continue;
        };
        let new_rank = new_positions.get(path).copied();
        let movement = match (old_positions.get(path).copied(), new_rank) {
            (Some(old), Some(new)) if old == new => format!("#{} (no change)", new),
            (Some(old), Some(new)) if old > new => format!("#{} (up from #{})", new, old),
            (Some(old), Some(new)) => format!("#{} (down from #{})", new, old),
            (None, Some(new)) => format!("#{} (new)", new),
            (Some(old), None) => format!("unranked (was #{})", old),
            (None, None) => "unranked".to_string(),
        };
        println!("  {}: {} | New Elo: {}", path, movement, item.rating as i64);
    }
    println!();
}
