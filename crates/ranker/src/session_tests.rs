use super::*;

#[test]
fn results_parse_case_insensitively() {
    assert_eq!(parse_input("A", 10), Input::Result(GameResult::FirstWins));
    assert_eq!(parse_input("b", 10), Input::Result(GameResult::SecondWins));
    assert_eq!(parse_input(" t ", 10), Input::Result(GameResult::Tie));
}

#[test]
fn top_takes_an_optional_count() {
    assert_eq!(parse_input("top", 10), Input::Top(10));
    assert_eq!(parse_input("top 25", 10), Input::Top(25));
    assert_eq!(parse_input("TOP 5", 10), Input::Top(5));
    assert_eq!(parse_input("top 0", 10), Input::Unknown);
    assert_eq!(parse_input("top many", 10), Input::Unknown);
}

#[test]
fn rename_needs_exactly_two_patterns() {
    assert_eq!(
        parse_input("ren old_* new_*", 10),
        Input::Rename("old_*".to_string(), "new_*".to_string())
    );
    assert_eq!(parse_input("ren only_one", 10), Input::Unknown);
    assert_eq!(parse_input("ren a b c", 10), Input::Unknown);
}

#[test]
fn rename_patterns_keep_their_case() {
    assert_eq!(
        parse_input("ren Old_* New_*", 10),
        Input::Rename("Old_*".to_string(), "New_*".to_string())
    );
}

#[test]
fn remove_targets_parse() {
    assert_eq!(parse_input("rem a", 10), Input::Remove(RemoveTarget::First));
    assert_eq!(parse_input("rem b", 10), Input::Remove(RemoveTarget::Second));
    assert_eq!(parse_input("rem ab", 10), Input::Remove(RemoveTarget::Both));
    assert_eq!(parse_input("rem c", 10), Input::Unknown);
}

#[test]
fn quit_open_and_garbage() {
    assert_eq!(parse_input("q", 10), Input::Quit);
    assert_eq!(parse_input("quit", 10), Input::Quit);
    assert_eq!(parse_input("o", 10), Input::Open);
    assert_eq!(parse_input("", 10), Input::Unknown);
    assert_eq!(parse_input("banana", 10), Input::Unknown);
}

#[test]
fn matchup_card_reports_ranks_and_probability() {
    let mut store = Store::default();
    store.sync(&["low.txt".to_string(), "high.txt".to_string()]);
    store.items[1].rating = 1200.0;

    let card = matchup_card(&store, "high.txt", "low.txt").unwrap();
    assert!(card.contains("high"));
    assert!(card.contains("#1"));
    assert!(card.contains("% A"));

    assert!(matchup_card(&store, "high.txt", "missing.txt").is_err());
}
