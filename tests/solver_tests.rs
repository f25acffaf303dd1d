//! Solver integration tests.
//!
//! These cover the public `solve_board` / `PathSearch` behaviour: which
//! words are found, output ordering, and the lenient handling of malformed
//! grids.

use rust_boggle::{solve_board, solve_words, DictionaryIndex, Grid, PathSearch};

fn rows(layout: &[&str]) -> Vec<Vec<String>> {
    layout
        .iter()
        .map(|r| r.chars().map(|c| c.to_string()).collect())
        .collect()
}

fn classic_4x4() -> Vec<Vec<String>> {
    [
        ["T", "W", "Y", "R"],
        ["E", "N", "P", "H"],
        ["G", "Z", "Qu", "R"],
        ["O", "N", "T", "A"],
    ]
    .iter()
    .map(|row| row.iter().map(|t| t.to_string()).collect())
    .collect()
}

const CLASSIC_WORDS: &[&str] = &[
    "art", "ego", "gent", "get", "net", "new", "newt", "prat", "pry", "qua", "quart", "quartz",
    "rat", "tar", "tarp", "ten", "went", "wet", "arty", "rhr", "not", "quar",
];

// =============================================================================
// Word Discovery
// =============================================================================

/// Only "bed" is traceable: A/C and C/I are not adjacent on this board.
#[test]
fn test_abc_board_respects_adjacency() {
    let index = DictionaryIndex::build(["ace", "bed", "ice"]);
    let words = solve_board(&rows(&["ABC", "DEF", "GHI"]), &index);
    assert_eq!(words, vec!["bed"]);
}

#[test]
fn test_two_letter_words_never_reported() {
    let index = DictionaryIndex::build(["ab", "abe"]);
    let words = solve_board(&rows(&["ABC", "DEF", "GHI"]), &index);
    assert_eq!(words, vec!["abe"]);
}

#[test]
fn test_empty_dictionary_finds_nothing() {
    let index = DictionaryIndex::build(Vec::<&str>::new());
    assert!(solve_board(&rows(&["ABC", "DEF", "GHI"]), &index).is_empty());
    assert!(solve_words(&rows(&["ABC", "DEF", "GHI"]), Vec::<&str>::new()).is_empty());
}

#[test]
fn test_classic_board_with_qu_tile() {
    let words = solve_words(&classic_4x4(), CLASSIC_WORDS);
    assert_eq!(
        words,
        vec![
            "art", "ego", "gent", "get", "net", "new", "newt", "prat", "pry", "qua", "quar",
            "quart", "quartz", "rat", "rhr", "tar", "tarp", "ten", "went", "wet",
        ]
    );
}

/// "qa" cannot be spelled: the Qu tile always contributes both letters.
#[test]
fn test_qu_tile_is_atomic() {
    let index = DictionaryIndex::build(["qat", "uta", "quat"]);
    let grid = vec![
        vec!["Qu", "A", "T"],
        vec!["X", "X", "X"],
        vec!["X", "X", "X"],
    ];
    assert_eq!(solve_board(&grid, &index), vec!["quat"]);
}

#[test]
fn test_grid_case_is_ignored() {
    let index = DictionaryIndex::build(["BED"]);
    let upper = solve_board(&rows(&["ABC", "DEF", "GHI"]), &index);
    let lower = solve_board(&rows(&["abc", "def", "ghi"]), &index);
    let mixed = solve_board(&rows(&["aBc", "DeF", "gHi"]), &index);
    assert_eq!(upper, vec!["bed"]);
    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
}

#[test]
fn test_word_reachable_by_many_paths_reported_once() {
    let index = DictionaryIndex::build(["eee", "eeee"]);
    let words = solve_board(&rows(&["EEE", "EEE", "EEE"]), &index);
    assert_eq!(words, vec!["eee", "eeee"]);
}

#[test]
fn test_long_snake_path() {
    let index = DictionaryIndex::build(["abcdefghi"]);
    // a b c / f e d / g h i reads as a boustrophedon snake.
    let words = solve_board(&rows(&["ABC", "FED", "GHI"]), &index);
    assert_eq!(words, vec!["abcdefghi"]);
}

// =============================================================================
// Output Contract
// =============================================================================

#[test]
fn test_output_sorted_and_unique() {
    let words = solve_words(&classic_4x4(), CLASSIC_WORDS);
    let mut sorted = words.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(words, sorted);
}

#[test]
fn test_solve_is_idempotent() {
    let index = DictionaryIndex::build(CLASSIC_WORDS);
    let first = solve_board(&classic_4x4(), &index);
    let second = solve_board(&classic_4x4(), &index);
    assert_eq!(first, second);
}

#[test]
fn test_typed_and_lenient_paths_agree() {
    let index = DictionaryIndex::build(CLASSIC_WORDS);
    let grid = Grid::from_rows(&classic_4x4()).unwrap();
    assert_eq!(
        PathSearch::new(&index).solve(&grid),
        solve_board(&classic_4x4(), &index)
    );
}

#[test]
fn test_two_by_two_grid_is_solved() {
    // Every pair of cells on a 2x2 board is adjacent.
    let index = DictionaryIndex::build(["abc", "cab", "dcba", "abd", "aba"]);
    assert_eq!(
        solve_board(&rows(&["AB", "CD"]), &index),
        vec!["abc", "abd", "cab", "dcba"]
    );
}

#[test]
fn test_single_qu_tile_spells_nothing() {
    let index = DictionaryIndex::build(["qu", "qua"]);
    assert!(solve_board(&[vec!["Qu"]], &index).is_empty());
}

// =============================================================================
// Lenient Contract
//
// Malformed grids produce an empty result rather than an error. Callers
// depend on this; switching to a fallible signature is a breaking change.
// =============================================================================

#[test]
fn test_single_cell_grid_is_empty() {
    // Valid, but one letter cannot reach the minimum word length.
    let index = DictionaryIndex::build(["aaa", "a"]);
    assert!(solve_board(&rows(&["A"]), &index).is_empty());
}

#[test]
fn test_ragged_grid_is_empty() {
    let index = DictionaryIndex::build(["abc", "bed"]);
    assert!(solve_board(&rows(&["ABC", "DE", "GHI"]), &index).is_empty());
}

#[test]
fn test_non_square_grid_is_empty() {
    let index = DictionaryIndex::build(["abc"]);
    assert!(solve_board(&rows(&["ABC", "DEF"]), &index).is_empty());
    assert!(solve_board(&rows(&["ABCD", "EFGH", "IJKL"]), &index).is_empty());
}

#[test]
fn test_empty_grid_is_empty() {
    let index = DictionaryIndex::build(["abc"]);
    let grid: Vec<Vec<String>> = Vec::new();
    assert!(solve_board(&grid, &index).is_empty());
}

#[test]
fn test_non_alphabetic_tile_is_empty() {
    let index = DictionaryIndex::build(["abc"]);
    for bad in ["1", "", " ", "a1", "-"] {
        let mut grid = rows(&["ABC", "DEF", "GHI"]);
        grid[1][1] = bad.to_string();
        assert!(solve_board(&grid, &index).is_empty(), "tile {bad:?}");
    }
}

#[test]
fn test_rejection_logged_not_raised() {
    // Run with RUST_LOG=rust_boggle=debug to see the rejection event.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let index = DictionaryIndex::build(["abc"]);
    assert!(solve_board(&rows(&["AB", "C"]), &index).is_empty());
    assert_eq!(solve_board(&rows(&["AB", "CD"]), &index), vec!["abc"]);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_shared_index_across_threads() {
    let index = DictionaryIndex::build(CLASSIC_WORDS);
    let expected = solve_board(&classic_4x4(), &index);

    let shared = &index;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || solve_board(&classic_4x4(), shared)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
