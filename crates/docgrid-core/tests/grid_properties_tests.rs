//! Integration tests for grouping, ordering and rendering

use docgrid_core::{GridError, RowPolicy, build_grid, grid_to_json, render_grid, sort_grid};

fn rows(triples: &[(&str, &str, &str)]) -> Vec<Vec<String>> {
    triples
        .iter()
        .map(|(x, ch, y)| vec![x.to_string(), ch.to_string(), y.to_string()])
        .collect()
}

fn render(triples: &[(&str, &str, &str)]) -> Vec<String> {
    let grid = build_grid(&rows(triples), RowPolicy::Fail).unwrap();
    render_grid(&sort_grid(grid))
}

#[test]
fn test_two_row_scenario() {
    let lines = render(&[("0", "H", "0"), ("1", "I", "0"), ("0", "X", "1")]);
    assert_eq!(lines, vec!["HI", "X "]);
}

#[test]
fn test_single_cell_scenario() {
    assert_eq!(render(&[("3", "Z", "0")]), vec!["   Z"]);
}

#[test]
fn test_non_numeric_y_contributes_nothing() {
    let with_noise = render(&[
        ("x-coordinate", "Character", "y-coordinate"),
        ("0", "A", "0"),
        ("5", "B", "row two"),
    ]);
    let without_noise = render(&[("0", "A", "0")]);

    assert_eq!(with_noise, without_noise);
}

#[test]
fn test_line_length_is_max_x_plus_one() {
    let lines = render(&[("2", "a", "0"), ("6", "b", "0"), ("4", "c", "0"), ("0", "d", "1")]);

    assert_eq!(lines[0].chars().count(), 7);
    assert_eq!(lines[1].chars().count(), 2);
}

#[test]
fn test_rows_sorted_regardless_of_input_order() {
    let forward = render(&[("0", "a", "0"), ("0", "b", "1"), ("0", "c", "2")]);
    let backward = render(&[("0", "c", "2"), ("0", "b", "1"), ("0", "a", "0")]);

    assert_eq!(forward, backward);
    assert_eq!(forward, vec!["a ", "b ", "c "]);
}

#[test]
fn test_last_row_wins_for_same_position() {
    let lines = render(&[("1", "a", "0"), ("1", "b", "0")]);
    assert_eq!(lines, vec![" b"]);
}

#[test]
fn test_concatenated_input_renders_same_grid() {
    let triples = [("0", "H", "0"), ("1", "I", "0"), ("2", "!", "3")];
    let doubled: Vec<(&str, &str, &str)> = triples.iter().chain(triples.iter()).copied().collect();

    assert_eq!(render(&triples), render(&doubled));
}

#[test]
fn test_pipeline_is_deterministic() {
    let triples = [("4", "q", "2"), ("0", "w", "-1"), ("1", "e", "2"), ("0x2", "r", "7")];
    assert_eq!(render(&triples), render(&triples));

    let first = grid_to_json(&sort_grid(
        build_grid(&rows(&triples), RowPolicy::Fail).unwrap(),
    ))
    .unwrap();
    let second = grid_to_json(&sort_grid(
        build_grid(&rows(&triples), RowPolicy::Fail).unwrap(),
    ))
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_loose_numeric_coordinates() {
    // "1e0" and "1" are separate rows with the same value, first seen first.
    // "0x2" widens its row to column 2 but is stored under its raw key.
    let lines = render(&[(" 0x2 ", "z", "1e0"), ("0", "a", "1")]);

    assert_eq!(lines, vec!["   ", "a "]);
}

#[test]
fn test_byte_order_mark_trimmed_from_cells() {
    assert_eq!(render(&[("\u{feff}1", "Z", "0")]), vec![" Z"]);
}

#[test]
fn test_huge_column_rejected_before_rendering() {
    let err = build_grid(&rows(&[("1e12", "Z", "0")]), RowPolicy::Fail).unwrap_err();
    assert!(matches!(err, GridError::RowTooWide { .. }));
}
