use super::*;
use mighty_parser::{tokenize, Lexer};

fn straight_line(len: i64) -> Vec<Point> {
    (0..len).map(|x| (x, 0)).collect()
}

fn script(points: &[Point]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("mpos({x}, {y})"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

/// Coordinates of every `mpos` call in a token stream.
fn mpos_calls(tokens: &[Token]) -> Vec<Point> {
    tokens
        .split_inclusive(|t| t.is_eol())
        .filter_map(mpos_point)
        .collect()
}

// =============================================================================
// TO_INTERVAL
// =============================================================================

#[test]
fn test_same_rate_keeps_count_and_endpoints() {
    let path = straight_line(101);
    let resampled = to_interval(&path, 100, 100);
    assert!(resampled.len().abs_diff(path.len()) <= 1, "got {}", resampled.len());
    assert_eq!(resampled.first(), path.first());
    assert_eq!(resampled.last(), path.last());
}

#[test]
fn test_half_then_double_keeps_endpoints() {
    let path = straight_line(100);
    let halved = to_interval(&path, 100, 50);
    let restored = to_interval(&halved, 50, 100);
    assert_eq!(restored.first(), Some(&(0, 0)));
    assert_eq!(restored.last(), Some(&(99, 0)));
}

#[test]
fn test_points_are_monotonic_along_line() {
    let resampled = to_interval(&straight_line(100), 100, 30);
    assert!(resampled.windows(2).all(|pair| pair[0].0 <= pair[1].0));
    assert!(resampled.iter().all(|&(_, y)| y == 0));
}

#[test]
fn test_single_point_unchanged() {
    assert_eq!(to_interval(&[(5, 7)], 100, 50), vec![(5, 7)]);
    assert!(to_interval(&[], 100, 50).is_empty());
}

#[test]
fn test_zero_length_run_collapses() {
    assert_eq!(to_interval(&[(3, 3), (3, 3), (3, 3)], 60, 120), vec![(3, 3)]);
}

#[test]
fn test_stationary_segments_are_skipped() {
    let path = [(0, 0), (0, 0), (10, 0), (10, 0), (20, 0)];
    let resampled = to_interval(&path, 10, 10);
    assert_eq!(resampled.first(), Some(&(0, 0)));
    assert_eq!(resampled.last(), Some(&(20, 0)));
}

#[test]
fn test_short_path_keeps_both_ends() {
    // Too short to earn any interior points.
    let resampled = to_interval(&[(0, 0), (1, 0)], 100, 10);
    assert_eq!(resampled, vec![(0, 0), (1, 0)]);
}

#[test]
fn test_diagonal_interpolates_both_axes() {
    let path = [(0, 0), (30, 40)];
    let resampled = to_interval(&path, 50, 3);
    assert_eq!(resampled, vec![(0, 0), (15, 20), (30, 40)]);
}

#[test]
fn test_huge_path_is_capped() {
    let resampled = to_interval(&[(0, 0), (i64::MAX, 0)], 1, 3);
    assert!(resampled.len() <= MAX_RESAMPLED_RUN_POINTS + 1, "got {}", resampled.len());
    assert_eq!(resampled.first(), Some(&(0, 0)));
    assert_eq!(resampled.last(), Some(&(i64::MAX, 0)));
}

// =============================================================================
// TOKEN STREAMS
// =============================================================================

#[test]
fn test_resample_rewrites_runs() {
    let path = straight_line(100);
    let tokens = tokenize(&script(&path)).unwrap();
    let resampled = resample(tokens, 100, 50);

    let calls = mpos_calls(&resampled);
    assert!(calls.len() < 60, "got {}", calls.len());
    assert_eq!(calls.first(), Some(&(0, 0)));
    assert_eq!(calls.last(), Some(&(99, 0)));
    assert!(resampled.last().is_some_and(Token::is_eol));
}

#[test]
fn test_resample_output_parses() {
    let tokens = tokenize(&script(&straight_line(20))).unwrap();
    let program = mighty_parser::parse_tokens(resample(tokens, 20, 40)).unwrap();
    assert!(program.len() > 20);
}

#[test]
fn test_same_rate_is_identity() {
    let tokens = tokenize(&script(&straight_line(10))).unwrap();
    assert_eq!(resample(tokens.clone(), 60, 60), tokens);
}

#[test]
fn test_single_mpos_line_unchanged() {
    let tokens = tokenize("wait(1)\nmpos(10, 20)\nprint(1)").unwrap();
    assert_eq!(resample(tokens.clone(), 100, 50), tokens);
}

#[test]
fn test_other_tokens_pass_through_in_order() {
    let source = "wait(2)\nmpos(0, 0)\nmpos(50, 0)\nmpos(100, 0)\nmclick(\"left\")\nprint(\"done\")";
    let resampled = resample(tokenize(source).unwrap(), 100, 200);

    let text = texts(&resampled);
    assert_eq!(&text[..5], &["wait", "(", "2", ")", "\n"]);
    assert_eq!(
        &text[text.len() - 10..],
        &["mclick", "(", "\"left\"", ")", "\n", "print", "(", "\"done\"", ")", "\n"]
    );
}

#[test]
fn test_chained_mpos_is_not_resampled() {
    let source = "mpos(0, 0)\nmpos(50, 0)\nmpos(100, 0)\n-> mclick(\"left\")";
    let resampled = resample(tokenize(source).unwrap(), 10, 20);

    // The run ends before the chained line, which survives verbatim.
    let text = texts(&resampled);
    assert_eq!(
        &text[text.len() - 13..],
        &["mpos", "(", "100", ",", "0", ")", "\n", "->", "mclick", "(", "\"left\"", ")", "\n"]
    );
    assert!(mighty_parser::parse_tokens(resampled).is_ok());
}

#[test]
fn test_float_coordinates_break_runs() {
    let tokens = Lexer::new("mpos(1.5, 2)\nmpos(3, 4)").tokenize().unwrap();
    assert_eq!(resample(tokens.clone(), 100, 50), tokens);
}

#[test]
fn test_off_screen_run_is_bounded() {
    let tokens = tokenize("mpos(0, 0)\nmpos(9000000000000000000, 0)").unwrap();
    let calls = mpos_calls(&resample(tokens, 1, 3));
    assert!(calls.len() <= MAX_RESAMPLED_RUN_POINTS + 1, "got {}", calls.len());
    assert_eq!(calls.first(), Some(&(0, 0)));
    assert_eq!(calls.last(), Some(&(9_000_000_000_000_000_000, 0)));
}
