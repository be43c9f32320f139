//! # Trajectory Resampler
//!
//! Re-times recorded mouse paths for a different tick rate.
//!
//! A recording emits one `mpos(x, y)` line per tick. Played back at another
//! rate, those lines would move the cursor faster or slower than the user
//! did. The resampler treats each run of consecutive `mpos` lines as a
//! polyline and redistributes points evenly along its arc length, then
//! splices the new `mpos` lines back into the token stream.
//!
//! Only whole lines of the exact form `mpos(INT, INT)` join a run. A line
//! that continues into a `->` chain is left alone so same-tick groups keep
//! their meaning.
//!
//! ## Example
//!
//! ```rust
//! use mighty_engine::resample::to_interval;
//!
//! let path: Vec<(i64, i64)> = (0..100).map(|x| (x, 0)).collect();
//! let halved = to_interval(&path, 100, 50);
//! assert_eq!(halved.first(), Some(&(0, 0)));
//! assert_eq!(halved.last(), Some(&(99, 0)));
//! assert!(halved.len() < path.len());
//! ```

use config::constants::MAX_RESAMPLED_RUN_POINTS;
use glam::DVec2;
use mighty_parser::{Span, Spanned, Token, TokenKind};
use tracing::debug;

#[cfg(test)]
mod tests;

/// Screen position in pixels.
pub type Point = (i64, i64);

/// Resample every `mpos` run in a token stream.
///
/// Tokens outside runs pass through untouched and in order. Runs of a
/// single line are kept as written.
pub fn resample(tokens: Vec<Token>, recorded_tps: u32, target_tps: u32) -> Vec<Token> {
    if recorded_tps == 0 || recorded_tps == target_tps {
        return tokens;
    }

    let lines: Vec<&[Token]> = tokens.split_inclusive(|t| t.is_eol()).collect();
    let mut out = Vec::with_capacity(tokens.len());
    let mut run: Vec<(Point, &[Token])> = Vec::new();

    for (index, &line) in lines.iter().enumerate() {
        let chained = lines
            .get(index + 1)
            .and_then(|next| next.first())
            .is_some_and(|first| first.kind == TokenKind::Next);

        match mpos_point(line) {
            Some(point) if !chained => run.push((point, line)),
            _ => {
                flush_run(&mut run, recorded_tps, target_tps, &mut out);
                out.extend_from_slice(line);
            }
        }
    }
    flush_run(&mut run, recorded_tps, target_tps, &mut out);

    out
}

/// Redistribute points evenly along a polyline.
///
/// The target count is `floor(arc_length / old * new)`, capped at
/// [`MAX_RESAMPLED_RUN_POINTS`], and the spacing is
/// `arc_length / (count - 1)`. Interpolated coordinates are truncated to
/// whole pixels. The final original point is always the last point
/// returned. Fewer than two points are returned unchanged; a path of zero
/// length collapses to its single point.
pub fn to_interval(points: &[Point], old: u32, new: u32) -> Vec<Point> {
    if points.len() < 2 || old == 0 {
        return points.to_vec();
    }
    let last = points[points.len() - 1];

    let path: Vec<DVec2> = points
        .iter()
        .map(|&(x, y)| DVec2::new(x as f64, y as f64))
        .collect();

    let mut dists = Vec::with_capacity(path.len());
    let mut total = 0.0;
    dists.push(total);
    for pair in path.windows(2) {
        total += pair[0].distance(pair[1]);
        dists.push(total);
    }

    if total == 0.0 {
        return vec![last];
    }

    let num_points = (total / f64::from(old) * f64::from(new))
        .floor()
        .min(MAX_RESAMPLED_RUN_POINTS as f64) as usize;
    let step = if num_points > 1 {
        total / (num_points - 1) as f64
    } else {
        total
    };

    let mut out = Vec::with_capacity(num_points.saturating_add(1));
    let mut cursor = 0.0;
    for i in 1..path.len() {
        let (start, end) = (dists[i - 1], dists[i]);
        let length = end - start;
        while cursor <= end {
            let t = if length > 0.0 {
                (cursor - start) / length
            } else {
                0.0
            };
            let p = path[i - 1].lerp(path[i], t);
            out.push((p.x as i64, p.y as i64));
            cursor += step;
        }
    }

    if out.last() != Some(&last) {
        out.push(last);
    }
    out
}

/// Coordinates of a line that is exactly `mpos(INT, INT)`.
fn mpos_point(line: &[Token]) -> Option<Point> {
    let call = match line {
        [call @ .., eol] if eol.is_eol() => call,
        _ => line,
    };

    match call {
        [name, open, x, comma, y, close]
            if name.is_identifier("mpos")
                && open.kind == TokenKind::LParen
                && comma.kind == TokenKind::Comma
                && close.kind == TokenKind::RParen =>
        {
            Some((coordinate(x)?, coordinate(y)?))
        }
        _ => None,
    }
}

fn coordinate(token: &Token) -> Option<i64> {
    if token.kind != TokenKind::Number || !token.text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.text.parse().ok()
}

/// Emit the resampled form of a finished run and clear it.
fn flush_run(run: &mut Vec<(Point, &[Token])>, old: u32, new: u32, out: &mut Vec<Token>) {
    if run.len() < 2 {
        for (_, line) in run.drain(..) {
            out.extend_from_slice(line);
        }
        return;
    }

    let points: Vec<Point> = run.iter().map(|(point, _)| *point).collect();
    let span = run
        .first()
        .and_then(|(_, line)| line.first())
        .map(Spanned::span)
        .unwrap_or_default();
    let resampled = to_interval(&points, old, new);
    debug!(before = points.len(), after = resampled.len(), "resampled mpos run");

    for point in resampled {
        push_mpos(out, point, span);
    }
    run.clear();
}

/// Append `mpos ( x , y ) EOL`.
fn push_mpos(out: &mut Vec<Token>, (x, y): Point, span: Span) {
    out.extend([
        Token::new(TokenKind::Identifier, "mpos", span),
        Token::new(TokenKind::LParen, "(", span),
        Token::new(TokenKind::Number, x.to_string(), span),
        Token::new(TokenKind::Comma, ",", span),
        Token::new(TokenKind::Number, y.to_string(), span),
        Token::new(TokenKind::RParen, ")", span),
        Token::new(TokenKind::Eol, "\n", span),
    ]);
}
