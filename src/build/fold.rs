//! Datum line folding.

/// Maximum number of Unicode code points per physical line.
pub const FOLD_WIDTH: usize = 75;

/// Folds a fully rendered `NAME;attrs:value` line for output.
///
/// The line is cut into runs of at most [`FOLD_WIDTH`] code points joined by
/// a newline plus exactly one space (the continuation marker), and the whole
/// datum is terminated with a trailing newline. Counting code points rather
/// than bytes keeps a fold from landing inside a multi-byte character.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / FOLD_WIDTH * 2 + 1);
    for (i, c) in line.chars().enumerate() {
        if i > 0 && i % FOLD_WIDTH == 0 {
            out.push_str("\n ");
        }
        out.push(c);
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_gets_only_trailing_newline() {
        assert_eq!(fold_line("FN:Forrest Gump"), "FN:Forrest Gump\n");
    }

    #[test]
    fn exactly_75_code_points_is_not_folded() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), format!("{line}\n"));
    }

    #[test]
    fn fold_at_75_code_points() {
        let line = "X".repeat(76);
        assert_eq!(fold_line(&line), format!("{}\n X\n", "X".repeat(75)));
    }

    #[test]
    fn long_line_folds_repeatedly() {
        let line = "X".repeat(200);
        let folded = fold_line(&line);
        assert_eq!(folded.matches("\n ").count(), 2);
        let first: &str = folded.split('\n').next().unwrap();
        assert_eq!(first.chars().count(), 75);
    }

    #[test]
    fn fold_counts_code_points_not_bytes() {
        // 80 three-byte characters; byte counting would fold far earlier.
        let line = "日".repeat(80);
        let folded = fold_line(&line);
        let segments: Vec<&str> = folded.trim_end_matches('\n').split("\n ").collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].chars().count(), 75);
        assert_eq!(segments[1].chars().count(), 5);
    }
}
