//! LCS line diffing and paired display layout.
//!
//! [`diff_lines`] computes a minimal line-level diff via the classic
//! longest-common-subsequence table; [`interleave_diff`] lays the flat
//! diff out so removed/added runs render as aligned left/right rows.

use serde::{Deserialize, Serialize};

/// Line number carried by padding entries inserted while pairing runs.
pub const PADDING_LINE_NUMBER: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    Added,
    Removed,
    Unchanged,
}

/// One line of a computed diff.
///
/// `line_number` is the 1-based position within the line's own text
/// (original for removed/unchanged, updated for added), or
/// [`PADDING_LINE_NUMBER`] on padding entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    pub kind: DiffKind,
    pub text: String,
    pub line_number: i32,
}

/// Compute a flat line diff between `original` and `updated`.
pub fn diff_lines(original: &str, updated: &str) -> Vec<DiffLine> {
    let original_lines = split_lines(original);
    let updated_lines = split_lines(updated);
    let original_len = original_lines.len();
    let updated_len = updated_lines.len();

    let mut lcs = vec![vec![0u32; updated_len + 1]; original_len + 1];
    for i in 1..=original_len {
        for j in 1..=updated_len {
            if original_lines[i - 1] == updated_lines[j - 1] {
                lcs[i][j] = lcs[i - 1][j - 1] + 1;
            } else {
                lcs[i][j] = lcs[i - 1][j].max(lcs[i][j - 1]);
            }
        }
    }

    // Backtrack from the far corner; ties prefer `added` so runs come
    // out in removed-then-added order after the final reverse.
    let mut diff = Vec::with_capacity(original_len.max(updated_len));
    let mut i = original_len;
    let mut j = updated_len;
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original_lines[i - 1] == updated_lines[j - 1] {
            diff.push(DiffLine {
                kind: DiffKind::Unchanged,
                text: original_lines[i - 1].to_string(),
                line_number: i as i32,
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || lcs[i][j - 1] >= lcs[i - 1][j]) {
            diff.push(DiffLine {
                kind: DiffKind::Added,
                text: updated_lines[j - 1].to_string(),
                line_number: j as i32,
            });
            j -= 1;
        } else {
            diff.push(DiffLine {
                kind: DiffKind::Removed,
                text: original_lines[i - 1].to_string(),
                line_number: i as i32,
            });
            i -= 1;
        }
    }
    diff.reverse();
    diff
}

/// Lay a flat diff out for two-column rendering.
///
/// Each run of removed lines is paired row-by-row with the added run
/// that immediately follows it, the shorter run padded with empty
/// entries. Unchanged lines pass through and close any pairing window.
pub fn interleave_diff(flat: &[DiffLine]) -> Vec<DiffLine> {
    let mut out = Vec::with_capacity(flat.len());
    let mut i = 0;
    while i < flat.len() {
        if flat[i].kind != DiffKind::Removed {
            out.push(flat[i].clone());
            i += 1;
            continue;
        }

        let removed_start = i;
        while i < flat.len() && flat[i].kind == DiffKind::Removed {
            i += 1;
        }
        let removed = &flat[removed_start..i];

        let added_start = i;
        while i < flat.len() && flat[i].kind == DiffKind::Added {
            i += 1;
        }
        let added = &flat[added_start..i];

        for row in 0..removed.len().max(added.len()) {
            match removed.get(row) {
                Some(line) => out.push(line.clone()),
                None => out.push(padding(DiffKind::Removed)),
            }
            match added.get(row) {
                Some(line) => out.push(line.clone()),
                None => out.push(padding(DiffKind::Added)),
            }
        }
    }
    out
}

fn padding(kind: DiffKind) -> DiffLine {
    DiffLine {
        kind,
        text: String::new(),
        line_number: PADDING_LINE_NUMBER,
    }
}

/// Split into lines, dropping the empty element a trailing newline
/// produces so it does not diff as a phantom line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}
