// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mixed-script text shaping for label columns.
//!
//! Label columns are narrow, so CJK ideographs render one per display line
//! while Latin text and digits stay on a single line at a smaller size.

use crate::model::FontRun;

/// Font size for CJK Unified Ideographs.
pub const CJK_SIZE_PT: f64 = 9.0;
/// Font size for everything else (Latin, digits, punctuation).
pub const LATIN_SIZE_PT: f64 = 7.0;

/// Whether `ch` falls in the CJK Unified Ideographs block (U+4E00–U+9FFF).
pub fn is_cjk(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&ch)
}

/// Inserts a line break after every CJK ideograph except the final character
/// of the string. Non-CJK characters never trigger a break, which keeps
/// trailing punctuation attached to the preceding line and avoids a lone
/// trailing break.
pub fn reflow(text: &str) -> String {
    let char_count = text.chars().count();
    let mut out = String::with_capacity(text.len() + char_count);
    for (index, ch) in text.chars().enumerate() {
        out.push(ch);
        if is_cjk(ch) && index + 1 != char_count {
            out.push('\n');
        }
    }
    out
}

/// The same split as [`reflow`], returned as display lines. Empty text yields
/// no lines.
pub fn reflow_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    reflow(text).split('\n').map(str::to_owned).collect()
}

/// Per-character font sizing: CJK at [`CJK_SIZE_PT`], everything else at
/// [`LATIN_SIZE_PT`], merged into maximal constant-size runs over character
/// indices.
pub fn size_runs(text: &str) -> Vec<FontRun> {
    let mut runs = Vec::new();
    let mut current: Option<(usize, usize, f64)> = None;

    for (index, ch) in text.chars().enumerate() {
        let size_pt = if is_cjk(ch) { CJK_SIZE_PT } else { LATIN_SIZE_PT };
        current = Some(match current {
            Some((start, _, run_size)) if run_size == size_pt => (start, index + 1, run_size),
            Some((start, end, run_size)) => {
                runs.push(FontRun::new(start, end, run_size));
                (index, index + 1, size_pt)
            }
            None => (index, index + 1, size_pt),
        });
    }

    if let Some((start, end, size_pt)) = current {
        runs.push(FontRun::new(start, end, size_pt));
    }
    runs
}
