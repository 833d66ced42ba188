// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawing primitives and their style vocabulary.
//!
//! Coordinates are absolute canvas positions in the same length unit as
//! action extents, with `y` growing upward. Primitives are produced by the
//! layout components and never mutated after creation.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Axis-aligned rectangle with `bottom <= top`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
}

impl Rect {
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        debug_assert!(left <= right && bottom <= top, "rect corners out of order");
        Self { left, bottom, right, top }
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Terminal decoration of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArrowKind {
    None,
    Open,
    Filled,
}

/// The two style presets used across the diagram.
///
/// `PlainAnnotation` is the transparent aesthetic: fill off, border off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxStyle {
    PlainAnnotation,
    Filled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HorizontalAlign {
    Near,
    Center,
    Far,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerticalAlign {
    Near,
    Center,
    Far,
}

/// Constant font size over a half-open character-index range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontRun {
    start: usize,
    end: usize,
    size_pt: f64,
}

impl FontRun {
    pub fn new(start: usize, end: usize, size_pt: f64) -> Self {
        debug_assert!(start < end, "font run must be non-empty");
        Self { start, end, size_pt }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn size_pt(&self) -> f64 {
        self.size_pt
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub weight_pt: f64,
    pub end_arrow: ArrowKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub rect: Rect,
    pub text: String,
    pub runs: Vec<FontRun>,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub style: BoxStyle,
}

impl TextBox {
    /// Borderless, unfilled box with a single uniform-size run.
    pub fn annotation(rect: Rect, text: impl Into<String>, size_pt: f64) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        let runs = if char_count == 0 {
            Vec::new()
        } else {
            vec![FontRun::new(0, char_count, size_pt)]
        };
        Self {
            rect,
            text,
            runs,
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Center,
            style: BoxStyle::PlainAnnotation,
        }
    }
}

/// One atomic drawing instruction in the emitted plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawingPrimitive {
    Line(Line),
    TextBox(TextBox),
}
