// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::LayoutConfig;
use crate::store::ActionStore;

/// Arrowhead overshoot added to the longest extent before scaling.
const AXIS_OVERSHOOT: f64 = 0.25;
/// Margin on each side of the axis for index/label overflow.
const PAGE_MARGIN: f64 = 1.0;

/// Canvas extents derived once per diagram, then frozen.
///
/// Invariant: the page is square (`width == height`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageExtents {
    line_width: f64,
    width: f64,
    height: f64,
}

impl PageExtents {
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Vertical position of the timeline axis.
    pub fn axis_y(&self) -> f64 {
        self.height / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStoreError;

impl fmt::Display for EmptyStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot size a page for an empty action store")
    }
}

impl std::error::Error for EmptyStoreError {}

/// Derives the canvas size from the longest action extent.
///
/// The extent is floored at one length unit so an all-zero-length action set
/// does not collapse the canvas.
pub fn size_page(
    store: &ActionStore,
    config: &LayoutConfig,
) -> Result<PageExtents, EmptyStoreError> {
    let max_extent = store.max_length().ok_or(EmptyStoreError)?.max(1.0);
    let line_width = config.x_scale * (max_extent + AXIS_OVERSHOOT);
    let width = line_width + 2.0 * PAGE_MARGIN;
    Ok(PageExtents { line_width, width, height: width })
}
