// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout components for the two-sided timeline archetype.
//!
//! Everything in this module is pure: given frozen input and a config it
//! computes the same primitives every time.

pub mod group;
pub mod page;
pub mod text;
pub mod timeline;

pub use group::layout_group;
pub use page::{size_page, EmptyStoreError, PageExtents};
pub use text::{is_cjk, reflow, reflow_lines, size_runs};
pub use timeline::build_timeline;

/// Process-local layout tunables, frozen for the duration of one build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Time-to-length multiplier along the axis.
    pub x_scale: f64,
    /// Width of one stacked label column.
    pub column_text_width: f64,
    /// Page edge used when the store is empty and nothing can be derived.
    pub default_page_size: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { x_scale: 5.0, column_text_width: 0.35, default_page_size: 20.0 }
    }
}
