// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The external drawing-surface boundary.
//!
//! The engine never talks to a drawing backend directly; it hands a plan to a
//! [`DrawSurface`] through [`emit_plan`]. The surface is assumed
//! single-writer and non-reentrant, driven by one logical caller at a time.

use std::fmt;
use std::path::Path;

use crate::model::{Line, TextBox};

pub mod document;
pub mod emit;
pub mod recording;

pub use document::DocumentScope;
pub use emit::{emit_plan, render_to_surface, EmitError};
pub use recording::{PageSettings, RecordedDocument, RecordingSurface};

/// Failure raised by a drawing backend.
#[derive(Debug)]
pub struct SurfaceError {
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SurfaceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), source: None }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self { message: message.into(), source: Some(Box::new(source)) }
    }
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn std::error::Error + 'static))
    }
}

/// A stateful 2-D vector drawing surface.
///
/// Implementations own document lifecycle: they start from a blank document,
/// receive primitives in emission order, optionally persist to a path, and
/// tear down on [`close`](DrawSurface::close). `save_as` must create the
/// path's parent directory when absent and replace an existing file.
pub trait DrawSurface {
    /// Applies page size and print orientation once, before any primitive.
    fn set_page(&mut self, width: f64, height: f64, landscape: bool) -> Result<(), SurfaceError>;

    fn draw_line(&mut self, line: &Line) -> Result<(), SurfaceError>;

    fn draw_text_box(&mut self, text_box: &TextBox) -> Result<(), SurfaceError>;

    fn save_as(&mut self, path: &Path) -> Result<(), SurfaceError>;

    /// Releases the backend. Called exactly once per document scope, on every
    /// exit path.
    fn close(&mut self);
}
