// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{DrawingPrimitive, Line, TextBox};
use crate::surface::{DrawSurface, SurfaceError};

/// Page size and orientation as applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    width: f64,
    height: f64,
    landscape: bool,
}

impl PageSettings {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn landscape(&self) -> bool {
        self.landscape
    }
}

/// A drawn document as captured by [`RecordingSurface`]: the page settings
/// plus every primitive in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedDocument {
    page: Option<PageSettings>,
    primitives: Vec<DrawingPrimitive>,
}

impl RecordedDocument {
    pub fn page(&self) -> Option<&PageSettings> {
        self.page.as_ref()
    }

    pub fn primitives(&self) -> &[DrawingPrimitive] {
        &self.primitives
    }
}

/// In-memory reference surface.
///
/// Records everything it is asked to draw; `save_as` persists the recorded
/// document as pretty JSON, creating the parent directory when absent and
/// replacing any existing file. Fault injection via
/// [`failing_after`](RecordingSurface::failing_after) exercises the engine's
/// abort-on-failure policy.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    page: Option<PageSettings>,
    primitives: Vec<DrawingPrimitive>,
    ops: usize,
    fail_from_op: Option<usize>,
    closed: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// A surface whose operations fail starting with the `limit`-th one.
    /// Page setup counts as the first operation, so `failing_after(0)`
    /// rejects everything.
    pub fn failing_after(limit: usize) -> Self {
        Self { fail_from_op: Some(limit), ..Self::default() }
    }

    pub fn page(&self) -> Option<&PageSettings> {
        self.page.as_ref()
    }

    pub fn primitives(&self) -> &[DrawingPrimitive] {
        &self.primitives
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn to_document(&self) -> RecordedDocument {
        RecordedDocument { page: self.page, primitives: self.primitives.clone() }
    }

    /// Loads a document previously written by `save_as`.
    pub fn load_document(path: &Path) -> Result<RecordedDocument, SurfaceError> {
        let json = fs::read_to_string(path).map_err(|source| {
            SurfaceError::with_source(format!("read {}", path.display()), source)
        })?;
        serde_json::from_str(&json).map_err(|source| {
            SurfaceError::with_source(format!("parse {}", path.display()), source)
        })
    }

    fn begin_op(&mut self) -> Result<(), SurfaceError> {
        let op = self.ops;
        self.ops += 1;
        match self.fail_from_op {
            Some(limit) if op >= limit => Err(SurfaceError::new("injected surface failure")),
            _ => Ok(()),
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn set_page(&mut self, width: f64, height: f64, landscape: bool) -> Result<(), SurfaceError> {
        self.begin_op()?;
        self.page = Some(PageSettings { width, height, landscape });
        Ok(())
    }

    fn draw_line(&mut self, line: &Line) -> Result<(), SurfaceError> {
        self.begin_op()?;
        self.primitives.push(DrawingPrimitive::Line(line.clone()));
        Ok(())
    }

    fn draw_text_box(&mut self, text_box: &TextBox) -> Result<(), SurfaceError> {
        self.begin_op()?;
        self.primitives.push(DrawingPrimitive::TextBox(text_box.clone()));
        Ok(())
    }

    fn save_as(&mut self, path: &Path) -> Result<(), SurfaceError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| {
                    SurfaceError::with_source(format!("create {}", parent.display()), source)
                })?;
            }
        }

        let json = serde_json::to_string_pretty(&self.to_document())
            .map_err(|source| SurfaceError::with_source("serialize recorded document", source))?;
        // fs::write truncates, so an existing file is replaced, not versioned.
        fs::write(path, json).map_err(|source| {
            SurfaceError::with_source(format!("write {}", path.display()), source)
        })
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
