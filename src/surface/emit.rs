// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::path::PathBuf;

use tracing::error;

use crate::layout::LayoutConfig;
use crate::model::DrawingPrimitive;
use crate::plan::{build_plan, DiagramPlan};
use crate::store::ActionStore;
use crate::surface::{DrawSurface, SurfaceError};

#[derive(Debug)]
pub enum EmitError {
    Page {
        source: SurfaceError,
    },
    Primitive {
        index: usize,
        source: SurfaceError,
    },
    Save {
        path: PathBuf,
        source: SurfaceError,
    },
}

impl EmitError {
    pub fn source_error(&self) -> &SurfaceError {
        match self {
            Self::Page { source } | Self::Primitive { source, .. } | Self::Save { source, .. } => {
                source
            }
        }
    }
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page { .. } => write!(f, "surface rejected the page setup"),
            Self::Primitive { index, .. } => {
                write!(f, "surface rejected primitive {index}")
            }
            Self::Save { path, .. } => write!(f, "surface failed to save to {}", path.display()),
        }
    }
}

impl std::error::Error for EmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source_error())
    }
}

/// Replays a plan onto a surface: page setup once (landscape), then every
/// primitive in emission order. The first failure aborts; already-emitted
/// primitives are not rolled back.
pub fn emit_plan<S: DrawSurface + ?Sized>(
    surface: &mut S,
    plan: &DiagramPlan,
) -> Result<(), EmitError> {
    surface
        .set_page(plan.page_width(), plan.page_height(), true)
        .map_err(|source| EmitError::Page { source })?;

    for (index, primitive) in plan.primitives().iter().enumerate() {
        match primitive {
            DrawingPrimitive::Line(line) => surface.draw_line(line),
            DrawingPrimitive::TextBox(text_box) => surface.draw_text_box(text_box),
        }
        .map_err(|source| EmitError::Primitive { index, source })?;
    }

    Ok(())
}

/// Best-effort top-level build: computes the plan and replays it.
///
/// On surface failure the partially drawn document is abandoned and the
/// caller learns only that the build did not complete cleanly; its output is
/// undefined and should be discarded.
pub fn render_to_surface<S: DrawSurface + ?Sized>(
    store: &ActionStore,
    config: &LayoutConfig,
    surface: &mut S,
) -> Result<DiagramPlan, EmitError> {
    let plan = build_plan(store, config);
    if let Err(emit_error) = emit_plan(surface, &plan) {
        error!(%emit_error, "diagram emission failed; abandoning partially drawn document");
        return Err(emit_error);
    }
    Ok(plan)
}
