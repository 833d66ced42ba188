// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use crate::layout::LayoutConfig;
use crate::plan::DiagramPlan;
use crate::store::ActionStore;
use crate::surface::{render_to_surface, DrawSurface, EmitError};

/// Scoped handle on one drawing document.
///
/// The surface is acquired for the duration of a build and closed on every
/// exit path, including early return and unwinding, so no live backend
/// connection can leak. Saving happens in [`finish`](DocumentScope::finish);
/// a scope dropped without `finish` discards the document.
#[derive(Debug)]
pub struct DocumentScope<S: DrawSurface> {
    surface: S,
    save_path: Option<PathBuf>,
}

impl<S: DrawSurface> DocumentScope<S> {
    pub fn new(surface: S) -> Self {
        Self { surface, save_path: None }
    }

    pub fn with_save_path(surface: S, path: impl Into<PathBuf>) -> Self {
        Self { surface, save_path: Some(path.into()) }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Builds the plan for `store` and replays it onto the scoped surface.
    pub fn render(
        &mut self,
        store: &ActionStore,
        config: &LayoutConfig,
    ) -> Result<DiagramPlan, EmitError> {
        render_to_surface(store, config, &mut self.surface)
    }

    /// Persists the document when a save path was configured, then lets the
    /// drop glue close the surface.
    pub fn finish(mut self) -> Result<(), EmitError> {
        if let Some(path) = self.save_path.take() {
            self.surface
                .save_as(&path)
                .map_err(|source| EmitError::Save { path, source })?;
        }
        Ok(())
    }
}

impl<S: DrawSurface> Drop for DocumentScope<S> {
    fn drop(&mut self) {
        self.surface.close();
    }
}
