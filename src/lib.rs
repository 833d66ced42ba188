// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Chronogram — deterministic timeline-diagram layout.
//!
//! The engine turns a frozen set of timed open/close actions into a complete
//! 2-D vector drawing plan: page size, the horizontal timeline, per-bucket
//! connectors, stacked mixed-script labels, grouping underlines and
//! sequence/time annotations. Actual drawing happens behind the
//! [`surface::DrawSurface`] boundary.

pub mod layout;
pub mod model;
pub mod plan;
pub mod store;
pub mod surface;
