// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core value types.
//!
//! Actions are the input side of the engine; drawing primitives are the
//! output side. Both are plain immutable values with serde support.

pub mod action;
pub mod primitive;

pub use action::{ActionPoint, Side, TimeKey};
pub use primitive::{
    ArrowKind, BoxStyle, DrawingPrimitive, FontRun, HorizontalAlign, Line, Point, Rect, TextBox,
    VerticalAlign,
};
