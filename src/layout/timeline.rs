// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::PageExtents;
use crate::model::{ArrowKind, DrawingPrimitive, Line, Point, Rect, TextBox};

/// Axis line weight.
const AXIS_WEIGHT_PT: f64 = 1.5;
/// Left inset of the axis start.
pub(crate) const AXIS_START_X: f64 = 0.5;
/// Font size of the terminal unit label.
const UNIT_LABEL_SIZE_PT: f64 = 14.0;

/// Emits the master horizontal axis plus its terminal `t(s)` unit label.
pub fn build_timeline(extents: &PageExtents) -> Vec<DrawingPrimitive> {
    let axis_y = extents.axis_y();

    let axis = Line {
        from: Point::new(AXIS_START_X, axis_y),
        to: Point::new(extents.line_width(), axis_y),
        weight_pt: AXIS_WEIGHT_PT,
        end_arrow: ArrowKind::Open,
    };

    // Unit label centered just past the arrowhead, half-extent 0.3 each axis.
    let label_x = extents.line_width() + 0.5 - 0.25;
    let label_rect = Rect::new(label_x - 0.3, axis_y - 0.3, label_x + 0.3, axis_y + 0.3);

    vec![
        DrawingPrimitive::Line(axis),
        DrawingPrimitive::TextBox(TextBox::annotation(label_rect, "t(s)", UNIT_LABEL_SIZE_PT)),
    ]
}
