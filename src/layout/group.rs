// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Per-bucket layout: connectors, stacked label columns, grouping underlines
//! and the sequence/time annotations at the bucket's anchor.

use crate::layout::{text, timeline::AXIS_START_X, LayoutConfig, PageExtents};
use crate::model::{
    ActionPoint, ArrowKind, BoxStyle, DrawingPrimitive, HorizontalAlign, Line, Point, Rect, Side,
    TextBox, VerticalAlign,
};
use crate::store::TimeBucket;

/// Weight of connectors and underlines.
const CONNECTOR_WEIGHT_PT: f64 = 1.3;
/// Vertical reach of a connector away from the axis.
const CONNECTOR_RISE: f64 = 0.5;
/// Gap between the axis and the near edge of a label column.
const LABEL_GAP: f64 = 0.55;
/// Distance from the axis to the far edge of a label column.
const LABEL_STACK_DEPTH: f64 = 5.0;
/// Horizontal span reserved for the anchor annotations.
const ANNOTATION_SPAN: f64 = 5.0;
/// Vertical inset of an annotation's near edge from the axis.
const ANNOTATION_GAP: f64 = 0.03;
/// Vertical extent of an annotation away from the axis.
const ANNOTATION_DEPTH: f64 = 0.3;
const SEQUENCE_SIZE_PT: f64 = 13.0;
const TIME_SIZE_PT: f64 = 10.0;

/// X anchor shared by every action in a bucket.
///
/// Uses the bucket's *minimum* extent, so simultaneous actions with differing
/// lengths still render at one x-coordinate.
pub(crate) fn anchor_x(bucket: &TimeBucket, config: &LayoutConfig) -> f64 {
    bucket.min_length() * config.x_scale + AXIS_START_X
}

/// Lays out one time-key bucket.
///
/// `seq_index` is the bucket's 0-based ordinal in store iteration order; the
/// emitted sequence annotation shows it 1-based.
pub fn layout_group(
    seq_index: usize,
    bucket: &TimeBucket,
    extents: &PageExtents,
    config: &LayoutConfig,
) -> Vec<DrawingPrimitive> {
    let axis_y = extents.axis_y();
    let x = anchor_x(bucket, config);
    let mut primitives = Vec::new();

    for side in [Side::Open, Side::Close] {
        let group = bucket.side_actions(side).collect::<Vec<_>>();
        if group.is_empty() {
            continue;
        }
        layout_side(side, &group, x, axis_y, config, &mut primitives);
    }

    // Sequence ordinal above the axis, time key below, both left-aligned at
    // the anchor.
    let sequence_rect = Rect::new(
        x,
        axis_y + ANNOTATION_GAP,
        x + ANNOTATION_SPAN,
        axis_y + ANNOTATION_DEPTH,
    );
    primitives.push(anchor_annotation(
        sequence_rect,
        format!("({})", seq_index + 1),
        SEQUENCE_SIZE_PT,
    ));

    let time_rect = Rect::new(
        x,
        axis_y - ANNOTATION_DEPTH,
        x + ANNOTATION_SPAN,
        axis_y - ANNOTATION_GAP,
    );
    primitives.push(anchor_annotation(time_rect, format!("{}s", bucket.key()), TIME_SIZE_PT));

    primitives
}

fn layout_side(
    side: Side,
    group: &[&ActionPoint],
    x: f64,
    axis_y: f64,
    config: &LayoutConfig,
    primitives: &mut Vec<DrawingPrimitive>,
) {
    let sign = match side {
        Side::Open => 1.0,
        Side::Close => -1.0,
    };

    // Short connector with the arrowhead on the axis.
    let outer_y = axis_y + sign * CONNECTOR_RISE;
    primitives.push(DrawingPrimitive::Line(Line {
        from: Point::new(x, outer_y),
        to: Point::new(x, axis_y),
        weight_pt: CONNECTOR_WEIGHT_PT,
        end_arrow: ArrowKind::Open,
    }));

    let table_width = config.column_text_width * group.len() as f64;
    let table_left = x - table_width / 2.0;
    let near_y = axis_y + sign * LABEL_GAP;
    let far_y = axis_y + sign * LABEL_STACK_DEPTH;

    for (index, action) in group.iter().enumerate() {
        let left = table_left + config.column_text_width * index as f64;
        let right = table_left + config.column_text_width * (index + 1) as f64;
        let rect = match side {
            Side::Open => Rect::new(left, near_y, right, far_y),
            Side::Close => Rect::new(left, far_y, right, near_y),
        };

        let shaped = text::reflow(action.label());
        let runs = text::size_runs(&shaped);
        primitives.push(DrawingPrimitive::TextBox(TextBox {
            rect,
            text: shaped,
            runs,
            horizontal_align: HorizontalAlign::Center,
            // Text hugs the axis end of the column on both sides.
            vertical_align: match side {
                Side::Open => VerticalAlign::Far,
                Side::Close => VerticalAlign::Near,
            },
            style: BoxStyle::PlainAnnotation,
        }));
    }

    // Underline groups co-located labels; a single label needs none.
    if group.len() > 1 {
        primitives.push(DrawingPrimitive::Line(Line {
            from: Point::new(table_left, outer_y),
            to: Point::new(table_left + table_width, outer_y),
            weight_pt: CONNECTOR_WEIGHT_PT,
            end_arrow: ArrowKind::None,
        }));
    }
}

fn anchor_annotation(rect: Rect, label: String, size_pt: f64) -> DrawingPrimitive {
    let mut text_box = TextBox::annotation(rect, label, size_pt);
    text_box.horizontal_align = HorizontalAlign::Near;
    DrawingPrimitive::TextBox(text_box)
}

#[cfg(test)]
mod tests {
    use super::layout_group;
    use crate::layout::{size_page, LayoutConfig, PageExtents};
    use crate::model::{ArrowKind, DrawingPrimitive, Line, TextBox, TimeKey, VerticalAlign};
    use crate::store::{ActionStore, TimeBucket};

    fn fixture(store: &ActionStore) -> (PageExtents, LayoutConfig) {
        let config = LayoutConfig::default();
        let extents = size_page(store, &config).expect("extents");
        (extents, config)
    }

    fn lines(primitives: &[DrawingPrimitive]) -> Vec<&Line> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    fn text_boxes(primitives: &[DrawingPrimitive]) -> Vec<&TextBox> {
        primitives
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::TextBox(text_box) => Some(text_box),
                _ => None,
            })
            .collect()
    }

    fn bucket<'a>(store: &'a ActionStore, key: &TimeKey) -> &'a TimeBucket {
        store.get(key).expect("bucket")
    }

    #[test]
    fn mixed_bucket_emits_both_sides_at_one_anchor() {
        let mut store = ActionStore::new();
        store.add_action(6, "打开阀门", true, 0.6);
        store.add_action(6, "关闭电动气阀", false, 0.6);
        let (extents, config) = fixture(&store);

        let primitives = layout_group(0, bucket(&store, &TimeKey::from(6)), &extents, &config);

        // Two connectors, no underlines (one label each side).
        let lines = lines(&primitives);
        assert_eq!(lines.len(), 2);
        let anchor = 0.6 * config.x_scale + 0.5;
        let axis_y = extents.axis_y();
        for line in &lines {
            assert_eq!(line.from.x(), anchor);
            assert_eq!(line.to.x(), anchor);
            assert_eq!(line.to.y(), axis_y);
            assert_eq!(line.end_arrow, ArrowKind::Open);
            assert_eq!(line.weight_pt, 1.3);
        }
        assert_eq!(lines[0].from.y(), axis_y + 0.5);
        assert_eq!(lines[1].from.y(), axis_y - 0.5);

        // One label per side plus the two anchor annotations.
        let boxes = text_boxes(&primitives);
        assert_eq!(boxes.len(), 4);
        assert_eq!(boxes[0].text, "打\n开\n阀\n门");
        assert_eq!(boxes[0].vertical_align, VerticalAlign::Far);
        assert_eq!(boxes[1].text, "关\n闭\n电\n动\n气\n阀");
        assert_eq!(boxes[1].vertical_align, VerticalAlign::Near);
        assert_eq!(boxes[2].text, "(1)");
        assert_eq!(boxes[3].text, "6s");
    }

    #[test]
    fn three_simultaneous_opens_share_one_underline() {
        let mut store = ActionStore::new();
        store.add_action(2, "动作甲", true, 0.4);
        store.add_action(2, "动作乙", true, 0.4);
        store.add_action(2, "动作丙", true, 0.4);
        let (extents, config) = fixture(&store);

        let primitives = layout_group(0, bucket(&store, &TimeKey::from(2)), &extents, &config);

        let lines = lines(&primitives);
        // Connector plus underline.
        assert_eq!(lines.len(), 2);
        let underline = lines[1];
        assert_eq!(underline.end_arrow, ArrowKind::None);
        assert!((underline.to.x() - underline.from.x() - 3.0 * config.column_text_width).abs() < 1e-9);
        assert_eq!(underline.from.y(), extents.axis_y() + 0.5);
        assert_eq!(underline.to.y(), extents.axis_y() + 0.5);

        // Three equal-width columns, disjoint-or-touching, centered on the anchor.
        let boxes = text_boxes(&primitives);
        assert_eq!(boxes.len(), 5);
        let columns = &boxes[..3];
        let anchor = 0.4 * config.x_scale + 0.5;
        for pair in columns.windows(2) {
            assert_eq!(pair[0].rect.right(), pair[1].rect.left());
        }
        for column in columns {
            assert!((column.rect.width() - config.column_text_width).abs() < 1e-9);
        }
        let span_center = (columns[0].rect.left() + columns[2].rect.right()) / 2.0;
        assert!((span_center - anchor).abs() < 1e-9);
        assert_eq!(underline.from.x(), columns[0].rect.left());
        assert_eq!(underline.to.x(), columns[2].rect.right());
    }

    #[test]
    fn single_sided_bucket_skips_the_other_side() {
        let mut store = ActionStore::new();
        store.add_action(4, "动作4", false, 0.4);
        let (extents, config) = fixture(&store);

        let primitives = layout_group(2, bucket(&store, &TimeKey::from(4)), &extents, &config);

        let lines = lines(&primitives);
        assert_eq!(lines.len(), 1);
        // Close side reaches below the axis.
        assert_eq!(lines[0].from.y(), extents.axis_y() - 0.5);

        let boxes = text_boxes(&primitives);
        assert_eq!(boxes.len(), 3);
        // Sequence ordinal is 1-based over store iteration order.
        assert_eq!(boxes[1].text, "(3)");
        assert_eq!(boxes[2].text, "4s");
    }

    #[test]
    fn anchor_uses_the_bucket_minimum_extent() {
        let mut store = ActionStore::new();
        store.add_action(8, "关闭电动气阀1", false, 0.8);
        store.add_action(8, "关闭电动气阀2", false, 0.9);
        let (extents, config) = fixture(&store);

        let primitives = layout_group(0, bucket(&store, &TimeKey::from(8)), &extents, &config);

        let connector = lines(&primitives)[0];
        assert_eq!(connector.from.x(), 0.8 * config.x_scale + 0.5);
    }

    #[test]
    fn label_columns_sit_off_the_axis() {
        let mut store = ActionStore::new();
        store.add_action(5, "动作5", true, 0.5);
        let (extents, config) = fixture(&store);

        let primitives = layout_group(0, bucket(&store, &TimeKey::from(5)), &extents, &config);
        let column = text_boxes(&primitives)[0];
        let axis_y = extents.axis_y();

        assert_eq!(column.rect.bottom(), axis_y + 0.55);
        assert_eq!(column.rect.top(), axis_y + 5.0);
        // Runs cover the shaped text, so the inserted breaks size as Latin.
        assert_eq!(column.text, "动\n作\n5");
        assert_eq!(column.runs.len(), 4);
    }

    #[test]
    fn label_time_keys_annotate_verbatim() {
        let mut store = ActionStore::new();
        store.add_action("t1", "这是一个动作2", true, 0.1);
        let (extents, config) = fixture(&store);

        let primitives = layout_group(1, bucket(&store, &TimeKey::from("t1")), &extents, &config);
        let boxes = text_boxes(&primitives);
        assert_eq!(boxes[1].text, "(2)");
        assert_eq!(boxes[2].text, "t1s");
    }
}
