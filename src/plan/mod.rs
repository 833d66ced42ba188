// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plan aggregation: page sizing, then the timeline, then one group layout
//! per bucket, concatenated in emission order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::layout::{build_timeline, layout_group, size_page, LayoutConfig};
use crate::model::DrawingPrimitive;
use crate::store::ActionStore;

/// The complete drawing plan for one diagram.
///
/// Primitive order is significant: consumers that draw progressively must
/// replay it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramPlan {
    page_width: f64,
    page_height: f64,
    primitives: Vec<DrawingPrimitive>,
}

impl DiagramPlan {
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    pub fn primitives(&self) -> &[DrawingPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawingPrimitive> {
        self.primitives
    }
}

/// Computes the full drawing plan for the store's actions.
///
/// An empty store yields the fixed default canvas with nothing on it; any
/// non-empty store sizes the page from content, then emits the timeline and
/// every bucket in store iteration order with 0-based sequence indices.
pub fn build_plan(store: &ActionStore, config: &LayoutConfig) -> DiagramPlan {
    let Ok(extents) = size_page(store, config) else {
        debug!("empty action store; using default canvas");
        return DiagramPlan {
            page_width: config.default_page_size,
            page_height: config.default_page_size,
            primitives: Vec::new(),
        };
    };

    let mut primitives = build_timeline(&extents);
    for (seq_index, bucket) in store.buckets().iter().enumerate() {
        primitives.extend(layout_group(seq_index, bucket, &extents, config));
    }

    debug!(
        buckets = store.len(),
        actions = store.action_count(),
        primitives = primitives.len(),
        "built diagram plan"
    );

    DiagramPlan { page_width: extents.width(), page_height: extents.height(), primitives }
}

#[cfg(test)]
mod tests {
    use super::build_plan;
    use crate::layout::LayoutConfig;
    use crate::model::DrawingPrimitive;
    use crate::store::ActionStore;

    fn sample_store() -> ActionStore {
        let mut store = ActionStore::new();
        store.add_action(0.1, "DQ11打开", true, 0.0);
        store.add_action("t1", "这是一个动作2", true, 0.1);
        store.add_action(3, "动作3", true, 0.3);
        store.add_action(6, "打开阀门", true, 0.6);
        store.add_action(6, "关闭电动气阀", false, 0.6);
        store
    }

    fn annotation_texts(plan: &super::DiagramPlan) -> Vec<String> {
        plan.primitives()
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::TextBox(b) if b.text.starts_with('(') => Some(b.text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_store_yields_default_canvas_with_no_primitives() {
        let plan = build_plan(&ActionStore::new(), &LayoutConfig::default());
        assert_eq!(plan.page_width(), 20.0);
        assert_eq!(plan.page_height(), 20.0);
        assert!(plan.primitives().is_empty());
    }

    #[test]
    fn build_is_deterministic() {
        let store = sample_store();
        let config = LayoutConfig::default();
        assert_eq!(build_plan(&store, &config), build_plan(&store, &config));
    }

    #[test]
    fn canvas_is_square_and_floored() {
        let store = sample_store();
        let config = LayoutConfig::default();
        let plan = build_plan(&store, &config);

        assert_eq!(plan.page_width(), plan.page_height());
        // All lengths < 1, so the 1-unit floor applies.
        assert!(plan.page_width() >= config.x_scale * 1.25 + 2.0);
    }

    #[test]
    fn sequence_numbers_follow_first_seen_bucket_order() {
        let mut store = ActionStore::new();
        // Keys deliberately out of time order.
        store.add_action(8, "关闭电动气阀1", false, 0.8);
        store.add_action(3, "动作3", true, 0.3);
        store.add_action("t1", "这是一个动作2", true, 0.1);
        store.add_action(3, "动作3b", true, 0.3);

        let plan = build_plan(&store, &LayoutConfig::default());
        assert_eq!(annotation_texts(&plan), vec!["(1)", "(2)", "(3)"]);

        // Time annotations pair up with the ordinals in the same order.
        let time_texts = plan
            .primitives()
            .iter()
            .filter_map(|p| match p {
                DrawingPrimitive::TextBox(b) if b.text.ends_with('s') => Some(b.text.clone()),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(time_texts, vec!["8s", "3s", "t1s"]);
    }

    #[test]
    fn timeline_comes_first_then_buckets_in_order() {
        let plan = build_plan(&sample_store(), &LayoutConfig::default());

        let DrawingPrimitive::Line(axis) = &plan.primitives()[0] else {
            panic!("expected the axis first");
        };
        assert_eq!(axis.weight_pt, 1.5);
        let DrawingPrimitive::TextBox(unit) = &plan.primitives()[1] else {
            panic!("expected the unit label second");
        };
        assert_eq!(unit.text, "t(s)");
    }
}
