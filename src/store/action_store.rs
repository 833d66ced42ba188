// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::model::{ActionPoint, Side, TimeKey};

/// All actions sharing one time key, in insertion order.
///
/// Invariant: every action in the bucket has `time` equal to the bucket key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBucket {
    key: TimeKey,
    actions: Vec<ActionPoint>,
}

impl TimeBucket {
    pub fn key(&self) -> &TimeKey {
        &self.key
    }

    pub fn actions(&self) -> &[ActionPoint] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Smallest extent in the bucket. The bucket is never empty once created,
    /// so the minimum always exists.
    pub fn min_length(&self) -> f64 {
        self.actions.iter().map(ActionPoint::length).fold(f64::INFINITY, f64::min)
    }

    pub fn has_side(&self, side: Side) -> bool {
        self.actions.iter().any(|action| side.matches(action))
    }

    /// Actions on one side of the timeline, preserving insertion order.
    pub fn side_actions(&self, side: Side) -> impl Iterator<Item = &ActionPoint> {
        self.actions.iter().filter(move |action| side.matches(action))
    }
}

/// Mapping from time key to its bucket of simultaneous actions.
///
/// Buckets appear in first-seen key order; the diagram's sequence numbers
/// follow this order, not sorted time (see DESIGN.md). Grouping is by
/// structural key equality, so `Numeric(3)` and `Label("3")` stay distinct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionStore {
    buckets: Vec<TimeBucket>,
}

impl ActionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one action, creating its bucket on first sight of the key.
    pub fn add_action(
        &mut self,
        time: impl Into<TimeKey>,
        label: impl Into<String>,
        is_open: bool,
        length: f64,
    ) {
        self.push(ActionPoint::new(time, label, is_open, length));
    }

    pub fn push(&mut self, action: ActionPoint) {
        match self.buckets.iter_mut().find(|bucket| bucket.key == *action.time()) {
            Some(bucket) => bucket.actions.push(action),
            None => self.buckets.push(TimeBucket {
                key: action.time().clone(),
                actions: vec![action],
            }),
        }
    }

    /// Buckets in first-seen key order.
    pub fn buckets(&self) -> &[TimeBucket] {
        &self.buckets
    }

    pub fn get(&self, key: &TimeKey) -> Option<&TimeBucket> {
        self.buckets.iter().find(|bucket| bucket.key == *key)
    }

    /// Number of distinct time keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of actions across all buckets.
    pub fn action_count(&self) -> usize {
        self.buckets.iter().map(TimeBucket::len).sum()
    }

    /// Largest extent over all actions, or `None` when the store is empty.
    pub fn max_length(&self) -> Option<f64> {
        let mut max = None::<f64>;
        for bucket in &self.buckets {
            for action in &bucket.actions {
                max = Some(match max {
                    Some(current) => current.max(action.length()),
                    None => action.length(),
                });
            }
        }
        max
    }
}
