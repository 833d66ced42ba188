// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Grouping key for simultaneous actions.
///
/// Source data mixes numeric instants (`6`, `0.1`) with opaque labels
/// (`"t1"`), so the key is a variant over both. Keys compare structurally by
/// `(kind, value)`: a numeric key and a label key never merge, even when they
/// print the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TimeKey {
    Numeric(f64),
    Label(String),
}

impl TimeKey {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }
}

impl fmt::Display for TimeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => {
                // Integral instants print without a fractional part (`6s`,
                // not `6.0s`), matching the source data's annotations.
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{value}")
                }
            }
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<f64> for TimeKey {
    fn from(value: f64) -> Self {
        Self::Numeric(value)
    }
}

impl From<i64> for TimeKey {
    fn from(value: i64) -> Self {
        Self::Numeric(value as f64)
    }
}

impl From<&str> for TimeKey {
    fn from(value: &str) -> Self {
        Self::Label(value.to_owned())
    }
}

impl From<String> for TimeKey {
    fn from(value: String) -> Self {
        Self::Label(value)
    }
}

/// Which side of the timeline an action renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Above the axis.
    Open,
    /// Below the axis.
    Close,
}

impl Side {
    pub fn matches(self, action: &ActionPoint) -> bool {
        match self {
            Self::Open => action.is_open(),
            Self::Close => !action.is_open(),
        }
    }
}

/// One timed action: an immutable value appended to the store by the caller.
///
/// The engine assumes a pre-validated action set; the ingestion layer must
/// drop rows with negative or unparsable lengths before they reach here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionPoint {
    time: TimeKey,
    label: String,
    is_open: bool,
    length: f64,
}

impl ActionPoint {
    pub fn new(
        time: impl Into<TimeKey>,
        label: impl Into<String>,
        is_open: bool,
        length: f64,
    ) -> Self {
        debug_assert!(
            length.is_finite() && length >= 0.0,
            "action length must be a non-negative finite number"
        );
        Self { time: time.into(), label: label.into(), is_open, length }
    }

    pub fn time(&self) -> &TimeKey {
        &self.time
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn length(&self) -> f64 {
        self.length
    }
}
