// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Chronogram-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Chronogram and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grouped storage for timed actions.
//!
//! The store buckets actions by time key and preserves both first-seen bucket
//! order and insertion order within a bucket; sequence numbering in the
//! emitted diagram depends on it.

pub mod action_store;

pub use action_store::{ActionStore, TimeBucket};
