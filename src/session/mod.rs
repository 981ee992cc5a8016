// ABOUTME: Session layer owning result snapshots and enrichment orchestration
// ABOUTME: Reducer-style accumulator with submission-id staleness guarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Solstice Life Stats

//! # Session Layer
//!
//! One active profile per session. A submission computes the deterministic
//! parts synchronously, stores an immediately-readable snapshot, and spawns
//! the four primary narrative producers concurrently. Each resolution arrives
//! as a discrete [`report::EnrichmentUpdate`] event, merged into the snapshot
//! by a single reducer task, never by in-place mutation from the producers
//! themselves. Updates carry the submission id they belong to; a resubmission
//! rotates the id, so late resolutions for a superseded profile are dropped
//! instead of contaminating the fresh snapshot.

/// Result snapshot and reducer update events
pub mod report;

/// Session store and submission orchestration
pub mod manager;

pub use manager::SessionManager;
pub use report::{EnrichmentUpdate, LifeReport};
