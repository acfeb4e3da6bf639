// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Simulated data sources: study presence, sound tracks, and stamps.
//!
//! Everything in here is a stand-in for a real backend. The rest of the
//! application consumes these as opaque, already-materialized values so the
//! core state machines never depend on randomness.

pub mod sound;
pub mod stamps;
pub mod users;
