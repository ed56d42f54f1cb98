// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Unified request aggregation for SalonDesk.
//!
//! This crate is the pure heart of the request queue: it merges booking
//! requests and consultation submissions into one ordered collection,
//! filters it, and partitions it into dashboard buckets. It performs no
//! I/O; fetching and mutation live in the persistence and api crates.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod buckets;
mod filter;
mod merge;

#[cfg(test)]
mod tests;

pub use buckets::{RECENTLY_COMPLETED_WINDOW_HOURS, RequestBuckets, partition_by_bucket};
pub use filter::{FilterCriteria, RequestTypeFilter, filter_requests};
pub use merge::merge_requests;
