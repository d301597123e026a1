//! Tempograph turns a stream of dated adjacency snapshots into temporal co-presence graphs and
//! reports structural metrics of those graphs. Nodes active in the same snapshot are tied to each
//! other; the ties of all snapshots inside a trailing window of years are merged into one graph
//! whose edges remember when they were first seen. Metrics cover the whole graph as well as its
//! largest connected component.

// Enable warnings for all clippy lints. This automatically enables new lints shipped with new rust
// versions.
#![warn(
    clippy::correctness,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::cargo,
    clippy::restriction
)]
// Now selectively disable unneeded lints.
#![allow(
    clippy::indexing_slicing,               // Allow `vec[i]` indexing.
    clippy::module_name_repetitions,        // Allow.
    clippy::use_debug,                      // Allow.
    clippy::float_arithmetic,               // Allow.
    clippy::integer_arithmetic,             // Allow.
    clippy::integer_division,               // Allow.
    clippy::implicit_return,                // Allow.
    clippy::use_self,                       // Allow.
    clippy::shadow_same,                    // Allow.
    clippy::too_many_lines,                 // Allow.
    clippy::multiple_crate_versions,        // Disabled.
    clippy::missing_docs_in_private_items,  // Disabled.
    clippy::missing_errors_doc,             // Disabled.
    clippy::missing_inline_in_public_items, // Disabled.
    clippy::unknown_clippy_lints,           // To enable naming new lints added to nightly.
    clippy::result_expect_used,             // Should use `expect` rather than `unwrap`.
    clippy::option_expect_used,             // Should use `expect` rather than `unwrap`.
    clippy::must_use_candidate,             // Allow.
    clippy::inline_always,                  // Allow.
    clippy::as_conversions,                 // Allow but only when absolutely necessary.
    clippy::float_cmp,                      // NaN checks go through `is_nan`.
    clippy::implicit_hasher                 // Default hasher is fine for now.
)]
// Do not allow print statements. Use `log::info!()` or equivalent instead.
#![deny(clippy::print_stdout)]

pub mod analysis;
pub mod error;
pub mod metrics;
pub mod snapshot;
pub mod temporal;
pub mod util;


#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate derive_new;

pub use crate::analysis::{run_analysis, AnalysisConfig};
pub use crate::error::TGError;
pub use crate::metrics::{evaluate_metrics, Metric, MetricsTable};
pub use crate::snapshot::{incident_nodes, Snapshot, SnapshotCollection, SnapshotInput};
pub use crate::temporal::{aggregate_edges, build_temporal_graph, TemporalGraph};
