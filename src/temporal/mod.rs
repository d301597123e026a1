//! Aggregation of snapshot streams into undirected graphs.
//!
//! Both aggregations apply the co-presence rule: every node taking part in at least one tie of a
//! snapshot is tied to every other such node, whether or not the two share an edge in that
//! snapshot's matrix.

use crate::error::TGError;
use crate::snapshot::SnapshotInput;
use chrono::NaiveDate;
use hashbrown::HashSet;
use itertools::Itertools;
use log::debug;
use tg_graph_api::{normalize_edge, SimpleEdge, UndirectedGraph};

mod window;

pub use window::TimeWindow;

pub const DEFAULT_YEARS_WINDOW: i32 = 50;

/// Undirected graph whose edges carry the date they were first seen.
pub type TemporalGraph = UndirectedGraph<NaiveDate>;

/// Builds the co-presence graph of all snapshots dated in
/// `[threshold_date - years_window years, threshold_date)`.
///
/// Snapshots are visited collection by collection, each in its own iteration order, and an edge
/// keeps the date of the first visited snapshot that produced it. No sorting happens here: pass
/// snapshots in chronological order if the edge dates must be the earliest ones.
/// Snapshots outside the window are skipped without being inspected.
///
/// Use [`DEFAULT_YEARS_WINDOW`] for the customary fifty year window.
pub fn build_temporal_graph<'a>(
    collections: impl Into<SnapshotInput<'a>>,
    threshold_date: NaiveDate,
    years_window: i32,
) -> Result<TemporalGraph, TGError> {
    let window = TimeWindow::trailing_years(threshold_date, years_window)?;
    let mut graph = TemporalGraph::new();
    let mut used = 0_usize;
    let mut skipped = 0_usize;
    for (key, snapshot) in collections.into().snapshots() {
        if !window.contains(snapshot.time) {
            skipped += 1;
            continue;
        }
        used += 1;
        let nodes = snapshot.incident_nodes()?;
        debug!("Snapshot '{}' ({}) has {} active nodes", key, snapshot.time, nodes.len());
        for (source, target) in nodes.into_iter().tuple_combinations() {
            graph.add_edge(source, target, snapshot.time);
        }
    }
    debug!(
        "Window {}: used {} snapshots, skipped {}, built {} nodes and {} edges",
        window,
        used,
        skipped,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Unique co-presence pairs over every snapshot, with no date filter. Pairs are normalized so
/// the smaller id comes first.
pub fn aggregate_edges<'a>(
    collections: impl Into<SnapshotInput<'a>>,
) -> Result<HashSet<SimpleEdge>, TGError> {
    let mut edges = HashSet::new();
    for (_, snapshot) in collections.into().snapshots() {
        let nodes = snapshot.incident_nodes()?;
        edges.extend(nodes.into_iter().tuple_combinations().map(|(u, v)| normalize_edge(u, v)));
    }
    Ok(edges)
}

/// Graph over an aggregated edge set. Edges are inserted in sorted order so node order, and with
/// it component enumeration order, does not depend on set iteration order.
pub fn aggregated_graph(edges: &HashSet<SimpleEdge>) -> UndirectedGraph<()> {
    UndirectedGraph::from_edges(edges.iter().copied().sorted())
}
