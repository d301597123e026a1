use crate::error::TGError;
use crate::metrics::{evaluate_metrics, evaluate_metrics_parallel, MetricsTable};
use crate::snapshot::loader::load_collection;
use crate::snapshot::SnapshotCollection;
use crate::temporal::{aggregate_edges, aggregated_graph, build_temporal_graph, TemporalGraph};
use crate::util::timer::{TgDuration, TgTimer};
use chrono::NaiveDate;
use log::info;
use std::num::NonZeroUsize;

pub const AGGREGATED_COLUMN: &str = "aggregated";

/// Settings of one analysis run.
#[derive(Debug, Clone, new)]
pub struct AnalysisConfig {
    /// Tie list files, one snapshot collection each.
    pub tie_files: Vec<String>,
    /// One temporal graph is built per threshold date.
    pub threshold_dates: Vec<NaiveDate>,
    pub years_window: i32,
    /// Adds a column for the undated aggregation of all snapshots.
    pub include_aggregated: bool,
    pub threads: NonZeroUsize,
}

/// Loads every tie file and reports the metrics of each requested graph.
pub fn run_analysis(config: &AnalysisConfig) -> Result<MetricsTable, TGError> {
    let collections = config
        .tie_files
        .iter()
        .map(|file_path| load_collection(file_path))
        .collect::<Result<Vec<_>, _>>()?;
    analyze_collections(&collections, config)
}

/// Same as [`run_analysis`] over collections that are already loaded.
pub fn analyze_collections(
    collections: &[SnapshotCollection],
    config: &AnalysisConfig,
) -> Result<MetricsTable, TGError> {
    let mut build_time = TgDuration::default();
    let mut named_graphs: Vec<(String, TemporalGraph)> = Vec::new();
    for &threshold_date in &config.threshold_dates {
        let timer = TgTimer::now();
        let graph = build_temporal_graph(collections, threshold_date, config.years_window)?;
        build_time += timer.elapsed();
        info!(
            "Graph before {} over {} years: {} nodes, {} edges",
            threshold_date,
            config.years_window,
            graph.node_count(),
            graph.edge_count()
        );
        named_graphs.push((threshold_date.to_string(), graph));
    }
    info!("Built {} temporal graphs in {}", named_graphs.len(), build_time.to_seconds_string());

    let timer = TgTimer::now();
    let mut table = if config.threads.get() > 1 {
        evaluate_metrics_parallel(&named_graphs, config.threads)?
    } else {
        evaluate_metrics(&named_graphs)
    };
    if config.include_aggregated {
        let edges = aggregate_edges(collections)?;
        info!("Aggregated {} unique edges over all snapshots", edges.len());
        let aggregated = vec![(AGGREGATED_COLUMN, aggregated_graph(&edges))];
        table = table.join(evaluate_metrics(&aggregated))?;
    }
    info!("Evaluated metrics in {}", timer.elapsed().to_millis_string());
    Ok(table)
}
