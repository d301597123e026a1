//! Structural metrics of whole graphs and of their largest connected component.

use crate::error::TGError;
use crate::util::parallel::parallel_map;
use log::info;
use std::num::NonZeroUsize;
use tg_graph_api::{
    average_clustering, average_degree, average_shortest_path_length, connected_components,
    degree_assortativity, diameter, edge_density, number_connected_components, UndirectedGraph,
};

mod table;

pub use table::{MetricRow, MetricsTable, LABEL_COLUMN};

/// Value reported for a metric that is undefined on a graph.
pub const UNDEFINED: f64 = f64::NAN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricScope {
    FullGraph,
    LargestComponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Size,
    ComponentCount,
    LccSize,
    LccDiameter,
    LccEdgeDensity,
    LccAveragePathLength,
    LccAverageDegree,
    LccDegreeAssortativity,
    LccClusteringCoefficient,
}

impl Metric {
    /// Every metric, in report order.
    pub const ALL: [Metric; 9] = [
        Metric::Size,
        Metric::ComponentCount,
        Metric::LccSize,
        Metric::LccDiameter,
        Metric::LccEdgeDensity,
        Metric::LccAveragePathLength,
        Metric::LccAverageDegree,
        Metric::LccDegreeAssortativity,
        Metric::LccClusteringCoefficient,
    ];

    /// Row label in reports. Labels are matched verbatim by report consumers, trailing space and
    /// spelling included.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Size => "Size (nodes)",
            Metric::ComponentCount => "Number of components",
            Metric::LccSize => "LCC size",
            Metric::LccDiameter => "LCC diameter",
            Metric::LccEdgeDensity => "LCC edge density",
            Metric::LccAveragePathLength => "LCC average path length",
            Metric::LccAverageDegree => "LCC average degree ",
            Metric::LccDegreeAssortativity => "LCC degree assortavity",
            Metric::LccClusteringCoefficient => "LCC clustering coefficient",
        }
    }

    pub fn from_label(label: &str) -> Option<Metric> {
        Metric::ALL.iter().copied().find(|metric| metric.label() == label)
    }

    pub fn scope(self) -> MetricScope {
        match self {
            Metric::Size | Metric::ComponentCount => MetricScope::FullGraph,
            _ => MetricScope::LargestComponent,
        }
    }

    /// Evaluates the metric on `graph` whose largest connected component is `lcc`. Undefined
    /// values are [`UNDEFINED`].
    #[allow(clippy::cast_precision_loss)]
    pub fn evaluate<E>(self, graph: &UndirectedGraph<E>, lcc: &UndirectedGraph<E>) -> f64 {
        let lcc_nodes = lcc.node_count();
        match self {
            Metric::Size => graph.node_count() as f64,
            Metric::ComponentCount => {
                if graph.is_empty() {
                    UNDEFINED
                } else {
                    number_connected_components(graph) as f64
                }
            }
            Metric::LccSize => lcc_nodes as f64,
            Metric::LccDiameter if lcc_nodes > 1 => diameter(lcc).map_or(UNDEFINED, |d| d as f64),
            Metric::LccEdgeDensity => edge_density(lcc).unwrap_or(UNDEFINED),
            Metric::LccAveragePathLength if lcc_nodes > 1 => {
                average_shortest_path_length(lcc).unwrap_or(UNDEFINED)
            }
            Metric::LccDiameter | Metric::LccAveragePathLength => UNDEFINED,
            Metric::LccAverageDegree => average_degree(lcc).unwrap_or(UNDEFINED),
            Metric::LccDegreeAssortativity => degree_assortativity(lcc).unwrap_or(UNDEFINED),
            Metric::LccClusteringCoefficient => average_clustering(lcc).unwrap_or(UNDEFINED),
        }
    }

    /// Evaluates the metric on `graph`, extracting the largest component only when needed.
    pub fn evaluate_graph<E: Clone>(self, graph: &UndirectedGraph<E>) -> f64 {
        match self.scope() {
            MetricScope::FullGraph => self.evaluate(graph, &UndirectedGraph::new()),
            MetricScope::LargestComponent => {
                self.evaluate(graph, &largest_connected_component(graph))
            }
        }
    }
}

/// The subgraph induced by the component with the most nodes; an empty graph for an empty input.
///
/// Components are stably sorted by size, largest first, so among equally large components the
/// one enumerated first by [`connected_components`] is chosen.
pub fn largest_connected_component<E: Clone>(graph: &UndirectedGraph<E>) -> UndirectedGraph<E> {
    let mut components = connected_components(graph);
    components.sort_by(|a, b| b.len().cmp(&a.len()));
    components.first().map_or_else(UndirectedGraph::new, |nodes| graph.induced_subgraph(nodes))
}

/// All metrics of one graph, in report order.
fn metric_column<E: Clone>(graph: &UndirectedGraph<E>) -> Vec<f64> {
    let lcc = largest_connected_component(graph);
    Metric::ALL.iter().map(|metric| metric.evaluate(graph, &lcc)).collect()
}

/// Builds the metrics report with one column per named graph, in input order.
///
/// Never fails: metrics that are undefined for a graph are reported as NaN.
pub fn evaluate_metrics<S, E>(named_graphs: &[(S, UndirectedGraph<E>)]) -> MetricsTable
where
    S: AsRef<str>,
    E: Clone,
{
    let columns = named_graphs.iter().map(|(_, graph)| metric_column(graph)).collect();
    MetricsTable::from_columns(named_graphs.iter().map(|(name, _)| name.as_ref()), columns)
}

/// [`evaluate_metrics`] with graphs spread over `thread_count` workers.
pub fn evaluate_metrics_parallel<S, E>(
    named_graphs: &[(S, UndirectedGraph<E>)],
    thread_count: NonZeroUsize,
) -> Result<MetricsTable, TGError>
where
    S: AsRef<str>,
    E: Clone + Sync,
{
    info!("Evaluating metrics of {} graphs on {} threads", named_graphs.len(), thread_count);
    let graphs: Vec<&UndirectedGraph<E>> = named_graphs.iter().map(|(_, graph)| graph).collect();
    let columns = parallel_map(graphs, thread_count, |graph| Ok(metric_column(graph)))?;
    Ok(MetricsTable::from_columns(named_graphs.iter().map(|(name, _)| name.as_ref()), columns))
}

/// One metric over many graphs, in input order.
pub fn metric_series<E: Clone + Sync>(
    graphs: &[UndirectedGraph<E>],
    metric: Metric,
    thread_count: NonZeroUsize,
) -> Result<Vec<f64>, TGError> {
    info!("Computing '{}' for {} graphs", metric.label(), graphs.len());
    parallel_map(graphs.iter().collect(), thread_count, |graph| Ok(metric.evaluate_graph(graph)))
}
