use crate::graph::UndirectedGraph;
use crate::NodeId;
use std::collections::VecDeque;

/// Hop distances from `source` to every node index, `None` for unreachable nodes.
fn bfs_distances(adjacency: &[Vec<usize>], source: usize) -> Vec<Option<usize>> {
    let mut distances = vec![None; adjacency.len()];
    let mut queue = VecDeque::new();
    distances[source] = Some(0);
    queue.push_back(source);
    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current].map(|d| d + 1);
        for &neighbor in &adjacency[current] {
            if distances[neighbor].is_none() {
                distances[neighbor] = next_distance;
                queue.push_back(neighbor);
            }
        }
    }
    distances
}

/// Enumerates connected components.
///
/// Components are discovered by walking nodes in insertion order and running a BFS from every
/// node not yet visited, so both the component order and the node order inside each component
/// are deterministic for a given graph.
pub fn connected_components<E>(graph: &UndirectedGraph<E>) -> Vec<Vec<NodeId>> {
    let adjacency = graph.adjacency();
    let mut visited = vec![false; adjacency.len()];
    let mut components = Vec::new();
    let mut queue = VecDeque::new();
    for start in 0..adjacency.len() {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);
        let mut component = Vec::new();
        while let Some(current) = queue.pop_front() {
            component.push(graph.node_at(current));
            for &neighbor in &adjacency[current] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(component);
    }
    components
}

pub fn number_connected_components<E>(graph: &UndirectedGraph<E>) -> usize {
    connected_components(graph).len()
}

/// Largest eccentricity over all nodes. `None` for an empty or disconnected graph.
pub fn diameter<E>(graph: &UndirectedGraph<E>) -> Option<usize> {
    let adjacency = graph.adjacency();
    let mut longest: Option<usize> = None;
    for source in 0..adjacency.len() {
        let eccentricity = bfs_distances(adjacency, source)
            .into_iter()
            .try_fold(0, |max, distance| distance.map(|d| max.max(d)))?;
        longest = Some(longest.map_or(eccentricity, |l| l.max(eccentricity)));
    }
    longest
}

/// Mean hop distance over all ordered pairs of distinct nodes.
///
/// `None` for an empty or disconnected graph; a single node gives `0.0`.
#[allow(clippy::cast_precision_loss)]
pub fn average_shortest_path_length<E>(graph: &UndirectedGraph<E>) -> Option<f64> {
    let adjacency = graph.adjacency();
    let n = adjacency.len();
    match n {
        0 => return None,
        1 => return Some(0.0),
        _ => (),
    }
    let mut total: u64 = 0;
    for source in 0..n {
        for distance in bfs_distances(adjacency, source) {
            total += distance? as u64;
        }
    }
    Some(total as f64 / (n * (n - 1)) as f64)
}

/// `2m / (n(n - 1))`. `None` when the graph has fewer than two nodes.
#[allow(clippy::cast_precision_loss)]
pub fn edge_density<E>(graph: &UndirectedGraph<E>) -> Option<f64> {
    let n = graph.node_count();
    if n <= 1 {
        return None;
    }
    Some(2.0 * graph.edge_count() as f64 / (n * (n - 1)) as f64)
}

#[allow(clippy::cast_precision_loss)]
pub fn average_degree<E>(graph: &UndirectedGraph<E>) -> Option<f64> {
    if graph.is_empty() {
        return None;
    }
    let total: usize = graph.degrees().sum();
    Some(total as f64 / graph.node_count() as f64)
}

/// Pearson correlation between the degrees at either end of every edge, each edge counted in
/// both directions.
///
/// `None` for a graph without edges. When all endpoint degrees are equal the correlation is
/// `0 / 0` and the result is `Some(NaN)`.
#[allow(clippy::cast_precision_loss)]
pub fn degree_assortativity<E>(graph: &UndirectedGraph<E>) -> Option<f64> {
    if graph.edge_count() == 0 {
        return None;
    }
    let degrees: Vec<f64> = graph.degrees().map(|d| d as f64).collect();
    let pairs: Vec<(f64, f64)> = graph
        .edge_endpoints()
        .flat_map(|(u, v)| {
            let (du, dv) = (degrees[u], degrees[v]);
            std::iter::once((du, dv)).chain(std::iter::once((dv, du)))
        })
        .collect();

    // Both marginals are the same multiset of degrees, so they share mean and variance.
    let count = pairs.len() as f64;
    let mean = pairs.iter().map(|(x, _)| x).sum::<f64>() / count;
    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (x, y) in &pairs {
        covariance += (x - mean) * (y - mean);
        variance += (x - mean) * (x - mean);
    }
    Some(covariance / variance)
}

/// Local clustering coefficient of the node at `index`: closed neighbor pairs over all
/// neighbor pairs, `0.0` below degree two.
#[allow(clippy::cast_precision_loss)]
fn local_clustering<E>(graph: &UndirectedGraph<E>, index: usize) -> f64 {
    let neighbors = &graph.adjacency()[index];
    let degree = neighbors.len();
    if degree < 2 {
        return 0.0;
    }
    let mut links = 0_usize;
    for (i, &a) in neighbors.iter().enumerate() {
        for &b in &neighbors[i + 1..] {
            if graph.has_edge_between(a, b) {
                links += 1;
            }
        }
    }
    (2 * links) as f64 / (degree * (degree - 1)) as f64
}

/// Local clustering coefficient of `node`, `None` when the graph does not contain it.
pub fn clustering<E>(graph: &UndirectedGraph<E>, node: NodeId) -> Option<f64> {
    graph.index_of(node).map(|index| local_clustering(graph, index))
}

/// Mean local clustering coefficient. `None` for an empty graph.
#[allow(clippy::cast_precision_loss)]
pub fn average_clustering<E>(graph: &UndirectedGraph<E>) -> Option<f64> {
    if graph.is_empty() {
        return None;
    }
    let total: f64 = graph.nodes().iter().filter_map(|&node| clustering(graph, node)).sum();
    Some(total / graph.node_count() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(n: NodeId) -> UndirectedGraph<()> {
        UndirectedGraph::from_edges((1..n).map(|i| (i, i + 1)))
    }

    fn complete(n: NodeId) -> UndirectedGraph<()> {
        let mut graph = UndirectedGraph::new();
        for u in 1..=n {
            for v in u + 1..=n {
                graph.add_edge(u, v, ());
            }
        }
        graph
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-12, "expected {}, got {}", expected, actual);
    }

    #[test]
    fn components_follow_insertion_order() {
        let mut graph = UndirectedGraph::from_edges(vec![(5, 6), (1, 2), (2, 3)]);
        graph.add_node(9);
        assert_eq!(connected_components(&graph), vec![vec![5, 6], vec![1, 2, 3], vec![9]]);
        assert_eq!(number_connected_components(&graph), 3);
        assert_eq!(number_connected_components(&UndirectedGraph::<()>::new()), 0);
    }

    #[test]
    fn path_measures() {
        let graph = path(4);
        assert_eq!(diameter(&graph), Some(3));
        assert_close(average_shortest_path_length(&graph).unwrap(), 20.0 / 12.0);
        assert_close(edge_density(&graph).unwrap(), 0.5);
        assert_close(average_degree(&graph).unwrap(), 1.5);
        assert_close(degree_assortativity(&graph).unwrap(), -0.5);
        assert_close(average_clustering(&graph).unwrap(), 0.0);
    }

    #[test]
    fn complete_graph_measures() {
        let graph = complete(4);
        assert_eq!(diameter(&graph), Some(1));
        assert_close(average_shortest_path_length(&graph).unwrap(), 1.0);
        assert_close(edge_density(&graph).unwrap(), 1.0);
        assert_close(average_clustering(&graph).unwrap(), 1.0);
        // Every endpoint has the same degree.
        assert!(degree_assortativity(&graph).unwrap().is_nan());
    }

    #[test]
    fn star_is_disassortative() {
        let graph = UndirectedGraph::from_edges(vec![(0, 1), (0, 2), (0, 3)]);
        assert_close(degree_assortativity(&graph).unwrap(), -1.0);
    }

    #[test]
    fn triangle_with_pendant_clustering() {
        let graph = UndirectedGraph::from_edges(vec![(1, 2), (2, 3), (1, 3), (3, 4)]);
        assert_close(clustering(&graph, 3).unwrap(), 1.0 / 3.0);
        assert_close(clustering(&graph, 4).unwrap(), 0.0);
        assert_eq!(clustering(&graph, 7), None);
        assert_close(average_clustering(&graph).unwrap(), 7.0 / 12.0);
    }

    #[test]
    fn disconnected_and_degenerate_graphs() {
        let disconnected = UndirectedGraph::from_edges(vec![(1, 2), (3, 4)]);
        assert_eq!(diameter(&disconnected), None);
        assert_eq!(average_shortest_path_length(&disconnected), None);

        let mut single = UndirectedGraph::<()>::new();
        single.add_node(1);
        assert_eq!(diameter(&single), Some(0));
        assert_eq!(average_shortest_path_length(&single), Some(0.0));
        assert_eq!(edge_density(&single), None);
        assert_eq!(average_degree(&single), Some(0.0));
        assert_eq!(degree_assortativity(&single), None);
        assert_eq!(average_clustering(&single), Some(0.0));

        let empty = UndirectedGraph::<()>::new();
        assert_eq!(diameter(&empty), None);
        assert_eq!(average_degree(&empty), None);
        assert_eq!(average_clustering(&empty), None);
    }
}
