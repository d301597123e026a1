mod algorithms;
mod graph;

// Public exports from root of the crate.
pub use algorithms::*;
pub use graph::UndirectedGraph;

// Universally used types.
pub type NodeId = i64;
pub type SimpleEdge = (NodeId, NodeId);

/// Returns the canonical form of an undirected edge, with the smaller id first.
///
/// # Examples
/// ```
/// use tg_graph_api::normalize_edge;
///
/// assert_eq!(normalize_edge(7, 3), (3, 7));
/// assert_eq!(normalize_edge(3, 7), (3, 7));
/// ```
#[inline]
pub fn normalize_edge(u: NodeId, v: NodeId) -> SimpleEdge {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
