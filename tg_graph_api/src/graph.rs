use crate::NodeId;
use hashbrown::{HashMap, HashSet};

/// An undirected simple graph keyed by external node ids, with one data value per edge.
///
/// Nodes keep their insertion order, which is also the order used by every traversal in this
/// crate. Internally nodes are addressed by their dense insertion index.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<E> {
    nodes: Vec<NodeId>,
    node_index: HashMap<NodeId, usize>,
    adjacency: Vec<Vec<usize>>,
    edges: Vec<(usize, usize, E)>,
    edge_index: HashMap<(usize, usize), usize>,
}

impl<E> Default for UndirectedGraph<E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            adjacency: Vec::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
        }
    }
}

#[inline(always)]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl<E> UndirectedGraph<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `node` if it is not present yet and returns its insertion index.
    pub fn add_node(&mut self, node: NodeId) -> usize {
        if let Some(&index) = self.node_index.get(&node) {
            return index;
        }
        let index = self.nodes.len();
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
        self.node_index.insert(node, index);
        index
    }

    /// Adds the edge `{u, v}` carrying `data`, adding missing endpoints first.
    ///
    /// An existing edge keeps its data and `false` is returned. Self-loops are not stored.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, data: E) -> bool {
        let u_index = self.add_node(u);
        let v_index = self.add_node(v);
        if u_index == v_index {
            return false;
        }
        let key = edge_key(u_index, v_index);
        if self.edge_index.contains_key(&key) {
            return false;
        }
        self.edge_index.insert(key, self.edges.len());
        self.edges.push((u_index, v_index, data));
        self.adjacency[u_index].push(v_index);
        self.adjacency[v_index].push(u_index);
        true
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.node_index.contains_key(&node)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edge_data(u, v).is_some()
    }

    pub fn edge_data(&self, u: NodeId, v: NodeId) -> Option<&E> {
        let u_index = self.index_of(u)?;
        let v_index = self.index_of(v)?;
        self.edge_index.get(&edge_key(u_index, v_index)).map(|&edge| &self.edges[edge].2)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edges in insertion order, with endpoints as they were first added.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &E)> + '_ {
        self.edges.iter().map(move |(u, v, data)| (self.nodes[*u], self.nodes[*v], data))
    }

    pub fn degree(&self, node: NodeId) -> Option<usize> {
        self.index_of(node).map(|index| self.adjacency[index].len())
    }

    /// Degree sequence in node insertion order.
    pub fn degrees(&self) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.iter().map(Vec::len)
    }

    pub(crate) fn index_of(&self, node: NodeId) -> Option<usize> {
        self.node_index.get(&node).copied()
    }

    pub(crate) fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    pub(crate) fn node_at(&self, index: usize) -> NodeId {
        self.nodes[index]
    }

    pub(crate) fn has_edge_between(&self, a: usize, b: usize) -> bool {
        self.edge_index.contains_key(&edge_key(a, b))
    }

    pub(crate) fn edge_endpoints(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|(u, v, _)| (*u, *v))
    }
}

impl<E: Clone> UndirectedGraph<E> {
    /// Returns the subgraph induced by `nodes`. Node and edge order follow this graph, not
    /// the order of `nodes`; ids absent from this graph are ignored.
    pub fn induced_subgraph(&self, nodes: &[NodeId]) -> UndirectedGraph<E> {
        let keep: HashSet<usize> =
            nodes.iter().filter_map(|&node| self.index_of(node)).collect();
        let mut subgraph = UndirectedGraph::new();
        for (index, &node) in self.nodes.iter().enumerate() {
            if keep.contains(&index) {
                subgraph.add_node(node);
            }
        }
        for (u, v, data) in &self.edges {
            if keep.contains(u) && keep.contains(v) {
                subgraph.add_edge(self.nodes[*u], self.nodes[*v], data.clone());
            }
        }
        subgraph
    }
}

impl UndirectedGraph<()> {
    /// Builds an attribute-free graph from an edge list, in list order.
    pub fn from_edges(edges: impl IntoIterator<Item = (NodeId, NodeId)>) -> Self {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v, ());
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use crate::UndirectedGraph;

    #[test]
    fn edges_are_undirected_and_first_data_wins() {
        let mut graph = UndirectedGraph::new();
        assert!(graph.add_edge(1, 2, "first"));
        assert!(!graph.add_edge(2, 1, "second"));
        assert!(graph.add_edge(2, 3, "third"));

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_data(2, 1), Some(&"first"));
        assert!(graph.has_edge(3, 2));
        assert!(!graph.has_edge(1, 3));
        assert_eq!(graph.nodes(), &[1, 2, 3]);
    }

    #[test]
    fn self_loops_are_not_stored() {
        let mut graph = UndirectedGraph::new();
        assert!(!graph.add_edge(5, 5, ()));
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(5), Some(0));
    }

    #[test]
    fn degrees_and_indices() {
        let graph = UndirectedGraph::from_edges(vec![(1, 2), (1, 3), (1, 4)]);
        assert_eq!(graph.degrees().collect::<Vec<_>>(), vec![3, 1, 1, 1]);
        assert_eq!(graph.degree(1), Some(3));
        assert_eq!(graph.degree(9), None);
        assert_eq!(graph.index_of(4), Some(3));
        assert_eq!(graph.index_of(9), None);
    }

    #[test]
    fn induced_subgraph_keeps_graph_order() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge(1, 2, 10);
        graph.add_edge(2, 3, 20);
        graph.add_edge(3, 4, 30);

        let subgraph = graph.induced_subgraph(&[4, 3, 2, 99]);
        assert_eq!(subgraph.nodes(), &[2, 3, 4]);
        assert_eq!(subgraph.edge_count(), 2);
        assert_eq!(subgraph.edge_data(3, 2), Some(&20));
        assert_eq!(subgraph.edge_data(3, 4), Some(&30));
        assert!(!subgraph.contains_node(1));
    }
}
