use crate::error::TGError;
use chrono::NaiveDate;
use hashbrown::HashMap;
use itertools::Itertools;
use tg_graph_api::NodeId;

pub mod loader;
mod matrix;

pub use matrix::SparseMatrix;

/// One observation period: a symmetric 0/1 adjacency matrix over local positions, and the map
/// from global node ids to those positions.
#[derive(Debug, Clone, new)]
pub struct Snapshot {
    pub time: NaiveDate,
    pub matrix: SparseMatrix,
    pub ids_pos_mat: HashMap<NodeId, usize>,
}

impl Snapshot {
    /// Inverts `ids_pos_mat`, checking that it is a bijection onto the matrix positions.
    fn position_to_id(&self) -> Result<Vec<NodeId>, TGError> {
        let dimension = self.matrix.dimension();
        if dimension != self.ids_pos_mat.len() {
            return Err(TGError::ShapeMismatch(format!(
                "Matrix is {}x{} but the position map has {} ids",
                dimension,
                dimension,
                self.ids_pos_mat.len()
            )));
        }
        let mut inverse: Vec<Option<NodeId>> = vec![None; dimension];
        for (&node_id, &position) in &self.ids_pos_mat {
            let slot = inverse.get_mut(position).ok_or_else(|| {
                TGError::ShapeMismatch(format!(
                    "Node {} maps to position {} outside a {}x{} matrix",
                    node_id, position, dimension, dimension
                ))
            })?;
            if let Some(other) = slot.replace(node_id) {
                return Err(TGError::ShapeMismatch(format!(
                    "Nodes {} and {} both map to position {}",
                    other, node_id, position
                )));
            }
        }
        // `dimension` distinct positions for `dimension` ids, so every slot is filled.
        inverse
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| TGError::ShapeMismatch("Position map is not a bijection".to_owned()))
    }

    /// Ids of the nodes that take part in at least one tie, in ascending matrix position.
    ///
    /// A node counts as soon as its row or column holds an entry equal to one, whoever the
    /// other endpoint is. Diagonal entries are self-loops and are ignored.
    pub fn incident_nodes(&self) -> Result<Vec<NodeId>, TGError> {
        let position_to_id = self.position_to_id()?;
        Ok(self
            .matrix
            .unit_coordinates()
            .into_iter()
            .filter(|(row, col)| row != col)
            .flat_map(|(row, col)| std::iter::once(row).chain(std::iter::once(col)))
            .sorted()
            .dedup()
            .map(|position| position_to_id[position])
            .collect())
    }
}

/// See [`Snapshot::incident_nodes`].
pub fn incident_nodes(snapshot: &Snapshot) -> Result<Vec<NodeId>, TGError> {
    snapshot.incident_nodes()
}

/// Snapshots keyed by an opaque time key, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SnapshotCollection {
    entries: Vec<(String, Snapshot)>,
}

impl SnapshotCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `snapshot` under `key`. Replacing an existing key keeps its original position and
    /// returns the old snapshot.
    pub fn insert(&mut self, key: impl Into<String>, snapshot: Snapshot) -> Option<Snapshot> {
        let key = key.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, snapshot));
        }
        self.entries.push((key, snapshot));
        None
    }

    pub fn get(&self, key: &str) -> Option<&Snapshot> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, snapshot)| snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Snapshot)> {
        self.entries.iter().map(|(key, snapshot)| (key.as_str(), snapshot))
    }
}

impl<K: Into<String>> std::iter::FromIterator<(K, Snapshot)> for SnapshotCollection {
    fn from_iter<I: IntoIterator<Item = (K, Snapshot)>>(iter: I) -> Self {
        let mut collection = Self::new();
        for (key, snapshot) in iter {
            collection.insert(key, snapshot);
        }
        collection
    }
}

/// Either one collection or a sequence of them. All of them are read as one logical stream of
/// snapshots, collection by collection.
#[derive(Debug, Clone, Copy)]
pub enum SnapshotInput<'a> {
    Single(&'a SnapshotCollection),
    Many(&'a [SnapshotCollection]),
}

impl<'a> SnapshotInput<'a> {
    pub fn collections(self) -> &'a [SnapshotCollection] {
        match self {
            SnapshotInput::Single(collection) => std::slice::from_ref(collection),
            SnapshotInput::Many(collections) => collections,
        }
    }

    pub fn snapshots(self) -> impl Iterator<Item = (&'a str, &'a Snapshot)> {
        self.collections().iter().flat_map(|collection| {
            collection.entries.iter().map(|(key, snapshot)| (key.as_str(), snapshot))
        })
    }
}

impl<'a> From<&'a SnapshotCollection> for SnapshotInput<'a> {
    fn from(collection: &'a SnapshotCollection) -> Self {
        SnapshotInput::Single(collection)
    }
}

impl<'a> From<&'a [SnapshotCollection]> for SnapshotInput<'a> {
    fn from(collections: &'a [SnapshotCollection]) -> Self {
        SnapshotInput::Many(collections)
    }
}

impl<'a> From<&'a Vec<SnapshotCollection>> for SnapshotInput<'a> {
    fn from(collections: &'a Vec<SnapshotCollection>) -> Self {
        SnapshotInput::Many(collections)
    }
}
