//! Reads snapshot collections from tie lists in CSV form.
//!
//! The expected header is `key,time,source,target`. Each row is one tie between two global node
//! ids inside the snapshot identified by `key`; `time` is a `YYYY-MM-DD` date and must be the
//! same on every row of a snapshot. Matrix positions are handed out in order of first appearance
//! within the snapshot, and snapshots keep the order in which their key first appears.

use crate::error::TGError;
use crate::snapshot::{Snapshot, SnapshotCollection, SparseMatrix};
use crate::util::io::get_buf_reader;
use chrono::NaiveDate;
use hashbrown::{HashMap, HashSet};
use log::{debug, info};
use std::io::Read;
use tg_graph_api::NodeId;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct TieRecord {
    key: String,
    time: String,
    source: NodeId,
    target: NodeId,
}

#[derive(new)]
struct SnapshotAccumulator {
    key: String,
    time: NaiveDate,
    #[new(default)]
    ids_pos_mat: HashMap<NodeId, usize>,
    /// Ties between positions, smaller position first. Every tie is written to the matrix once,
    /// however many rows repeat it in either direction.
    #[new(default)]
    ties: HashSet<(usize, usize)>,
}

impl SnapshotAccumulator {
    fn position(&mut self, node_id: NodeId) -> usize {
        let next = self.ids_pos_mat.len();
        *self.ids_pos_mat.entry(node_id).or_insert(next)
    }

    fn into_snapshot(self) -> Result<(String, Snapshot), TGError> {
        let mut matrix = SparseMatrix::new(self.ids_pos_mat.len());
        for (row, col) in self.ties {
            matrix.push_symmetric(row, col)?;
        }
        debug!(
            "Snapshot '{}' ({}): {} nodes, {} matrix entries",
            self.key,
            self.time,
            self.ids_pos_mat.len(),
            matrix.stored_entries()
        );
        Ok((self.key, Snapshot::new(self.time, matrix, self.ids_pos_mat)))
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, TGError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|e| TGError::Parse(value.to_owned(), format!("expected {}: {}", DATE_FORMAT, e)))
}

/// Loads one snapshot collection from the CSV file at `file_path`.
pub fn load_collection(file_path: &str) -> Result<SnapshotCollection, TGError> {
    let collection = read_collection(get_buf_reader(file_path)?, file_path)?;
    info!("Loaded {} snapshots from '{}'", collection.len(), file_path);
    Ok(collection)
}

/// Reads one snapshot collection from CSV data. `source_name` only appears in error messages.
pub fn read_collection<R: Read>(
    reader: R,
    source_name: &str,
) -> Result<SnapshotCollection, TGError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut accumulators: Vec<SnapshotAccumulator> = Vec::new();
    let mut key_index: HashMap<String, usize> = HashMap::new();

    for (line, record) in csv_reader.deserialize::<TieRecord>().enumerate() {
        let record = record.map_err(|e| TGError::Parse(source_name.to_owned(), e.to_string()))?;
        let time = parse_date(&record.time)?;
        let index = match key_index.get(&record.key) {
            Some(&index) => index,
            None => {
                key_index.insert(record.key.clone(), accumulators.len());
                accumulators.push(SnapshotAccumulator::new(record.key.clone(), time));
                accumulators.len() - 1
            }
        };
        let accumulator = &mut accumulators[index];
        if accumulator.time != time {
            return Err(TGError::Parse(
                source_name.to_owned(),
                format!(
                    "row {} dates snapshot '{}' {} but earlier rows use {}",
                    line + 1,
                    record.key,
                    time,
                    accumulator.time
                ),
            ));
        }
        if record.source == record.target {
            continue;
        }
        let row = accumulator.position(record.source);
        let col = accumulator.position(record.target);
        accumulator.ties.insert((row.min(col), row.max(col)));
    }

    accumulators.into_iter().map(SnapshotAccumulator::into_snapshot).collect()
}

#[cfg(test)]
mod tests {
    use crate::snapshot::loader::read_collection;
    use crate::snapshot::tests::date;
    use crate::temporal::build_temporal_graph;

    #[test]
    fn groups_rows_by_key() {
        let data = "key,time,source,target
            s2,2001-06-01,30,10
            s1,2000-06-01,1,2
            s2,2001-06-01,10,20
            s1,2000-06-01,2,2
            s1,2000-06-01,3,1
";
        let collection = read_collection(data.as_bytes(), "inline").expect("Collection not read");
        assert_eq!(collection.iter().map(|(key, _)| key).collect::<Vec<_>>(), vec!["s2", "s1"]);

        let s2 = collection.get("s2").expect("s2 missing");
        assert_eq!(s2.time, date(2001, 6, 1));
        assert_eq!(s2.ids_pos_mat.get(&30), Some(&0));
        assert_eq!(s2.ids_pos_mat.get(&10), Some(&1));
        assert_eq!(s2.ids_pos_mat.get(&20), Some(&2));
        assert_eq!(s2.incident_nodes().expect("Valid snapshot"), vec![30, 10, 20]);

        // The self tie on node 2 is dropped.
        let s1 = collection.get("s1").expect("s1 missing");
        assert_eq!(s1.matrix.stored_entries(), 4);
        assert_eq!(s1.incident_nodes().expect("Valid snapshot"), vec![1, 2, 3]);
    }

    #[test]
    fn reversed_and_repeated_ties_are_kept() {
        let data = "key,time,source,target
            a,2000-01-01,1,2
            a,2000-01-01,2,1
            b,2000-02-01,5,6
            b,2000-02-01,5,6
            b,2000-02-01,6,7
";
        let collection = read_collection(data.as_bytes(), "inline").expect("Collection not read");
        let a = collection.get("a").expect("a missing");
        assert_eq!(a.matrix.stored_entries(), 2);
        assert_eq!(a.incident_nodes().expect("Valid snapshot"), vec![1, 2]);
        let b = collection.get("b").expect("b missing");
        assert_eq!(b.incident_nodes().expect("Valid snapshot"), vec![5, 6, 7]);

        let graph = build_temporal_graph(&collection, date(2010, 1, 1), 50).expect("Graph built");
        assert_eq!(graph.nodes(), &[1, 2, 5, 6, 7]);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.edge_data(5, 7), Some(&date(2000, 2, 1)));
    }

    #[test]
    fn conflicting_dates_are_rejected() {
        let data = "key,time,source,target\na,2000-01-01,1,2\na,2000-01-02,2,3\n";
        let error = read_collection(data.as_bytes(), "inline").expect_err("Dates conflict");
        assert!(error.to_string().contains("row 2"));
    }

    #[test]
    fn bad_dates_and_ids_are_rejected() {
        assert!(read_collection("key,time,source,target\na,01/01/2000,1,2\n".as_bytes(), "x")
            .is_err());
        assert!(read_collection("key,time,source,target\na,2000-01-01,one,2\n".as_bytes(), "x")
            .is_err());
    }
}
