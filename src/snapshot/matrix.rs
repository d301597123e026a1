use crate::error::TGError;
use hashbrown::HashMap;
use itertools::Itertools;

/// A square sparse 0/1 matrix in coordinate form.
///
/// Entries may repeat a coordinate; repeated values add up when the matrix is read, the same way
/// a coordinate matrix is summed when it is densified.
#[derive(Debug, Clone, Default)]
pub struct SparseMatrix {
    dimension: usize,
    entries: Vec<(usize, usize, u8)>,
}

impl SparseMatrix {
    pub fn new(dimension: usize) -> Self {
        Self { dimension, entries: Vec::new() }
    }

    pub fn from_entries(
        dimension: usize,
        entries: impl IntoIterator<Item = (usize, usize, u8)>,
    ) -> Result<Self, TGError> {
        let mut matrix = Self::new(dimension);
        for (row, col, value) in entries {
            matrix.push(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn push(&mut self, row: usize, col: usize, value: u8) -> Result<(), TGError> {
        if row >= self.dimension || col >= self.dimension {
            return Err(TGError::ShapeMismatch(format!(
                "Entry ({}, {}) is outside a {}x{} matrix",
                row, col, self.dimension, self.dimension
            )));
        }
        self.entries.push((row, col, value));
        Ok(())
    }

    /// Records a tie in both directions.
    pub fn push_symmetric(&mut self, row: usize, col: usize) -> Result<(), TGError> {
        self.push(row, col, 1)?;
        if row != col {
            self.push(col, row, 1)?;
        }
        Ok(())
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub(crate) fn stored_entries(&self) -> usize {
        self.entries.len()
    }

    /// Coordinates whose summed value is exactly one, in row-major order.
    pub fn unit_coordinates(&self) -> Vec<(usize, usize)> {
        let mut sums: HashMap<(usize, usize), u32> = HashMap::new();
        for &(row, col, value) in &self.entries {
            *sums.entry((row, col)).or_insert(0) += u32::from(value);
        }
        sums.into_iter()
            .filter(|(_, sum)| *sum == 1)
            .map(|(coordinate, _)| coordinate)
            .sorted()
            .collect()
    }
}
