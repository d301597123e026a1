use crate::error::TGError;
use crate::metrics::Metric;
use crate::util::io::get_buf_writer;
use std::io::Write;

pub const LABEL_COLUMN: &str = "Metric";

#[derive(Debug, Clone, new)]
pub struct MetricRow {
    pub label: String,
    pub values: Vec<f64>,
}

/// Metric report: one row per metric, one value column per graph.
#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    columns: Vec<String>,
    rows: Vec<MetricRow>,
}

impl MetricsTable {
    /// Builds the table from per-graph columns, each holding every metric in report order.
    pub(crate) fn from_columns<'a>(
        names: impl Iterator<Item = &'a str>,
        columns: Vec<Vec<f64>>,
    ) -> Self {
        let rows = Metric::ALL
            .iter()
            .enumerate()
            .map(|(index, metric)| {
                MetricRow::new(
                    metric.label().to_owned(),
                    columns.iter().map(|column| column[index]).collect(),
                )
            })
            .collect();
        Self { columns: names.map(str::to_owned).collect(), rows }
    }

    /// Graph names, without the label column.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn header(&self) -> Vec<&str> {
        std::iter::once(LABEL_COLUMN).chain(self.columns.iter().map(String::as_str)).collect()
    }

    pub fn rows(&self) -> &[MetricRow] {
        &self.rows
    }

    pub fn row(&self, label: &str) -> Option<&MetricRow> {
        self.rows.iter().find(|row| row.label == label)
    }

    /// Value of `metric` for the first graph named `column`.
    pub fn value(&self, metric: Metric, column: &str) -> Option<f64> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.row(metric.label()).map(|row| row.values[index])
    }

    /// Appends the columns of `other`. Both tables must list the same metrics in the same order.
    pub fn join(mut self, other: MetricsTable) -> Result<MetricsTable, TGError> {
        if self.rows.len() != other.rows.len()
            || self.rows.iter().zip(&other.rows).any(|(a, b)| a.label != b.label)
        {
            return Err(TGError::Generic("Cannot join tables with different metrics".to_owned()));
        }
        self.columns.extend(other.columns);
        for (row, other_row) in self.rows.iter_mut().zip(other.rows) {
            row.values.extend(other_row.values);
        }
        Ok(self)
    }

    /// Writes the table as CSV with a header row. Undefined values are written as `NaN`.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), TGError> {
        let to_error =
            |e: csv::Error| TGError::WriteFile("metrics table".to_owned(), e.to_string());
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(self.header()).map_err(to_error)?;
        for row in &self.rows {
            let record = std::iter::once(row.label.clone())
                .chain(row.values.iter().map(|value| value.to_string()));
            csv_writer.write_record(record).map_err(to_error)?;
        }
        csv_writer
            .flush()
            .map_err(|e| TGError::WriteFile("metrics table".to_owned(), e.to_string()))
    }

    pub fn write_csv_file(&self, file_path: &str) -> Result<(), TGError> {
        self.write_csv(get_buf_writer(file_path)?)
            .map_err(|e| TGError::WriteFile(file_path.to_owned(), e.to_string()))
    }
}

impl std::fmt::Display for MetricsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let label_width = self
            .rows
            .iter()
            .map(|row| row.label.len())
            .chain(std::iter::once(LABEL_COLUMN.len()))
            .max()
            .unwrap_or_default();
        write!(f, "{:<width$}", LABEL_COLUMN, width = label_width)?;
        for column in &self.columns {
            write!(f, " | {:>12}", column)?;
        }
        for row in &self.rows {
            write!(f, "\n{:<width$}", row.label, width = label_width)?;
            for value in &row.values {
                write!(f, " | {:>12.4}", value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::metrics::{Metric, MetricsTable};

    fn table(names: &[&str]) -> MetricsTable {
        let columns: Vec<Vec<f64>> = names
            .iter()
            .enumerate()
            .map(|(i, _)| {
                (0..9)
                    .map(|m| if m == 3 { f64::NAN } else { (i * 10 + m) as f64 })
                    .collect::<Vec<_>>()
            })
            .collect();
        MetricsTable::from_columns(names.iter().copied(), columns)
    }

    #[test]
    fn lookup_by_metric_and_column() {
        let table = table(&["g1", "g2"]);
        assert_eq!(table.header(), vec!["Metric", "g1", "g2"]);
        assert_eq!(table.rows().len(), 9);
        assert_eq!(table.value(Metric::LccSize, "g2"), Some(12.0));
        assert!(table.value(Metric::LccDiameter, "g1").map_or(false, f64::is_nan));
        assert_eq!(table.value(Metric::Size, "g3"), None);
        let degrees = table.row("LCC average degree ").map(|row| row.values.clone());
        assert_eq!(degrees, Some(vec![6.0, 16.0]));
    }

    #[test]
    fn join_appends_columns() {
        let joined = table(&["a"]).join(table(&["b", "c"])).expect("Tables not joined");
        assert_eq!(joined.columns(), &["a".to_owned(), "b".to_owned(), "c".to_owned()]);
        assert_eq!(joined.value(Metric::Size, "c"), Some(10.0));
        assert_eq!(joined.value(Metric::Size, "b"), Some(0.0));
    }

    #[test]
    fn csv_output() {
        let mut buffer = Vec::new();
        table(&["x"]).write_csv(&mut buffer).expect("CSV not written");
        let text = String::from_utf8(buffer).expect("Invalid UTF-8");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "Metric,x");
        assert_eq!(lines[1], "Size (nodes),0");
        assert_eq!(lines[4], "LCC diameter,NaN");
        assert_eq!(lines[7], "LCC average degree ,6");
    }
}
