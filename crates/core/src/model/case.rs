use serde::{Deserialize, Serialize};

/// One logged optimiser iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    /// Iteration index. Plotted on the x axis.
    pub index: i64,
    /// Makespan recorded at this iteration. Plotted on the y axis.
    pub makespan: i64,
}

impl LogRow {
    pub fn new(index: i64, makespan: i64) -> Self {
        Self { index, makespan }
    }
}

impl From<(i64, i64)> for LogRow {
    fn from((index, makespan): (i64, i64)) -> Self {
        Self { index, makespan }
    }
}

/// One run's worth of rows, in the order they appear in the log.
///
/// Row order defines the x-axis sequence of the plot, so rows are never
/// sorted or deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    rows: Vec<LogRow>,
}

impl Case {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<LogRow>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: LogRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[LogRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iteration indices in file order.
    pub fn indices(&self) -> Vec<i64> {
        self.rows.iter().map(|r| r.index).collect()
    }

    /// Makespans in file order, parallel to [`Case::indices`].
    pub fn makespans(&self) -> Vec<i64> {
        self.rows.iter().map(|r| r.makespan).collect()
    }

    /// `(index, makespan)` pairs as plot coordinates.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| (r.index as f64, r.makespan as f64))
            .collect()
    }

    /// The first row holding the lowest makespan.
    pub fn best(&self) -> Option<LogRow> {
        self.rows.iter().min_by_key(|r| r.makespan).copied()
    }

    /// `(min, max)` of the iteration indices.
    pub fn index_range(&self) -> Option<(i64, i64)> {
        range(self.rows.iter().map(|r| r.index))
    }

    /// `(min, max)` of the makespans.
    pub fn makespan_range(&self) -> Option<(i64, i64)> {
        range(self.rows.iter().map(|r| r.makespan))
    }
}

impl FromIterator<LogRow> for Case {
    fn from_iter<I: IntoIterator<Item = LogRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

fn range(values: impl Iterator<Item = i64>) -> Option<(i64, i64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
