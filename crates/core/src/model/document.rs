use serde::{Deserialize, Serialize};

use super::case::Case;

/// The parsed contents of one log file: its cases, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDocument {
    cases: Vec<Case>,
}

impl LogDocument {
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    pub fn from_cases(cases: Vec<Case>) -> Self {
        Self { cases }
    }

    pub fn push(&mut self, case: Case) {
        self.cases.push(case);
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Case> {
        self.cases.iter()
    }

    /// Row count summed over every case.
    pub fn total_rows(&self) -> usize {
        self.cases.iter().map(Case::len).sum()
    }
}

impl IntoIterator for LogDocument {
    type Item = Case;
    type IntoIter = std::vec::IntoIter<Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogDocument {
    type Item = &'a Case;
    type IntoIter = std::slice::Iter<'a, Case>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}
