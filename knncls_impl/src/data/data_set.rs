use crate::{data::DataPoint, KnnError, KnnResult};
use std::io::BufRead;

/// Insertion-ordered collection of points sharing one feature arity.
///
/// The arity is not declared anywhere; it is fixed by the first point and
/// every later point must match. Insertion order is preserved, it makes
/// tie-breaking reproducible.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    points: Vec<DataPoint>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads one CSV record per line. A single empty trailing line is
    /// ignored; a blank line anywhere else is a malformed record and fails
    /// the load.
    pub fn from_reader(rdr: impl BufRead) -> KnnResult<Self> {
        let mut data_set = Self::new();
        let mut lines = rdr.lines().peekable();
        while let Some(line) = lines.next() {
            let line = line?;
            if line.is_empty() && lines.peek().is_none() {
                break;
            }
            data_set.push(DataPoint::from_csv_row(&line)?)?;
        }
        Ok(data_set)
    }

    /// Appends a point, enforcing the arity fixed by the first point.
    pub fn push(&mut self, point: DataPoint) -> KnnResult<()> {
        if let Some(arity) = self.arity() {
            if point.arity() != arity {
                return Err(KnnError::ArityMismatch {
                    left: arity,
                    right: point.arity(),
                });
            }
        }
        self.points.push(point);
        Ok(())
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn point(&self, index: usize) -> &DataPoint {
        &self.points[index]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The common feature arity, or `None` while the set is empty.
    pub fn arity(&self) -> Option<usize> {
        self.points.first().map(DataPoint::arity)
    }
}
