use crate::{protocol::wire, KnnError, KnnResult};

/// A single observation: a feature vector plus a class label.
///
/// A point with an empty label is unclassified. Points are immutable once
/// constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    features: Vec<f64>,
    label: String,
}

impl DataPoint {
    pub fn new(features: Vec<f64>, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }

    /// Parses a CSV record `f1,f2,...,fD,label`.
    ///
    /// Every field but the last is parsed with the standard float parser; the
    /// last is kept verbatim. A record without a separator is malformed.
    pub fn from_csv_row(row: &str) -> KnnResult<Self> {
        let (fields, label) = row.rsplit_once(',').ok_or_else(|| KnnError::Parse {
            field: row.to_string(),
        })?;
        let features = fields
            .split(',')
            .map(|field| {
                field.parse::<f64>().map_err(|_| KnnError::Parse {
                    field: field.to_string(),
                })
            })
            .collect::<KnnResult<Vec<f64>>>()?;
        Ok(Self::new(features, label))
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn arity(&self) -> usize {
        self.features.len()
    }

    pub fn is_classified(&self) -> bool {
        !self.label.is_empty()
    }

    pub fn sync_emit(&self, w: &mut dyn std::io::Write) -> KnnResult<()> {
        wire::emit_f64_vec(&self.features, w)?;
        wire::emit_string(&self.label, w)?;
        Ok(())
    }

    pub fn parse_sync(rdr: &mut dyn std::io::Read) -> KnnResult<Self> {
        let features = wire::parse_f64_vec(rdr)?;
        let label = wire::parse_string(rdr)?;
        Ok(Self { features, label })
    }
}
