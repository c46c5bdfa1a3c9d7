use crate::{data::DataPoint, KnnError, KnnResult};

/// The closed registry of distance functions, keyed by short identifiers.
///
/// All of them are total, non-negative and symmetric on same-arity points;
/// none of them is required to be a true metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceMetric {
    /// `EUC`: sum of squared differences. The square root is omitted since
    /// only the ordering of distances matters.
    Euclidean,
    /// `MAN`: sum of absolute differences.
    Manhattan,
    /// `CHE`: maximum absolute difference.
    Chebyshev,
}

impl DistanceMetric {
    pub const KEYS: [&'static str; 3] = ["EUC", "MAN", "CHE"];

    pub fn from_key(key: &str) -> KnnResult<Self> {
        match key {
            "EUC" => Ok(Self::Euclidean),
            "MAN" => Ok(Self::Manhattan),
            "CHE" => Ok(Self::Chebyshev),
            _ => Err(KnnError::UnknownMetric(key.to_string())),
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Euclidean => "EUC",
            Self::Manhattan => "MAN",
            Self::Chebyshev => "CHE",
        }
    }

    /// Distance between two points of equal arity.
    ///
    /// The arities are checked before any arithmetic, no partial sum is
    /// observable on the failure path.
    pub fn between(self, p: &DataPoint, q: &DataPoint) -> KnnResult<f64> {
        if p.arity() != q.arity() {
            return Err(KnnError::ArityMismatch {
                left: p.arity(),
                right: q.arity(),
            });
        }
        let pairs = p.features().iter().zip(q.features());
        Ok(match self {
            Self::Euclidean => pairs.map(|(a, b)| (a - b) * (a - b)).sum(),
            Self::Manhattan => pairs.map(|(a, b)| (a - b).abs()).sum(),
            Self::Chebyshev => pairs.map(|(a, b)| (a - b).abs()).fold(0.0, f64::max),
        })
    }
}
