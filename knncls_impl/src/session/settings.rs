use crate::{data::DataSet, DistanceMetric, DEFAULT_K};

/// Mutable per-session state; owned by exactly one session.
///
/// Invariant: `true_labels` and `predicted_labels` are parallel and equally
/// long whenever `is_classified` is true, and both empty whenever it is
/// false.
#[derive(Debug)]
pub struct Settings {
    pub k: usize,
    pub metric: DistanceMetric,
    /// Interpreted on the client side; stored verbatim.
    pub test_path: String,
    pub is_classified: bool,
    pub true_labels: Vec<String>,
    pub predicted_labels: Vec<String>,
    /// Session-private training set; while present it replaces the shared
    /// one for classification. Dropped with the session.
    pub overlay: Option<DataSet>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            metric: DistanceMetric::Euclidean,
            test_path: String::new(),
            is_classified: false,
            true_labels: Vec::new(),
            predicted_labels: Vec::new(),
            overlay: None,
        }
    }
}

impl Settings {
    /// Drops any previous classification outcome.
    pub fn invalidate_results(&mut self) {
        self.is_classified = false;
        self.true_labels.clear();
        self.predicted_labels.clear();
    }
}
