use std::collections::BTreeSet;

/// Row-normalized confusion matrix over two parallel label sequences.
///
/// Class labels are collected from the common prefix of the sequences and
/// indexed in lexicographic order, which makes the rendering reproducible.
#[derive(Debug)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    counts: Vec<Vec<usize>>,
    row_totals: Vec<usize>,
}

impl ConfusionMatrix {
    pub fn new(true_labels: &[String], predicted_labels: &[String]) -> Self {
        let n = true_labels.len().min(predicted_labels.len());
        let labels: Vec<String> = true_labels[..n]
            .iter()
            .chain(&predicted_labels[..n])
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let mut counts = vec![vec![0_usize; labels.len()]; labels.len()];
        let mut row_totals = vec![0_usize; labels.len()];
        for (actual, predicted) in true_labels[..n].iter().zip(&predicted_labels[..n]) {
            let i = Self::position(&labels, actual);
            let j = Self::position(&labels, predicted);
            counts[i][j] += 1;
            row_totals[i] += 1;
        }

        Self {
            labels,
            counts,
            row_totals,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// One line per actual class, then the footer listing the classes.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.labels.len() + 1);
        for (i, label) in self.labels.iter().enumerate() {
            let mut line = format!("{label}\t");
            for j in 0..self.labels.len() {
                line.push_str(&format!("|\t{}\t", self.cell(i, j)));
            }
            line.push_str("|\n");
            lines.push(line);
        }

        let mut footer = String::from("\t\t");
        for label in &self.labels {
            footer.push_str(&format!("| {label} "));
        }
        footer.push_str("|\n");
        lines.push(footer);
        lines
    }

    // Percentage of the row total, floored; "inf" marks a count without any
    // occurrence of the actual class.
    fn cell(&self, i: usize, j: usize) -> String {
        let count = self.counts[i][j];
        if count == 0 {
            "0%".to_string()
        } else if self.row_totals[i] > 0 {
            format!("{}%", 100 * count / self.row_totals[i])
        } else {
            "inf".to_string()
        }
    }

    // labels is sorted and always contains label
    fn position(labels: &[String], label: &str) -> usize {
        labels
            .binary_search_by(|probe| probe.as_str().cmp(label))
            .unwrap_or(0)
    }
}
