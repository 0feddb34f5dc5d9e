//! Display-name table for the recognized accuracy fields.

use super::ScoreReport;

/// Accuracy metrics the report can carry, in display order.
///
/// The match arms below are the single place tying wire names to labels; a
/// new metric extends the enum and the compiler points at every site that
/// must learn about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricField {
    Svm,
    SvmGridSearch,
    RandomForest,
    Knn,
    DecisionTree,
    NaiveBayes,
}

impl MetricField {
    /// Every recognized metric, in the order cards are laid out.
    pub const ALL: [MetricField; 6] = [
        MetricField::Svm,
        MetricField::SvmGridSearch,
        MetricField::RandomForest,
        MetricField::Knn,
        MetricField::DecisionTree,
        MetricField::NaiveBayes,
    ];

    /// Field name used on the wire.
    pub fn wire_name(self) -> &'static str {
        match self {
            MetricField::Svm => "accuracy_svm",
            MetricField::SvmGridSearch => "accuracy_svm_grid_search",
            MetricField::RandomForest => "accuracy_rf",
            MetricField::Knn => "accuracy_knn",
            MetricField::DecisionTree => "accuracy_decision_tree",
            MetricField::NaiveBayes => "accuracy_naive_bayes",
        }
    }

    /// Label shown on the metric card.
    pub fn label(self) -> &'static str {
        match self {
            MetricField::Svm => "SVM",
            MetricField::SvmGridSearch => "SVM (grid search)",
            MetricField::RandomForest => "Random Forest",
            MetricField::Knn => "KNN",
            MetricField::DecisionTree => "Decision Tree",
            MetricField::NaiveBayes => "Naive Bayes",
        }
    }

    /// Value of this metric in a report, if the service included it.
    pub fn value_in(self, report: &ScoreReport) -> Option<f64> {
        match self {
            MetricField::Svm => report.accuracy_svm,
            MetricField::SvmGridSearch => report.accuracy_svm_grid_search,
            MetricField::RandomForest => report.accuracy_rf,
            MetricField::Knn => report.accuracy_knn,
            MetricField::DecisionTree => report.accuracy_decision_tree,
            MetricField::NaiveBayes => report.accuracy_naive_bayes,
        }
    }
}
