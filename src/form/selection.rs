//! Fixed model roster and the per-model selection flags.

/// Classification models the scoring service knows about.
///
/// The roster is fixed at compile time; `available` controls which entries the
/// form offers as toggles. The remaining models keep their identifiers and
/// labels so enabling one later is a single-flag change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelId {
    Svm,
    RandomForest,
    Knn,
    DecisionTree,
    NaiveBayes,
}

impl ModelId {
    /// All known models, in the order they appear in the form and in payloads.
    pub const ALL: [ModelId; 5] = [
        ModelId::Svm,
        ModelId::RandomForest,
        ModelId::Knn,
        ModelId::DecisionTree,
        ModelId::NaiveBayes,
    ];

    /// Wire identifier sent to the scoring service.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::Svm => "svm",
            ModelId::RandomForest => "random_forest",
            ModelId::Knn => "knn",
            ModelId::DecisionTree => "decision_tree",
            ModelId::NaiveBayes => "naive_bayes",
        }
    }

    /// Human-readable name shown next to the toggle and on result cards.
    pub fn label(self) -> &'static str {
        match self {
            ModelId::Svm => "SVM",
            ModelId::RandomForest => "Random Forest",
            ModelId::Knn => "KNN",
            ModelId::DecisionTree => "Decision Tree",
            ModelId::NaiveBayes => "Naive Bayes",
        }
    }

    /// Whether the form currently offers this model as a toggle.
    pub fn available(self) -> bool {
        matches!(self, ModelId::Svm | ModelId::RandomForest)
    }

    fn index(self) -> usize {
        match self {
            ModelId::Svm => 0,
            ModelId::RandomForest => 1,
            ModelId::Knn => 2,
            ModelId::DecisionTree => 3,
            ModelId::NaiveBayes => 4,
        }
    }
}

/// Boolean selection flag per known model.
///
/// The key set is exactly [`ModelId::ALL`]; keys are never added or removed
/// at runtime, and toggling one flag leaves every other flag untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelSelection {
    flags: [bool; ModelId::ALL.len()],
}

impl ModelSelection {
    /// Selection with every flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the given model is currently selected.
    pub fn is_selected(&self, id: ModelId) -> bool {
        self.flags[id.index()]
    }

    /// Copy of this selection with exactly one flag flipped.
    pub fn toggled(&self, id: ModelId) -> Self {
        let mut next = self.clone();
        next.flags[id.index()] = !next.flags[id.index()];
        next
    }

    /// Flip one flag in place.
    pub fn toggle(&mut self, id: ModelId) {
        *self = self.toggled(id);
    }

    /// Whether at least one model is selected.
    pub fn any_selected(&self) -> bool {
        self.flags.iter().any(|flag| *flag)
    }

    /// Selected identifiers in roster order.
    pub fn selected_ids(&self) -> Vec<ModelId> {
        ModelId::ALL
            .into_iter()
            .filter(|id| self.is_selected(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_flips_exactly_one_flag() {
        let mut selection = ModelSelection::new();
        selection.toggle(ModelId::RandomForest);
        selection.toggle(ModelId::Knn);

        let next = selection.toggled(ModelId::Svm);
        assert!(next.is_selected(ModelId::Svm));
        for id in ModelId::ALL {
            if id != ModelId::Svm {
                assert_eq!(next.is_selected(id), selection.is_selected(id));
            }
        }
    }

    #[test]
    fn toggling_twice_restores_the_original_selection() {
        let selection = ModelSelection::new().toggled(ModelId::Svm);
        assert_eq!(selection.toggled(ModelId::Svm), ModelSelection::new());
    }

    #[test]
    fn selected_ids_follow_roster_order() {
        let mut selection = ModelSelection::new();
        selection.toggle(ModelId::NaiveBayes);
        selection.toggle(ModelId::Svm);
        assert_eq!(
            selection.selected_ids(),
            vec![ModelId::Svm, ModelId::NaiveBayes]
        );
    }

    #[test]
    fn empty_selection_reports_nothing_selected() {
        let selection = ModelSelection::new();
        assert!(!selection.any_selected());
        assert!(selection.selected_ids().is_empty());
    }

    #[test]
    fn only_svm_and_random_forest_are_available() {
        let available: Vec<ModelId> = ModelId::ALL
            .into_iter()
            .filter(|id| id.available())
            .collect();
        assert_eq!(available, vec![ModelId::Svm, ModelId::RandomForest]);
    }
}
