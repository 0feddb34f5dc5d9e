//! Helpers to convert scoring reports into egui-facing view structs.

use crate::scoring::{MetricField, ScoreReport};

/// Number of placeholder cards shown while a request is in flight.
pub const LOADING_CARD_COUNT: usize = 3;

/// Message shown when a submission collapsed into the sentinel result.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to fetch scores from the scoring service.";

/// Message shown before the first submission.
pub const EMPTY_STATE_MESSAGE: &str = "No scores yet. Configure a run and press Get results.";

/// One labeled accuracy value ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricCardView {
    pub label: &'static str,
    pub value: String,
}

/// One grid-search parameter ready to render, value verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParamCardView {
    pub name: String,
    pub value: String,
}

/// What the result area shows this frame.
#[derive(Clone, Debug, PartialEq)]
pub enum ResultsView {
    /// Nothing submitted yet.
    Empty,
    /// Request in flight; show placeholder cards.
    Loading { placeholders: usize },
    /// The stored report is the error sentinel.
    Error { message: &'static str },
    /// Metrics (and optional grid-search parameters) to lay out as cards.
    Report {
        metrics: Vec<MetricCardView>,
        best_params: Vec<ParamCardView>,
    },
}

/// Decide the result-area presentation from the controller state.
pub fn results_view(in_flight: bool, report: Option<&ScoreReport>) -> ResultsView {
    if in_flight {
        return ResultsView::Loading {
            placeholders: LOADING_CARD_COUNT,
        };
    }
    let Some(report) = report else {
        return ResultsView::Empty;
    };
    if report.is_failure() {
        return ResultsView::Error {
            message: REQUEST_FAILED_MESSAGE,
        };
    }
    ResultsView::Report {
        metrics: metric_cards(report),
        best_params: param_cards(report),
    }
}

/// One card per recognized metric present in the report, in display order.
pub fn metric_cards(report: &ScoreReport) -> Vec<MetricCardView> {
    MetricField::ALL
        .into_iter()
        .filter_map(|field| {
            field.value_in(report).map(|value| MetricCardView {
                label: field.label(),
                value: format_percentage(value),
            })
        })
        .collect()
}

/// One card per grid-search parameter, if the report carries any.
pub fn param_cards(report: &ScoreReport) -> Vec<ParamCardView> {
    let Some(params) = report.best_params_svm.as_ref() else {
        return Vec::new();
    };
    params
        .iter()
        .map(|(name, value)| ParamCardView {
            name: name.clone(),
            value: param_value_text(value),
        })
        .collect()
}

/// Render a 0-100 accuracy value with two decimals and a percent sign.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

fn param_value_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(body: &str) -> ScoreReport {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn svm_accuracy_renders_one_labeled_percentage_card() {
        let view = results_view(false, Some(&report(r#"{ "accuracy_svm": 87.5 }"#)));
        let ResultsView::Report { metrics, best_params } = view else {
            panic!("expected a report view");
        };
        assert_eq!(
            metrics,
            vec![MetricCardView {
                label: "SVM",
                value: "87.50%".to_string(),
            }]
        );
        assert!(best_params.is_empty());
    }

    #[test]
    fn sentinel_report_renders_error_and_no_cards() {
        let view = results_view(false, Some(&ScoreReport::failure()));
        assert_eq!(
            view,
            ResultsView::Error {
                message: REQUEST_FAILED_MESSAGE,
            }
        );
    }

    #[test]
    fn in_flight_shows_three_placeholders_regardless_of_report() {
        let stored = report(r#"{ "accuracy_rf": 12.0 }"#);
        assert_eq!(
            results_view(true, Some(&stored)),
            ResultsView::Loading { placeholders: 3 }
        );
        assert_eq!(
            results_view(true, None),
            ResultsView::Loading { placeholders: 3 }
        );
    }

    #[test]
    fn no_report_shows_the_empty_state() {
        assert_eq!(results_view(false, None), ResultsView::Empty);
    }

    #[test]
    fn cards_follow_display_order_and_skip_absent_metrics() {
        let cards = metric_cards(&report(
            r#"{ "accuracy_rf": 80.0, "accuracy_svm": 87.512 }"#,
        ));
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].label, "SVM");
        assert_eq!(cards[0].value, "87.51%");
        assert_eq!(cards[1].label, "Random Forest");
        assert_eq!(cards[1].value, "80.00%");
    }

    #[test]
    fn confusion_matrix_never_produces_a_card() {
        let cards = metric_cards(&report(
            r#"{ "accuracy_svm": 60.0, "confusion_matrix": [[3, 1], [0, 4]] }"#,
        ));
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn grid_search_params_render_verbatim() {
        let cards = param_cards(&report(
            r#"{ "best_params_svm": { "C": 10, "kernel": "rbf" } }"#,
        ));
        assert_eq!(
            cards,
            vec![
                ParamCardView {
                    name: "C".to_string(),
                    value: "10".to_string(),
                },
                ParamCardView {
                    name: "kernel".to_string(),
                    value: "rbf".to_string(),
                },
            ]
        );
    }
}
