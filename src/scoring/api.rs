//! Wire types and the single POST to the scoring service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http_client;

/// Numeric code stored in place of a real report when a request fails.
pub const RESULT_ERROR_SENTINEL: i64 = -1;

/// Upper bound on the accepted response body size.
pub const MAX_REPORT_BYTES: usize = 256 * 1024;

/// Payload POSTed to the scoring endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreRequest {
    /// Author count bounding the scoring task's input size.
    pub num_authors: u32,
    /// Wire identifiers of the models to evaluate, at least one.
    pub models: Vec<String>,
}

/// Decoded scoring response.
///
/// Every field is optional: the service only reports on the models it was
/// asked about. Each new submission replaces the previous report wholesale.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScoreReport {
    pub accuracy_svm: Option<f64>,
    pub accuracy_svm_grid_search: Option<f64>,
    pub accuracy_rf: Option<f64>,
    pub accuracy_knn: Option<f64>,
    pub accuracy_decision_tree: Option<f64>,
    pub accuracy_naive_bayes: Option<f64>,
    /// Grid-search winners for the SVM family, rendered verbatim.
    #[serde(default)]
    pub best_params_svm: Option<BTreeMap<String, serde_json::Value>>,
    /// Part of the wire contract; the UI never renders it.
    #[serde(default)]
    pub confusion_matrix: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<i64>,
}

impl ScoreReport {
    /// Report consisting solely of the error sentinel.
    pub fn failure() -> Self {
        Self {
            error: Some(RESULT_ERROR_SENTINEL),
            ..Self::default()
        }
    }

    /// Whether this report carries the error sentinel instead of metrics.
    pub fn is_failure(&self) -> bool {
        self.error == Some(RESULT_ERROR_SENTINEL)
    }
}

/// Errors from a single score submission.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// The service answered with a non-success status.
    #[error("Scoring service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The request never completed at the transport level.
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The response body was not a valid report.
    #[error("JSON error: {0}")]
    Json(String),
}

/// Submit one score request and decode the JSON report.
///
/// Blocking; callers run this on a worker thread. No retries: a failed
/// submission is reported once and the user resubmits if they want.
pub fn submit_scores(endpoint: &str, request: &ScoreRequest) -> Result<ScoreReport, ScoreError> {
    let response = match http_client::agent()
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json")
        .send_json(request)
    {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let body = read_body_limited(response).unwrap_or_else(|err| err);
            return Err(ScoreError::Status { status: code, body });
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(ScoreError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response).map_err(ScoreError::Json)?;
    parse_report(&body)
}

fn parse_report(body: &str) -> Result<ScoreReport, ScoreError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(ScoreError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| ScoreError::Json(format!("{err}: {trimmed}")))
}

fn read_body_limited(response: ureq::Response) -> Result<String, String> {
    let bytes = http_client::read_response_bytes(response, MAX_REPORT_BYTES)
        .map_err(|err| err.to_string())?;
    String::from_utf8(bytes).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn parses_report_with_metrics_and_params() {
        let body = r#"{
            "accuracy_svm": 87.5,
            "accuracy_svm_grid_search": 91.25,
            "best_params_svm": { "C": 10, "kernel": "rbf" },
            "accuracy_rf": 80.0
        }"#;
        let report = parse_report(body).unwrap();
        assert_eq!(report.accuracy_svm, Some(87.5));
        assert_eq!(report.accuracy_rf, Some(80.0));
        let params = report.best_params_svm.unwrap();
        assert_eq!(params.get("kernel").unwrap(), "rbf");
        assert!(!ScoreReport::default().is_failure());
    }

    #[test]
    fn ignores_unrecognized_fields() {
        let report = parse_report(r#"{ "accuracy_svm": 50.0, "elapsed_secs": 12 }"#).unwrap();
        assert_eq!(report.accuracy_svm, Some(50.0));
    }

    #[test]
    fn confusion_matrix_decodes_without_affecting_metrics() {
        let report =
            parse_report(r#"{ "accuracy_rf": 70.0, "confusion_matrix": [[1, 0], [0, 1]] }"#)
                .unwrap();
        assert!(report.confusion_matrix.is_some());
        assert_eq!(report.accuracy_rf, Some(70.0));
    }

    #[test]
    fn sentinel_report_is_a_failure() {
        assert!(ScoreReport::failure().is_failure());
        assert!(parse_report(r#"{ "error": -1 }"#).unwrap().is_failure());
    }

    #[test]
    fn string_error_field_is_a_decode_failure() {
        let err = parse_report(r#"{ "error": "no recognized model" }"#).unwrap_err();
        assert!(matches!(err, ScoreError::Json(_)));
    }

    #[test]
    fn request_serializes_to_the_boundary_shape() {
        let request = ScoreRequest {
            num_authors: 60,
            models: vec!["svm".to_string(), "random_forest".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "num_authors": 60, "models": ["svm", "random_forest"] })
        );
    }

    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                drain_request(&mut stream);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}/results", addr)
    }

    // Read headers plus the Content-Length body so the reply never races the
    // client's request write.
    fn drain_request(stream: &mut std::net::TcpStream) {
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let read = match stream.read(&mut buf) {
                Ok(0) | Err(_) => return,
                Ok(read) => read,
            };
            data.extend_from_slice(&buf[..read]);
            let Some(header_end) = data.windows(4).position(|window| window == b"\r\n\r\n")
            else {
                continue;
            };
            let headers = String::from_utf8_lossy(&data[..header_end]);
            let body_len = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + body_len {
                return;
            }
        }
    }

    fn sample_request() -> ScoreRequest {
        ScoreRequest {
            num_authors: 20,
            models: vec!["svm".to_string()],
        }
    }

    #[test]
    fn submit_decodes_a_successful_response() {
        let body = r#"{ "accuracy_svm": 87.5 }"#;
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
            body.len(),
            body
        ));
        let report = submit_scores(&url, &sample_request()).unwrap();
        assert_eq!(report.accuracy_svm, Some(87.5));
    }

    #[test]
    fn submit_maps_server_status_to_error() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 4\r\n\r\noops".to_string(),
        );
        let err = submit_scores(&url, &sample_request()).unwrap_err();
        assert!(matches!(err, ScoreError::Status { status: 500, .. }));
    }

    #[test]
    fn submit_rejects_non_json_bodies() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 9\r\n\r\nnot json!".to_string(),
        );
        let err = submit_scores(&url, &sample_request()).unwrap_err();
        assert!(matches!(err, ScoreError::Json(_)));
    }
}
