//! End-to-end submit flow against a stub scoring service.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use scribeval::config::{AppConfig, ScoringSettings};
use scribeval::egui_app::controller::EguiController;
use scribeval::form::ModelId;

fn controller_for(endpoint: String) -> EguiController {
    EguiController::new(AppConfig {
        scoring: ScoringSettings { endpoint },
    })
}

/// Serve exactly one HTTP exchange, forwarding the raw request text.
fn serve_once(body: &str, response_delay: Duration) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (request_tx, request_rx) = mpsc::channel();
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let request = read_request(&mut stream);
            let _ = request_tx.send(request);
            thread::sleep(response_delay);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    (format!("http://{addr}/results"), request_rx)
}

/// Read one HTTP request, honoring Content-Length so the body is complete.
fn read_request(stream: &mut TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let read = match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(read) => read,
        };
        data.extend_from_slice(&buf[..read]);
        if let Some(header_end) = find_header_end(&data) {
            let headers = String::from_utf8_lossy(&data[..header_end]);
            let content_length = headers
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if data.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&data).to_string()
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|window| window == b"\r\n\r\n")
}

fn pump_until_settled(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while controller.ui.results.in_flight {
        controller.poll_background_jobs();
        assert!(Instant::now() < deadline, "score request never settled");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn submit_posts_the_selection_and_stores_the_report() {
    let (endpoint, request_rx) = serve_once(
        r#"{ "accuracy_svm": 87.5, "accuracy_rf": 80.0 }"#,
        Duration::ZERO,
    );
    let mut controller = controller_for(endpoint);
    controller.set_sample_size(60);
    controller.toggle_model(ModelId::Svm);
    controller.toggle_model(ModelId::RandomForest);

    controller.submit_scores();
    assert!(controller.ui.results.in_flight);
    pump_until_settled(&mut controller);

    let report = controller.ui.results.report.clone().expect("report stored");
    assert!(!report.is_failure());
    assert_eq!(report.accuracy_svm, Some(87.5));
    assert_eq!(report.accuracy_rf, Some(80.0));

    let request = request_rx
        .recv_timeout(Duration::from_secs(5))
        .expect("request captured");
    assert!(request.starts_with("POST /results"));
    let lowered = request.to_ascii_lowercase();
    assert!(lowered.contains("content-type: application/json"));
    let body_start = request.find("\r\n\r\n").expect("request has a body") + 4;
    let body: serde_json::Value = serde_json::from_str(&request[body_start..]).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "num_authors": 60, "models": ["svm", "random_forest"] })
    );
}

#[test]
fn transport_failure_collapses_into_the_sentinel_report() {
    // Bind then drop a listener so the port is very likely closed.
    let endpoint = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}/results", listener.local_addr().unwrap())
    };
    let mut controller = controller_for(endpoint);
    controller.toggle_model(ModelId::Svm);

    controller.submit_scores();
    pump_until_settled(&mut controller);

    let report = controller.ui.results.report.clone().expect("sentinel stored");
    assert!(report.is_failure());
}

#[test]
fn submit_without_a_selection_makes_no_request() {
    let (endpoint, request_rx) = serve_once("{}", Duration::ZERO);
    let mut controller = controller_for(endpoint);

    controller.submit_scores();

    assert!(!controller.ui.results.in_flight);
    assert!(controller.ui.results.report.is_none());
    thread::sleep(Duration::from_millis(200));
    assert!(request_rx.try_recv().is_err(), "no request should be made");
}

#[test]
fn a_second_submit_while_in_flight_is_ignored() {
    let (endpoint, request_rx) = serve_once(
        r#"{ "accuracy_svm": 91.0 }"#,
        Duration::from_millis(300),
    );
    let mut controller = controller_for(endpoint);
    controller.toggle_model(ModelId::Svm);

    controller.submit_scores();
    assert!(controller.ui.results.in_flight);
    controller.submit_scores();
    pump_until_settled(&mut controller);

    let report = controller.ui.results.report.clone().expect("report stored");
    assert_eq!(report.accuracy_svm, Some(91.0));

    // Exactly one request reached the stub server.
    assert!(request_rx.recv_timeout(Duration::from_secs(5)).is_ok());
    assert!(request_rx.try_recv().is_err());
}
