use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use httpmock::prelude::*;
use serde_json::json;

use soulbuddy::engine::engine::Engine;
use soulbuddy::engine::protocol::{EngineCommand, EngineResponse};
use soulbuddy::model::profile::Gender;
use soulbuddy::{FlowClient, FlowConfig, Slot, UserProfile};

const RECV_TIMEOUT: Duration = Duration::from_secs(10);

fn spawn_engine(
    base_url: String,
) -> (
    mpsc::Sender<EngineCommand>,
    mpsc::Receiver<EngineResponse>,
) {
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    thread::spawn(move || {
        let config = FlowConfig::default()
            .with_base_url(base_url)
            .with_token("test-token");
        let mut engine = Engine::new(cmd_rx, resp_tx, FlowClient::new(config));
        engine.run();
    });

    (cmd_tx, resp_rx)
}

fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Asha Rao".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1993, 7, 4).unwrap(),
        time_of_birth: NaiveTime::from_hms_opt(6, 5, 0).unwrap(),
        gender: Gender::Female,
        state: "Kerala".to_string(),
        city: "Kochi".to_string(),
    }
}

#[test]
fn submission_round_trip_produces_a_sectioned_reading() {
    let server = MockServer::start();
    let run_mock = server.mock(|when, then| {
        when.method(POST)
            .path_includes("/api/v1/run/astrology")
            .body_includes("Name: Asha Rao")
            .body_includes("DOB: 1993-07-04")
            .body_includes("Time of Birth: 06:05")
            .body_includes("Gender: Female");
        then.status(200).json_body(json!({
            "outputs": [
                { "outputs": [ { "results": { "message": {
                    "text": "intro####insight text####horoscope text####recs text####spirit text"
                } } } ] }
            ]
        }));
    });

    let (cmd_tx, resp_rx) = spawn_engine(server.base_url());
    cmd_tx
        .send(EngineCommand::SubmitProfile(sample_profile()))
        .unwrap();

    let resp = resp_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    run_mock.assert();

    match resp {
        EngineResponse::ReadingReady(reading) => {
            assert_eq!(reading.slot(Slot::Insights), Some("insight text"));
            assert_eq!(reading.slot(Slot::Horoscope), Some("horoscope text"));
            assert_eq!(reading.slot(Slot::Recommendations), Some("recs text"));
            assert_eq!(reading.slot(Slot::Spiritual), Some("spirit text"));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn error_replies_come_back_as_rejections() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_includes("/api/v1/run/");
        then.status(200).json_body(json!({
            "error": true,
            "message": "Invalid token"
        }));
    });

    let (cmd_tx, resp_rx) = spawn_engine(server.base_url());
    cmd_tx
        .send(EngineCommand::SubmitProfile(sample_profile()))
        .unwrap();

    let resp = resp_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    match resp {
        EngineResponse::FlowRejected { message } => assert_eq!(message, "Invalid token"),
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn replies_without_text_come_back_as_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path_includes("/api/v1/run/");
        then.status(200).json_body(json!({ "outputs": [] }));
    });

    let (cmd_tx, resp_rx) = spawn_engine(server.base_url());
    cmd_tx
        .send(EngineCommand::SubmitProfile(sample_profile()))
        .unwrap();

    let resp = resp_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    assert!(matches!(resp, EngineResponse::EmptyReply));
}

#[test]
fn unreachable_service_comes_back_as_request_failed() {
    let (cmd_tx, resp_rx) = spawn_engine("http://127.0.0.1:9".to_string());
    cmd_tx
        .send(EngineCommand::SubmitProfile(sample_profile()))
        .unwrap();

    let resp = resp_rx.recv_timeout(RECV_TIMEOUT).unwrap();
    match resp {
        EngineResponse::RequestFailed { detail } => {
            assert!(detail.contains("astrology flow call failed"));
        }
        other => panic!("unexpected response: {other:?}"),
    }
}

#[test]
fn engine_answers_consecutive_submissions() {
    let server = MockServer::start();
    let run_mock = server.mock(|when, then| {
        when.method(POST).path_includes("/api/v1/run/");
        then.status(200).json_body(json!({
            "outputs": [
                { "outputs": [ { "results": { "message": { "text": "p####only insights" } } } ] }
            ]
        }));
    });

    let (cmd_tx, resp_rx) = spawn_engine(server.base_url());
    for _ in 0..2 {
        cmd_tx
            .send(EngineCommand::SubmitProfile(sample_profile()))
            .unwrap();
        let resp = resp_rx.recv_timeout(RECV_TIMEOUT).unwrap();
        match resp {
            EngineResponse::ReadingReady(reading) => {
                assert_eq!(reading.slot(Slot::Insights), Some("only insights"));
                assert_eq!(reading.slot(Slot::Horoscope), None);
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }
    run_mock.assert_hits(2);
}
