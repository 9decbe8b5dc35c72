//! `ob exec` specs
//!
//! Verify batches reach the device in order with types intact, and that the
//! result and exit code reflect per-command outcomes.

use crate::prelude::*;
use std::time::{Duration, Instant};

const CREATE_TRACK: &str = r#"{
    "commands": [{"path": "/live/song/create_audio_track", "args": [-1]}],
    "description": "create track"
}"#;

#[test]
fn single_command_from_stdin() {
    let env = Env::new();
    let device = Device::bind();

    let run = env
        .ob()
        .device(device.port())
        .args(&["exec", "-o", "json"])
        .stdin(CREATE_TRACK)
        .passes();

    let result = run.json();
    assert_eq!(result["status"], "success");
    assert_eq!(result["summary"], serde_json::json!({"total": 1, "success": 1, "failed": 0}));
    assert_eq!(result["results"][0]["status"], "success");
    assert_eq!(result["description"], "create track");

    let received = device.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].addr, "/live/song/create_audio_track");
    assert_eq!(received[0].args, vec![OscType::Int(-1)]);
}

#[test]
fn commands_arrive_in_order_with_types() {
    let env = Env::new();
    let device = Device::bind();
    let batch = env.file(
        "batch.json",
        r#"{
            "commands": [
                {"path": "/live/song/create_midi_track", "args": [-1]},
                {"path": "/live/track/set/name", "args": [0, "Keys"]},
                {"path": "/live/track/set/volume", "args": [0, 0.85]},
                {"path": "/live/track/set/mute", "args": [0, false]},
                {"path": "/live/song/start_playing"}
            ],
            "description": "keys track"
        }"#,
    );

    env.ob()
        .device(device.port())
        .args(&["exec", &batch])
        .passes()
        .stdout_has("success: Executed 5/5 commands successfully (keys track)");

    let received = device.received();
    let addrs: Vec<_> = received.iter().map(|m| m.addr.as_str()).collect();
    assert_eq!(
        addrs,
        [
            "/live/song/create_midi_track",
            "/live/track/set/name",
            "/live/track/set/volume",
            "/live/track/set/mute",
            "/live/song/start_playing",
        ]
    );
    assert_eq!(received[1].args, vec![OscType::Int(0), OscType::String("Keys".to_string())]);
    assert_eq!(received[2].args, vec![OscType::Int(0), OscType::Float(0.85)]);
    assert_eq!(received[3].args, vec![OscType::Int(0), OscType::Bool(false)]);
    assert!(received[4].args.is_empty());
}

#[test]
fn empty_batch_sends_nothing() {
    let env = Env::new();
    let device = Device::bind();

    let run = env
        .ob()
        .device(device.port())
        .args(&["exec", "-", "-o", "json"])
        .stdin(r#"{"commands": [], "description": "nothing to do"}"#)
        .passes();

    let result = run.json();
    assert_eq!(result["status"], "success");
    assert_eq!(result["message"], "No commands to execute");
    assert_eq!(result["results"], serde_json::json!([]));
    assert!(device.received().is_empty());
}

#[test]
fn failed_command_is_partial_and_batch_continues() {
    let env = Env::new();
    let device = Device::bind();

    let run = env
        .ob()
        .device(device.port())
        .args(&["exec", "-o", "json"])
        .stdin(
            r#"{
                "commands": [
                    {"path": ""},
                    {"path": "/live/song/create_audio_track", "args": [-1]}
                ],
                "description": "one bad"
            }"#,
        )
        .exits(2);

    let result = run.json();
    assert_eq!(result["status"], "partial");
    assert_eq!(result["results"][0]["status"], "error");
    assert_eq!(result["results"][0]["error"], "empty OSC address");
    assert_eq!(result["results"][1]["status"], "success");
    assert_eq!(result["summary"], serde_json::json!({"total": 2, "success": 1, "failed": 1}));

    let received = device.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].addr, "/live/song/create_audio_track");
}

#[test]
fn unresolvable_host_fails_whole_batch() {
    let env = Env::new();

    let run = env
        .ob()
        .args(&["exec", "--host", "live.invalid", "-o", "json"])
        .stdin(CREATE_TRACK)
        .fails();

    let result = run.json();
    assert_eq!(result["status"], "error");
    assert_eq!(result["results"], serde_json::json!([]));
    assert!(
        result["message"].as_str().unwrap().starts_with("Error executing commands:"),
        "{}",
        result["message"]
    );
}

#[test]
fn schema_violation_is_rejected_before_sending() {
    let env = Env::new();
    let device = Device::bind();

    env.ob()
        .device(device.port())
        .args(&["exec"])
        .stdin(r#"{"commands": [{"path": "/live/song/stop_playing"}]}"#)
        .fails()
        .stderr_has("invalid batch");

    assert!(device.received().is_empty());
}

#[test]
fn pacing_delays_after_every_command() {
    let env = Env::new();
    let device = Device::bind();
    let batch = env.file(
        "batch.json",
        r#"{
            "commands": [
                {"path": "/live/song/create_audio_track", "args": [-1]},
                {"path": "/live/song/create_audio_track", "args": [-1]},
                {"path": "/live/song/create_audio_track", "args": [-1]}
            ],
            "description": "three tracks"
        }"#,
    );

    let start = Instant::now();
    env.ob()
        .device(device.port())
        .env("OB_PACING_MS", "100")
        .args(&["exec", &batch])
        .passes();

    assert!(start.elapsed() >= Duration::from_millis(300), "{:?}", start.elapsed());
    assert_eq!(device.received().len(), 3);
}

#[test]
fn port_flag_overrides_config_file() {
    let env = Env::new();
    let device = Device::bind();
    let config = env.file("ob.toml", &format!("port = {}\npacing_ms = 0\n", free_port()));

    env.ob()
        .args(&["--config", &config, "--port", &device.port().to_string(), "exec"])
        .stdin(CREATE_TRACK)
        .passes();

    assert_eq!(device.received().len(), 1);
}

#[test]
fn config_file_sets_destination() {
    let env = Env::new();
    let device = Device::bind();
    let config = env.file("ob.toml", &format!("host = \"127.0.0.1\"\nport = {}\n", device.port()));

    env.ob().env("OB_CONFIG", &config).args(&["exec"]).stdin(CREATE_TRACK).passes();

    assert_eq!(device.received().len(), 1);
}
