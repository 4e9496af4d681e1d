//! End-to-end scenarios exercising the public `Logpar` entry point against
//! a fixed schema, one per documented behavior.

use logpar::{JsonEvent, LogParError, Logpar};
use serde_json::json;

fn schema() -> serde_json::Value {
    json!({
        "fields": {
            "client.ip": "ip",
            "http.request.method": "keyword",
            "http.response.status_code": "long",
            "user.name": "keyword",
        }
    })
}

#[test]
fn literal_only_pattern() {
    let logpar = Logpar::new(&schema(), 2, 0).unwrap();
    let parser = logpar.build("hello").unwrap();

    assert_eq!(logpar.run(&parser, "hello").unwrap(), json!({}));
    assert!(logpar.run(&parser, "hellox").is_err());
}

#[test]
fn single_schema_field() {
    let logpar = Logpar::new(&schema(), 2, 0).unwrap();
    let parser = logpar.build("<client.ip> connected").unwrap();

    assert_eq!(logpar.run(&parser, "10.0.0.1 connected").unwrap(), json!({"client": {"ip": "10.0.0.1"}}));

    match logpar.run(&parser, "not-an-ip connected").unwrap_err() {
        LogParError::Parse(trace) => {
            assert!(trace.contains("ip"), "expected a trace referencing the ip parser, got: {trace}");
        }
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[test]
fn choice_tries_left_then_falls_back_to_right() {
    // `P_TEXT` (backing KEYWORD fields like `user.name`) matches whatever
    // precedes the end token with no further validation, so it can never be
    // the branch that demonstrates fallback: it would always win. `client.ip`
    // genuinely rejects non-IP text, so pairing it with `user.name` is what
    // actually exercises `alt`'s "try left, fall back to right" contract.
    let logpar = Logpar::new(&schema(), 2, 0).unwrap();
    let parser = logpar.build("<client.ip>?<user.name> /x").unwrap();

    assert_eq!(logpar.run(&parser, "10.0.0.1 /x").unwrap(), json!({"client": {"ip": "10.0.0.1"}}));
    assert_eq!(logpar.run(&parser, "alice /x").unwrap(), json!({"user": {"name": "alice"}}));
    assert!(logpar.run(&parser, " /x").is_err());
}

#[test]
fn optional_group_taken_and_skipped() {
    let logpar = Logpar::new(&schema(), 2, 0).unwrap();
    let parser = logpar.build("<user.name>(? from <client.ip>)!").unwrap();

    assert_eq!(
        logpar.run(&parser, "alice from 10.0.0.1!").unwrap(),
        json!({"user": {"name": "alice"}, "client": {"ip": "10.0.0.1"}})
    );
    assert_eq!(logpar.run(&parser, "alice!").unwrap(), json!({"user": {"name": "alice"}}));
}

#[test]
fn custom_field_discarded_vs_named() {
    let logpar = Logpar::new(&schema(), 2, 0).unwrap();

    let discarding = logpar.build("<~tmp/long> items").unwrap();
    assert_eq!(logpar.run(&discarding, "42 items").unwrap(), json!({}));

    let naming = logpar.build("<~count/long> items").unwrap();
    assert_eq!(logpar.run(&naming, "42 items").unwrap(), json!({"count": 42}));
}

#[test]
fn recursion_limit_bounds_nested_groups() {
    let over_limit = Logpar::new(&schema(), 2, 0).unwrap();
    assert!(over_limit.build("(?(?(?x)))").is_err());

    let at_limit = Logpar::new(&schema(), 2, 0).unwrap();
    let parser = at_limit.build("(?(?x))").unwrap();
    assert_eq!(at_limit.run(&parser, "x").unwrap(), json!({}));
    assert_eq!(at_limit.run(&parser, "").unwrap(), json!({}));
}

#[test]
fn run_on_event_merges_parsed_document_into_the_event() {
    let logpar = Logpar::new(&schema(), 2, 0).unwrap();
    let parser = logpar.build("<client.ip> connected").unwrap();
    let mut event = JsonEvent::new(json!({"message": "10.0.0.1 connected", "host": "gw1"}));

    logpar.run_on_event(&parser, &mut event, "message").unwrap();

    assert_eq!(
        event.into_value(),
        json!({"message": "10.0.0.1 connected", "host": "gw1", "client": {"ip": "10.0.0.1"}})
    );
}

#[test]
fn run_on_event_reports_integration_error_on_non_string_field() {
    let logpar = Logpar::new(&schema(), 2, 0).unwrap();
    let parser = logpar.build("<client.ip> connected").unwrap();
    let mut event = JsonEvent::new(json!({"message": 42}));

    let err = logpar.run_on_event(&parser, &mut event, "message").unwrap_err();
    assert!(matches!(err, logpar::LogParError::Integration(_)));
}
