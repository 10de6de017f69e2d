// Shared test helpers for the mock analysis service.
//
// This module provides response bodies shaped like the Zonemaster data call and
// a Config pointing at a wiremock server.

#![allow(dead_code)] // Each test file uses a different subset

use dnsaudit::Config;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Path the mock data call is served on.
pub const DATA_PATH: &str = "/data/zonemaster/data.json";

/// Builds a Config for `domain` against the mock server, with pacing disabled.
pub fn test_config(server: &MockServer, domain: Option<&str>) -> Config {
    Config {
        domain: domain.map(str::to_string),
        endpoint: format!("{}{}", server.uri(), DATA_PATH),
        pacing: false,
        ..Default::default()
    }
}

/// Summary response listing the given scan ids.
pub fn summary_body(ids: &[&str]) -> Value {
    let result: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
    json!({
        "messages": [],
        "see_also": [],
        "version": "1.0",
        "data_call_name": "zonemaster",
        "data_call_status": "supported",
        "cached": false,
        "data": { "result": result }
    })
}

/// Details response with (module, level, message) records.
pub fn details_body(records: &[(&str, &str, &str)]) -> Value {
    let results: Vec<Value> = records
        .iter()
        .map(|(module, level, message)| {
            json!({ "module": module, "level": level, "message": message })
        })
        .collect();
    json!({ "data": { "result": { "results": results } } })
}

/// Removes ANSI color sequences so output can be compared as plain text.
pub fn strip_ansi(s: &str) -> String {
    regex::Regex::new(r"\x1b\[[0-9;]*m")
        .expect("valid regex")
        .replace_all(s, "")
        .into_owned()
}
