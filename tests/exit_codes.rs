//! Tests for the exit code policy.
//!
//! Completed audits exit with 0 whatever branch they took; failures are told
//! apart by kind so scripts can react to them.

mod helpers;

use clap::Parser;
use dnsaudit::{cli_exit_code, exit_code, normalize_legacy_flags, run_audit, AuditOutcome, Config, Opt};
use helpers::test_config;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_exit_codes_are_distinct() {
    let codes = [
        exit_code::SUCCESS,
        exit_code::FAILURE,
        exit_code::TRANSPORT,
        exit_code::DECODE,
        exit_code::USAGE,
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_eq!(exit_code::SUCCESS, 0);
}

#[tokio::test]
async fn test_invalid_endpoint_is_a_general_failure() {
    let config = Config {
        domain: Some("example.com".to_string()),
        endpoint: "not a url".to_string(),
        ..Default::default()
    };

    let err = run_audit(&config, &mut Vec::<u8>::new())
        .await
        .expect_err("endpoint should be rejected");
    assert_eq!(err.exit_code(), exit_code::FAILURE);
}

#[tokio::test]
async fn test_missing_domain_is_success() {
    // The endpoint is never parsed when no domain is given.
    let config = Config {
        endpoint: "not a url".to_string(),
        ..Default::default()
    };

    let outcome = run_audit(&config, &mut Vec::<u8>::new())
        .await
        .expect("missing domain is not an error");
    assert_eq!(outcome, AuditOutcome::MissingDomain);
}

#[tokio::test]
async fn test_wrong_json_shape_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": { "result": "oops" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = run_audit(&test_config(&server, Some("example.com")), &mut Vec::<u8>::new())
        .await
        .expect_err("string result should not decode");
    assert_eq!(err.exit_code(), exit_code::DECODE);
}

fn parse_exit_code(args: &[&str]) -> i32 {
    let err = Opt::try_parse_from(normalize_legacy_flags(args.iter().copied()))
        .expect_err("arguments should not parse");
    cli_exit_code(&err)
}

#[test]
fn test_unknown_flag_is_a_usage_error() {
    let code = parse_exit_code(&["dnsaudit", "-domain", "example.com", "--bogus"]);
    assert_eq!(code, exit_code::USAGE);
    assert_ne!(code, exit_code::TRANSPORT);
}

#[test]
fn test_bad_flag_value_is_a_usage_error() {
    assert_eq!(
        parse_exit_code(&["dnsaudit", "--domain", "example.com", "--timeout-seconds", "soon"]),
        exit_code::USAGE
    );
    assert_eq!(
        parse_exit_code(&["dnsaudit", "-domain", "example.com", "-update=maybe"]),
        exit_code::USAGE
    );
}

#[test]
fn test_help_and_version_are_success() {
    assert_eq!(parse_exit_code(&["dnsaudit", "--help"]), exit_code::SUCCESS);
    assert_eq!(parse_exit_code(&["dnsaudit", "--version"]), exit_code::SUCCESS);
}
