//! Verify `build_call` / `parse_reply` against JSON vectors in `test-vectors/`.
//!
//! Each case gives a method and parameters, the expected headers and decoded
//! form fields, a simulated response, and either the expected reply or the
//! expected error variant. Form fields are compared after decoding so the
//! vectors stay readable.

use baselinker_core::{ApiError, ClientConfig, Dispatcher, HttpResponse, Params, Token, DEFAULT_ENDPOINT};
use serde_json::Value;

fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let arr = pair.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect()
}

fn error_name(err: &ApiError) -> &'static str {
    match err {
        ApiError::Configuration(_) => "Configuration",
        ApiError::InvalidMethod => "InvalidMethod",
        ApiError::UnexpectedParameter { .. } => "UnexpectedParameter",
        ApiError::Encode(_) => "Encode",
        ApiError::Transport(_) => "Transport",
        ApiError::Decode(_) => "Decode",
    }
}

#[test]
fn call_test_vectors() {
    let raw = include_str!("../../test-vectors/calls.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let token = Token::new(vectors["token"].as_str().unwrap()).unwrap();
    let dispatcher = Dispatcher::new(token, &ClientConfig::default()).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let method = case["method"].as_str().unwrap();
        let params = Params::try_from(case["parameters"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = dispatcher.build_call(method, &params).unwrap();
        assert_eq!(req.url, DEFAULT_ENDPOINT, "{name}: url");
        assert_eq!(req.headers, pairs(&expected_req["headers"]), "{name}: headers");
        assert_eq!(req.form_fields(), pairs(&expected_req["form"]), "{name}: form");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let result = dispatcher.parse_reply(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            assert_eq!(error_name(&err), expected_error.as_str().unwrap(), "{name}: error");
        } else {
            let reply = result.unwrap();
            assert_eq!(Value::from(reply), case["expected_result"], "{name}: parsed result");
        }
    }
}
