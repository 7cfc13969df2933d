// tests/api_test.rs

use poker_equity::api::{
    handle_equity_json, handle_equity_request, handle_equity_request_with, ApiError,
    EquityRequest, EquityResponse,
};
use poker_equity::domain::EquitySource;
use poker_equity::engine::CancelToken;

fn request(hand1: &[&str], hand2: &[&str], trials: Option<u64>, seed: Option<u64>) -> EquityRequest {
    EquityRequest {
        hand1: hand1.iter().map(|s| s.to_string()).collect(),
        hand2: hand2.iter().map(|s| s.to_string()).collect(),
        trials,
        seed,
    }
}

#[test]
fn known_matchup_through_api() {
    let resp = handle_equity_request(&request(&["As", "Ks"], &["6d", "6c"], None, None)).unwrap();

    assert_eq!(resp.source, EquitySource::Precomputed);
    assert_eq!(resp.hand1.hand, vec!["As".to_string(), "Ks".to_string()]);
    assert_eq!(resp.hand1.equity, 49.77);
    assert_eq!(resp.hand1.wins, 2489);
    assert_eq!(resp.hand1.ties, 31);
    assert_eq!(resp.hand2.equity, 49.61);
}

#[test]
fn simulated_response_is_rounded_to_two_decimals() {
    let resp =
        handle_equity_request(&request(&["Qh", "Jh"], &["2c", "2d"], Some(3_000), Some(4))).unwrap();

    assert_eq!(resp.source, EquitySource::Simulated);
    assert_eq!(resp.trials, 3_000);
    for eq in [resp.hand1.equity, resp.hand2.equity] {
        assert!(((eq * 100.0).round() - eq * 100.0).abs() < 1e-6);
    }
    assert_eq!(resp.hand1.wins + resp.hand2.wins + resp.hand1.ties, 3_000);
}

#[test]
fn bad_card_string_is_bad_request() {
    let err = handle_equity_request(&request(&["Xs", "Ks"], &["6d", "6c"], None, None)).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn shared_card_is_invalid_input() {
    let err =
        handle_equity_request(&request(&["As", "Ks"], &["As", "6c"], Some(100), None)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    let err = handle_equity_request(&request(&["As", "Ks"], &["7s", "6c"], Some(0), None)).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn cancelled_request_is_internal_error() {
    let token = CancelToken::new();
    token.cancel();

    let err = handle_equity_request_with(
        &request(&["Ah", "Ad"], &["Kh", "Kd"], Some(10_000), Some(1)),
        &token,
    )
    .unwrap_err();
    assert!(matches!(err, ApiError::Internal(_)));
}

#[test]
fn json_roundtrip_through_handler() {
    let body = r#"{"hand1": ["Ah", "Ad"], "hand2": ["Kh", "Kd"], "trials": 2000, "seed": 9}"#;
    let out = handle_equity_json(body).unwrap();

    let resp: EquityResponse = serde_json::from_str(&out).unwrap();
    assert_eq!(resp.trials, 2_000);
    assert_eq!(resp.source, EquitySource::Simulated);
    assert!(resp.hand1.equity > resp.hand2.equity);

    // Тот же seed → тот же ответ.
    assert_eq!(handle_equity_json(body).unwrap(), out);
}

#[test]
fn json_without_optional_fields_uses_defaults() {
    let body = r#"{"hand1": ["As", "Ks"], "hand2": ["6d", "6c"]}"#;
    let out = handle_equity_json(body).unwrap();
    let resp: EquityResponse = serde_json::from_str(&out).unwrap();

    assert_eq!(resp.source, EquitySource::Precomputed);
}

#[test]
fn malformed_json_is_bad_request() {
    let err = handle_equity_json("{\"hand1\": [").unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(_)));
}

#[test]
fn short_hand_gets_fallback_through_api() {
    let resp = handle_equity_request(&request(&["As"], &["6d", "6c"], None, None)).unwrap();
    assert_eq!(resp.source, EquitySource::Fallback);
    assert_eq!(resp.hand1.equity, 50.0);
}
