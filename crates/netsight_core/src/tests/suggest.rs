//! Tests for the parameter suggestion contract

use std::error::Error;

use crate::error::{ProviderError, SUGGESTION_FAILED_MESSAGE, SuggestionError};
use crate::model::{ChannelCoding, Modulation, NetworkType, ParameterField, SimulationParameters};
use crate::suggest::{
    LatestRequest, SuggestedParameters, SuggestionGoal, SuggestionRequest, SuggestionResponse,
    request_suggestion,
};

fn canned_response(modulation: &str) -> SuggestionResponse {
    SuggestionResponse {
        suggested_parameters: SuggestedParameters {
            modulation: modulation.to_string(),
            bandwidth: 100.0,
            distance: 200.0,
            noise_level: -100.0,
        },
        reasoning: "Wide channel at short range".to_string(),
    }
}

#[test]
fn test_request_wire_format() {
    let request = SuggestionRequest::new(NetworkType::FiveG, SuggestionGoal::MinimizeBer.description());
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"networkType": "5G", "goal": "Minimize bit error rate"})
    );

    let request = request.with_constraints(Some("urban macro cell".to_string()));
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["userConstraints"], "urban macro cell");

    // Blank constraints are dropped
    let request = SuggestionRequest::new(NetworkType::FourG, "x").with_constraints(Some("  ".into()));
    assert_eq!(request.user_constraints, None);
}

#[test]
fn test_response_parses_model_output() {
    let raw = r#"{
        "suggestedParameters": {
            "modulation": "256-QAM",
            "bandwidth": 100,
            "distance": 150,
            "noiseLevel": -105
        },
        "reasoning": "Short range allows dense constellations."
    }"#;
    let response: SuggestionResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(response.suggested_parameters.modulation, "256-QAM");
    assert_eq!(response.suggested_parameters.noise_level, -105.0);
    assert!(response.reasoning.starts_with("Short range"));
}

#[test]
fn test_apply_keeps_network_and_coding() {
    let base = SimulationParameters::default()
        .with_network_type(NetworkType::FourG)
        .with_channel_coding(ChannelCoding::Hamming);

    let applied = canned_response("16-qam").suggested_parameters.apply_to(&base).unwrap();
    assert_eq!(applied.network_type, NetworkType::FourG);
    assert_eq!(applied.channel_coding, ChannelCoding::Hamming);
    assert_eq!(applied.modulation, Modulation::Qam16);
    assert_eq!(applied.bandwidth, 100.0);
    assert_eq!(applied.distance, 200.0);
    assert_eq!(applied.noise_level, -100.0);
}

#[test]
fn test_apply_rejects_unknown_modulation() {
    let err = canned_response("1024-QAM")
        .suggested_parameters
        .apply_to(&SimulationParameters::default())
        .unwrap_err();
    assert!(matches!(err, SuggestionError::UnknownModulation(_)));
    assert!(!err.is_retryable());
}

#[test]
fn test_apply_rejects_out_of_domain_values() {
    let mut response = canned_response("QPSK");
    response.suggested_parameters.bandwidth = 400.0;

    let err = response
        .suggested_parameters
        .apply_to(&SimulationParameters::default())
        .unwrap_err();
    match err {
        SuggestionError::Invalid(e) => assert_eq!(e.field, ParameterField::Bandwidth),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_provider_failure_is_generic_and_retryable() {
    let failing = |_: &SuggestionRequest| -> Result<SuggestionResponse, ProviderError> {
        Err("model quota exceeded".into())
    };
    let request = SuggestionRequest::new(NetworkType::FiveG, "balanced");

    let err = request_suggestion(&failing, &request).unwrap_err();
    assert_eq!(err.to_string(), SUGGESTION_FAILED_MESSAGE);
    assert!(err.is_retryable());
    assert_eq!(err.source().unwrap().to_string(), "model quota exceeded");
}

#[test]
fn test_provider_success_passes_through() {
    let provider = |req: &SuggestionRequest| -> Result<SuggestionResponse, ProviderError> {
        assert_eq!(req.network_type, NetworkType::FourG);
        Ok(canned_response("QPSK"))
    };
    let request = SuggestionRequest::new(NetworkType::FourG, "maximize throughput");

    let response = request_suggestion(&provider, &request).unwrap();
    assert_eq!(response, canned_response("QPSK"));
}

#[test]
fn test_latest_request_wins() {
    let mut latest = LatestRequest::new();
    assert_eq!(latest.latest(), None);

    let first = latest.issue();
    assert!(latest.is_current(first));

    let second = latest.issue();
    assert!(!latest.is_current(first));
    assert!(latest.is_current(second));
    assert_eq!(latest.latest(), Some(second));
}

#[test]
fn test_goal_keys() {
    assert_eq!(
        SuggestionGoal::from_key("minimize_ber"),
        Some(SuggestionGoal::MinimizeBer)
    );
    assert_eq!(SuggestionGoal::from_key("make it fast"), None);
    assert_eq!(SuggestionGoal::Balanced.next(), SuggestionGoal::MaximizeThroughput);
}
