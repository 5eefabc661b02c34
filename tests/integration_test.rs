//! Integration tests for the public scoring API
//!
//! These tests exercise the crate the way a request layer would:
//! - single-modality extraction and scoring through `ScoringEngine`
//! - fusion of whatever modalities are present
//! - whole-session analysis, blocking and async
//! - configuration loaded from a JSON file

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use truth_fusion::fusion::INTERPRETATION_BANDS;
use truth_fusion::scoring::{facial, voice};
use truth_fusion::{
    EngineConfig, FusionError, Modality, ModalityResult, RawSample, ScoringEngine, SessionInput,
};

const TRANSCRIPT: &str = "Honestly I was at the office all day. I definitely did not see the report. \
    Maybe someone else took it, but I am sure it was not me.";

fn random_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<u8>()).collect()
}

fn assert_bounded(result: &ModalityResult) {
    for (key, value) in &result.sub_scores {
        assert!(*value <= 100, "{} = {}", key, value);
    }
    assert!(result.confidence <= 100);
}

#[test]
fn test_random_buffers_stay_bounded() {
    let engine = ScoringEngine::default();

    for seed in 0..8 {
        let len = 500 + (seed as usize) * 1371;
        let sample = RawSample::from(random_bytes(seed, len));

        let voice = engine.extract_and_score(Modality::Voice, Some(&sample)).unwrap();
        let facial = engine.extract_and_score(Modality::Facial, Some(&sample)).unwrap();
        assert_bounded(&voice);
        assert_bounded(&facial);

        let fused = engine.fuse(Some(&voice), Some(&facial), None).unwrap();
        assert!(fused.truthfulness <= 100);
        assert!(fused.confidence <= 100);
    }
}

#[test]
fn test_identical_input_identical_json() {
    let engine = ScoringEngine::default();
    let audio = RawSample::from(random_bytes(42, 6000));
    let text = RawSample::from(TRANSCRIPT);

    let run = || {
        let voice = engine.extract_and_score(Modality::Voice, Some(&audio)).unwrap();
        let text = engine.extract_and_score(Modality::Text, Some(&text)).unwrap();
        let fused = engine.fuse(Some(&voice), None, Some(&text)).unwrap();
        serde_json::to_string(&(voice, text, fused)).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_no_data_results_are_fixed() {
    let engine = ScoringEngine::default();

    let voice = engine.extract_and_score(Modality::Voice, None).unwrap();
    assert_eq!(voice.confidence, 50);
    assert_eq!(voice.interpretation, "No audio data provided");

    let facial = engine.extract_and_score(Modality::Facial, None).unwrap();
    assert_eq!(facial.sub_score(facial::HEAD_POSE_STABILITY), Some(80));
    assert_eq!(facial.sub_score(facial::GAZE_STABILITY), Some(75));
    assert_eq!(facial.confidence, 50);

    // A real sample always carries more weight than no sample
    let silence = RawSample::from(vec![0u8; 4096]);
    let scored = engine.extract_and_score(Modality::Voice, Some(&silence)).unwrap();
    assert!(scored.confidence > voice.confidence);
    assert_eq!(scored.sub_score(voice::PITCH_SCORE), Some(0));
}

#[test]
fn test_fusion_requires_some_modality() {
    let engine = ScoringEngine::default();
    assert_eq!(engine.fuse(None, None, None), Err(FusionError::MissingAllInputs));
}

#[test]
fn test_full_session_report() {
    let engine = ScoringEngine::default();
    let input = SessionInput::new()
        .with_voice(random_bytes(7, 8192))
        .with_facial(random_bytes(8, 40_000))
        .with_text(TRANSCRIPT);
    let report = engine.analyze_session(&input).unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(report.truth.breakdown.len(), 3);
    let weight_sum: f64 = report.truth.weights.values().sum();
    assert!((weight_sum - 1.0).abs() < 1e-9);
    assert!(INTERPRETATION_BANDS
        .iter()
        .any(|(_, text)| *text == report.truth.interpretation));

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["truth"]["truthfulness"].is_u64());
    assert!(json["voice"]["subScores"]["stressScore"].is_u64());
    assert!(json["facial"]["labels"]["microExpressions"].is_string());
}

#[test]
fn test_configured_weights_change_fusion() {
    let path = std::env::temp_dir().join(format!("truth-fusion-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{ "fusion": { "voice_weight": 0.0, "facial_weight": 1.0, "text_weight": 0.0 } }"#,
    )
    .unwrap();
    let config = EngineConfig::load_from_file(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(config.fusion.facial_weight, 1.0);
    assert_eq!(config.audio, EngineConfig::default().audio);

    let engine = ScoringEngine::new(config);
    let input = SessionInput::new()
        .with_facial(vec![128u8; 10_000])
        .with_text(TRANSCRIPT);
    let report = engine.analyze_session(&input).unwrap();

    // Still picture: head pose 100, gaze 90
    assert_eq!(report.truth.truthfulness, 95);
    assert_eq!(report.truth.weights[&Modality::Facial], 1.0);
    assert_eq!(report.truth.weights[&Modality::Text], 0.0);
}

#[tokio::test]
async fn test_async_session_from_runtime() {
    let engine = ScoringEngine::default();
    let input = SessionInput::new()
        .with_voice(random_bytes(11, 4096))
        .with_text(TRANSCRIPT);

    let report = engine.analyze_session_async(input.clone()).await.unwrap();
    assert_eq!(report, engine.analyze_session(&input).unwrap());
}
