// FacialScorer - stability sub-scores from motion features

use crate::analysis::{Modality, MotionFeatures};
use crate::config::FacialScoringConfig;
use crate::scoring::{ModalityResult, ModalityScorer};

pub const HEAD_POSE_STABILITY: &str = "headPoseStability";
pub const GAZE_STABILITY: &str = "gazeStability";
pub const MOTION_SCORE: &str = "motionScore";

pub const MICRO_EXPRESSIONS: &str = "microExpressions";
pub const EYE_MOVEMENT: &str = "eyeMovement";

pub const NO_VIDEO_INTERPRETATION: &str = "No video data provided";

/// Default result used when no video is available
const DEFAULT_HEAD_POSE_STABILITY: f64 = 80.0;
const DEFAULT_GAZE_STABILITY: f64 = 75.0;
const DEFAULT_MOTION_SCORE: f64 = 0.0;
const DEFAULT_MICRO_EXPRESSIONS: &str = "Low";
const DEFAULT_EYE_MOVEMENT: &str = "Stable";
const DEFAULT_CONFIDENCE: f64 = 50.0;

/// Micro-expression activity bucket for a motion intensity
fn micro_expressions(motion: f64) -> &'static str {
    if motion > 0.7 {
        "High"
    } else if motion > 0.4 {
        "Medium"
    } else {
        "Low"
    }
}

/// Eye-movement bucket; frequent only when motion is high and the picture unsteady
fn eye_movement(motion: f64, stability: f64) -> &'static str {
    if motion > 0.6 && stability < 0.7 {
        "Frequent"
    } else if motion > 0.3 {
        "Moderate"
    } else {
        "Stable"
    }
}

pub struct FacialScorer {
    config: FacialScoringConfig,
}

impl FacialScorer {
    pub fn new(config: &FacialScoringConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn confidence(&self, features: &MotionFeatures) -> f64 {
        let c = &self.config;
        let frame_factor = if c.frame_saturation > 0 {
            features.estimated_frames.min(c.frame_saturation) as f64 / c.frame_saturation as f64
        } else {
            1.0
        };

        c.confidence_floor
            + c.confidence_frame_span * frame_factor
            + c.confidence_motion_span * features.motion_intensity.clamp(0.0, 1.0)
    }
}

impl ModalityScorer for FacialScorer {
    type Features = MotionFeatures;

    fn modality(&self) -> Modality {
        Modality::Facial
    }

    fn score(&self, features: &MotionFeatures) -> ModalityResult {
        if features.is_empty() {
            return self.default_result();
        }

        let micro = micro_expressions(features.motion_intensity);
        let eyes = eye_movement(features.motion_intensity, features.stability);

        ModalityResult::new(Modality::Facial)
            .with_score(HEAD_POSE_STABILITY, features.stability * 100.0)
            .with_score(
                GAZE_STABILITY,
                features.stability * self.config.gaze_factor * 100.0,
            )
            .with_score(MOTION_SCORE, features.motion_intensity * 100.0)
            .with_label(MICRO_EXPRESSIONS, micro)
            .with_label(EYE_MOVEMENT, eyes)
            .with_confidence(self.confidence(features))
            .with_interpretation(format!(
                "Facial analysis indicates {} micro-expression activity with {} eye movement patterns.",
                micro.to_lowercase(),
                eyes.to_lowercase()
            ))
    }

    fn default_result(&self) -> ModalityResult {
        ModalityResult::new(Modality::Facial)
            .with_score(HEAD_POSE_STABILITY, DEFAULT_HEAD_POSE_STABILITY)
            .with_score(GAZE_STABILITY, DEFAULT_GAZE_STABILITY)
            .with_score(MOTION_SCORE, DEFAULT_MOTION_SCORE)
            .with_label(MICRO_EXPRESSIONS, DEFAULT_MICRO_EXPRESSIONS)
            .with_label(EYE_MOVEMENT, DEFAULT_EYE_MOVEMENT)
            .with_confidence(DEFAULT_CONFIDENCE)
            .with_interpretation(NO_VIDEO_INTERPRETATION)
    }
}
