pub mod config;
pub mod display;
pub mod session;
pub mod transfer;
pub mod upload;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub use config::ApiConfig;
pub use session::{RequestOutcome, Session};
pub use transfer::SubmitError;

/// Classifier verdict. Anything other than `"Fake"` on the wire is treated as real.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Verdict {
    Real,
    Fake,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub result: String,
    pub confidence: f64,
    pub fake_probability: f64,
    pub real_probability: f64,
    pub raw_score: f64,
}

impl Prediction {
    pub fn verdict(&self) -> Verdict {
        self.result.parse().unwrap_or(Verdict::Real)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FaceDetection {
    pub confidence: f64,
    pub num_faces: u32,
    /// `[x, y, width, height]` in source image pixels.
    #[serde(rename = "box")]
    pub bounding_box: [f64; 4],
}

impl FaceDetection {
    pub fn width(&self) -> f64 {
        self.bounding_box[2]
    }

    pub fn height(&self) -> f64 {
        self.bounding_box[3]
    }
}

/// Successful `/api/predict` payload. Unknown fields such as `timestamp` are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PredictionResult {
    pub prediction: Prediction,
    pub face_detection: FaceDetection,
    #[serde(default)]
    pub face_crop: Option<String>,
}

/// Body of `GET /api/health`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthReport {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
    #[serde(default)]
    pub face_detector_loaded: bool,
    #[serde(default)]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BackendHealth {
    Online,
    Degraded,
    Offline,
}

impl BackendHealth {
    pub fn from_report(report: Option<&HealthReport>) -> Self {
        match report {
            Some(r) if r.status == "healthy" && r.model_loaded => BackendHealth::Online,
            Some(_) => BackendHealth::Degraded,
            None => BackendHealth::Offline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_only_matches_exact_fake() {
        let mut prediction = Prediction {
            result: "Fake".into(),
            confidence: 90.0,
            fake_probability: 90.0,
            real_probability: 10.0,
            raw_score: 0.1,
        };
        assert_eq!(prediction.verdict(), Verdict::Fake);

        prediction.result = "Real".into();
        assert_eq!(prediction.verdict(), Verdict::Real);

        prediction.result = "fake".into();
        assert_eq!(prediction.verdict(), Verdict::Real);
    }

    #[test]
    fn payload_ignores_extra_fields_and_missing_crop() {
        let body = r#"{
            "success": true,
            "timestamp": "2024-01-01T00:00:00",
            "prediction": {"result": "Real", "confidence": 71.2, "fake_probability": 28.8,
                           "real_probability": 71.2, "raw_score": 0.712},
            "face_detection": {"confidence": 0.97, "num_faces": 2, "box": [4, 8, 120, 140]}
        }"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.face_crop, None);
        assert_eq!(result.face_detection.num_faces, 2);
        assert_eq!(result.face_detection.width(), 120.0);
        assert_eq!(result.face_detection.height(), 140.0);
    }

    #[test]
    fn backend_health_from_report() {
        let mut report = HealthReport {
            status: "healthy".into(),
            model_loaded: true,
            face_detector_loaded: true,
            timestamp: None,
        };
        assert_eq!(BackendHealth::from_report(Some(&report)), BackendHealth::Online);

        report.model_loaded = false;
        assert_eq!(BackendHealth::from_report(Some(&report)), BackendHealth::Degraded);

        assert_eq!(BackendHealth::from_report(None), BackendHealth::Offline);
        assert_eq!(BackendHealth::Offline.to_string(), "Offline");
    }
}
