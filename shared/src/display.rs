use crate::{PredictionResult, Verdict};

/// Presentation parameters for one verdict.
#[derive(Debug, PartialEq, Eq)]
pub struct Treatment {
    pub heading: &'static str,
    pub description: &'static str,
    /// CSS modifier selecting the palette.
    pub tone: &'static str,
    pub icon: &'static str,
}

const FAKE: Treatment = Treatment {
    heading: "Fake Detected",
    description: "This image appears to be AI-generated or manipulated",
    tone: "fake",
    icon: "fa-solid fa-circle-xmark",
};

const REAL: Treatment = Treatment {
    heading: "Real Image",
    description: "This image appears to contain a genuine face",
    tone: "real",
    icon: "fa-solid fa-circle-check",
};

impl Verdict {
    pub fn treatment(self) -> &'static Treatment {
        match self {
            Verdict::Fake => &FAKE,
            Verdict::Real => &REAL,
        }
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Width of a meter fill, in percent of the track.
pub fn bar_width(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Every string the result view prints, derived from one payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
    pub verdict: Verdict,
    pub confidence_value: f64,
    pub confidence: String,
    pub fake_probability: String,
    pub real_probability: String,
    pub detection_confidence: String,
    pub faces_detected: String,
    pub face_region: String,
    pub raw_score: String,
}

impl From<&PredictionResult> for ResultSummary {
    fn from(result: &PredictionResult) -> Self {
        let prediction = &result.prediction;
        let detection = &result.face_detection;

        Self {
            verdict: prediction.verdict(),
            confidence_value: prediction.confidence,
            confidence: percent(prediction.confidence),
            fake_probability: percent(prediction.fake_probability),
            real_probability: percent(prediction.real_probability),
            detection_confidence: percent(detection.confidence * 100.0),
            faces_detected: detection.num_faces.to_string(),
            face_region: format!("{} × {}px", detection.width(), detection.height()),
            raw_score: format!("{:.6}", prediction.raw_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::interpret_response;

    #[test]
    fn summarises_fake_payload() {
        let body = r#"{"success":true,
            "prediction":{"result":"Fake","confidence":87.3,"fake_probability":87.3,
                          "real_probability":12.7,"raw_score":0.127},
            "face_detection":{"confidence":0.99,"num_faces":1,"box":[10,10,200,200]},
            "face_crop":"data:image/jpeg;base64,AAAA"}"#;
        let result = interpret_response(200, body).unwrap();
        let summary = ResultSummary::from(&result);

        assert_eq!(summary.verdict.treatment().heading, "Fake Detected");
        assert_eq!(summary.confidence, "87.3%");
        assert_eq!(summary.fake_probability, "87.3%");
        assert_eq!(summary.real_probability, "12.7%");
        assert_eq!(summary.detection_confidence, "99.0%");
        assert_eq!(summary.faces_detected, "1");
        assert_eq!(summary.face_region, "200 × 200px");
        assert_eq!(summary.raw_score, "0.127000");
    }

    #[test]
    fn fractional_box_dimensions_are_kept() {
        let body = r#"{"success":true,
            "prediction":{"result":"Real","confidence":64.05,"fake_probability":35.95,
                          "real_probability":64.05,"raw_score":0.6405},
            "face_detection":{"confidence":0.9,"num_faces":3,"box":[0,0,120.5,98]}}"#;
        let summary = ResultSummary::from(&interpret_response(200, body).unwrap());

        assert_eq!(summary.verdict.treatment().heading, "Real Image");
        assert_eq!(summary.face_region, "120.5 × 98px");
        assert_eq!(summary.faces_detected, "3");
    }

    #[test]
    fn bar_width_is_clamped() {
        assert_eq!(bar_width(87.3), 87.3);
        assert_eq!(bar_width(-4.0), 0.0);
        assert_eq!(bar_width(140.0), 100.0);
        assert_eq!(bar_width(f64::NAN), 0.0);
    }
}
