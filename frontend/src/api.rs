use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use shared::transfer::interpret_response;
use shared::{ApiConfig, HealthReport, PredictionResult, SubmitError};
use web_sys::FormData;

const UPLOAD_FIELD: &str = "file";

/// Fetch rejects with a JS error only when no response came back at all.
fn classify_transport_error(config: &ApiConfig, err: gloo_net::Error) -> SubmitError {
    match err {
        gloo_net::Error::JsError(e) => {
            log::error!("❌ No response from {}: {}", config.base_url, e);
            SubmitError::Connectivity {
                base_url: config.base_url.clone(),
            }
        }
        other => {
            log::error!("❌ Request to {} failed: {}", config.base_url, other);
            SubmitError::Unclassified
        }
    }
}

/// Posts one image to `/api/predict`. Exactly one attempt, no retry.
pub async fn submit(config: &ApiConfig, file: &GlooFile) -> Result<PredictionResult, SubmitError> {
    let form_data = FormData::new().map_err(|e| {
        log::error!("Failed to create form data: {:?}", e);
        SubmitError::Unclassified
    })?;
    form_data
        .append_with_blob(UPLOAD_FIELD, file.as_ref())
        .map_err(|e| {
            log::error!("Failed to attach {} to form data: {:?}", file.name(), e);
            SubmitError::Unclassified
        })?;

    let request = Request::post(&config.predict_url())
        .body(form_data)
        .map_err(|e| {
            log::error!("Failed to build prediction request: {}", e);
            SubmitError::Unclassified
        })?;

    let response = request
        .send()
        .await
        .map_err(|e| classify_transport_error(config, e))?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        log::error!("Failed to read prediction response ({}): {}", status, e);
        SubmitError::Unclassified
    })?;

    interpret_response(status, &body)
}

pub async fn check_health(config: &ApiConfig) -> Result<HealthReport, SubmitError> {
    let response = Request::get(&config.health_url())
        .send()
        .await
        .map_err(|e| classify_transport_error(config, e))?;

    if !response.ok() {
        log::warn!("Health check returned status {}", response.status());
        return Err(SubmitError::Unclassified);
    }

    response.json::<HealthReport>().await.map_err(|e| {
        log::warn!("Failed to parse health report: {}", e);
        SubmitError::Unclassified
    })
}
