use crate::api;
use shared::{ApiConfig, BackendHealth};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackendStatusProps {
    pub config: ApiConfig,
}

#[function_component(BackendStatus)]
pub fn backend_status(props: &BackendStatusProps) -> Html {
    let health = use_state(|| None::<BackendHealth>);

    {
        let health = health.clone();
        use_effect_with(props.config.clone(), move |config| {
            let config = config.clone();
            spawn_local(async move {
                let report = match api::check_health(&config).await {
                    Ok(report) => {
                        log::info!(
                            "Backend health: {} (model loaded: {}, face detector loaded: {})",
                            report.status,
                            report.model_loaded,
                            report.face_detector_loaded
                        );
                        Some(report)
                    }
                    Err(e) => {
                        log::warn!("Health check failed: {}", e);
                        None
                    }
                };
                health.set(Some(BackendHealth::from_report(report.as_ref())));
            });
        });
    }

    let (label, modifier) = match *health {
        None => ("Checking...".to_string(), "checking"),
        Some(status @ BackendHealth::Online) => (status.to_string(), "online"),
        Some(status @ BackendHealth::Degraded) => (status.to_string(), "degraded"),
        Some(status @ BackendHealth::Offline) => (status.to_string(), "offline"),
    };

    html! {
        <span
            class={classes!("status-badge", modifier)}
            title={format!("Inference backend at {}", props.config.base_url)}
        >
            <span class="status-dot"></span>
            { label }
        </span>
    }
}
