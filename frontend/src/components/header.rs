use super::backend_status::BackendStatus;
use shared::ApiConfig;
use yew::prelude::*;

/// Renders the application header
pub fn render_header(config: &ApiConfig) -> Html {
    html! {
        <header class="app-header">
            <div class="brand">
                <img src="/static/logo.png" alt="Logo" class="logo" />
                <div>
                    <h1 class="brand-title">{"Deepfake Detector"}</h1>
                    <p class="subtitle">{"AI-Powered Face Verification"}</p>
                </div>
            </div>
            <nav class="header-nav">
                <BackendStatus config={config.clone()} />
                <a
                    class="nav-link"
                    href="https://github.com/nemishsapara69/ai-deepfake-detection"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <i class="fa-brands fa-github"></i>{" GitHub"}
                </a>
            </nav>
        </header>
    }
}
