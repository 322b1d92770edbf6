pub mod api;
pub mod components;

use components::handlers;
use components::results::ResultView;
use components::upload_section::UploadZone;
use components::{footer, header, shell};
use gloo_file::File as GlooFile;
use shared::{ApiConfig, PredictionResult, Session, SubmitError};
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    Submit(GlooFile),
    Settled(Result<PredictionResult, SubmitError>),
    Reset,
}

// Root controller
pub struct Model {
    config: ApiConfig,
    session: Session,
    // Keys the upload zone so a reset drops its file and preview.
    generation: u32,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ApiConfig::from_override(option_env!("DEEPFAKE_API_URL"));
        log::info!("Using inference backend at {}", config.base_url);

        Self {
            config,
            session: Session::new(),
            generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit(file) => handlers::handle_submit(self, ctx, file),
            Msg::Settled(settled) => handlers::handle_settled(self, settled),
            Msg::Reset => handlers::handle_reset(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="app">
                { shell::render_background() }
                <div class="app-content">
                    { header::render_header(&self.config) }

                    <main class="main-content">
                        { shell::render_hero() }
                        { self.render_stage(ctx) }
                        { shell::render_info_cards() }
                    </main>

                    { footer::render_footer() }
                </div>
            </div>
        }
    }
}

impl Model {
    fn render_stage(&self, ctx: &Context<Self>) -> Html {
        let on_reset = ctx.link().callback(|_| Msg::Reset);

        match self.session.result() {
            Some(result) => html! {
                <ResultView result={result.clone()} {on_reset} />
            },
            None => html! {
                <UploadZone
                    key={self.generation.to_string()}
                    loading={self.session.loading()}
                    error={self.session.error().map(|e| AttrValue::from(e.to_string()))}
                    on_accept={ctx.link().callback(Msg::Submit)}
                    {on_reset}
                />
            },
        }
    }
}
