use super::super::{Model, Msg};
use crate::api;
use gloo_file::File as GlooFile;
use shared::{PredictionResult, SubmitError};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>, file: GlooFile) -> bool {
    if !model.session.begin() {
        log::warn!("Ignoring {}: a submission is already in progress", file.name());
        return false;
    }

    log::info!("Submitting {} ({} bytes)", file.name(), file.size());
    send_prediction_request(model, ctx, file);
    true
}

pub fn send_prediction_request(model: &Model, ctx: &Context<Model>, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();
        let config = model.config.clone();

        async move {
            let settled = api::submit(&config, &file).await;
            link.send_message(Msg::Settled(settled));
        }
    });
}

pub fn handle_settled(model: &mut Model, settled: Result<PredictionResult, SubmitError>) -> bool {
    match &settled {
        Ok(result) => log::info!(
            "✅ Prediction received: {} ({:.1}%)",
            result.prediction.result,
            result.prediction.confidence
        ),
        Err(e) => log::warn!("Prediction failed: {}", e),
    }

    model.session.settle(settled)
}

pub fn handle_reset(model: &mut Model) -> bool {
    if model.session.reset() {
        model.generation = model.generation.wrapping_add(1);
        true
    } else {
        false
    }
}
