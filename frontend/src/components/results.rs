use gloo_timers::callback::Timeout;
use shared::display::{ResultSummary, bar_width};
use shared::{PredictionResult, Verdict};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultViewProps {
    pub result: PredictionResult,
    pub on_reset: Callback<()>,
}

#[function_component(ResultView)]
pub fn result_view(props: &ResultViewProps) -> Html {
    let summary = ResultSummary::from(&props.result);
    let treatment = summary.verdict.treatment();
    let fill = use_state(|| 0.0_f64);

    // Start the meter empty so the CSS transition animates up to the value.
    {
        let fill = fill.clone();
        use_effect_with(summary.confidence_value, move |confidence| {
            let target = bar_width(*confidence);
            let timeout = Timeout::new(50, move || fill.set(target));
            move || drop(timeout)
        });
    }

    let on_reset = props.on_reset.reform(|_: MouseEvent| ());

    html! {
        <div class="results">
            <div class={classes!("card", "verdict-card", treatment.tone)}>
                <div class="verdict-icon">
                    <i class={classes!(treatment.icon, "fa-5x")}></i>
                </div>
                <h2 class="verdict-heading">{ treatment.heading }</h2>
                <p class="verdict-description">{ treatment.description }</p>

                <div class="confidence-meter">
                    <div class="meter-row">
                        <span class="meter-label">{"Confidence"}</span>
                        <span class="meter-value">{ &summary.confidence }</span>
                    </div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", *fill)}></div>
                    </div>
                </div>

                <div class="probabilities">
                    <div class="probability-panel fake">
                        <span class="probability-label">{"Fake Probability"}</span>
                        <p class="probability-value">{ &summary.fake_probability }</p>
                    </div>
                    <div class="probability-panel real">
                        <span class="probability-label">{"Real Probability"}</span>
                        <p class="probability-value">{ &summary.real_probability }</p>
                    </div>
                </div>
            </div>

            <div class="details-grid">
                { render_face_panel(&props.result, &summary) }
                { render_analysis_panel(&summary) }
            </div>

            <div class="button-container">
                <button class="analyze-btn" onclick={on_reset}>
                    <i class="fa-solid fa-rotate-left"></i>{" Analyze Another Image"}
                </button>
            </div>
        </div>
    }
}

fn render_face_panel(result: &PredictionResult, summary: &ResultSummary) -> Html {
    html! {
        <div class="card face-panel">
            <h3><i class="fa-solid fa-user"></i>{" Detected Face"}</h3>
            {
                match &result.face_crop {
                    Some(crop) => html! { <img class="face-crop" src={crop.clone()} alt="Detected face" /> },
                    None => html! {},
                }
            }
            <dl class="facts">
                <div class="fact">
                    <dt>{"Detection Confidence"}</dt>
                    <dd>{ &summary.detection_confidence }</dd>
                </div>
                <div class="fact">
                    <dt>{"Faces Detected"}</dt>
                    <dd>{ &summary.faces_detected }</dd>
                </div>
                <div class="fact">
                    <dt>{"Face Region"}</dt>
                    <dd>{ &summary.face_region }</dd>
                </div>
            </dl>
        </div>
    }
}

fn render_analysis_panel(summary: &ResultSummary) -> Html {
    html! {
        <div class="card analysis-panel">
            <h3><i class="fa-solid fa-triangle-exclamation"></i>{" Analysis Details"}</h3>
            <p class="panel-label">{"Model Score"}</p>
            <code class="raw-score">{ format!("Raw Score: {}", summary.raw_score) }</code>

            <p class="panel-label">{"Interpretation"}</p>
            <ul class="interpretation">
                <li>{"Scores closer to 0 indicate synthetic/fake content"}</li>
                <li>{"Scores closer to 1 indicate authentic/real content"}</li>
                <li>{"Model uses deep learning patterns to detect artifacts"}</li>
            </ul>

            {
                if summary.verdict == Verdict::Fake {
                    html! {
                        <p class="notice warning">
                            {"Treat this image with caution before sharing or relying on it."}
                        </p>
                    }
                } else {
                    html! {}
                }
            }
            <p class="notice">
                {"This analysis is based on AI detection and should be used as a reference tool. \
                  Always verify critical information through multiple sources."}
            </p>
        </div>
    }
}
