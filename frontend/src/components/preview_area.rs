use super::upload_section::UploadState;
use yew::prelude::*;

/// Busy indicator, then the pending preview, then the idle prompt.
pub fn render_zone_body(loading: bool, upload: Option<&UploadState>, dragging: bool) -> Html {
    if loading {
        return html! {
            <div class="zone-state zone-busy">
                <i class="fa-solid fa-spinner fa-spin fa-3x"></i>
                <p class="zone-title">{"Processing Image..."}</p>
                <p class="zone-hint">{"Detecting face and analyzing for deepfake patterns"}</p>
            </div>
        };
    }

    match upload.and_then(|u| u.preview.as_ref().map(|p| (u, p))) {
        Some((state, preview)) => html! {
            <div class="zone-state zone-preview">
                <img id="actual-image-preview" src={preview.clone()} alt={state.file.name()} />
                <p class="zone-hint">{"Image loaded. Processing..."}</p>
            </div>
        },
        None => render_idle_prompt(dragging),
    }
}

fn render_idle_prompt(dragging: bool) -> Html {
    html! {
        <div class="zone-state upload-placeholder">
            {
                if dragging {
                    html! { <i class="fa-solid fa-cloud-arrow-up fa-3x bounce"></i> }
                } else {
                    html! { <i class="fa-regular fa-image fa-3x"></i> }
                }
            }
            <h3 class="zone-title">{ if dragging { "Drop image here" } else { "Upload Image" } }</h3>
            <p class="zone-hint">{"Drag & drop an image, paste, or click to browse"}</p>
            <div class="file-types">
                <span class="chip">{"JPG"}</span>
                <span class="chip">{"JPEG"}</span>
                <span class="chip">{"PNG"}</span>
            </div>
            <p class="size-limit">{"Maximum file size: 16MB"}</p>
        </div>
    }
}

pub fn render_instructions() -> Html {
    html! {
        <div class="card instructions">
            <h4>{"Instructions"}</h4>
            <ol>
                <li>{"Upload a clear image containing a face (JPG, JPEG, or PNG format)"}</li>
                <li>{"Our AI will detect the face and analyze it for deepfake patterns"}</li>
                <li>{"Get instant results showing if the face is real or AI-generated"}</li>
                <li>{"View confidence scores and the detected face region"}</li>
            </ol>
        </div>
    }
}
