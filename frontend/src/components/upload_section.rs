use super::preview_area::{render_instructions, render_zone_body};
use super::utils::{collect_files, debounce, file_meta, generate_id, render_error_message};
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::futures::read_as_data_url;
use shared::upload::{ACCEPT_ATTRIBUTE, FileMeta, select_single};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, HtmlInputElement};
use yew::prelude::*;

/// The file picked in the current interaction and its local preview.
#[derive(Clone)]
pub struct UploadState {
    pub id: u64,
    pub file: GlooFile,
    pub preview: Option<String>,
}

#[derive(Default)]
pub struct UploadSlot(Option<UploadState>);

impl UploadSlot {
    pub fn current(&self) -> Option<&UploadState> {
        self.0.as_ref()
    }
}

pub enum UploadAction {
    Selected { id: u64, file: GlooFile },
    PreviewReady { id: u64, data_url: String },
}

impl Reducible for UploadSlot {
    type Action = UploadAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            UploadAction::Selected { id, file } => Rc::new(UploadSlot(Some(UploadState {
                id,
                file,
                preview: None,
            }))),
            UploadAction::PreviewReady { id, data_url } => match &self.0 {
                Some(current) if current.id == id => Rc::new(UploadSlot(Some(UploadState {
                    preview: Some(data_url),
                    ..current.clone()
                }))),
                _ => {
                    log::debug!("Dropping preview for replaced upload {}", id);
                    self
                }
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct UploadZoneProps {
    pub loading: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_accept: Callback<GlooFile>,
    pub on_reset: Callback<()>,
}

// Preview is best effort and never blocks the upload.
fn spawn_preview(dispatcher: UseReducerDispatcher<UploadSlot>, id: u64, file: GlooFile) {
    spawn_local(async move {
        match read_as_data_url(&file).await {
            Ok(data_url) => dispatcher.dispatch(UploadAction::PreviewReady { id, data_url }),
            Err(e) => log::warn!("Could not build preview for {}: {}", file.name(), e),
        }
    });
}

/// The one file a drop, pick or paste hands over, or `None` when the zone is
/// busy or the selection is rejected.
pub fn pick_upload(loading: bool, files: Vec<GlooFile>) -> Option<GlooFile> {
    if loading {
        log::info!("Upload zone is busy, ignoring {} file(s)", files.len());
        return None;
    }

    let metas: Vec<FileMeta> = files.iter().map(file_meta).collect();
    match select_single(&metas) {
        Ok(index) => files.into_iter().nth(index),
        Err(rejection) => {
            log::warn!("Rejected upload: {}", rejection);
            None
        }
    }
}

#[function_component(UploadZone)]
pub fn upload_zone(props: &UploadZoneProps) -> Html {
    let upload = use_reducer(UploadSlot::default);
    let dragging = use_state(|| false);
    let input_ref = use_node_ref();
    let loading = props.loading;

    let accept_files = {
        let dispatcher = upload.dispatcher();
        let on_accept = props.on_accept.clone();

        Callback::from(move |files: Vec<GlooFile>| {
            let Some(file) = pick_upload(loading, files) else {
                return;
            };
            let id = generate_id();
            log::info!("Accepted {} ({} bytes)", file.name(), file.size());

            dispatcher.dispatch(UploadAction::Selected {
                id,
                file: file.clone(),
            });
            spawn_preview(dispatcher.clone(), id, file.clone());
            on_accept.emit(file);
        })
    };

    {
        let accept_files = accept_files.clone();
        use_effect_with(loading, move |loading| {
            let listener = match (*loading, web_sys::window()) {
                (false, Some(window)) => Some(EventListener::new(&window, "paste", move |event| {
                    let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() else {
                        return;
                    };
                    let files = clipboard_event
                        .clipboard_data()
                        .and_then(|data| data.files())
                        .map(|list| collect_files(&list))
                        .unwrap_or_default();

                    if !files.is_empty() {
                        clipboard_event.prevent_default();
                        accept_files.emit(files);
                    }
                })),
                _ => None,
            };

            move || drop(listener)
        });
    }

    let handle_change = {
        let accept_files = accept_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let files = input
                .files()
                .map(|list| collect_files(&list))
                .unwrap_or_default();

            input.set_value("");
            accept_files.emit(files);
        })
    };

    let handle_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            if !loading && !*dragging {
                dragging.set(true);
            }
        })
    };

    let handle_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
        })
    };

    let handle_drop = {
        let dragging = dragging.clone();
        let accept_files = accept_files.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);

            let files = e
                .data_transfer()
                .and_then(|data| data.files())
                .map(|list| collect_files(&list))
                .unwrap_or_default();
            accept_files.emit(files);
        })
    };

    let trigger_file_input = {
        let input_ref = input_ref.clone();
        debounce(300, move || {
            if loading {
                return;
            }
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    html! {
        <div class="upload-section">
            <input
                type="file"
                ref={input_ref}
                accept={ACCEPT_ATTRIBUTE}
                style="display: none;"
                disabled={loading}
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    (*dragging).then_some("drag-over"),
                    loading.then_some("disabled")
                )}
                aria-disabled={loading.to_string()}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={trigger_file_input}
            >
                { render_zone_body(loading, upload.current(), *dragging) }
            </div>

            { render_error_message(props.error.as_ref(), props.on_reset.clone()) }
            { render_instructions() }
        </div>
    }
}
