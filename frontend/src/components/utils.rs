use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use shared::upload::FileMeta;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use web_sys::FileList;
use yew::prelude::*;

pub fn generate_id() -> u64 {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    now * 1000 + (count % 1000)
}

// Debounce function to limit button events
pub fn debounce<F>(duration: u32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |_| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        *timeout_ref = Some(Timeout::new(duration, move || inner_callback()));
    })
}

pub fn collect_files(file_list: &FileList) -> Vec<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(GlooFile::from)
        .collect()
}

pub fn file_meta(file: &GlooFile) -> FileMeta {
    FileMeta {
        name: file.name(),
        mime_type: file.raw_mime_type(),
        size: file.size(),
    }
}

pub fn render_error_message(error: Option<&AttrValue>, on_reset: Callback<()>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <div class="error-body">
                    <p class="error-title">{"Error"}</p>
                    <p>{ error_msg.clone() }</p>
                </div>
                <button class="link-btn" onclick={on_reset.reform(|_: MouseEvent| ())}>
                    {"Try another image"}
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
