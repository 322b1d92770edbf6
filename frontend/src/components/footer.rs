use yew::prelude::*;

pub fn render_footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"23AIML061 - NEMISH SAPARA"}</p>
            <p class="footer-note">{"Deepfake Detection | Fullstack Rust WASM"}</p>
        </footer>
    }
}
