use yew::prelude::*;

pub fn render_background() -> Html {
    html! {
        <div class="background">
            <video autoplay=true loop=true muted=true playsinline=true class="background-video">
                <source src="/static/background.mp4" type="video/mp4" />
            </video>
            <div class="background-overlay"></div>
        </div>
    }
}

pub fn render_hero() -> Html {
    html! {
        <section class="hero">
            <h1 class="gradient-text">{"Deepfake Detection"}</h1>
            <p class="hero-lead">{"Upload an image to verify if it contains a real or AI-generated face"}</p>
            <div class="hero-tags">
                <span class="hero-tag"><span class="pulse green"></span>{"Powered by EfficientNet"}</span>
                <span class="hero-tag"><span class="pulse blue"></span>{"MTCNN Face Detection"}</span>
            </div>
        </section>
    }
}

pub fn render_info_cards() -> Html {
    let cards = [
        (
            "fa-solid fa-bullseye",
            "High Accuracy",
            "Our model is trained on thousands of real and fake faces for reliable detection",
        ),
        (
            "fa-solid fa-bolt",
            "Fast Processing",
            "Get results in seconds with our optimized deep learning pipeline",
        ),
        (
            "fa-solid fa-lock",
            "Privacy First",
            "Your images are processed securely and not stored on our servers",
        ),
    ];

    html! {
        <div class="info-cards">
            { for cards.iter().map(|(icon, title, body)| html! {
                <div class="card info-card">
                    <i class={*icon}></i>
                    <h3>{ *title }</h3>
                    <p>{ *body }</p>
                </div>
            })}
        </div>
    }
}
