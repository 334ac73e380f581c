//! HTML5 video element with native controls.

use leptos::prelude::*;

#[component]
pub fn VideoPlayer(#[prop(into)] src: String, #[prop(optional, into)] title: Option<String>) -> impl IntoView {
    let label = title.unwrap_or_else(|| "Video player".to_owned());
    view! {
        <figure class="video-player">
            <video class="video-player__media" src=src controls=true preload="metadata" playsinline=true aria-label=label.clone()>
                "Your browser does not support HTML5 video."
            </video>
            <figcaption class="video-player__caption">{label}</figcaption>
        </figure>
    }
}
