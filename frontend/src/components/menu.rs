use super::super::{Model, Msg};
use shared::DetectionMode;
use yew::prelude::*;

pub fn render_menu(ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="menu">
            <button class="block-btn primary" onclick={link.callback(|_| Msg::SelectMode(DetectionMode::TextInput))}>
                <i class="fa-solid fa-file-lines"></i>{" Analyze Text"}
            </button>
            <button class="block-btn primary" onclick={link.callback(|_| Msg::SelectMode(DetectionMode::FileUpload))}>
                <i class="fa-solid fa-upload"></i>{" Upload File"}
            </button>
            <button class="block-btn primary" onclick={link.callback(|_| Msg::SelectMode(DetectionMode::UrlInput))}>
                <i class="fa-solid fa-link"></i>{" Check URL/Link"}
            </button>
            // Not wired up yet: no batch queue or public API exists.
            <button class="block-btn" disabled=true title="Coming soon">
                <i class="fa-solid fa-images"></i>{" Batch Analysis"}
            </button>
            <button class="block-btn" disabled=true title="Coming soon">
                <i class="fa-solid fa-expand"></i>{" API Access"}
            </button>
        </div>
    }
}
