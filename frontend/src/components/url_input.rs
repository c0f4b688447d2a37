use super::super::{Model, Msg};
use super::utils::render_screen_actions;
use shared::Session;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub fn render_url_input(session: &Session, ctx: &Context<Model>) -> Html {
    let handle_input = ctx.link().callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetUrl(input.value())
    });
    let can_analyze = !session.input_url.trim().is_empty();

    html! {
        <div class="card">
            <input
                type="url"
                class="url-input"
                placeholder="https://example.com/article"
                value={session.input_url.clone()}
                readonly={session.is_analyzing}
                oninput={handle_input}
            />
            <p class="hint">{"Supported: News articles, blog posts, social media, forums"}</p>
            <div class="card-footer">
                <p class="hint">{"Analysis includes: Text content, images, metadata"}</p>
                { render_screen_actions(session, ctx, can_analyze, "Analyze URL") }
            </div>
        </div>
    }
}
