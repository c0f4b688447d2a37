use super::super::{Model, Msg};
use super::utils::render_screen_actions;
use shared::Session;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

pub fn render_text_input(session: &Session, ctx: &Context<Model>) -> Html {
    let handle_input = ctx.link().callback(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetText(input.value())
    });
    let can_analyze = !session.input_text.trim().is_empty();

    html! {
        <div class="card">
            <textarea
                class="text-input"
                placeholder="Paste your text here... (articles, emails, social media posts, etc.)"
                value={session.input_text.clone()}
                readonly={session.is_analyzing}
                oninput={handle_input}
            />
            <div class="card-footer">
                <p class="hint">{ format!("Characters: {}", session.input_text.chars().count()) }</p>
                { render_screen_actions(session, ctx, can_analyze, "Analyze Text") }
            </div>
        </div>
    }
}
