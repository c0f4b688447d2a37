use super::super::{Model, Msg};
use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::{DetectionMode, Session};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn extract_files(file_list: &FileList) -> Vec<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(GlooFile::from)
        .collect()
}

/// Back and Analyze buttons shared by the three input screens.
pub fn render_screen_actions(
    session: &Session,
    ctx: &Context<Model>,
    can_analyze: bool,
    idle_label: &str,
) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class="button-container">
            <button
                class="block-btn"
                disabled={session.is_analyzing}
                onclick={ctx.link().callback(|_| Msg::SelectMode(DetectionMode::Menu))}
            >
                {"← Back"}
            </button>
            <button
                class="block-btn success"
                disabled={!can_analyze || session.is_analyzing}
                onclick={debounce(300, move || link.send_message(Msg::Analyze))}
            >
                {
                    if session.is_analyzing {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { { idle_label.to_string() } }
                    }
                }
            </button>
        </div>
    }
}

pub fn render_error_message(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
                <button
                    class="remove-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::SetError(None))}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
