use super::super::{Model, Msg};
use super::utils::{debounce, extract_files, render_screen_actions};
use shared::{DetectorConfig, Session};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(
    model: &Model,
    session: &Session,
    config: &DetectorConfig,
    ctx: &Context<Model>,
) -> Html {
    html! {
        <div class="card upload-section">
            { render_file_input_area(model, session, config, ctx) }
            <div class="card-footer">
                <p class="hint">{ format!("Max file size: {}MB", config.max_file_size_mb()) }</p>
                { render_screen_actions(session, ctx, session.uploaded_file.is_some(), "Analyze File") }
            </div>
        </div>
    }
}

fn render_file_input_area(
    model: &Model,
    session: &Session,
    config: &DetectorConfig,
    ctx: &Context<Model>,
) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files().as_ref().map(extract_files).unwrap_or_default();

        input.set_value("");

        if !files.is_empty() {
            Msg::FilesAdded(files)
        } else {
            Msg::SetError(Some("No file selected.".into()))
        }
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("file-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    let prompt = match &session.uploaded_file {
        Some(file) => html! {
            <div class="upload-placeholder">
                <p class="upload-title">{"File Selected:"}</p>
                <p class="file-name">{ &file.name }</p>
                <p class="file-types">{ format!("Size: {:.1} KB", file.size_kb()) }</p>
            </div>
        },
        None => html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p class="upload-title">
                    { if model.is_dragging { "Drop files here..." } else { "Drag & drop files here" } }
                </p>
                <p class="file-types">{"Supports: Images, PDFs, Word docs, Text files"}</p>
            </div>
        },
    };

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept={config.accept_attribute()}
                style="display: none;"
                disabled={session.is_analyzing}
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                { prompt }
            </div>
        </>
    }
}
