use super::super::{Model, Msg};
use shared::{DetectionMode, DetectionResult, Session};
use wasm_bindgen::JsValue;
use yew::prelude::*;

pub fn render_results(session: &Session, ctx: &Context<Model>) -> Html {
    let Some(result) = &session.result else {
        return html! { <p class="no-results-message">{"No analysis result available."}</p> };
    };
    let link = ctx.link();

    html! {
        <div class={classes!("results-container", if result.is_ai { "ai-detected" } else { "not-ai" })}>
            <div class="result-header">
                <h2>
                    {
                        if result.is_ai {
                            html! { <><i class="fa-solid fa-circle-xmark"></i>{" "}{ result.verdict_label() }</> }
                        } else {
                            html! { <><i class="fa-solid fa-circle-check"></i>{" "}{ result.verdict_label() }</> }
                        }
                    }
                </h2>
                <div class="confidence-meter">
                    <div class="meter-label">{"Confidence:"}</div>
                    <div class="meter">
                        <div class="meter-fill" style={format!("width: {}%", result.confidence.value())}></div>
                    </div>
                    <div class="meter-value">{ result.confidence.to_string() }</div>
                </div>
                <span class="badge">{ result.content_type.to_string().to_uppercase() }</span>
            </div>

            <div class="summary">
                <h4>{"Analysis Summary:"}</h4>
                <p>{ &result.reasoning }</p>
            </div>

            <div class="detailed-results">
                <div>
                    <h4>{"Key Indicators:"}</h4>
                    { for result.indicators.iter().map(|pattern| html! {
                        <div class="result-item">
                            <i class="fa-solid fa-triangle-exclamation"></i>
                            <span>{ pattern }</span>
                        </div>
                    })}
                </div>
                <div>
                    <h4>{"Metadata:"}</h4>
                    <p>{ format!("Analysis Time: {}", result.metadata.analysis_time) }</p>
                    <p>{ format!("Model Version: {}", result.metadata.model_version) }</p>
                    <p>{ format!("Processed: {}", local_time(result)) }</p>
                </div>
            </div>

            <div class="button-container">
                <button class="block-btn" onclick={link.callback(|_| Msg::SelectMode(DetectionMode::Menu))}>
                    {"← Main Menu"}
                </button>
                <button class="block-btn primary" onclick={link.callback(|_| Msg::Reset)}>
                    {"New Analysis"}
                </button>
            </div>
        </div>
    }
}

fn local_time(result: &DetectionResult) -> String {
    let millis = result.timestamp.timestamp_millis() as f64;
    js_sys::Date::new(&JsValue::from_f64(millis))
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}
