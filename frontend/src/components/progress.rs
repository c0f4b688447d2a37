use shared::{ANALYSIS_STAGES, Session};
use yew::prelude::*;

pub fn render_progress(session: &Session) -> Html {
    if !session.is_analyzing {
        return html! {};
    }

    let label = session
        .current_stage
        .and_then(|i| ANALYSIS_STAGES.get(i))
        .copied()
        .unwrap_or("Analyzing Content...");

    html! {
        <div class="card progress-card">
            <i class="fa-solid fa-expand fa-spin fa-3x"></i>
            <h3>{"Analyzing Content..."}</h3>
            <div class="meter">
                <div class="meter-fill" style={format!("width: {}%", session.progress)}></div>
            </div>
            <p class="meter-value">{ format!("{}%", session.progress) }</p>
            <p class="hint">{ label }</p>
        </div>
    }
}
