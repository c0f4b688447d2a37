use shared::DetectionMode;
use yew::prelude::*;

/// Renders the title block for the current screen
pub fn render_header(mode: DetectionMode) -> Html {
    let (title, subtitle) = match mode {
        DetectionMode::Menu => {
            return html! {
                <header class="app-header title-screen">
                    <h1>{"REACHECK"}</h1>
                    <p class="subtitle">{"AI Content Detection Tool"}</p>
                </header>
            };
        }
        DetectionMode::TextInput => (
            "Text Analysis",
            Some("Paste any text content to check if it's AI generated"),
        ),
        DetectionMode::FileUpload => (
            "Upload",
            Some("Upload images, documents or text files for AI detection"),
        ),
        DetectionMode::UrlInput => (
            "URL Analysis",
            Some("Enter any website URL to analyze its content for AI generation"),
        ),
        DetectionMode::Results => ("Detection Results", None),
    };

    html! {
        <header class="app-header">
            <h2>{ title }</h2>
            { for subtitle.map(|s| html! { <p class="subtitle">{ s }</p> }) }
        </header>
    }
}
