mod api;
mod components;

use std::cell::RefCell;
use std::rc::Rc;

use components::handlers;
use components::header::render_header;
use components::menu::render_menu;
use components::progress::render_progress;
use components::results::render_results;
use components::text_input::render_text_input;
use components::upload_section::render_upload_section;
use components::url_input::render_url_input;
use components::utils::render_error_message;
use gloo_file::File as GlooFile;
use shared::{DetectionMode, DetectorConfig, DetectorError, SessionController};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    // Navigation
    SelectMode(DetectionMode),
    Reset,

    // Input events
    SetText(String),
    SetUrl(String),
    FilesAdded(Vec<GlooFile>),
    HandleDrop(DragEvent),
    SetDragging(bool),

    // Analysis operations
    Analyze,
    SessionChanged,
    AnalysisFailed(DetectorError),

    // UI states
    ConfigLoaded(DetectorConfig),
    SetError(Option<String>),
}

// Main component
pub struct Model {
    session: Rc<RefCell<SessionController>>,
    error: Option<String>,
    is_dragging: bool,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_config().await {
                Ok(config) => link.send_message(Msg::ConfigLoaded(config)),
                Err(e) => log::warn!("Using built-in detector config: {}", e),
            }
        });

        Self {
            session: Rc::new(RefCell::new(SessionController::new(DetectorConfig::default()))),
            error: None,
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Navigation
            Msg::SelectMode(mode) => handlers::handle_select_mode(self, mode),
            Msg::Reset => handlers::handle_reset(self),

            // Input events
            Msg::SetText(text) => handlers::handle_set_text(self, text),
            Msg::SetUrl(url) => handlers::handle_set_url(self, url),
            Msg::FilesAdded(files) => handlers::handle_files_added(self, files),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Analysis operations
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::SessionChanged => true,
            Msg::AnalysisFailed(error) => {
                self.error = Some(error.to_string());
                true
            }

            // UI states
            Msg::ConfigLoaded(config) => handlers::handle_config_loaded(self, config),
            Msg::SetError(error) => {
                self.error = error;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let controller = self.session.borrow();
        let session = controller.session();
        let config = controller.config();

        let screen = match session.mode {
            DetectionMode::Menu => render_menu(ctx),
            DetectionMode::TextInput => render_text_input(session, ctx),
            DetectionMode::UrlInput => render_url_input(session, ctx),
            DetectionMode::FileUpload => render_upload_section(self, session, config, ctx),
            DetectionMode::Results => render_results(session, ctx),
        };

        html! {
            <div class="container">
                { render_header(session.mode) }

                <main class="main-content">
                { render_error_message(self, ctx) }
                { screen }
                { if session.mode.is_input() { render_progress(session) } else { html! {} } }
                </main>

                <footer class="app-footer">
                    <p>{"ReaCheck | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
