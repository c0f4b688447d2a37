use super::super::{Model, Msg};
use super::utils::extract_files;
use gloo_file::File as GlooFile;
use shared::{
    AnalysisOutcome, DetectionMode, DetectorConfig, FileRef, RandomScorer, run_analysis,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

pub fn handle_select_mode(model: &mut Model, mode: DetectionMode) -> bool {
    match model.session.borrow_mut().select_mode(mode) {
        Ok(()) => {
            model.error = None;
            true
        }
        Err(e) => {
            log::warn!("Ignoring navigation to {}: {}", mode, e);
            false
        }
    }
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.session.borrow_mut().reset();
    model.error = None;
    model.is_dragging = false;
    true
}

pub fn handle_set_text(model: &mut Model, text: String) -> bool {
    if let Err(e) = model.session.borrow_mut().set_input_text(text) {
        log::warn!("Text input ignored: {}", e);
    }
    true
}

pub fn handle_set_url(model: &mut Model, url: String) -> bool {
    if let Err(e) = model.session.borrow_mut().set_input_url(url) {
        log::warn!("URL input ignored: {}", e);
    }
    true
}

pub fn handle_files_added(model: &mut Model, files: Vec<GlooFile>) -> bool {
    let Some(file) = files.into_iter().next() else {
        model.error = Some("No file selected.".into());
        return true;
    };

    let file_ref = FileRef::new(file.name(), file.size(), file.raw_mime_type());
    log::info!("File picked: {} ({} bytes)", file_ref.name, file_ref.size);

    match model.session.borrow_mut().set_uploaded_file(Some(file_ref)) {
        Ok(()) => model.error = None,
        Err(e) => model.error = Some(e.to_string()),
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        ctx.link()
            .send_message(Msg::FilesAdded(extract_files(&file_list)));
    }

    true
}

pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    let descriptor = model.session.borrow().active_descriptor();
    let descriptor = match descriptor {
        Ok(descriptor) => descriptor,
        Err(e) => {
            model.error = Some(e.to_string());
            return true;
        }
    };
    model.error = None;

    spawn_local({
        let session = model.session.clone();
        let link = ctx.link().clone();

        async move {
            let mut scorer = RandomScorer::new();
            let notify = {
                let link = link.clone();
                move || link.send_message(Msg::SessionChanged)
            };

            match run_analysis(
                &session,
                descriptor,
                &mut scorer,
                gloo_timers::future::sleep,
                notify,
            )
            .await
            {
                Ok(AnalysisOutcome::Completed(result)) => log::info!(
                    "Verdict: {} ({})",
                    result.verdict_label(),
                    result.confidence
                ),
                Ok(AnalysisOutcome::Cancelled) => log::info!("Analysis abandoned"),
                Err(e) => link.send_message(Msg::AnalysisFailed(e)),
            }
        }
    });

    true
}

pub fn handle_config_loaded(model: &mut Model, config: DetectorConfig) -> bool {
    if model.session.borrow_mut().set_config(config) {
        log::info!("Detector config loaded");
    } else {
        log::info!("Detector config loaded, applied after the running analysis");
    }
    true
}
