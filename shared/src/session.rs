use std::time::Duration;

use crate::config::DetectorConfig;
use crate::content::{Descriptor, FileRef};
use crate::error::DetectorError;
use crate::mode::DetectionMode;
use crate::result::DetectionResult;
use crate::stages::{Stage, stage_plan};
use crate::verdict::mock_verdict;

/// Everything one visit to the detector knows about.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub mode: DetectionMode,
    pub is_analyzing: bool,
    pub progress: u8,
    /// Index of the stage currently running, while analyzing.
    pub current_stage: Option<usize>,
    pub input_text: String,
    pub input_url: String,
    pub uploaded_file: Option<FileRef>,
    pub result: Option<DetectionResult>,
    pub error: Option<DetectorError>,
}

/// Handle for one accepted analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    run_id: u64,
    pub descriptor: Descriptor,
    pub plan: Vec<Stage>,
    pub stage_delay: Duration,
}

impl AnalysisTicket {
    pub fn run_id(&self) -> u64 {
        self.run_id
    }
}

#[derive(Debug, Default)]
pub struct SessionController {
    session: Session,
    config: DetectorConfig,
    pending_config: Option<DetectorConfig>,
    run_counter: u64,
}

impl SessionController {
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            session: Session::default(),
            config,
            pending_config: None,
            run_counter: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Swaps the detector config. While a run is in flight the new config is
    /// held back until that run finishes or the session is reset. Returns
    /// whether it took effect immediately.
    pub fn set_config(&mut self, config: DetectorConfig) -> bool {
        if self.session.is_analyzing {
            self.pending_config = Some(config);
            return false;
        }
        self.config = config;
        true
    }

    fn apply_pending_config(&mut self) {
        if let Some(config) = self.pending_config.take() {
            log::info!("Applying detector config held during analysis");
            self.config = config;
        }
    }

    fn ensure_idle(&self) -> Result<(), DetectorError> {
        if self.session.is_analyzing {
            Err(DetectorError::AnalysisInProgress)
        } else {
            Ok(())
        }
    }

    fn is_current(&self, ticket: &AnalysisTicket) -> bool {
        self.session.is_analyzing && ticket.run_id == self.run_counter
    }

    pub fn select_mode(&mut self, target: DetectionMode) -> Result<(), DetectorError> {
        self.ensure_idle()?;
        if target == DetectionMode::Results {
            return Err(DetectorError::InvalidTransition(target));
        }

        if self.session.mode == DetectionMode::Results {
            self.session.result = None;
        }
        log::debug!("Mode {} -> {}", self.session.mode, target);
        self.session.mode = target;
        Ok(())
    }

    pub fn set_input_text(&mut self, text: impl Into<String>) -> Result<(), DetectorError> {
        self.ensure_idle()?;
        self.session.input_text = text.into();
        Ok(())
    }

    pub fn set_input_url(&mut self, url: impl Into<String>) -> Result<(), DetectorError> {
        self.ensure_idle()?;
        self.session.input_url = url.into();
        Ok(())
    }

    /// Stores the picked file after checking it against the upload rules.
    /// A rejected file leaves the previous selection in place.
    pub fn set_uploaded_file(&mut self, file: Option<FileRef>) -> Result<(), DetectorError> {
        self.ensure_idle()?;
        if let Some(file) = &file {
            if let Err(e) = self.config.validate_file(file) {
                log::warn!("Rejected file {}: {}", file.name, e);
                self.session.error = Some(e.clone());
                return Err(e);
            }
        }
        self.session.uploaded_file = file;
        self.session.error = None;
        Ok(())
    }

    /// Descriptor for whatever input the current screen owns.
    pub fn active_descriptor(&self) -> Result<Descriptor, DetectorError> {
        match self.session.mode {
            DetectionMode::TextInput => Ok(Descriptor::Text(self.session.input_text.clone())),
            DetectionMode::UrlInput => Ok(Descriptor::Url(self.session.input_url.clone())),
            DetectionMode::FileUpload => self
                .session
                .uploaded_file
                .clone()
                .map(Descriptor::File)
                .ok_or(DetectorError::EmptyInput),
            DetectionMode::Menu | DetectionMode::Results => Err(DetectorError::EmptyInput),
        }
    }

    /// Accepts a run on the current screen's input. Blank input, or a
    /// descriptor that is not what the screen holds, is refused without
    /// touching the session.
    pub fn begin_analysis(&mut self, descriptor: Descriptor) -> Result<AnalysisTicket, DetectorError> {
        self.ensure_idle()?;
        if descriptor != self.active_descriptor()? {
            return Err(DetectorError::InvalidTransition(self.session.mode));
        }
        if descriptor.is_blank() {
            return Err(DetectorError::EmptyInput);
        }

        self.run_counter += 1;
        self.session.is_analyzing = true;
        self.session.progress = 0;
        self.session.current_stage = Some(0);
        self.session.result = None;
        self.session.error = None;
        log::info!(
            "Analysis #{} started ({})",
            self.run_counter,
            descriptor.content_type()
        );

        Ok(AnalysisTicket {
            run_id: self.run_counter,
            descriptor,
            plan: stage_plan(),
            stage_delay: self.config.stage_delay(),
        })
    }

    /// Records that the first `completed` stages are done. Returns `false`
    /// when the ticket no longer belongs to the running analysis.
    pub fn advance(&mut self, ticket: &AnalysisTicket, completed: usize) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        let Some(stage) = completed.checked_sub(1).and_then(|i| ticket.plan.get(i)) else {
            return true;
        };

        self.session.progress = self.session.progress.max(stage.progress);
        let stage_index = completed.min(ticket.plan.len() - 1);
        self.session.current_stage = self.session.current_stage.max(Some(stage_index));
        log::debug!("Stage done: {} ({}%)", stage.label, self.session.progress);
        true
    }

    /// Ends the run with the scorer's outcome. All fields change together.
    pub fn finish(
        &mut self,
        ticket: &AnalysisTicket,
        score: Result<f64, DetectorError>,
    ) -> Option<Result<&DetectionResult, DetectorError>> {
        if !self.is_current(ticket) {
            return None;
        }

        self.session.is_analyzing = false;
        self.session.current_stage = None;
        let verdict = score.map(|score| mock_verdict(score, &ticket.descriptor, &self.config));
        self.apply_pending_config();
        match verdict {
            Ok(result) => {
                log::info!(
                    "Analysis #{} finished: {} ({})",
                    ticket.run_id,
                    result.verdict_label(),
                    result.confidence
                );
                self.session.progress = 100;
                self.session.mode = DetectionMode::Results;
                let result: &DetectionResult = self.session.result.insert(result);
                Some(Ok(result))
            }
            Err(e) => {
                log::error!("Analysis #{} failed: {}", ticket.run_id, e);
                self.session.progress = 0;
                self.session.error = Some(e.clone());
                Some(Err(e))
            }
        }
    }

    /// Back to the menu with every input cleared. A run still in flight is
    /// abandoned.
    pub fn reset(&mut self) {
        if self.session.is_analyzing {
            log::info!("Abandoning analysis #{}", self.run_counter);
        }
        self.run_counter += 1;
        self.session = Session::default();
        self.apply_pending_config();
    }
}
