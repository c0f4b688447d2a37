use std::cell::RefCell;
use std::future::Future;
use std::time::Duration;

use crate::content::Descriptor;
use crate::error::DetectorError;
use crate::result::DetectionResult;
use crate::session::SessionController;
use crate::verdict::Scorer;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Completed(DetectionResult),
    /// The session was reset before the run finished.
    Cancelled,
}

/// Drives one analysis run through every stage.
///
/// `sleep` is awaited between stages and `notify` is called after each
/// transition so the caller can re-render. The controller is only borrowed
/// between awaits, never across one.
pub async fn run_analysis<S, F, Fut, N>(
    controller: &RefCell<SessionController>,
    descriptor: Descriptor,
    scorer: &mut S,
    mut sleep: F,
    mut notify: N,
) -> Result<AnalysisOutcome, DetectorError>
where
    S: Scorer + ?Sized,
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
    N: FnMut(),
{
    let ticket = controller.borrow_mut().begin_analysis(descriptor)?;
    notify();

    for completed in 1..=ticket.plan.len() {
        sleep(ticket.stage_delay).await;
        if !controller.borrow_mut().advance(&ticket, completed) {
            return Ok(AnalysisOutcome::Cancelled);
        }
        notify();
    }

    let score = scorer.score(&ticket.descriptor);
    let outcome = controller
        .borrow_mut()
        .finish(&ticket, score)
        .map(|r| r.cloned());
    notify();

    match outcome {
        Some(Ok(result)) => Ok(AnalysisOutcome::Completed(result)),
        Some(Err(e)) => Err(e),
        None => Ok(AnalysisOutcome::Cancelled),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DetectorConfig;
    use crate::content::ContentType;
    use crate::mode::DetectionMode;
    use crate::session::Session;
    use crate::verdict::FixedScorer;
    use futures::executor::block_on;
    use futures::future::ready;

    fn text_controller(text: &str) -> RefCell<SessionController> {
        let mut c = SessionController::new(DetectorConfig::default());
        c.select_mode(DetectionMode::TextInput).unwrap();
        c.set_input_text(text).unwrap();
        RefCell::new(c)
    }

    struct FailingScorer;

    impl Scorer for FailingScorer {
        fn score(&mut self, _descriptor: &Descriptor) -> Result<f64, DetectorError> {
            Err(DetectorError::FetchFailed("connection refused".into()))
        }
    }

    #[test]
    fn completes_with_results_screen() {
        let controller = text_controller("An essay about rivers.");
        let descriptor = controller.borrow().active_descriptor().unwrap();
        let mut scorer = FixedScorer(0.9);

        let outcome = block_on(run_analysis(
            &controller,
            descriptor,
            &mut scorer,
            |_| ready(()),
            || {},
        ))
        .unwrap();

        let AnalysisOutcome::Completed(result) = outcome else {
            panic!("run was cancelled");
        };
        assert!(result.is_ai);
        assert_eq!(result.confidence.value(), 90);
        assert_eq!(result.content_type, ContentType::Text);

        let c = controller.borrow();
        assert_eq!(c.session().mode, DetectionMode::Results);
        assert_eq!(c.session().result.as_ref(), Some(&result));
    }

    #[test]
    fn observers_see_monotonic_progress() {
        let controller = text_controller("abc");
        let descriptor = controller.borrow().active_descriptor().unwrap();
        let seen = RefCell::new(Vec::<Session>::new());

        block_on(run_analysis(
            &controller,
            descriptor,
            &mut FixedScorer(0.2),
            |_| ready(()),
            || seen.borrow_mut().push(controller.borrow().session().clone()),
        ))
        .unwrap();

        let seen = seen.into_inner();
        let progress: Vec<u8> = seen.iter().map(|s| s.progress).collect();
        assert_eq!(progress, vec![0, 17, 33, 50, 67, 83, 100, 100]);

        for snapshot in &seen {
            if snapshot.result.is_some() {
                assert!(!snapshot.is_analyzing);
                assert_eq!(snapshot.mode, DetectionMode::Results);
            }
            if snapshot.mode == DetectionMode::Results {
                assert!(snapshot.result.is_some());
            }
        }
        assert!(seen[..7].iter().all(|s| s.is_analyzing));
    }

    #[test]
    fn waits_once_per_stage_with_configured_delay() {
        let controller = text_controller("abc");
        let descriptor = controller.borrow().active_descriptor().unwrap();
        let mut delays = Vec::new();

        block_on(run_analysis(
            &controller,
            descriptor,
            &mut FixedScorer(0.6),
            |d| {
                delays.push(d);
                ready(())
            },
            || {},
        ))
        .unwrap();

        assert_eq!(delays, vec![Duration::from_millis(800); 6]);
    }

    #[test]
    fn blank_input_runs_no_stages() {
        let controller = text_controller("   ");
        let before = controller.borrow().session().clone();
        let descriptor = controller.borrow().active_descriptor().unwrap();
        let mut sleeps = 0;
        let mut notifications = 0;

        let err = block_on(run_analysis(
            &controller,
            descriptor,
            &mut FixedScorer(0.9),
            |_| {
                sleeps += 1;
                ready(())
            },
            || notifications += 1,
        ))
        .unwrap_err();

        assert_eq!(err, DetectorError::EmptyInput);
        assert_eq!(sleeps, 0);
        assert_eq!(notifications, 0);
        assert_eq!(controller.borrow().session(), &before);
    }

    #[test]
    fn reset_during_run_cancels_it() {
        let controller = text_controller("abc");
        let descriptor = controller.borrow().active_descriptor().unwrap();
        let mut stage = 0;

        let outcome = block_on(run_analysis(
            &controller,
            descriptor,
            &mut FixedScorer(0.9),
            |_| {
                stage += 1;
                if stage == 3 {
                    controller.borrow_mut().reset();
                }
                ready(())
            },
            || {},
        ))
        .unwrap();

        assert_eq!(outcome, AnalysisOutcome::Cancelled);
        assert_eq!(stage, 3);
        assert_eq!(controller.borrow().session(), &Session::default());
    }

    #[test]
    fn scorer_failure_surfaces_error() {
        let controller = RefCell::new(SessionController::default());
        controller
            .borrow_mut()
            .select_mode(DetectionMode::UrlInput)
            .unwrap();
        controller
            .borrow_mut()
            .set_input_url("https://unreachable.test")
            .unwrap();
        let descriptor = controller.borrow().active_descriptor().unwrap();

        let err = block_on(run_analysis(
            &controller,
            descriptor,
            &mut FailingScorer,
            |_| ready(()),
            || {},
        ))
        .unwrap_err();

        assert!(matches!(err, DetectorError::FetchFailed(_)));
        let c = controller.borrow();
        assert!(!c.session().is_analyzing);
        assert_eq!(c.session().mode, DetectionMode::UrlInput);
        assert_eq!(c.session().error, Some(err));
    }
}
