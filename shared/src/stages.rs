pub const ANALYSIS_STAGES: [&str; 6] = [
    "Preprocessing content...",
    "Analyzing patterns...",
    "Checking metadata...",
    "Running AI detection models...",
    "Calculating confidence scores...",
    "Generating report...",
];

/// A named step and the progress reached once it has completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub label: &'static str,
    pub progress: u8,
}

/// Progress after `completed` of `total` stages, rounded to the nearest percent.
pub fn progress_after(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    let completed = completed.min(total);
    (100.0 * completed as f64 / total as f64).round() as u8
}

pub fn stage_plan() -> Vec<Stage> {
    let total = ANALYSIS_STAGES.len();
    ANALYSIS_STAGES
        .into_iter()
        .enumerate()
        .map(|(i, label)| Stage {
            label,
            progress: progress_after(i + 1, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_stage_breakpoints() {
        let progress: Vec<u8> = stage_plan().iter().map(|s| s.progress).collect();
        assert_eq!(progress, vec![17, 33, 50, 67, 83, 100]);
    }

    #[test]
    fn plan_keeps_stage_order() {
        let plan = stage_plan();
        assert_eq!(plan.first().unwrap().label, "Preprocessing content...");
        assert_eq!(plan.last().unwrap().label, "Generating report...");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(progress_after(0, 6), 0);
        assert_eq!(progress_after(9, 6), 100);
        assert_eq!(progress_after(0, 0), 100);
    }
}
