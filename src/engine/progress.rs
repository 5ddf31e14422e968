use std::fmt;

use tracing::info;

/// Coarse phases of a transform, in the order they are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Input buffer validated
    Decode,
    /// Working buffer prepared
    Draw,
    /// Per-pixel color grading
    ColorAdjust,
    /// Vignette and sharpening
    Finish,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Decode, Stage::Draw, Stage::ColorAdjust, Stage::Finish];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Decode => "decode",
            Stage::Draw => "draw",
            Stage::ColorAdjust => "color-adjust",
            Stage::Finish => "vignette+sharpen",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageStatus {
    Active,
    Done,
}

/// Observer for stage transitions
///
/// Reports are fire-and-forget: a sink cannot fail the transform or change
/// its output, and should return quickly.
pub trait ProgressSink: Sync {
    fn report(&self, stage: Stage, status: StageStatus);
}

impl<F> ProgressSink for F
where
    F: Fn(Stage, StageStatus) + Sync,
{
    fn report(&self, stage: Stage, status: StageStatus) {
        self(stage, status)
    }
}

/// Forwards completed stages to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn report(&self, stage: Stage, status: StageStatus) {
        if status == StageStatus::Done {
            let step = Stage::ALL.iter().position(|s| *s == stage).unwrap_or(0) + 1;
            info!("   [{}/{}] {} done", step, Stage::ALL.len(), stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |stage: Stage, status: StageStatus| seen.lock().unwrap().push((stage, status));

        sink.report(Stage::Draw, StageStatus::Active);
        assert_eq!(seen.lock().unwrap().as_slice(), &[(Stage::Draw, StageStatus::Active)]);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Stage::ColorAdjust.to_string(), "color-adjust");
        assert_eq!(Stage::Finish.label(), "vignette+sharpen");
    }
}
