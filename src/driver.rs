use std::ops::ControlFlow;
use std::thread;
use std::time::Duration;

use crate::error::RegressionResult;
use crate::session::{StepReport, TrainingPhase, TrainingSession};

/// Interval the trainer page waited between two animated steps.
pub const ANIMATION_INTERVAL: Duration = Duration::from_millis(500);

/// Steps `session` until it reaches its iteration ceiling or `on_step`
/// breaks, sleeping `interval` between steps when given.
///
/// Breaking out of `on_step` stops the session. A failing step also stops it
/// and the error is returned; the failed step itself changes nothing.
pub fn drive<F>(
    session: &mut TrainingSession,
    interval: Option<Duration>,
    mut on_step: F,
) -> RegressionResult<TrainingPhase>
where
    F: FnMut(&StepReport) -> ControlFlow<()>,
{
    session.start();

    while session.phase() == TrainingPhase::Running {
        let report = match session.step() {
            Ok(report) => report,
            Err(e) => {
                log::error!("training step failed: {}", e);
                session.stop();
                return Err(e);
            }
        };

        if on_step(&report).is_break() {
            session.stop();
            break;
        }

        if let (Some(interval), TrainingPhase::Running) = (interval, session.phase()) {
            thread::sleep(interval);
        }
    }

    Ok(session.phase())
}
