//! One-shot worker jobs feeding results back to the controller.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;

use crate::scoring::{self, ScoreError, ScoreReport, ScoreRequest};

pub(crate) enum JobMessage {
    ScoreFinished(ScoreJobOutcome),
}

/// Everything a worker thread needs to run one score submission.
#[derive(Debug)]
pub(crate) struct ScoreJob {
    pub(crate) endpoint: String,
    pub(crate) request: ScoreRequest,
}

#[derive(Debug)]
pub(crate) struct ScoreJobOutcome {
    pub(crate) result: Result<ScoreReport, ScoreError>,
}

/// Job channel plus the single-request bookkeeping.
///
/// The receiver lives on the UI thread; workers get a clone of the sender
/// and post exactly one message before exiting.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    score_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            score_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    /// Run the blocking HTTP call on a worker thread.
    ///
    /// Ignored while a request is already outstanding; the UI additionally
    /// disables the submit control, so this guard is the last line against a
    /// second concurrent submission.
    pub(super) fn begin_score_request(&mut self, job: ScoreJob) {
        if self.score_in_progress {
            return;
        }
        self.score_in_progress = true;
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let result = scoring::submit_scores(&job.endpoint, &job.request);
            let _ = tx.send(JobMessage::ScoreFinished(ScoreJobOutcome { result }));
        });
    }

    pub(super) fn clear_score_request(&mut self) {
        self.score_in_progress = false;
    }
}
