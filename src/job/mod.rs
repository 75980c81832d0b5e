//! Background simulation of statement processing. The upload flow never
//! reads file bytes; a worker thread plays through fixed phases and
//! reports progress over a channel. The worker only sends events; all
//! state changes happen on the UI thread when the events are drained.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JobPhase {
    Upload,
    Analyze,
    Finalize,
}

impl JobPhase {
    pub(crate) const ALL: [JobPhase; 3] = [Self::Upload, Self::Analyze, Self::Finalize];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Analyze => "Analyze",
            Self::Finalize => "Finalize",
        }
    }

    pub(crate) fn message(self) -> &'static str {
        match self {
            Self::Upload => "Uploading your statement...",
            Self::Analyze => "Analyzing transactions...",
            Self::Finalize => "Finalizing...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum JobOutcome {
    Completed,
    /// Rendered as a distinct terminal state, but the simulator itself
    /// has no failure path; real parsing would produce this.
    Failed(String),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum JobUpdate {
    Progress { phase: JobPhase, ratio: f64 },
    Finished(JobOutcome),
}

/// Phase timing. Injectable so tests run in milliseconds; the defaults
/// play out over roughly ten seconds.
#[derive(Debug, Clone, Copy)]
pub(crate) struct JobPlan {
    pub(crate) upload: Duration,
    pub(crate) analyze: Duration,
    pub(crate) finalize: Duration,
    pub(crate) tick: Duration,
}

impl Default for JobPlan {
    fn default() -> Self {
        Self {
            upload: Duration::from_secs(5),
            analyze: Duration::from_secs(4),
            finalize: Duration::from_secs(1),
            tick: Duration::from_millis(250),
        }
    }
}

impl JobPlan {
    fn total(&self) -> Duration {
        self.upload + self.analyze + self.finalize
    }

    fn phase_at(&self, elapsed: Duration) -> JobPhase {
        if elapsed < self.upload {
            JobPhase::Upload
        } else if elapsed < self.upload + self.analyze {
            JobPhase::Analyze
        } else {
            JobPhase::Finalize
        }
    }
}

/// Handle to a running simulation. Cancellation is cooperative: the
/// worker checks the flag once per tick.
pub(crate) struct StatementJob {
    events: Receiver<JobUpdate>,
    cancel: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl StatementJob {
    pub(crate) fn spawn(plan: JobPlan) -> Self {
        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancel);

        let worker = thread::spawn(move || {
            let started = Instant::now();
            let total = plan.total().as_secs_f64().max(f64::EPSILON);

            loop {
                if flag.load(Ordering::Relaxed) {
                    let _ = tx.send(JobUpdate::Finished(JobOutcome::Cancelled));
                    return;
                }
                let elapsed = started.elapsed();
                if elapsed >= plan.total() {
                    break;
                }
                let _ = tx.send(JobUpdate::Progress {
                    phase: plan.phase_at(elapsed),
                    ratio: (elapsed.as_secs_f64() / total).min(1.0),
                });
                thread::sleep(plan.tick);
            }

            let _ = tx.send(JobUpdate::Progress {
                phase: JobPhase::Finalize,
                ratio: 1.0,
            });
            let _ = tx.send(JobUpdate::Finished(JobOutcome::Completed));
        });

        Self {
            events: rx,
            cancel,
            worker: Some(worker),
        }
    }

    /// Ask the worker to stop at its next tick. The answer arrives as a
    /// `Finished(Cancelled)` event, not synchronously.
    pub(crate) fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Drain whatever the worker has sent so far. Never blocks; the event
    /// loop calls this every tick.
    pub(crate) fn drain(&self) -> Vec<JobUpdate> {
        let mut updates = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(update) => updates.push(update),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        updates
    }
}

impl Drop for StatementJob {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::Relaxed);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
