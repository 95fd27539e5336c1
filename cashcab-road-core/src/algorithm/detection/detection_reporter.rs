use super::{DetectionStatistics, SkipReason};
use std::sync::Mutex;

/// something notable that happened during a detection pass.
#[derive(Clone, Debug, PartialEq)]
pub enum DetectionEvent {
    /// the document had no nodes or no ways to work with
    EmptyInput { message: String },
    MissingNodes { way_id: String, missing: usize },
    WaySkipped { way_id: String, reason: SkipReason },
    /// a way record could not be read and was dropped
    WayFailed { way_id: String, message: String },
    /// the document itself could not be read, the pass produced nothing
    DetectionFailed { message: String },
    Completed { statistics: DetectionStatistics },
}

/// receives the events of a [`super::RoadDetector`].
pub trait DetectionReporter: Send + Sync {
    fn report(&self, event: DetectionEvent);
}

/// forwards events to the `log` facade.
#[derive(Default, Debug, Clone, Copy)]
pub struct LogReporter;

impl DetectionReporter for LogReporter {
    fn report(&self, event: DetectionEvent) {
        match event {
            DetectionEvent::EmptyInput { message } => {
                log::info!("road detection skipped: {message}")
            }
            DetectionEvent::MissingNodes { way_id, missing } => {
                log::debug!("way {way_id}: {missing} node(s) without coordinates dropped")
            }
            DetectionEvent::WaySkipped { way_id, reason } => {
                log::trace!("way {way_id} skipped: {reason}")
            }
            DetectionEvent::WayFailed { way_id, message } => {
                log::warn!("failed to process way {way_id}: {message}")
            }
            DetectionEvent::DetectionFailed { message } => {
                log::error!("road detection failed: {message}")
            }
            DetectionEvent::Completed { statistics } => {
                log::info!("road detection complete: {}", statistics.summary())
            }
        }
    }
}

/// keeps every event in memory.
#[derive(Default, Debug)]
pub struct CollectingReporter {
    events: Mutex<Vec<DetectionEvent>>,
}

impl CollectingReporter {
    pub fn new() -> CollectingReporter {
        CollectingReporter::default()
    }

    pub fn events(&self) -> Vec<DetectionEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// events a person should look at: per-way failures and failed passes.
    pub fn warnings(&self) -> Vec<DetectionEvent> {
        self.events()
            .into_iter()
            .filter(|e| {
                matches!(
                    e,
                    DetectionEvent::WayFailed { .. } | DetectionEvent::DetectionFailed { .. }
                )
            })
            .collect()
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl DetectionReporter for CollectingReporter {
    fn report(&self, event: DetectionEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
