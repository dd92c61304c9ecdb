use std::sync::Arc;
use std::time::Instant;

use crate::service::StudyService;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    service: Arc<StudyService>,
}

impl AppState {
    pub fn new(service: Arc<StudyService>) -> Self {
        Self {
            started_at: Instant::now(),
            service,
        }
    }

    pub fn service(&self) -> &StudyService {
        &self.service
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
