use attrition_ai::workflows::attrition::{BulkReport, SessionError, SessionStore};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Single-session store: each upload overwrites the previous results.
#[derive(Default, Clone)]
pub(crate) struct InMemorySessionStore {
    report: Arc<Mutex<Option<BulkReport>>>,
}

impl SessionStore for InMemorySessionStore {
    fn current(&self) -> Result<Option<BulkReport>, SessionError> {
        let guard = self
            .report
            .lock()
            .map_err(|_| SessionError::Unavailable("session mutex poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn replace(&self, report: BulkReport) -> Result<(), SessionError> {
        let mut guard = self
            .report
            .lock()
            .map_err(|_| SessionError::Unavailable("session mutex poisoned".to_string()))?;
        *guard = Some(report);
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let mut guard = self
            .report
            .lock()
            .map_err(|_| SessionError::Unavailable("session mutex poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}
