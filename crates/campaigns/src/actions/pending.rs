//! Shared plumbing for simulated backend operations

use log::error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::error::{ServiceError, ServiceResult};

/// Marks a service as loading until dropped
pub(crate) struct LoadingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> LoadingGuard<'a> {
    pub(crate) fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self { flag }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Wait out the simulated round trip
pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

/// Log a failed operation and convert it to a service error
pub(crate) fn logged<T>(operation: &str, result: anyhow::Result<T>) -> ServiceResult<T> {
    result.map_err(|e| {
        error!("Error {}: {:#}", operation, e);
        ServiceError::from(e)
    })
}
