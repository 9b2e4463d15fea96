use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::SessionError;
use crate::http_probe::prelude::*;

/// Transient state of one user session: the result on display and whether a
/// check is running. A second submission is refused until the first resolves.
pub struct CheckSession<T = ReqwestTransport> {
    checker: StatusChecker<T>,
    in_flight: AtomicBool,
    current: Mutex<Option<CheckResult>>,
}

/// Clears the in-flight flag when the check ends, including when it is dropped mid-way.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<T: Transport> CheckSession<T> {
    pub fn new(checker: StatusChecker<T>) -> Self {
        Self {
            checker,
            in_flight: AtomicBool::new(false),
            current: Mutex::new(None),
        }
    }

    pub fn is_checking(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn last_result(&self) -> Option<CheckResult> {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Run a check for `input` and keep its result as the current one.
    pub async fn submit(&self, input: &str) -> Result<CheckResult, SessionError> {
        if input.trim().is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SessionError::CheckInProgress);
        }
        let _in_flight = InFlight(&self.in_flight);

        self.set_current(None);
        let result = self.checker.check(input).await;
        self.set_current(Some(result.clone()));

        Ok(result)
    }

    fn set_current(&self, result: Option<CheckResult>) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = result;
    }
}
