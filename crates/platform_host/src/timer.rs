//! Timer service contracts used by delay/interval-driven runtime utilities.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`TimerService`].
pub type TimerFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service for cooperative sleeps on the UI event loop.
pub trait TimerService {
    /// Resolves after roughly `delay_ms` milliseconds.
    fn sleep(&self, delay_ms: u32) -> TimerFuture<'_>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Timer service that resolves immediately.
pub struct NoopTimerService;

impl TimerService for NoopTimerService {
    fn sleep(&self, _delay_ms: u32) -> TimerFuture<'_> {
        Box::pin(async {})
    }
}

#[derive(Debug, Clone, Default)]
/// Timer service that resolves immediately and records every requested delay.
pub struct RecordingTimerService {
    delays: Rc<RefCell<Vec<u32>>>,
}

impl RecordingTimerService {
    /// Returns the requested delays in call order.
    pub fn delays(&self) -> Vec<u32> {
        self.delays.borrow().clone()
    }
}

impl TimerService for RecordingTimerService {
    fn sleep(&self, delay_ms: u32) -> TimerFuture<'_> {
        self.delays.borrow_mut().push(delay_ms);
        Box::pin(async {})
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn recording_timer_service_tracks_delays() {
        let timers = RecordingTimerService::default();
        let timers_obj: &dyn TimerService = &timers;
        block_on(timers_obj.sleep(500));
        block_on(timers_obj.sleep(80));
        assert_eq!(timers.delays(), vec![500, 80]);
    }
}
