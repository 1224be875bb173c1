//! Timer host-service adapter backed by `setTimeout`.

use platform_host::{TimerFuture, TimerService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser timer adapter. Off-wasm every sleep resolves immediately.
pub struct WebTimerService;

impl TimerService for WebTimerService {
    fn sleep(&self, delay_ms: u32) -> TimerFuture<'_> {
        Box::pin(bridge::sleep_ms(delay_ms))
    }
}
