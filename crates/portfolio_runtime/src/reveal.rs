//! Character-by-character text reveal driven by an injected timer service.
//!
//! The pure part ([`RevealState`], [`run_reveal`]) runs against any [`TimerService`] and is fully
//! testable off-browser. [`use_typed_reveal`] wires it into a Leptos signal and cancels the
//! running sequence when the owning view is disposed or the source text changes.

use std::{cell::Cell, rc::Rc};

use leptos::*;
use platform_host::TimerService;

const DEFAULT_SPEED_MS: u32 = 100;

/// Timing for one reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealConfig {
    /// Delay between successive characters, always at least one millisecond.
    pub speed_ms: u32,
    /// Delay before the first character appears.
    pub start_delay_ms: u32,
}

impl RevealConfig {
    /// Builds a config from raw values, clamping speed to at least 1 ms and delay to at least 0.
    pub fn new(speed_ms: i64, start_delay_ms: i64) -> Self {
        Self {
            speed_ms: clamp_ms(speed_ms, 1),
            start_delay_ms: clamp_ms(start_delay_ms, 0),
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            start_delay_ms: 0,
        }
    }
}

fn clamp_ms(value: i64, floor: i64) -> u32 {
    value.clamp(floor, i64::from(u32::MAX)) as u32
}

/// Lifecycle of one reveal sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Nothing scheduled. Also the resting phase for empty text.
    Idle,
    /// Waiting out the start delay.
    Waiting,
    /// Characters are being appended.
    Revealing,
    /// Visible text equals the source text.
    Done,
}

/// Visible prefix of a source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    source: String,
    revealed_chars: usize,
    phase: RevealPhase,
}

impl RevealState {
    /// Creates an idle state with nothing visible.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            revealed_chars: 0,
            phase: RevealPhase::Idle,
        }
    }

    /// Enters the waiting phase. Empty text stays idle.
    pub fn begin(&mut self) {
        self.revealed_chars = 0;
        self.phase = if self.source.is_empty() {
            RevealPhase::Idle
        } else {
            RevealPhase::Waiting
        };
    }

    /// Leaves the waiting phase.
    pub fn start_revealing(&mut self) {
        if self.phase == RevealPhase::Waiting {
            self.phase = RevealPhase::Revealing;
        }
    }

    /// Appends one character. Returns `false` when nothing was left to reveal.
    pub fn tick(&mut self) -> bool {
        if self.revealed_chars >= self.total_len() {
            return false;
        }
        self.revealed_chars += 1;
        self.phase = if self.revealed_chars == self.total_len() {
            RevealPhase::Done
        } else {
            RevealPhase::Revealing
        };
        true
    }

    /// Clears the visible text and returns to idle.
    pub fn reset(&mut self) {
        self.revealed_chars = 0;
        self.phase = RevealPhase::Idle;
    }

    /// Currently visible prefix of the source text.
    pub fn visible(&self) -> &str {
        match self.source.char_indices().nth(self.revealed_chars) {
            Some((byte_index, _)) => &self.source[..byte_index],
            None => &self.source,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    /// Number of visible characters.
    pub fn revealed_len(&self) -> usize {
        self.revealed_chars
    }

    /// Number of characters in the source text.
    pub fn total_len(&self) -> usize {
        self.source.chars().count()
    }

    /// Full source text.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Generation counter used to cancel in-flight reveal sequences.
#[derive(Debug, Clone, Default)]
pub struct RevealTimer {
    generation: Rc<Cell<u64>>,
}

impl RevealTimer {
    /// Invalidates any running sequence and returns a ticket for a new one.
    pub fn issue(&self) -> RevealTicket {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        RevealTicket {
            generation: self.generation.clone(),
            issued: next,
        }
    }

    /// Invalidates any running sequence.
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

/// Permission for one reveal sequence to keep emitting.
#[derive(Debug, Clone)]
pub struct RevealTicket {
    generation: Rc<Cell<u64>>,
    issued: u64,
}

impl RevealTicket {
    /// Returns whether no newer sequence or cancellation has happened since issue.
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.issued
    }
}

/// Runs one reveal sequence, calling `emit` after each appended character.
///
/// Sleeps once for the start delay (when non-zero) and once before every character. The ticket is
/// checked after every sleep, so a cancelled sequence never emits again.
pub async fn run_reveal(
    timers: &dyn TimerService,
    ticket: &RevealTicket,
    source: &str,
    config: RevealConfig,
    mut emit: impl FnMut(&RevealState),
) -> RevealState {
    let mut state = RevealState::new(source);
    state.begin();
    if state.phase() == RevealPhase::Idle {
        return state;
    }

    if config.start_delay_ms > 0 {
        timers.sleep(config.start_delay_ms).await;
        if !ticket.is_current() {
            return state;
        }
    }
    state.start_revealing();

    while state.revealed_len() < state.total_len() {
        timers.sleep(config.speed_ms).await;
        if !ticket.is_current() {
            break;
        }
        state.tick();
        emit(&state);
    }
    state
}

/// Returns a signal holding the visible prefix of `text`, revealed with `config` timing.
///
/// The sequence restarts from empty whenever `text` changes and stops when the calling scope is
/// disposed.
pub fn use_typed_reveal(
    timers: Rc<dyn TimerService>,
    text: Signal<String>,
    config: RevealConfig,
) -> ReadSignal<String> {
    let (visible, set_visible) = create_signal(String::new());
    let timer = RevealTimer::default();

    {
        let timer = timer.clone();
        create_effect(move |_| {
            let source = text.get();
            let ticket = timer.issue();
            set_visible.set(String::new());
            let timers = timers.clone();
            spawn_local(async move {
                run_reveal(timers.as_ref(), &ticket, &source, config, |state| {
                    if ticket.is_current() {
                        let _ = set_visible.try_set(state.visible().to_string());
                    }
                })
                .await;
            });
        });
    }

    on_cleanup(move || timer.cancel());

    visible
}
