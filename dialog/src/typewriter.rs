//! Character-by-character text reveal timing

use std::time::Duration;

use crate::config::{ReentryPolicy, TypewriterConfig};
use crate::error::DialogError;

/// Observable phase of the typewriter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Revealing,
    Settling,
}

/// Events emitted while a line is typed.
///
/// `at` is measured from the matching `begin_line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealEvent {
    /// A new line began; the text surface should be cleared
    LineStarted { len: usize },
    /// Character `index` is now visible
    Char { index: usize, ch: char, at: Duration },
    /// Every character is visible, the trailing pause started
    Settling { at: Duration },
    /// The trailing pause elapsed, the typewriter is idle again
    Finished { at: Duration },
    /// The line was dropped for a new one after `revealed` characters
    Cancelled { revealed: usize },
}

/// Receiver for reveal events, usually the UI text surface adapter.
pub trait RevealSink {
    fn on_event(&mut self, event: RevealEvent);
}

impl RevealSink for Vec<RevealEvent> {
    fn on_event(&mut self, event: RevealEvent) {
        self.push(event);
    }
}

#[derive(Debug)]
enum State {
    Idle,
    Revealing {
        chars: Vec<char>,
        next: usize,
        due: Duration,
    },
    Settling {
        due: Duration,
    },
}

/// Timing state machine revealing one line of dialog at a time.
///
/// The host drives time: call [`advance`](Self::advance) from the frame loop
/// with the elapsed frame time, or use [`play_line`](crate::play_line) to run
/// it on tokio. Every wait is fixed when it is scheduled, so a speed change
/// only affects the waits that follow it.
#[derive(Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    state: State,
    multiplier: f64,
    clock: Duration,
    revealed: String,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Result<Self, DialogError> {
        config.validate()?;
        Ok(Self {
            config,
            state: State::Idle,
            multiplier: 1.0,
            clock: Duration::ZERO,
            revealed: String::new(),
        })
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Revealing { .. } => Phase::Revealing,
            State::Settling { .. } => Phase::Settling,
        }
    }

    /// Whether a line is revealing or settling
    pub fn is_busy(&self) -> bool {
        !matches!(self.state, State::Idle)
    }

    /// Prefix of the current line that is visible so far
    pub fn revealed(&self) -> &str {
        &self.revealed
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Time since the current (or last) line began
    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Start typing `text`.
    ///
    /// Resets the speed multiplier to 1x. If a line is still in progress the
    /// configured [`ReentryPolicy`] decides between restarting and rejecting.
    pub fn begin_line<S>(&mut self, text: &str, sink: &mut S) -> Result<(), DialogError>
    where
        S: RevealSink + ?Sized,
    {
        if self.is_busy() {
            match self.config.reentry {
                ReentryPolicy::Reject => return Err(DialogError::LineInProgress),
                ReentryPolicy::Restart => {
                    let revealed = self.revealed.chars().count();
                    tracing::debug!(revealed, "Cancelling line in progress");
                    sink.on_event(RevealEvent::Cancelled { revealed });
                }
            }
        }

        let chars: Vec<char> = text.chars().collect();
        tracing::debug!(len = chars.len(), "Typing line");

        self.multiplier = 1.0;
        self.clock = Duration::ZERO;
        self.revealed.clear();
        sink.on_event(RevealEvent::LineStarted { len: chars.len() });

        self.state = State::Revealing {
            chars,
            next: 0,
            due: self.config.pre_roll(),
        };
        Ok(())
    }

    /// Apply the fast-forward multiplier.
    ///
    /// Only honoured while revealing; returns whether it took effect.
    pub fn speed_up(&mut self) -> bool {
        if !matches!(self.state, State::Revealing { .. }) {
            return false;
        }
        self.multiplier = self.config.fast_forward_multiplier;
        tracing::trace!(multiplier = self.multiplier, "Fast-forwarding line");
        true
    }

    /// Time until the next scheduled step, `None` when idle
    pub fn time_to_next_event(&self) -> Option<Duration> {
        self.due().map(|due| due.saturating_sub(self.clock))
    }

    /// Move the clock forward by `dt`, firing every step due within it
    pub fn advance<S>(&mut self, dt: Duration, sink: &mut S)
    where
        S: RevealSink + ?Sized,
    {
        if !self.is_busy() {
            return;
        }

        let target = self.clock.saturating_add(dt);
        while let Some(due) = self.due() {
            if due > target {
                break;
            }
            self.clock = due;
            self.step(sink);
        }

        if self.is_busy() {
            self.clock = target;
        }
    }

    fn due(&self) -> Option<Duration> {
        match self.state {
            State::Idle => None,
            State::Revealing { due, .. } | State::Settling { due } => Some(due),
        }
    }

    fn step<S>(&mut self, sink: &mut S)
    where
        S: RevealSink + ?Sized,
    {
        let at = self.clock;
        match &mut self.state {
            State::Idle => {}
            State::Revealing { chars, next, due } => {
                if let Some(&ch) = chars.get(*next) {
                    self.revealed.push(ch);
                    sink.on_event(RevealEvent::Char {
                        index: *next,
                        ch,
                        at,
                    });
                    *next += 1;
                    *due = at.saturating_add(self.config.char_interval(self.multiplier));
                } else {
                    sink.on_event(RevealEvent::Settling { at });
                    self.state = State::Settling {
                        due: at.saturating_add(self.config.settle_delay(self.multiplier)),
                    };
                }
            }
            State::Settling { .. } => {
                tracing::debug!(elapsed = ?at, "Line finished");
                sink.on_event(RevealEvent::Finished { at });
                self.state = State::Idle;
            }
        }
    }
}
