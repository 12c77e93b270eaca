//! Work/rest countdown state machine.
//!
//! The machine is driven externally: the UI layer calls [`Countdown::tick`]
//! once per elapsed second while the countdown is running. It has no timer or
//! toolkit dependency of its own, so it can be tested without a display.

/// The two alternating countdown modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Working,
    Resting,
}

impl Phase {
    pub fn flipped(self) -> Phase {
        match self {
            Phase::Working => Phase::Resting,
            Phase::Resting => Phase::Working,
        }
    }
}

/// Whether the countdown is advancing. Orthogonal to [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Emitted by [`Countdown::tick`] when a phase runs out and the machine
/// switches to the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub phase: Phase,
}

impl PhaseTransition {
    /// Notification title and body announcing the phase that just began.
    pub fn notification(&self) -> (&'static str, &'static str) {
        match self.phase {
            Phase::Working => ("Rest over", "Time to work!"),
            Phase::Resting => ("Work over", "Time to rest!"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Countdown {
    run_state: RunState,
    // None until the first start. Kept across stop() so the UI can tell
    // "never started" apart from "stopped"; the value itself is stale then.
    phase: Option<Phase>,
    remaining: u64,
    // Durations snapshotted by start() from Stopped. Later reconfiguration
    // only applies to the next start, never to the in-progress cycle.
    work_minutes: u32,
    rest_minutes: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            run_state: RunState::Stopped,
            phase: None,
            remaining: 0,
            work_minutes: crate::settings::DEFAULT_WORK_MINUTES,
            rest_minutes: crate::settings::DEFAULT_REST_MINUTES,
        }
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u64 {
        match self.run_state {
            RunState::Stopped => 0,
            _ => self.remaining,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Start a fresh work phase, or resume the paused one.
    ///
    /// From `Stopped` the given durations are snapshotted and a full work
    /// phase begins. From `Paused` the durations are ignored and ticking
    /// resumes where it left off. A no-op while already running.
    pub fn start(&mut self, work_minutes: u32, rest_minutes: u32) {
        match self.run_state {
            RunState::Stopped => {
                self.work_minutes = work_minutes;
                self.rest_minutes = rest_minutes;
                self.phase = Some(Phase::Working);
                self.remaining = u64::from(work_minutes) * 60;
                self.run_state = RunState::Running;
            }
            RunState::Paused => {
                self.run_state = RunState::Running;
            }
            RunState::Running => {}
        }
    }

    /// Suspend ticking, keeping the remaining time. No-op unless running.
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
        }
    }

    /// Halt the countdown from any state and reset the displayed time.
    pub fn stop(&mut self) {
        self.run_state = RunState::Stopped;
        self.remaining = 0;
    }

    /// Advance the countdown by one second.
    ///
    /// When the running phase reaches zero the machine flips to the other
    /// phase, reloads its configured duration and reports the transition.
    /// At most one transition fires per call. Returns `None` unless running.
    pub fn tick(&mut self) -> Option<PhaseTransition> {
        if self.run_state != RunState::Running {
            return None;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            return None;
        }
        let next = match self.phase {
            Some(p) => p.flipped(),
            None => Phase::Working,
        };
        self.phase = Some(next);
        self.remaining = self.phase_duration(next);
        Some(PhaseTransition { phase: next })
    }

    fn phase_duration(&self, phase: Phase) -> u64 {
        let minutes = match phase {
            Phase::Working => self.work_minutes,
            Phase::Resting => self.rest_minutes,
        };
        u64::from(minutes) * 60
    }

    /// Remaining time as `MM:SS`, zero-padded. `00:00` while stopped.
    pub fn display_time(&self) -> String {
        let secs = self.remaining_seconds();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    pub fn status_text(&self) -> &'static str {
        match (self.run_state, self.phase) {
            (RunState::Stopped, None) => "✅ Ready",
            (RunState::Stopped, Some(_)) => "⏹️ Stopped",
            (RunState::Paused, _) => "⏸️ Paused",
            (RunState::Running, Some(Phase::Resting)) => "☕ Break time",
            (RunState::Running, _) => "⌛ Working...",
        }
    }
}
