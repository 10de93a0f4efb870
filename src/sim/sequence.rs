//! Suspended-step scheduling for timed sequences
//!
//! Replaces engine coroutines: a step is armed with an absolute due tick and
//! the generation it belongs to. When the state machine resets, it bumps its
//! generation; steps armed under an older generation are dropped when they
//! come due instead of fired, so an aborted sequence can never resume late
//! and corrupt fresh state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled<S> {
    due_tick: u64,
    generation: u64,
    step: S,
}

/// Pending steps for one state machine
#[derive(Debug)]
pub struct Sequencer<S> {
    pending: Vec<Scheduled<S>>,
}

impl<S> Default for Sequencer<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Sequencer<S> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Arm a step to fire at `due_tick` under `generation`
    pub fn schedule(&mut self, due_tick: u64, generation: u64, step: S) {
        self.pending.push(Scheduled {
            due_tick,
            generation,
            step,
        });
    }

    /// Drop every pending step
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the steps due at `now` that still belong to `generation`.
    /// Stale steps are discarded, not fired.
    pub fn take_due(&mut self, now: u64, generation: u64) -> Vec<S> {
        let mut due = Vec::new();
        let mut keep = Vec::with_capacity(self.pending.len());
        for scheduled in self.pending.drain(..) {
            if scheduled.due_tick > now {
                keep.push(scheduled);
            } else if scheduled.generation == generation {
                due.push(scheduled.step);
            } else {
                log::debug!(
                    "dropping stale step armed under generation {}",
                    scheduled.generation
                );
            }
        }
        self.pending = keep;
        due
    }
}
