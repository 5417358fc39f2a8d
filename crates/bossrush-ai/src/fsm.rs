//! Generic encounter state machine.
//!
//! States are registered once as a callback set over a shared context and
//! identified by a dense key. Exactly one state is active at a time, and at
//! most one transition occurs per tick: the target state's update does not
//! run in the tick that entered it, which bounds transition chains to one
//! per frame.
//!
//! Boss variants supply their behavior as a registration table rather than
//! through inheritance: same machine, different callback sets.

use bossrush_core::enums::EncounterPhase;

/// Dense state identifier. `index` must be unique per state and below
/// `COUNT`.
pub trait StateKey: Copy + Eq {
    /// Number of states in the key space.
    const COUNT: usize;

    /// Slot of this state in the registration table.
    fn index(self) -> usize;
}

impl StateKey for EncounterPhase {
    const COUNT: usize = 6;

    fn index(self) -> usize {
        match self {
            EncounterPhase::Intro => 0,
            EncounterPhase::Phase1 => 1,
            EncounterPhase::Phase2 => 2,
            EncounterPhase::Phase3 => 3,
            EncounterPhase::Transition => 4,
            EncounterPhase::Defeated => 5,
        }
    }
}

/// Callback set for one state. `on_update` returns the next state key
/// (possibly the current one); `on_enter`/`on_exit` are optional no-ops.
pub struct StateHandlers<C, S> {
    pub on_update: fn(&mut C) -> S,
    pub on_enter: Option<fn(&mut C)>,
    pub on_exit: Option<fn(&mut C)>,
}

/// Executor over a fixed set of registered states.
pub struct StateMachine<C, S: StateKey> {
    current: S,
    handlers: Vec<Option<StateHandlers<C, S>>>,
}

impl<C, S: StateKey> StateMachine<C, S> {
    /// A machine positioned at `initial` with an empty registration table.
    /// `start` fires the initial state's entry hook once registration is
    /// complete.
    pub fn new(initial: S) -> Self {
        let mut handlers = Vec::with_capacity(S::COUNT);
        handlers.resize_with(S::COUNT, || None);
        Self {
            current: initial,
            handlers,
        }
    }

    /// Register the callback set for `state`, replacing any previous one.
    pub fn register(&mut self, state: S, handlers: StateHandlers<C, S>) {
        self.handlers[state.index()] = Some(handlers);
    }

    /// The active state.
    pub fn current(&self) -> S {
        self.current
    }

    /// Fire the entry hook of the initial state. Called once after
    /// registration; `set_state` covers every later entry.
    pub fn start(&self, ctx: &mut C) {
        if let Some(handlers) = &self.handlers[self.current.index()] {
            if let Some(enter) = handlers.on_enter {
                enter(ctx);
            }
        }
    }

    /// Transition to `next`: exit hook of the current state, then entry
    /// hook of the target, then the switch. Re-entering the active state
    /// is a no-op — no hooks fire, which lets a state's update return its
    /// own key every tick without re-triggering setup.
    pub fn set_state(&mut self, ctx: &mut C, next: S) {
        if next == self.current {
            return;
        }
        if let Some(handlers) = &self.handlers[self.current.index()] {
            if let Some(exit) = handlers.on_exit {
                exit(ctx);
            }
        }
        if let Some(handlers) = &self.handlers[next.index()] {
            if let Some(enter) = handlers.on_enter {
                enter(ctx);
            }
        }
        self.current = next;
    }

    /// Run the active state's update and apply at most one transition.
    /// A state with no registered handlers holds indefinitely.
    pub fn tick(&mut self, ctx: &mut C) {
        let next = match &self.handlers[self.current.index()] {
            Some(handlers) => (handlers.on_update)(ctx),
            None => return,
        };
        if next != self.current {
            self.set_state(ctx, next);
        }
    }
}
