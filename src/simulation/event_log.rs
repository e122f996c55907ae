//! Bounded history of notable simulation events, newest first.
//!
//! Besides the last few entries, the log keeps running totals of how generations
//! ended, which survive eviction.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// What kind of thing happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    /// Every creature of the generation died.
    Extinction,
    /// The generation timer ran out.
    Timeout,
    /// A new generation was bred.
    Generation,
    /// All creatures were told to jump.
    Jump,
    /// The simulation was paused or resumed.
    Pause,
}

/// One entry of the [`EventLog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Generation the event belongs to.
    pub generation: u32,
    /// Simulation time in seconds.
    pub time: f32,
    /// Category, used for colouring.
    pub kind: EventKind,
    /// Human readable text.
    pub message: String,
}

/// Recent simulation events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLog {
    entries: VecDeque<SimulationEvent>,
    capacity: usize,
    extinctions: u32,
    timeouts: u32,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(20)
    }
}

impl EventLog {
    /// Keeps at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            extinctions: 0,
            timeouts: 0,
        }
    }

    /// Appends an event, evicting the oldest entries beyond capacity.
    pub fn record(
        &mut self,
        generation: u32,
        time: f32,
        kind: EventKind,
        message: impl Into<String>,
    ) {
        match kind {
            EventKind::Extinction => self.extinctions += 1,
            EventKind::Timeout => self.timeouts += 1,
            _ => {}
        }

        self.entries.push_front(SimulationEvent {
            generation,
            time,
            kind,
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Retained events, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SimulationEvent> {
        self.entries.iter()
    }

    /// Most recent event.
    pub fn latest(&self) -> Option<&SimulationEvent> {
        self.entries.front()
    }

    /// Number of retained events.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generations that ended because every creature died, including evicted ones.
    pub fn extinctions(&self) -> u32 {
        self.extinctions
    }

    /// Generations that ended on the timer, including evicted ones.
    pub fn timeouts(&self) -> u32 {
        self.timeouts
    }

    /// Drops the retained entries and resets the totals.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.extinctions = 0;
        self.timeouts = 0;
    }
}
