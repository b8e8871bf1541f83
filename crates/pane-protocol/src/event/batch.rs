//! Ordered event batches returned by a single step.

use pane_common::ProtocolViolation;

use super::{Event, WindowId};

/// Position of an event within one iteration of the engine's pump.
///
/// Ranks never decrease within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    NewEvents,
    /// Window, device, user, suspend and resume events.
    Input,
    MainEventsCleared,
    RedrawRequested,
    RedrawEventsCleared,
    LoopDestroyed,
}

impl Phase {
    /// Phases that occur at most once per iteration.
    fn is_singleton(self) -> bool {
        !matches!(self, Phase::Input | Phase::RedrawRequested)
    }
}

/// The events drained by one step, in emission order, checked against the
/// phase ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBatch {
    events: Vec<Event>,
}

impl EventBatch {
    /// Validate phase order. A batch where, say, `redrawRequested` precedes
    /// `mainEventsCleared` is a protocol violation, not something to reorder.
    pub fn new(events: Vec<Event>) -> Result<Self, ProtocolViolation> {
        let mut previous: Option<Phase> = None;
        for (index, event) in events.iter().enumerate() {
            let phase = event.phase();
            if let Some(prev) = previous {
                if phase < prev || (phase == prev && phase.is_singleton()) {
                    tracing::warn!(index, kind = event.kind(), after = ?prev, "event out of phase order");
                    return Err(ProtocolViolation::OutOfOrderEvent(format!(
                        "{} at index {index} after {prev:?}",
                        event.kind()
                    )));
                }
            }
            previous = Some(phase);
        }
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events addressed to `window`, order preserved.
    pub fn for_window(&self, window: WindowId) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |event| event.window_id() == Some(window))
    }

    /// Whether the loop reported its own destruction in this batch.
    pub fn is_terminal(&self) -> bool {
        self.events
            .last()
            .is_some_and(|event| matches!(event, Event::LoopDestroyed))
    }
}

impl<'a> IntoIterator for &'a EventBatch {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl IntoIterator for EventBatch {
    type Item = Event;
    type IntoIter = std::vec::IntoIter<Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
