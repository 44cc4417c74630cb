//! Step events emitted by the engines for renderers and test harnesses.
//!
//! Order
//! - `AnchorSelected` once, then any interleaving of `VertexAccepted` /
//!   `VertexRejected`, then `HullComplete` once.
//! - Engines never depend on a sink being present; with `None` no event is built.

use crate::point::Point;
use crate::result::HullError;

#[derive(Clone, Debug, PartialEq)]
pub enum HullEvent {
    /// Graham anchor or Jarvis starting vertex.
    AnchorSelected(Point),
    /// Pushed on the hull stack (Graham) or chosen as next wrap vertex (Jarvis).
    VertexAccepted(Point),
    /// Popped from the hull stack.
    VertexRejected(Point),
    HullComplete(Vec<Point>),
}

/// Receiver of hull events.
pub trait EventSink {
    fn event(&mut self, ev: &HullEvent);

    /// Polled after every event; returning `true` aborts with `HullError::Cancelled`.
    fn cancelled(&self) -> bool {
        false
    }
}

impl<F: FnMut(&HullEvent)> EventSink for F {
    fn event(&mut self, ev: &HullEvent) {
        self(ev)
    }
}

/// Sink that keeps the full event log. Optionally cancels after `budget` events.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<HullEvent>,
    budget: Option<usize>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_budget(budget: usize) -> Self {
        Self {
            events: Vec::new(),
            budget: Some(budget),
        }
    }

    pub fn accepted(&self) -> usize {
        self.count(|e| matches!(e, HullEvent::VertexAccepted(_)))
    }

    pub fn rejected(&self) -> usize {
        self.count(|e| matches!(e, HullEvent::VertexRejected(_)))
    }

    fn count(&self, f: impl Fn(&HullEvent) -> bool) -> usize {
        self.events.iter().filter(|e| f(e)).count()
    }
}

impl EventSink for Recorder {
    fn event(&mut self, ev: &HullEvent) {
        self.events.push(ev.clone());
    }

    fn cancelled(&self) -> bool {
        self.budget.is_some_and(|b| self.events.len() >= b)
    }
}

/// Engine-side wrapper around the optional sink.
pub(crate) struct Emitter<'a> {
    sink: Option<&'a mut dyn EventSink>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(sink: Option<&'a mut dyn EventSink>) -> Self {
        Self { sink }
    }

    /// Build and deliver an event; `make` only runs when a sink is attached.
    pub(crate) fn emit(&mut self, make: impl FnOnce() -> HullEvent) -> Result<(), HullError> {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.event(&make());
            if sink.cancelled() {
                return Err(HullError::Cancelled);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emitter_without_sink_never_builds_events() {
        let mut em = Emitter::new(None);
        em.emit(|| panic!("built without a sink")).unwrap();
    }

    #[test]
    fn recorder_budget_cancels() {
        let mut rec = Recorder::with_budget(2);
        {
            let mut em = Emitter::new(Some(&mut rec));
            em.emit(|| HullEvent::AnchorSelected(Point::new(0.0, 0.0)))
                .unwrap();
            let err = em
                .emit(|| HullEvent::VertexAccepted(Point::new(1.0, 0.0)))
                .unwrap_err();
            assert!(matches!(err, HullError::Cancelled));
        }
        assert_eq!(rec.events.len(), 2);
        assert_eq!(rec.accepted(), 1);
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = 0usize;
        let mut count = |_: &HullEvent| seen += 1;
        {
            let mut em = Emitter::new(Some(&mut count));
            em.emit(|| HullEvent::HullComplete(Vec::new())).unwrap();
        }
        assert_eq!(seen, 1);
    }
}
