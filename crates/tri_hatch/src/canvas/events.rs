//! Event types and sinks for observing canvas runs.
//!
//! This module defines [`CanvasEvent`] and a set of sinks to emit, collect, or
//! forward events while executing [`crate::canvas::runner::generate_canvas`] or
//! [`crate::canvas::runner::CanvasGenerator::run_with_events`].
use crate::canvas::CanvasConfig;

/// Describes events emitted while generating a canvas.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum CanvasEvent {
    /// Emitted when a run starts.
    RunStarted {
        /// The run configuration used.
        config: CanvasConfig,
    },

    /// Emitted after the sampler is exhausted.
    PointsSampled {
        /// Number of accepted points.
        count: usize,
        /// Candidates generated, including rejected ones.
        candidates_tried: usize,
    },

    /// Emitted after the triangulation was turned into triangles.
    Triangulated {
        /// Number of triangles.
        triangles: usize,
    },

    /// Emitted when a triangle received its stripes.
    TriangleHatched {
        /// Index of the triangle in triangulation order.
        index: usize,
        /// Number of lines drawn.
        lines: usize,
    },

    /// Emitted when a triangle had no valid base edge and was skipped.
    TriangleSkipped {
        /// Index of the triangle in triangulation order.
        index: usize,
        /// Base-edge attempts spent before giving up.
        attempts: usize,
    },

    /// Emitted when the run finishes.
    RunFinished {
        points: usize,
        triangles: usize,
        lines: usize,
        skipped: usize,
    },
}

/// Discriminant of [`CanvasEvent`], used to filter before building an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasEventKind {
    RunStarted,
    PointsSampled,
    Triangulated,
    TriangleHatched,
    TriangleSkipped,
    RunFinished,
}

impl CanvasEvent {
    pub fn kind(&self) -> CanvasEventKind {
        match self {
            CanvasEvent::RunStarted { .. } => CanvasEventKind::RunStarted,
            CanvasEvent::PointsSampled { .. } => CanvasEventKind::PointsSampled,
            CanvasEvent::Triangulated { .. } => CanvasEventKind::Triangulated,
            CanvasEvent::TriangleHatched { .. } => CanvasEventKind::TriangleHatched,
            CanvasEvent::TriangleSkipped { .. } => CanvasEventKind::TriangleSkipped,
            CanvasEvent::RunFinished { .. } => CanvasEventKind::RunFinished,
        }
    }
}

/// A generic event sink that accepts [`CanvasEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: CanvasEvent);

    /// Whether events of `kind` should be built and sent at all.
    #[inline]
    fn wants(&self, _kind: CanvasEventKind) -> bool {
        true
    }

    fn send_many<I>(&mut self, events: I)
    where
        Self: Sized,
        I: IntoIterator<Item = CanvasEvent>,
    {
        for e in events {
            self.send(e);
        }
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: CanvasEvent) {}

    #[inline]
    fn wants(&self, _kind: CanvasEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(CanvasEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(CanvasEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(CanvasEvent),
{
    #[inline]
    fn send(&mut self, event: CanvasEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<CanvasEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            events: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<CanvasEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[CanvasEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: CanvasEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: CanvasEvent) {
        if self.sinks.is_empty() {
            return;
        }
        let last_idx = self.sinks.len() - 1;
        for i in 0..last_idx {
            if self.sinks[i].wants(event.kind()) {
                self.sinks[i].send(event.clone());
            }
        }
        if self.sinks[last_idx].wants(event.kind()) {
            self.sinks[last_idx].send(event);
        }
    }

    fn wants(&self, kind: CanvasEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
