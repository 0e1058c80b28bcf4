//! Widget Host
//!
//! Stands in for a rendering engine: owns one widget, queues its input
//! messages and re-renders after every applied message.
//!
//! Messages are applied strictly one at a time, in arrival order. A message
//! enqueued while draining (or after a rejected one) simply waits its turn.

use std::collections::VecDeque;

use crate::view::Node;
use crate::widgets::Widget;

/// Outcome of draining the message queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostReport {
    /// Messages the widget accepted
    pub applied: usize,
    /// Messages the widget rejected
    pub rejected: usize,
}

/// Drives a single widget
pub struct Host<W: Widget> {
    widget: W,
    queue: VecDeque<W::Message>,
    current: Node<W::Message>,
    renders: usize,
}

impl<W: Widget> Host<W> {
    /// Take ownership of a widget and render it once
    pub fn new(widget: W) -> Self {
        let current = widget.view();
        Self {
            widget,
            queue: VecDeque::new(),
            current,
            renders: 1,
        }
    }

    /// Queue a message without applying it
    pub fn enqueue(&mut self, msg: W::Message) {
        self.queue.push_back(msg);
    }

    /// Number of queued messages
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Apply every queued message in order
    pub fn run_pending(&mut self) -> HostReport {
        let mut report = HostReport::default();

        while let Some(msg) = self.queue.pop_front() {
            match self.widget.update(msg) {
                Ok(()) => {
                    report.applied += 1;
                    self.rerender();
                }
                Err(e) => {
                    report.rejected += 1;
                    tracing::warn!(widget = self.widget.name(), "Message rejected: {}", e);
                }
            }
        }

        report
    }

    /// Queue a message and drain the queue
    pub fn dispatch(&mut self, msg: W::Message) -> HostReport {
        self.enqueue(msg);
        self.run_pending()
    }

    /// Mutate the widget outside the message flow (e.g. new input data),
    /// then re-render
    pub fn rebuild<F: FnOnce(&mut W)>(&mut self, f: F) {
        f(&mut self.widget);
        self.rerender();
    }

    fn rerender(&mut self) {
        self.current = self.widget.view();
        self.renders += 1;
        tracing::trace!(widget = self.widget.name(), renders = self.renders, "Re-rendered");
    }

    /// The most recent render
    pub fn view(&self) -> &Node<W::Message> {
        &self.current
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Total renders so far, including the initial one
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn into_inner(self) -> W {
        self.widget
    }
}
