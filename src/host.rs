//! Host environment abstraction
//!
//! Everything the overlay needs from a browser runtime (the page URL, a
//! document root to attach to, resize events, one-shot timers and the
//! developer console) is reached through the [`HostEnvironment`] trait, so
//! the widget runs unmodified against a real DOM binding or against the
//! in-memory [`HeadlessHost`] shipped here.
//!
//! The model is single-threaded and event-driven: callbacks are plain
//! (non-`Send`) closures dispatched from the host's event loop, and every
//! callback receives the host back as `&dyn HostEnvironment` so it can
//! re-read the viewport or re-arm timers without reference cycles.

use crate::color::{ColorParseError, Rgba};
use crate::dom::ElementHandle;
use crate::geometry::Size;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::time::Duration;

/// Callback invoked on every resize event.
///
/// Resize events carry no payload; handlers read the viewport at dispatch
/// time, the way browser handlers do.
pub type ResizeListener = Box<dyn FnMut(&dyn HostEnvironment)>;

/// One-shot callback armed through [`HostEnvironment::schedule_timeout`].
pub type DeferredCallback = Box<dyn FnOnce(&dyn HostEnvironment)>;

/// Identifies a pending timeout so it can be cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// One diagnostic line for the developer console.
///
/// The color hint is the overlay's accent color, forwarded verbatim; hosts
/// that colorize can decode it with [`ConsoleLine::color`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleLine {
  pub message: String,
  pub color_hint: String,
}

impl ConsoleLine {
  pub fn new(message: impl Into<String>, color_hint: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      color_hint: color_hint.into(),
    }
  }

  /// Decodes the color hint, when it is a valid hex color.
  pub fn color(&self) -> Result<Rgba, ColorParseError> {
    Rgba::parse(&self.color_hint)
  }
}

/// Capabilities the overlay needs from its embedding page.
///
/// Methods take `&self`: hosts are ambient objects shared with their own
/// callbacks, so implementations use interior mutability.
pub trait HostEnvironment {
  /// The page's current URL, query string included.
  fn current_url(&self) -> String;

  /// Current viewport size.
  fn viewport(&self) -> Size;

  /// Appends a node to the document root.
  fn append_to_root(&self, node: ElementHandle);

  /// Registers a listener for resize events. Listeners stay registered for
  /// the life of the host.
  fn add_resize_listener(&self, listener: ResizeListener);

  /// Arms a one-shot timer firing `delay` from now.
  fn schedule_timeout(&self, delay: Duration, callback: DeferredCallback) -> TimerId;

  /// Cancels a pending timeout. Unknown or already-fired ids are ignored.
  fn clear_timeout(&self, id: TimerId);

  /// Emits a diagnostic line to the developer console.
  fn console_log(&self, line: ConsoleLine);
}

struct ScheduledTimeout {
  id: TimerId,
  due: Duration,
  callback: DeferredCallback,
}

/// In-memory host with a virtual clock.
///
/// Time only moves when [`HeadlessHost::advance`] is called; due timers fire
/// in due-time order (insertion order on ties). Resize events are raised
/// explicitly with [`HeadlessHost::resize_to`]. The document root, console
/// and timer bookkeeping are all inspectable.
pub struct HeadlessHost {
  url: String,
  viewport: Cell<Size>,
  root: RefCell<Vec<ElementHandle>>,
  listeners: RefCell<Vec<ResizeListener>>,
  timeouts: RefCell<Vec<ScheduledTimeout>>,
  console: RefCell<Vec<ConsoleLine>>,
  now: Cell<Duration>,
  next_timer: Cell<u64>,
  fired_timeouts: Cell<u64>,
}

impl HeadlessHost {
  pub fn new(url: impl Into<String>, viewport: Size) -> Self {
    Self {
      url: url.into(),
      viewport: Cell::new(viewport),
      root: RefCell::new(Vec::new()),
      listeners: RefCell::new(Vec::new()),
      timeouts: RefCell::new(Vec::new()),
      console: RefCell::new(Vec::new()),
      now: Cell::new(Duration::ZERO),
      next_timer: Cell::new(0),
      fired_timeouts: Cell::new(0),
    }
  }

  /// Sets the viewport and dispatches one resize event.
  pub fn resize_to(&self, viewport: Size) {
    self.viewport.set(viewport);
    self.dispatch_resize();
  }

  /// Advances the virtual clock, firing every timeout that comes due.
  pub fn advance(&self, delta: Duration) {
    let now = self.now.get() + delta;
    self.now.set(now);

    // Callbacks may re-arm timers, so pull one due timeout at a time and
    // never hold the queue borrow across a callback.
    loop {
      let due_idx = self
        .timeouts
        .borrow()
        .iter()
        .enumerate()
        .min_by_key(|(_, t)| t.due)
        .filter(|(_, t)| t.due <= now)
        .map(|(idx, _)| idx);
      let Some(idx) = due_idx else {
        break;
      };
      let timeout = self.timeouts.borrow_mut().remove(idx);
      self.fired_timeouts.set(self.fired_timeouts.get() + 1);
      (timeout.callback)(self);
    }
  }

  /// Nodes currently attached to the document root.
  pub fn root_children(&self) -> Vec<ElementHandle> {
    self.root.borrow().clone()
  }

  /// Everything logged so far, oldest first.
  pub fn console_lines(&self) -> Vec<ConsoleLine> {
    self.console.borrow().clone()
  }

  pub fn resize_listener_count(&self) -> usize {
    self.listeners.borrow().len()
  }

  pub fn pending_timeout_count(&self) -> usize {
    self.timeouts.borrow().len()
  }

  /// Timeouts that have fired (cancelled ones never count).
  pub fn fired_timeout_count(&self) -> u64 {
    self.fired_timeouts.get()
  }

  fn dispatch_resize(&self) {
    // Listeners may call back into the host (to arm timers or register
    // more listeners), so the registry is detached while dispatching.
    let mut listeners = self.listeners.take();
    for listener in listeners.iter_mut() {
      listener(self);
    }
    let added = self.listeners.take();
    listeners.extend(added);
    *self.listeners.borrow_mut() = listeners;
  }
}

impl HostEnvironment for HeadlessHost {
  fn current_url(&self) -> String {
    self.url.clone()
  }

  fn viewport(&self) -> Size {
    self.viewport.get()
  }

  fn append_to_root(&self, node: ElementHandle) {
    self.root.borrow_mut().push(node);
  }

  fn add_resize_listener(&self, listener: ResizeListener) {
    self.listeners.borrow_mut().push(listener);
  }

  fn schedule_timeout(&self, delay: Duration, callback: DeferredCallback) -> TimerId {
    let id = TimerId(self.next_timer.get());
    self.next_timer.set(id.0 + 1);
    self.timeouts.borrow_mut().push(ScheduledTimeout {
      id,
      due: self.now.get() + delay,
      callback,
    });
    id
  }

  fn clear_timeout(&self, id: TimerId) {
    self.timeouts.borrow_mut().retain(|t| t.id != id);
  }

  fn console_log(&self, line: ConsoleLine) {
    self.console.borrow_mut().push(line);
  }
}
