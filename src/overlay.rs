//! The debug overlay widget
//!
//! One [`DebugOverlay`] owns one overlay element (built eagerly, attached
//! lazily), the flags parsed from the page URL, and the debounce slot for
//! resize updates. Lifecycle is one-way: constructed-inactive, then active
//! once [`DebugOverlay::activate`] runs; there is no deactivate.

use crate::color::DEFAULT_ACCENT_COLOR;
use crate::config::DebugFlags;
use crate::debounce::Debouncer;
use crate::dom::{Element, ElementHandle};
use crate::geometry::Size;
use crate::host::{ConsoleLine, HostEnvironment};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// `id` of the overlay container element.
pub const OVERLAY_ELEMENT_ID: &str = "debug-tools";

/// Class of the live dimension readout inside the overlay.
pub const DIMENSIONS_CLASS: &str = "screen-dimensions";

/// Console line emitted when the overlay turns on.
pub const ACTIVATION_MESSAGE: &str = "Enabling Debug Tools...";

/// Resize bursts are coalesced into one readout update per this window.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(50);

/// Construction parameters for [`DebugOverlay::new`].
///
/// `accent_color` is only checked for truthiness: any non-empty string is
/// taken as-is, an empty or absent one falls back to
/// [`DEFAULT_ACCENT_COLOR`].
#[derive(Debug, Clone, Default)]
pub struct OverlayOptions {
  /// Activate immediately, regardless of query flags.
  pub start_active: bool,
  /// Accent hex color for the overlay background and console hint.
  pub accent_color: Option<String>,
}

impl OverlayOptions {
  pub fn start_active() -> Self {
    Self {
      start_active: true,
      ..Self::default()
    }
  }
}

/// State shared with the host-held resize listener and timer callbacks.
struct SharedState {
  element: ElementHandle,
  debouncer: Debouncer,
}

impl SharedState {
  fn update_dimensions(&self, viewport: Size) {
    if let Some(readout) = self.element.borrow().find_by_class(DIMENSIONS_CLASS) {
      readout.borrow_mut().set_text(viewport.to_string());
    }
  }
}

/// The debug overlay widget.
pub struct DebugOverlay {
  host: Rc<dyn HostEnvironment>,
  flags: DebugFlags,
  accent_color: String,
  shared: Rc<RefCell<SharedState>>,
  activated: bool,
}

impl DebugOverlay {
  /// Builds the (detached) overlay element, parses the page's query flags,
  /// and activates right away when `start_active` or the parsed `debug`
  /// flag is truthy.
  pub fn new(host: Rc<dyn HostEnvironment>, options: OverlayOptions) -> Self {
    let accent_color = options
      .accent_color
      .filter(|color| !color.is_empty())
      .unwrap_or_else(|| DEFAULT_ACCENT_COLOR.to_string());

    let flags = DebugFlags::from_url(&host.current_url());
    let element = build_overlay_element(&accent_color, host.viewport());
    let shared = Rc::new(RefCell::new(SharedState {
      element,
      debouncer: Debouncer::new(RESIZE_DEBOUNCE),
    }));

    let mut overlay = Self {
      host,
      flags,
      accent_color,
      shared,
      activated: false,
    };
    if options.start_active || overlay.flags.truthy("debug") {
      overlay.activate();
    }
    overlay
  }

  /// Turns the overlay on: logs one console line, attaches the element to
  /// the document root and installs the debounced resize listener.
  ///
  /// Activation is one-shot; further calls are no-ops, so the element is
  /// never attached twice and only one listener ever exists.
  pub fn activate(&mut self) {
    if self.activated {
      return;
    }
    self.activated = true;
    log::debug!("activating debug overlay");

    self
      .host
      .console_log(ConsoleLine::new(ACTIVATION_MESSAGE, self.accent_color.as_str()));
    self
      .host
      .append_to_root(Rc::clone(&self.shared.borrow().element));
    self.install_resize_listener();
  }

  fn install_resize_listener(&self) {
    let shared = Rc::clone(&self.shared);
    self.host.add_resize_listener(Box::new(move |host| {
      let state = Rc::clone(&shared);
      shared.borrow_mut().debouncer.schedule(
        host,
        Box::new(move |host| {
          let mut state = state.borrow_mut();
          state.debouncer.mark_fired();
          state.update_dimensions(host.viewport());
        }),
      );
    }));
  }

  pub fn is_active(&self) -> bool {
    self.activated
  }

  /// Flags parsed from the page URL at construction.
  pub fn flags(&self) -> &DebugFlags {
    &self.flags
  }

  /// The accent color actually in effect.
  pub fn accent_color(&self) -> &str {
    &self.accent_color
  }

  /// Handle to the overlay element (attached or not).
  pub fn element(&self) -> ElementHandle {
    Rc::clone(&self.shared.borrow().element)
  }
}

/// Builds the overlay subtree: title label, dimension readout seeded with
/// the construction-time viewport, and the (inert) toggle button.
fn build_overlay_element(accent_color: &str, viewport: Size) -> ElementHandle {
  let root = Element::handle("div");
  root
    .borrow_mut()
    .set_id(OVERLAY_ELEMENT_ID)
    .set_attribute("style", format!("background:{accent_color}"));

  let title = Element::handle("p");
  title.borrow_mut().add_class("title").set_text("Debug Tools");

  let dimensions = Element::handle("p");
  dimensions
    .borrow_mut()
    .add_class(DIMENSIONS_CLASS)
    .set_text(viewport.to_string());

  let toggle = Element::handle("button");
  toggle.borrow_mut().add_class("show-debug-tools");

  root
    .borrow_mut()
    .append_child(title)
    .append_child(dimensions)
    .append_child(toggle);
  root
}
