use devoverlay::{
  ConsoleLine, DebugOverlay, HeadlessHost, OverlayOptions, Size, DEFAULT_ACCENT_COLOR,
  OVERLAY_ELEMENT_ID,
};
use std::rc::Rc;

const VIEWPORT: Size = Size::new(1280, 720);

fn host(url: &str) -> Rc<HeadlessHost> {
  Rc::new(HeadlessHost::new(url, VIEWPORT))
}

#[test]
fn stays_detached_without_start_flag_or_query_flag() {
  let host = host("https://example.com/index.html");
  let overlay = DebugOverlay::new(host.clone(), OverlayOptions::default());

  assert!(!overlay.is_active());
  assert!(host.root_children().is_empty());
  assert_eq!(host.resize_listener_count(), 0);
  assert!(host.console_lines().is_empty());

  // The element still exists, it just is not attached anywhere.
  assert_eq!(overlay.element().borrow().id(), Some(OVERLAY_ELEMENT_ID));
}

#[test]
fn start_flag_attaches_exactly_one_element_and_listener() {
  let host = host("https://example.com/index.html");
  let overlay = DebugOverlay::new(host.clone(), OverlayOptions::start_active());

  assert!(overlay.is_active());
  assert_eq!(host.root_children().len(), 1);
  assert_eq!(host.resize_listener_count(), 1);
  assert_eq!(
    host.console_lines(),
    vec![ConsoleLine::new(
      "Enabling Debug Tools...",
      DEFAULT_ACCENT_COLOR
    )]
  );
}

#[test]
fn query_flag_alone_activates() {
  let host = host("https://example.com/index.html?debug=true");
  let overlay = DebugOverlay::new(host.clone(), OverlayOptions::default());

  assert!(overlay.is_active());
  assert_eq!(host.root_children().len(), 1);
}

#[test]
fn falsy_query_values_do_not_activate() {
  for url in [
    "https://example.com/?debug=false",
    "https://example.com/?debug=",
    "https://example.com/?debug-start=true",
    "https://example.com/?debug-grid=true",
  ] {
    let host = host(url);
    let overlay = DebugOverlay::new(host.clone(), OverlayOptions::default());
    assert!(!overlay.is_active(), "url {url:?}");
    assert!(host.root_children().is_empty(), "url {url:?}");
  }
}

#[test]
fn truthy_string_values_activate() {
  let host1 = host("https://example.com/?debug=1");
  let overlay = DebugOverlay::new(host1.clone(), OverlayOptions::default());
  assert!(overlay.is_active());

  // Exact-case coercion means "FALSE" is a non-empty string, hence truthy.
  let host2 = host("https://example.com/?DEBUG=FALSE");
  let overlay = DebugOverlay::new(host2.clone(), OverlayOptions::default());
  assert!(overlay.is_active());
}

#[test]
fn activation_is_idempotent() {
  let host = host("https://example.com/?debug=true");
  let mut overlay = DebugOverlay::new(host.clone(), OverlayOptions::start_active());

  // Constructed active through both paths, then poked again by hand.
  overlay.activate();
  overlay.activate();

  assert_eq!(host.root_children().len(), 1);
  assert_eq!(host.resize_listener_count(), 1);
  assert_eq!(host.console_lines().len(), 1);
}

#[test]
fn manual_activation_after_inactive_construction() {
  let host = host("https://example.com/");
  let mut overlay = DebugOverlay::new(host.clone(), OverlayOptions::default());
  assert!(!overlay.is_active());

  overlay.activate();

  assert!(overlay.is_active());
  assert_eq!(host.root_children().len(), 1);
  assert_eq!(host.resize_listener_count(), 1);
}

#[test]
fn custom_accent_color_flows_to_console_and_element() {
  let host = host("https://example.com/");
  let options = OverlayOptions {
    start_active: true,
    accent_color: Some("#C0392B".to_string()),
  };
  let overlay = DebugOverlay::new(host.clone(), options);

  assert_eq!(overlay.accent_color(), "#C0392B");
  assert_eq!(host.console_lines()[0].color_hint, "#C0392B");
  assert_eq!(
    overlay.element().borrow().attribute("style"),
    Some("background:#C0392B")
  );
}

#[test]
fn empty_accent_color_falls_back_to_default() {
  let host = host("https://example.com/");
  let options = OverlayOptions {
    start_active: false,
    accent_color: Some(String::new()),
  };
  let overlay = DebugOverlay::new(host.clone(), options);
  assert_eq!(overlay.accent_color(), DEFAULT_ACCENT_COLOR);
}

#[test]
fn overlay_element_has_the_expected_structure() {
  let host = host("https://example.com/");
  let overlay = DebugOverlay::new(host.clone(), OverlayOptions::default());

  let html = overlay.element().borrow().to_html();
  assert_eq!(
    html,
    "<div id=\"debug-tools\" style=\"background:#27AE60\">\
     <p class=\"title\">Debug Tools</p>\
     <p class=\"screen-dimensions\">1280 / 720</p>\
     <button class=\"show-debug-tools\"></button></div>"
  );
}

#[test]
fn attached_element_is_the_overlay_element() {
  let host = host("https://example.com/?debug=true");
  let overlay = DebugOverlay::new(host.clone(), OverlayOptions::default());

  let attached = host.root_children();
  assert!(Rc::ptr_eq(&attached[0], &overlay.element()));
}

#[test]
fn non_activating_flags_are_still_parsed() {
  let host = host("https://example.com/?debug-grid=banana&noise=1");
  let overlay = DebugOverlay::new(host.clone(), OverlayOptions::default());

  assert!(!overlay.is_active());
  assert_eq!(overlay.flags().len(), 1);
  assert!(overlay.flags().truthy("debug-grid"));
}
