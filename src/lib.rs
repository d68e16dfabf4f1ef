pub mod color;
pub mod config;
pub mod debounce;
pub mod dom;
pub mod geometry;
pub mod host;
pub mod overlay;

pub use color::{ColorParseError, Rgba, DEFAULT_ACCENT_COLOR};
pub use config::{parse_query_config, DebugFlags, FlagValue, RECOGNIZED_FLAGS};
pub use dom::{Element, ElementHandle};
pub use geometry::Size;
pub use host::{ConsoleLine, HeadlessHost, HostEnvironment, TimerId};
pub use overlay::{DebugOverlay, OverlayOptions, OVERLAY_ELEMENT_ID, RESIZE_DEBOUNCE};
