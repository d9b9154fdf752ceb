//! Marquee - hero banner widget for terminal dashboards
//!
//! Marquee renders a decorative banner (title, subtitle, call-to-action,
//! close control) inside a host dashboard. The banner stays in sync with the
//! host through a single named render event carrying display arguments and
//! reports its desired height back through an injected sizing callback.

pub mod app;
pub mod banner;
pub mod config;
pub mod host;
pub mod ui;

pub use app::App;
pub use banner::{DisplayArgs, View as BannerView};
pub use config::Config;
pub use host::{EventBus, SharedHeight, SizeReporter, Subscription};
