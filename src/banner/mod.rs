//! The banner view component
//!
//! A presentational view with two bits of local state: the display arguments
//! from the most recent render event and a one-way closed flag. The component
//! subscribes to [`RENDER_EVENT`] for its whole mounted lifetime and reports
//! its desired height through the injected [`SizeReporter`] after every
//! processed event.

use crate::host::{EventBus, SizeReporter, Subscription};
use crate::ui::BannerWidget;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

/// Name of the host event that triggers a redisplay.
pub const RENDER_EVENT: &str = "marquee:render";

/// Height in pixels requested while the banner is open.
pub const OPEN_HEIGHT: u32 = 220;

/// Static call-to-action label.
pub const CTA_LABEL: &str = "Learn more";

/// Label of the close control.
pub const CLOSE_LABEL: &str = "Close";

/// Display arguments carried by a render event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayArgs {
    /// Banner headline. Required but may be empty.
    #[serde(default)]
    pub title: String,

    /// Secondary line. An empty string suppresses the subtitle element.
    #[serde(default)]
    pub subtitle: String,

    /// Whether to fill the banner with the gradient background.
    #[serde(default = "default_gradient")]
    pub gradient: bool,
}

const fn default_gradient() -> bool {
    true
}

impl Default for DisplayArgs {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            gradient: true,
        }
    }
}

impl DisplayArgs {
    /// Create args with the given title, no subtitle and the gradient on.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the gradient flag.
    #[must_use]
    pub fn gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    /// Whether a subtitle element should be rendered.
    #[must_use]
    pub fn has_subtitle(&self) -> bool {
        !self.subtitle.is_empty()
    }

    /// Extract args from a render event's detail payload.
    ///
    /// A missing `args` member, or one that does not match the expected
    /// shape, degrades silently to the defaults.
    #[must_use]
    pub fn from_detail(detail: &Value) -> Self {
        detail
            .get("args")
            .cloned()
            .map(serde_json::from_value)
            .and_then(Result::ok)
            .unwrap_or_default()
    }
}

/// The mounted banner component.
///
/// Owns its render-event subscription (released on drop) and the injected
/// sizing callback.
#[derive(Debug)]
pub struct View {
    args: DisplayArgs,
    closed: bool,
    events: Subscription,
    sizer: Box<dyn SizeReporter>,
}

impl View {
    /// Mount the banner: register the render-event listener on `bus` and
    /// keep `sizer` for height reports.
    #[must_use]
    pub fn mount(bus: &EventBus, sizer: Box<dyn SizeReporter>) -> Self {
        Self {
            args: DisplayArgs::default(),
            closed: false,
            events: bus.subscribe(RENDER_EVENT),
            sizer,
        }
    }

    /// Drain and process pending render events.
    ///
    /// Each event replaces the current args wholesale and immediately
    /// reports the desired height: 0 if closed, [`OPEN_HEIGHT`] otherwise.
    /// Returns the number of events processed.
    pub fn pump(&mut self) -> usize {
        let mut processed = 0;
        while let Some(detail) = self.events.try_next() {
            self.apply_render(&detail);
            processed += 1;
        }
        processed
    }

    fn apply_render(&mut self, detail: &Value) {
        self.args = DisplayArgs::from_detail(detail);
        let height = if self.closed { 0 } else { OPEN_HEIGHT };
        debug!(title = %self.args.title, height, "render event processed");
        self.sizer.report_height(height);
    }

    /// Activate the close control.
    ///
    /// One-way transition; closing an already-closed banner has no further
    /// effect. Does not refresh the height report: the stale open height
    /// stands until the next render event.
    pub fn close(&mut self) {
        if !self.closed {
            info!("banner closed");
            self.closed = true;
        }
    }

    /// Whether the close control was activated.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Display arguments from the most recent render event.
    #[must_use]
    pub const fn args(&self) -> &DisplayArgs {
        &self.args
    }

    /// Widget for the current state, or `None` when closed. A closed banner
    /// produces no output.
    #[must_use]
    pub fn widget(&self) -> Option<BannerWidget> {
        (!self.closed).then(|| BannerWidget::new(&self.args))
    }
}
