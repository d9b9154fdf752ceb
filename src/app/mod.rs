//! Dashboard application state
//!
//! The host side of the banner contract: owns the event bus, the mounted
//! banner and the shared height cell, and turns user input into host
//! actions (dispatching render events, activating the close control).

mod event;

pub use event::{Event, Events};

use crate::banner::{self, DisplayArgs, View};
use crate::config::Config;
use crate::host::{EventBus, SharedHeight};
use crate::ui::BannerWidget;
use ratatui::layout::Rect;
use serde_json::json;
use tracing::debug;

/// Maximum number of activity lines retained.
const ACTIVITY_CAP: usize = 100;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Host configuration
    pub config: Config,

    /// Event bus shared between host and component
    pub bus: EventBus,

    /// The mounted banner
    pub banner: View,

    /// Cell the banner reports its height into
    pub height: SharedHeight,

    /// Recent host activity, newest last
    pub activity: Vec<String>,

    /// Whether the application should quit
    pub should_quit: bool,

    /// Index of the preset most recently dispatched
    preset: usize,
}

impl App {
    /// Create the dashboard and mount the banner on a fresh bus
    #[must_use]
    pub fn new(config: Config) -> Self {
        let bus = EventBus::new();
        let height = SharedHeight::new();
        let banner = View::mount(&bus, Box::new(height.clone()));
        Self {
            config,
            bus,
            banner,
            height,
            activity: Vec::new(),
            should_quit: false,
            preset: 0,
        }
    }

    /// Dispatch a render event carrying `args`
    pub fn dispatch_render(&mut self, args: &DisplayArgs) {
        let delivered = self
            .bus
            .dispatch(banner::RENDER_EVENT, &json!({ "args": args }));
        self.push_activity(format!(
            "render event \"{}\" -> {delivered} listener(s)",
            args.title
        ));
    }

    /// Re-dispatch the current preset (mount, resize)
    pub fn dispatch_current(&mut self) {
        let args = self.current_preset();
        self.dispatch_render(&args);
    }

    /// Advance to the next preset and dispatch it
    pub fn dispatch_next(&mut self) {
        if !self.config.presets.is_empty() {
            self.preset = (self.preset + 1) % self.config.presets.len();
        }
        self.dispatch_current();
    }

    /// Preset at the cursor, or defaults when the preset list is empty
    #[must_use]
    pub fn current_preset(&self) -> DisplayArgs {
        self.config
            .presets
            .get(self.preset)
            .cloned()
            .unwrap_or_default()
    }

    /// Let the banner process pending render events
    pub fn pump_banner(&mut self) {
        let processed = self.banner.pump();
        if processed > 0 {
            self.push_activity(format!("banner reported {}px", self.height.get()));
        }
    }

    /// Activate the banner's close control
    pub fn activate_close(&mut self) {
        if !self.banner.is_closed() {
            self.push_activity("close activated".to_string());
        }
        self.banner.close();
    }

    /// Handle a left click at terminal coordinates.
    ///
    /// Closing is the only clickable affordance: a hit inside the close
    /// control of the banner laid out at `banner_area`.
    pub fn click(&mut self, x: u16, y: u16, banner_area: Rect) {
        if self.banner.is_closed() {
            return;
        }
        if rect_contains(BannerWidget::close_rect(banner_area), x, y) {
            self.activate_close();
        }
    }

    /// Rows the banner currently occupies, from the last reported height
    #[must_use]
    pub fn banner_rows(&self) -> u16 {
        self.config.rows_for(self.height.get())
    }

    fn push_activity(&mut self, line: String) {
        debug!(%line, "host activity");
        self.activity.push(line);
        if self.activity.len() > ACTIVITY_CAP {
            let overflow = self.activity.len() - ACTIVITY_CAP;
            self.activity.drain(..overflow);
        }
    }
}

fn rect_contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x
        && x < area.x.saturating_add(area.width)
        && y >= area.y
        && y < area.y.saturating_add(area.height)
}
