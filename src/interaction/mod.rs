//! Page interactivity
//!
//! One [`InteractionController`] is built per page. It owns the scroll state
//! and only reacts to events between [`attach`](InteractionController::attach)
//! and [`detach`](InteractionController::detach).

use crate::config::InteractionConfig;
use crate::page::{Selector, Surface};

/// Direction of a carousel button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// User input the page forwards to the controller
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// A click on a link with this `href`
    AnchorClick { href: String },
    /// The window scrolled to this vertical position
    Scroll { scroll_top: f64 },
    PointerEnter { card: Selector },
    PointerLeave { card: Selector },
    /// A slider button inside `container` was pressed
    CarouselPress {
        container: Selector,
        direction: Direction,
    },
}

/// How the controller dealt with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Not for us; the browser's default action applies
    Ignored,
    /// Handled; the default action must be suppressed
    PreventDefault,
    /// Handled; nothing to suppress
    Handled,
}

/// Scroll, hover and carousel behavior of a page
#[derive(Debug, Clone)]
pub struct InteractionController {
    config: InteractionConfig,
    last_scroll_top: f64,
    attached: bool,
}

impl InteractionController {
    pub fn new(config: InteractionConfig) -> Self {
        Self {
            config,
            last_scroll_top: 0.0,
            attached: false,
        }
    }

    /// Start reacting to events
    pub fn attach(&mut self) {
        tracing::debug!("Interaction controller attached");
        self.attached = true;
    }

    /// Stop reacting to events; scroll state is kept
    pub fn detach(&mut self) {
        tracing::debug!("Interaction controller detached");
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn last_scroll_top(&self) -> f64 {
        self.last_scroll_top
    }

    /// Apply an event to the surface
    pub fn handle<Sf: Surface>(&mut self, surface: &mut Sf, event: &InteractionEvent) -> EventResponse {
        if !self.attached {
            return EventResponse::Ignored;
        }

        match event {
            InteractionEvent::AnchorClick { href } => self.anchor_click(surface, href),
            InteractionEvent::Scroll { scroll_top } => self.scroll(surface, *scroll_top),
            InteractionEvent::PointerEnter { card } => {
                surface.set_style(card, "border-color", &self.config.card_border_hover);
                EventResponse::Handled
            }
            InteractionEvent::PointerLeave { card } => {
                surface.set_style(card, "border-color", &self.config.card_border);
                EventResponse::Handled
            }
            InteractionEvent::CarouselPress {
                container,
                direction,
            } => self.carousel(surface, container, *direction),
        }
    }

    /// In-page anchors scroll smoothly to their target, leaving room for the header
    fn anchor_click<Sf: Surface>(&self, surface: &mut Sf, href: &str) -> EventResponse {
        let Some(target) = href.strip_prefix('#') else {
            return EventResponse::Ignored;
        };

        if let Some(top) = surface.offset_top(&Selector::id(target)) {
            surface.scroll_to(top - self.config.scroll_offset);
        } else {
            tracing::debug!("Anchor target {} not on page", href);
        }
        EventResponse::PreventDefault
    }

    fn scroll<Sf: Surface>(&mut self, surface: &mut Sf, scroll_top: f64) -> EventResponse {
        let background = if scroll_top > self.config.header_threshold {
            &self.config.header_background_scrolled
        } else {
            &self.config.header_background
        };
        surface.set_style(&Selector::tag("header"), "background", background);
        self.last_scroll_top = scroll_top;
        EventResponse::Handled
    }

    /// Move the slider track by one card plus the gap
    fn carousel<Sf: Surface>(
        &self,
        surface: &mut Sf,
        container: &Selector,
        direction: Direction,
    ) -> EventResponse {
        let track = track_of(container);
        let card_width = surface
            .first_child_width(&track)
            .filter(|w| *w > 0.0)
            .unwrap_or(self.config.carousel_card_fallback);
        let step = card_width + self.config.carousel_gap;
        let delta = match direction {
            Direction::Left => -step,
            Direction::Right => step,
        };

        if surface.scroll_by(&track, delta) {
            EventResponse::Handled
        } else {
            tracing::debug!("No slider track in {}", container);
            EventResponse::Ignored
        }
    }
}

/// The `.slider-track` belonging to a slider container.
///
/// The surface addresses elements flatly, so a container `#work` owns the
/// track `#work-track` and a `.slider-container` owns `.slider-track`.
fn track_of(container: &Selector) -> Selector {
    match container {
        Selector::Id(name) => Selector::Id(format!("{}-track", name)),
        _ => Selector::class("slider-track"),
    }
}
