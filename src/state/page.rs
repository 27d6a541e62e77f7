//! Page geometry, anchor navigation and scrolling

use super::accordion::Accordion;
use std::time::{Duration, Instant};

/// Rows taken by the fixed header
pub const HEADER_HEIGHT: u16 = 3;

/// Offset past which the header is drawn elevated
pub const HEADER_ELEVATION_THRESHOLD: u16 = 3;

pub const BENEFITS: &[(&str, &str)] = &[
    ("Recurring income", "A share of every payment made by the clients you bring"),
    ("Transparent statistics", "Clicks, registrations and payouts in one dashboard"),
    ("Ready-made materials", "Banners, links and texts prepared for you"),
    ("Personal manager", "Help with launch and growth at every step"),
];

pub const STEPS: &[&str] = &[
    "1. Register and confirm your contact details",
    "2. Get a personal partner link",
    "3. Share it and earn from every paid service",
];

/// Height of the registration section: tabs, four fields with annotation rows,
/// submit button and progress gauge
pub const REGISTRATION_HEIGHT: u16 = 2 + 2 + 4 * 4 + 3 + 2;

/// Landing page sections, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Benefits,
    Steps,
    Faq,
    Registration,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Benefits,
        Section::Steps,
        Section::Faq,
        Section::Registration,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Hero => "#hero",
            Self::Benefits => "#benefits",
            Self::Steps => "#steps",
            Self::Faq => "#faq",
            Self::Registration => "#registration",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Hero => "Partner Program",
            Self::Benefits => "Why join",
            Self::Steps => "How it works",
            Self::Faq => "Questions",
            Self::Registration => "Registration",
        }
    }

    /// Rows the section occupies, including its border
    pub fn height(&self, faq: &Accordion) -> u16 {
        match self {
            Self::Hero => 8,
            Self::Benefits => 2 + 2 * BENEFITS.len() as u16,
            Self::Steps => 2 + STEPS.len() as u16,
            Self::Faq => 2 + faq.height(),
            Self::Registration => REGISTRATION_HEIGHT,
        }
    }
}

/// Header navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Benefits",
        href: "#benefits",
    },
    NavLink {
        label: "How it works",
        href: "#steps",
    },
    NavLink {
        label: "FAQ",
        href: "#faq",
    },
    NavLink {
        label: "Join",
        href: "#registration",
    },
];

/// Placement of a section in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpan {
    pub section: Section,
    pub top: u16,
    pub height: u16,
}

/// Vertical layout of the scrollable page below the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub spans: Vec<SectionSpan>,
}

impl PageLayout {
    /// Sections stacked in order; the page starts right under the header
    pub fn compute(faq: &Accordion) -> Self {
        let mut top = HEADER_HEIGHT;
        let spans = Section::ALL
            .into_iter()
            .map(|section| {
                let height = section.height(faq);
                let span = SectionSpan {
                    section,
                    top,
                    height,
                };
                top += height;
                span
            })
            .collect();
        Self { spans }
    }

    pub fn span(&self, section: Section) -> Option<&SectionSpan> {
        self.spans.iter().find(|s| s.section == section)
    }

    /// Bottom edge of the last section
    pub fn total_height(&self) -> u16 {
        self.spans
            .last()
            .map(|s| s.top + s.height)
            .unwrap_or(HEADER_HEIGHT)
    }

    /// Largest offset that still fills a viewport of `viewport_height` rows
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.total_height()
            .saturating_sub(HEADER_HEIGHT)
            .saturating_sub(viewport_height)
    }

    /// Scroll offset that brings `anchor` right under the header.
    ///
    /// `#` and unknown anchors resolve to nothing.
    pub fn anchor_offset(&self, anchor: &str, viewport_height: u16) -> Option<u16> {
        if anchor == "#" {
            return None;
        }
        let section = Section::from_anchor(anchor)?;
        let span = self.span(section)?;
        let target = span.top.saturating_sub(HEADER_HEIGHT);
        Some(target.min(self.max_offset(viewport_height)))
    }
}

/// An in-flight smooth scroll
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: u16,
    to: u16,
    started_at: Instant,
}

/// Page scroll position
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: u16,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    pub const SMOOTH_DURATION: Duration = Duration::from_millis(400);

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Scroll immediately by `delta` rows, cancelling any smooth scroll
    pub fn scroll_by(&mut self, delta: i32, max_offset: u16) {
        self.animation = None;
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(max_offset));
        self.offset = next as u16;
    }

    pub fn jump_to(&mut self, offset: u16, max_offset: u16) {
        self.animation = None;
        self.offset = offset.min(max_offset);
    }

    /// Begin an eased scroll towards `target`
    pub fn smooth_to(&mut self, target: u16, now: Instant) {
        if target == self.offset {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            started_at: now,
        });
    }

    /// Advance the smooth scroll to `now`
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };
        let elapsed = now.saturating_duration_since(animation.started_at);
        if elapsed >= Self::SMOOTH_DURATION {
            self.offset = animation.to;
            self.animation = None;
            return;
        }
        let progress = elapsed.as_secs_f32() / Self::SMOOTH_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_in_out(progress);
        let from = f32::from(animation.from);
        let to = f32::from(animation.to);
        self.offset = (from + (to - from) * eased).round() as u16;
    }

    /// Keep the offset inside the page after a resize or accordion change
    pub fn clamp(&mut self, max_offset: u16) {
        self.offset = self.offset.min(max_offset);
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(max_offset);
        }
    }

    pub fn is_header_elevated(&self) -> bool {
        self.offset > HEADER_ELEVATION_THRESHOLD
    }
}
