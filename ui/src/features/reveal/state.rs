//! Scroll-triggered reveal: which groups animate, how they enter, and when an
//! element counts as inside the viewport.

/// Element groups that animate in when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealKind {
    SectionTitle,
    ServiceCard,
    TimelineItem,
    AboutText,
    ContactItem,
    ContactForm,
    ProjectItem,
}

impl RevealKind {
    pub const ALL: [RevealKind; 7] = [
        RevealKind::SectionTitle,
        RevealKind::ServiceCard,
        RevealKind::TimelineItem,
        RevealKind::AboutText,
        RevealKind::ContactItem,
        RevealKind::ContactForm,
        RevealKind::ProjectItem,
    ];

    /// Structural class of the group.
    pub fn class(self) -> &'static str {
        match self {
            RevealKind::SectionTitle => "section-title",
            RevealKind::ServiceCard => "service-card",
            RevealKind::TimelineItem => "timeline-item",
            RevealKind::AboutText => "about-text",
            RevealKind::ContactItem => "contact-item",
            RevealKind::ContactForm => "contact-form",
            RevealKind::ProjectItem => "project-item",
        }
    }

    /// Entry animation class applied while pending.
    pub fn animation(self) -> &'static str {
        match self {
            RevealKind::SectionTitle | RevealKind::ProjectItem => "fade-in",
            RevealKind::ServiceCard => "scale-in",
            RevealKind::TimelineItem | RevealKind::ContactItem => "slide-in-left",
            RevealKind::AboutText | RevealKind::ContactForm => "slide-in-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Pending,
    Visible,
}

impl RevealState {
    /// Feed a new intersection ratio. Returns true when this call made the
    /// element visible; visible elements never go back to pending.
    pub fn observe(&mut self, ratio: f64, threshold: f64) -> bool {
        if *self == RevealState::Pending && ratio > 0.0 && ratio >= threshold {
            *self = RevealState::Visible;
            return true;
        }
        false
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

/// Vertical extent of an element relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub top: f64,
    pub height: f64,
}

/// Portion of `element` inside a viewport of `viewport_height` whose bottom edge
/// is pulled up by `bottom_margin` pixels.
pub fn intersection_ratio(element: ElementBox, viewport_height: f64, bottom_margin: f64) -> f64 {
    let root_bottom = (viewport_height - bottom_margin).max(0.0);
    let bottom = element.top + element.height;

    if element.height <= 0.0 {
        // Zero-height targets count as fully visible while their edge is inside.
        return if element.top >= 0.0 && element.top <= root_bottom {
            1.0
        } else {
            0.0
        };
    }

    let visible = bottom.min(root_bottom) - element.top.max(0.0);
    (visible.max(0.0) / element.height).clamp(0.0, 1.0)
}

/// `transition-delay` for the element at `index` within its group.
pub fn stagger_delay_ms(index: usize, step_ms: u64) -> u64 {
    index as u64 * step_ms
}
