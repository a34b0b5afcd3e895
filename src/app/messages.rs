use super::state::Section;
use crate::scheduler::TaskId;
use crate::validation::FieldSnapshot;
use std::time::Duration;

/// Input events delivered by the host.
#[derive(Debug, Clone)]
pub enum Message {
    /// DOM is ready; carries the hooks that were found on the page.
    Ready(PageOutline),
    /// Window `load` fired.
    WindowLoaded,
    Scrolled {
        offset: f64,
        at: Duration,
    },
    /// Layout read requested by `Effect::MeasureSections`.
    SectionsMeasured {
        offset: f64,
        sections: Vec<Section>,
    },
    HamburgerClicked,
    NavLinkClicked {
        href: String,
    },
    CardClicked {
        content_id: String,
    },
    DocumentClicked(ClickTarget),
    KeyPressed(Key),
    MouseDown,
    Pointer {
        target: HoverTarget,
        phase: PointerPhase,
    },
    SocialPulseEnded {
        link: usize,
    },
    SkillTagClicked {
        tag: usize,
        size: f64,
    },
    Intersected {
        element: usize,
        children: usize,
    },
    FormSubmitted {
        submit_label: String,
    },
    FieldBlurred(FieldSnapshot),
    FieldFocused {
        field: usize,
    },
    TimerFired(TaskId),
    ScriptError {
        message: String,
    },
    /// Page is going away; pending timers should be dropped.
    Teardown,
}

/// Hooks discovered on the page at ready time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageOutline {
    /// `href` values of the navigation links, in document order.
    pub nav_links: Vec<String>,
    /// Text of the hero subtitle, if the element exists.
    pub subtitle: Option<String>,
    pub animated_elements: usize,
    /// Window `load` already fired before the hooks were wired, so no
    /// `WindowLoaded` will follow.
    pub loaded: bool,
}

/// What a document-level click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CloseControl,
    OverlayBackground,
    Elsewhere,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other(String),
}

impl Key {
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Elements with hover/press micro-interactions, indexed in document order
/// within their group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverTarget {
    Button(usize),
    PortfolioCard(usize),
    SocialLink(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Enter,
    Leave,
    Down,
    Up,
}
