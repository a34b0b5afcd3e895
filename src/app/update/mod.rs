use super::state::NavbarStyle;
use crate::scheduler::TaskId;
use std::time::Duration;

mod core;
mod form;
mod interactions;
mod modal;
mod navigation;
mod scroll;

/// DOM work requested by the reducer; the host carries it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    InjectStyle {
        id: &'static str,
        css: &'static str,
    },
    /// Tag animated elements and skill tags with their initial classes.
    PrepareReveal,
    /// Read section layout and answer with `Message::SectionsMeasured`.
    MeasureSections {
        offset: f64,
    },
    /// Highlight the link for `active`; every other link loses the highlight.
    HighlightNav {
        active: Option<String>,
    },
    StyleNavbar(NavbarStyle),
    Parallax {
        photo_offset: f64,
        hero_offset: f64,
    },
    SetMenuOpen(bool),
    LockBodyScroll(bool),
    ScrollToSection {
        id: String,
        margin: f64,
    },
    SetTransform {
        target: TransformTarget,
        transform: &'static str,
        transition: Option<&'static str>,
    },
    SetSocialAnimation {
        link: usize,
        animation: Option<&'static str>,
    },
    SpawnRipple {
        tag: usize,
        ripple: u64,
        size: f64,
    },
    RemoveRipple {
        ripple: u64,
    },
    Reveal(RevealTarget),
    SetSubtitleText(String),
    ShowTypewriterCursor,
    HeroIntro {
        visible: bool,
    },
    SetSubmitButton {
        label: String,
        disabled: bool,
    },
    ResetForm,
    SetFieldError {
        field: usize,
        error: bool,
    },
    ShowToast {
        toast: u64,
        message: String,
        kind: ToastKind,
    },
    SlideToast {
        toast: u64,
        visible: bool,
    },
    RemoveToast {
        toast: u64,
    },
    ShowModal {
        body_html: String,
    },
    HideModal,
    SetKeyboardMode(bool),
    StartTimer {
        id: TaskId,
        delay: Duration,
    },
    ClearTimer {
        id: TaskId,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformTarget {
    Button(usize),
    CardIcon(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTarget {
    Element(usize),
    Child { parent: usize, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class_suffix(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            ToastKind::Success => super::state::NOTIFICATION_SUCCESS_COLOR,
            ToastKind::Error => super::state::NOTIFICATION_ERROR_COLOR,
            ToastKind::Info => super::state::NOTIFICATION_INFO_COLOR,
        }
    }
}

/// Groups of timer tasks that are cancelled together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::app) enum Chain {
    Typewriter,
    HeroIntro,
    ContactForm,
    Toast(u64),
    Ripple(u64),
    Reveal(usize),
}

/// Continuations run when a timer fires.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::app) enum TimerTask {
    TypeNextChar,
    HeroFadeIn,
    AcknowledgeContact,
    ToastSlideIn(u64),
    ToastSlideOut(u64),
    ToastRemove(u64),
    RemoveRipple(u64),
    RevealChild { parent: usize, index: usize },
}
