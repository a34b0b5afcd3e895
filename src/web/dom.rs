use crate::app::{
    Effect, NavbarStyle, PageOutline, RevealTarget, Section, ToastKind, TransformTarget,
};
use std::collections::HashMap;
use tracing::{debug, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollToOptions, Window,
};

pub(super) const ANIMATED_SELECTOR: &str = ".portfolio-card, .blog-card, .contact-item, .skill-tag, .about-photo, .hero-text, .section-title";
pub(super) const FIELD_SELECTOR: &str = ".form-group input, .form-group textarea";
const ACTIVE: &str = "active";
const ANIMATE_ELEMENT: &str = "animate-element";
const ANIMATE_CHILD: &str = "animate-child";
const ANIMATE_IN: &str = "animate-in";
const USING_KEYBOARD: &str = "using-keyboard";
const MODAL_SHOW: &str = "show";

/// Elements the page script hooks into, resolved once at ready time.
/// Every hook is optional; effects aimed at a missing one are dropped.
#[derive(Clone)]
pub(super) struct PageDom {
    pub(super) window: Window,
    pub(super) document: Document,
    pub(super) body: Option<HtmlElement>,
    pub(super) navbar: Option<HtmlElement>,
    pub(super) hamburger: Option<Element>,
    pub(super) nav_menu: Option<Element>,
    pub(super) nav_links: Vec<Element>,
    pub(super) modal: Option<Element>,
    pub(super) modal_body: Option<Element>,
    pub(super) buttons: Vec<HtmlElement>,
    pub(super) portfolio_cards: Vec<Element>,
    pub(super) blog_cards: Vec<Element>,
    pub(super) social_links: Vec<HtmlElement>,
    pub(super) skill_tags: Vec<HtmlElement>,
    pub(super) animated: Vec<Element>,
    pub(super) profile_photos: Vec<HtmlElement>,
    pub(super) hero: Option<HtmlElement>,
    pub(super) hero_content: Option<HtmlElement>,
    pub(super) subtitle: Option<HtmlElement>,
    pub(super) contact_form: Option<HtmlFormElement>,
    pub(super) submit_button: Option<HtmlElement>,
    pub(super) fields: Vec<HtmlElement>,
}

impl PageDom {
    pub(super) fn discover(window: Window, document: Document) -> Self {
        let contact_form = query_one::<HtmlFormElement>(&document, ".contact-form");
        let submit_button = contact_form
            .as_ref()
            .and_then(|form| form.query_selector(".btn-submit").ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Self {
            body: document.body(),
            navbar: query_one(&document, ".navbar"),
            hamburger: query_one(&document, ".hamburger"),
            nav_menu: query_one(&document, ".nav-menu"),
            nav_links: query_all(&document, ".nav-link"),
            modal: document.get_element_by_id("blog-modal"),
            modal_body: document.get_element_by_id("modal-body"),
            buttons: query_all(&document, ".btn"),
            portfolio_cards: query_all(&document, ".portfolio-card"),
            blog_cards: query_all(&document, ".portfolio-card[data-blog-id]"),
            social_links: query_all(&document, ".social-link"),
            skill_tags: query_all(&document, ".skill-tag"),
            animated: query_all(&document, ANIMATED_SELECTOR),
            profile_photos: query_all(&document, ".profile-photo"),
            hero: query_one(&document, ".hero"),
            hero_content: query_one(&document, ".hero-content"),
            subtitle: query_one(&document, ".hero-subtitle"),
            fields: query_all(&document, FIELD_SELECTOR),
            contact_form,
            submit_button,
            window,
            document,
        }
    }

    pub(super) fn outline(&self) -> PageOutline {
        PageOutline {
            nav_links: self
                .nav_links
                .iter()
                .filter_map(|link| link.get_attribute("href"))
                .collect(),
            subtitle: self.subtitle.as_ref().and_then(|el| el.text_content()),
            animated_elements: self.animated.len(),
            loaded: self.document.ready_state() == "complete",
        }
    }

    /// Layout of every `section[id]`, in document order.
    pub(super) fn measure_sections(&self) -> Vec<Section> {
        query_all::<HtmlElement>(&self.document, "section[id]")
            .into_iter()
            .map(|section| {
                Section::new(
                    section.id(),
                    f64::from(section.offset_top()),
                    f64::from(section.offset_height()),
                )
            })
            .collect()
    }

    pub(super) fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    pub(super) fn animated_index(&self, target: &Element) -> Option<usize> {
        self.animated
            .iter()
            .position(|el| el.is_same_node(Some(target)))
    }
}

/// Applies reducer effects to the live document.
pub(super) struct DomApplier {
    pub(super) dom: PageDom,
    toasts: HashMap<u64, HtmlElement>,
    ripples: HashMap<u64, HtmlElement>,
}

impl DomApplier {
    pub(super) fn new(dom: PageDom) -> Self {
        Self {
            dom,
            toasts: HashMap::new(),
            ripples: HashMap::new(),
        }
    }

    pub(super) fn apply(&mut self, effect: Effect) {
        trace!(?effect, "Applying effect");
        match effect {
            Effect::InjectStyle { id, css } => self.inject_style(id, css),
            Effect::PrepareReveal => {
                for el in &self.dom.animated {
                    add_class(el, ANIMATE_ELEMENT);
                }
                for tag in &self.dom.skill_tags {
                    add_class(tag, ANIMATE_CHILD);
                }
            }
            Effect::HighlightNav { active } => {
                let mut wanted = active.map(|id| format!("#{id}"));
                for link in &self.dom.nav_links {
                    remove_class(link, ACTIVE);
                    if wanted.is_some() && link.get_attribute("href") == wanted {
                        add_class(link, ACTIVE);
                        wanted = None;
                    }
                }
            }
            Effect::StyleNavbar(style) => self.style_navbar(style),
            Effect::Parallax {
                photo_offset,
                hero_offset,
            } => {
                for photo in &self.dom.profile_photos {
                    set_style(photo, "transform", &format!("translateY({photo_offset}px)"));
                }
                if let Some(hero) = &self.dom.hero {
                    set_style(
                        hero,
                        "background-position",
                        &format!("center {hero_offset}px"),
                    );
                }
            }
            Effect::SetMenuOpen(open) => {
                for el in [&self.dom.hamburger, &self.dom.nav_menu].into_iter().flatten() {
                    set_class(el, ACTIVE, open);
                }
            }
            Effect::LockBodyScroll(locked) => {
                if let Some(body) = &self.dom.body {
                    set_style(body, "overflow", if locked { "hidden" } else { "auto" });
                }
            }
            Effect::ScrollToSection { id, margin } => self.scroll_to_section(&id, margin),
            Effect::SetTransform {
                target,
                transform,
                transition,
            } => {
                let Some(el) = self.transform_target(target) else {
                    return;
                };
                if let Some(transition) = transition {
                    set_style(&el, "transition", transition);
                }
                set_style(&el, "transform", transform);
            }
            Effect::SetSocialAnimation { link, animation } => {
                if let Some(el) = self.dom.social_links.get(link) {
                    set_style(el, "animation", animation.unwrap_or(""));
                }
            }
            Effect::SpawnRipple { tag, ripple, size } => self.spawn_ripple(tag, ripple, size),
            Effect::RemoveRipple { ripple } => {
                if let Some(el) = self.ripples.remove(&ripple) {
                    el.remove();
                }
            }
            Effect::Reveal(target) => self.reveal(target),
            Effect::SetSubtitleText(text) => {
                if let Some(subtitle) = &self.dom.subtitle {
                    subtitle.set_text_content(Some(&text));
                }
            }
            Effect::ShowTypewriterCursor => self.append_cursor(),
            Effect::HeroIntro { visible } => {
                if let Some(hero) = &self.dom.hero_content {
                    if visible {
                        set_style(hero, "transition", "all 1s cubic-bezier(0.4, 0, 0.2, 1)");
                        set_style(hero, "opacity", "1");
                        set_style(hero, "transform", "translateY(0)");
                    } else {
                        set_style(hero, "opacity", "0");
                        set_style(hero, "transform", "translateY(50px)");
                    }
                }
            }
            Effect::SetSubmitButton { label, disabled } => {
                if let Some(button) = &self.dom.submit_button {
                    button.set_text_content(Some(&label));
                    if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
                        button.set_disabled(disabled);
                    }
                }
            }
            Effect::ResetForm => {
                if let Some(form) = &self.dom.contact_form {
                    form.reset();
                }
            }
            Effect::SetFieldError { field, error } => {
                let group = self
                    .dom
                    .fields
                    .get(field)
                    .and_then(|el| el.parent_element());
                if let Some(group) = group {
                    set_class(&group, "error", error);
                }
            }
            Effect::ShowToast {
                toast,
                message,
                kind,
            } => self.show_toast(toast, &message, kind),
            Effect::SlideToast { toast, visible } => {
                if let Some(el) = self.toasts.get(&toast) {
                    let offset = if visible { "translateX(0)" } else { "translateX(400px)" };
                    set_style(el, "transform", offset);
                }
            }
            Effect::RemoveToast { toast } => {
                if let Some(el) = self.toasts.remove(&toast) {
                    el.remove();
                }
            }
            Effect::ShowModal { body_html } => {
                let (Some(modal), Some(body)) = (&self.dom.modal, &self.dom.modal_body) else {
                    warn!("Content modal hooks missing; cannot show entry");
                    return;
                };
                body.set_inner_html(&body_html);
                add_class(modal, MODAL_SHOW);
            }
            Effect::HideModal => {
                if let Some(modal) = &self.dom.modal {
                    remove_class(modal, MODAL_SHOW);
                }
            }
            Effect::SetKeyboardMode(on) => {
                if let Some(body) = &self.dom.body {
                    set_class(body, USING_KEYBOARD, on);
                }
            }
            Effect::MeasureSections { .. } | Effect::StartTimer { .. } | Effect::ClearTimer { .. } => {
                debug!(?effect, "Runtime effect reached the DOM applier");
            }
        }
    }

    fn inject_style(&self, id: &str, css: &str) {
        if self.dom.document.get_element_by_id(id).is_some() {
            return;
        }
        let (Some(head), Ok(style)) = (self.dom.document.head(), self.dom.document.create_element("style"))
        else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        if let Err(err) = head.append_child(&style) {
            warn!(id, "Failed to inject style block: {err:?}");
        }
    }

    fn style_navbar(&self, style: NavbarStyle) {
        if let Some(navbar) = &self.dom.navbar {
            set_style(navbar, "background", style.background());
            set_style(navbar, "box-shadow", style.box_shadow());
        }
    }

    fn scroll_to_section(&self, id: &str, margin: f64) {
        let Some(section) = self
            .dom
            .document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            debug!(id, "Nav target section not found");
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(f64::from(section.offset_top()) - margin);
        options.set_behavior(ScrollBehavior::Smooth);
        self.dom.window.scroll_to_with_scroll_to_options(&options);
    }

    fn transform_target(&self, target: TransformTarget) -> Option<HtmlElement> {
        match target {
            TransformTarget::Button(idx) => self.dom.buttons.get(idx).cloned(),
            TransformTarget::CardIcon(idx) => self
                .dom
                .portfolio_cards
                .get(idx)?
                .query_selector(".card-icon")
                .ok()
                .flatten()?
                .dyn_into::<HtmlElement>()
                .ok(),
        }
    }

    fn spawn_ripple(&mut self, tag: usize, ripple: u64, size: f64) {
        let Some(host) = self.dom.skill_tags.get(tag) else {
            return;
        };
        let Some(span) = create_html(&self.dom.document, "span") else {
            return;
        };
        let size = format!("{size}px");
        for (prop, value) in [
            ("width", size.as_str()),
            ("height", size.as_str()),
            ("left", "50%"),
            ("top", "50%"),
            ("transform", "translate(-50%, -50%) scale(0)"),
            ("position", "absolute"),
            ("border-radius", "50%"),
            ("background", "rgba(201, 164, 65, 0.6)"),
            ("pointer-events", "none"),
            ("animation", "ripple 0.6s ease-out"),
        ] {
            set_style(&span, prop, value);
        }
        set_style(host, "position", "relative");
        set_style(host, "overflow", "hidden");
        match host.append_child(&span) {
            Ok(_) => {
                self.ripples.insert(ripple, span);
            }
            Err(err) => warn!(ripple, "Failed to append ripple: {err:?}"),
        }
    }

    fn reveal(&self, target: RevealTarget) {
        match target {
            RevealTarget::Element(idx) => {
                if let Some(el) = self.dom.animated.get(idx) {
                    add_class(el, ANIMATE_IN);
                }
            }
            RevealTarget::Child { parent, index } => {
                let child = self
                    .dom
                    .animated
                    .get(parent)
                    .and_then(|el| el.query_selector_all(".animate-child").ok())
                    .and_then(|list| list.item(index as u32))
                    .and_then(|node| node.dyn_into::<Element>().ok());
                if let Some(child) = child {
                    add_class(&child, ANIMATE_IN);
                }
            }
        }
    }

    fn append_cursor(&self) {
        let (Some(subtitle), Some(cursor)) =
            (&self.dom.subtitle, create_html(&self.dom.document, "span"))
        else {
            return;
        };
        cursor.set_text_content(Some("|"));
        set_style(&cursor, "animation", "blink 1s infinite");
        if let Err(err) = subtitle.append_child(&cursor) {
            warn!("Failed to append typewriter cursor: {err:?}");
        }
    }

    fn show_toast(&mut self, toast: u64, message: &str, kind: ToastKind) {
        let (Some(body), Some(el)) = (&self.dom.body, create_html(&self.dom.document, "div")) else {
            return;
        };
        el.set_class_name(&format!("notification notification-{}", kind.class_suffix()));
        el.set_text_content(Some(message));
        for (prop, value) in [
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("padding", "15px 20px"),
            ("border-radius", "8px"),
            ("color", "white"),
            ("font-weight", "500"),
            ("z-index", "10000"),
            ("transform", "translateX(400px)"),
            ("transition", "transform 0.3s ease"),
            ("background", kind.background()),
        ] {
            set_style(&el, prop, value);
        }
        match body.append_child(&el) {
            Ok(_) => {
                self.toasts.insert(toast, el);
            }
            Err(err) => warn!(toast, "Failed to append toast: {err:?}"),
        }
    }
}

pub(super) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        warn!(selector, "Invalid selector");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

fn query_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn create_html(document: &Document, tag: &str) -> Option<HtmlElement> {
    document
        .create_element(tag)
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}
