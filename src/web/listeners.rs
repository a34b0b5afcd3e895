use super::dom::PageDom;
use super::runtime::dispatch;
use crate::app::{ClickTarget, HoverTarget, Key, Message, PointerPhase};
use crate::validation::{FieldKind, FieldSnapshot};
use js_sys::Array;
use std::time::Duration;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{
    Element, ErrorEvent, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
};

const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Attach a listener for the lifetime of the page; the closure is leaked.
fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(err) =
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        warn!(event, "Failed to register listener: {err:?}");
    }
    closure.forget();
}

fn on_message(target: &EventTarget, event: &str, message: impl Fn() -> Message + 'static) {
    listen(target, event, move |_| dispatch(message()));
}

pub(super) fn register(dom: &PageDom) {
    register_window(dom);
    register_navigation(dom);
    register_modal(dom);
    register_keyboard(dom);
    register_micro_interactions(dom);
    register_contact_form(dom);
    if let Err(err) = register_reveal_observer(dom) {
        warn!("Scroll reveal disabled: {err:?}");
    }
}

fn register_window(dom: &PageDom) {
    let window = dom.window.clone();
    let scroll_dom = dom.clone();
    listen(&window, "scroll", move |_| {
        let at = scroll_dom
            .window
            .performance()
            .map(|perf| perf.now())
            .unwrap_or_default();
        dispatch(Message::Scrolled {
            offset: scroll_dom.scroll_offset(),
            at: Duration::from_secs_f64(at.max(0.0) / 1000.0),
        });
    });
    on_message(&window, "load", || Message::WindowLoaded);
    on_message(&window, "pagehide", || Message::Teardown);
    listen(&window, "error", |event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::message)
            .unwrap_or_else(|| "unknown script error".to_string());
        dispatch(Message::ScriptError { message });
    });
}

fn register_navigation(dom: &PageDom) {
    if let Some(hamburger) = &dom.hamburger {
        on_message(hamburger, "click", || Message::HamburgerClicked);
    }
    for link in &dom.nav_links {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        listen(link, "click", move |event| {
            if href.starts_with('#') {
                event.prevent_default();
            }
            dispatch(Message::NavLinkClicked { href: href.clone() });
        });
    }
}

fn register_modal(dom: &PageDom) {
    for card in &dom.blog_cards {
        let Some(content_id) = card.get_attribute("data-blog-id") else {
            continue;
        };
        on_message(card, "click", move || Message::CardClicked {
            content_id: content_id.clone(),
        });
    }

    let modal = dom.modal.clone();
    listen(&dom.document, "click", move |event| {
        let target = event.target().and_then(|t| t.dyn_into::<Element>().ok());
        let landed = match (&target, &modal) {
            (Some(target), _) if target.class_list().contains("close-modal") => {
                ClickTarget::CloseControl
            }
            (Some(target), Some(modal)) if modal.is_same_node(Some(target)) => {
                ClickTarget::OverlayBackground
            }
            _ => ClickTarget::Elsewhere,
        };
        if landed != ClickTarget::Elsewhere {
            dispatch(Message::DocumentClicked(landed));
        }
    });
}

fn register_keyboard(dom: &PageDom) {
    listen(&dom.document, "keydown", |event| {
        if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
            dispatch(Message::KeyPressed(Key::from_dom(&event.key())));
        }
    });
    on_message(&dom.document, "mousedown", || Message::MouseDown);
}

fn register_micro_interactions(dom: &PageDom) {
    for (idx, button) in dom.buttons.iter().enumerate() {
        for (event, phase) in [
            ("mouseenter", PointerPhase::Enter),
            ("mouseleave", PointerPhase::Leave),
            ("mousedown", PointerPhase::Down),
            ("mouseup", PointerPhase::Up),
        ] {
            on_message(button, event, move || Message::Pointer {
                target: HoverTarget::Button(idx),
                phase,
            });
        }
    }

    for (idx, card) in dom.portfolio_cards.iter().enumerate() {
        for (event, phase) in [
            ("mouseenter", PointerPhase::Enter),
            ("mouseleave", PointerPhase::Leave),
        ] {
            on_message(card, event, move || Message::Pointer {
                target: HoverTarget::PortfolioCard(idx),
                phase,
            });
        }
    }

    for (idx, link) in dom.social_links.iter().enumerate() {
        on_message(link, "mouseenter", move || Message::Pointer {
            target: HoverTarget::SocialLink(idx),
            phase: PointerPhase::Enter,
        });
        on_message(link, "animationend", move || Message::SocialPulseEnded { link: idx });
    }

    for (idx, tag) in dom.skill_tags.iter().enumerate() {
        let host = tag.clone();
        listen(tag, "click", move |_| {
            let rect = host.get_bounding_client_rect();
            dispatch(Message::SkillTagClicked {
                tag: idx,
                size: rect.width().max(rect.height()),
            });
        });
    }
}

fn register_contact_form(dom: &PageDom) {
    if let Some(form) = &dom.contact_form {
        let button = dom.submit_button.clone();
        listen(form, "submit", move |event| {
            event.prevent_default();
            let submit_label = button
                .as_ref()
                .and_then(|b| b.text_content())
                .unwrap_or_default();
            dispatch(Message::FormSubmitted { submit_label });
        });
    }

    for (field, input) in dom.fields.iter().enumerate() {
        let el = input.clone();
        listen(input, "blur", move |_| {
            dispatch(Message::FieldBlurred(snapshot(field, &el)));
        });
        on_message(input, "focus", move || Message::FieldFocused { field });
    }
}

fn snapshot(field: usize, el: &HtmlElement) -> FieldSnapshot {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        let kind = if input.type_() == "email" {
            FieldKind::Email
        } else {
            FieldKind::Text
        };
        return FieldSnapshot {
            field,
            kind,
            required: input.required(),
            value: input.value(),
        };
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return FieldSnapshot {
            field,
            kind: FieldKind::Text,
            required: area.required(),
            value: area.value(),
        };
    }
    FieldSnapshot {
        field,
        kind: FieldKind::Text,
        required: false,
        value: el.text_content().unwrap_or_default(),
    }
}

fn register_reveal_observer(dom: &PageDom) -> Result<(), JsValue> {
    let observed = dom.clone();
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            let Some(element) = observed.animated_index(&target) else {
                debug!("Intersection for an untracked element");
                continue;
            };
            let children = target
                .query_selector_all(".animate-child")
                .map(|list| list.length() as usize)
                .unwrap_or(0);
            dispatch(Message::Intersected { element, children });
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    init.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in &dom.animated {
        observer.observe(el);
    }
    Ok(())
}
