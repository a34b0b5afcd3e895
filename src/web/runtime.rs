use super::dom::{DomApplier, PageDom};
use crate::app::{App, Effect, Message};
use crate::config::PageConfig;
use crate::scheduler::TaskId;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
    static QUEUE: RefCell<VecDeque<Message>> = const { RefCell::new(VecDeque::new()) };
}

/// Page-lifetime state: the reducer, the DOM it drives, and the live
/// browser timeout handles for scheduled tasks.
struct Runtime {
    app: App,
    dom: DomApplier,
    timers: HashMap<TaskId, i32>,
}

pub(super) fn install(config: PageConfig, dom: PageDom) {
    RUNTIME.with(|cell| {
        *cell.borrow_mut() = Some(Runtime {
            app: App::new(config),
            dom: DomApplier::new(dom),
            timers: HashMap::new(),
        });
    });
}

/// Queue a message and drain the queue. Messages raised while a drain is
/// already running (effects that answer synchronously) are picked up by
/// that drain.
pub(super) fn dispatch(message: Message) {
    QUEUE.with(|queue| queue.borrow_mut().push_back(message));
    drain();
}

/// Run a direct `App` call (the exported entry points) outside the queue.
pub(super) fn with_app(call: impl FnOnce(&mut App) -> Vec<Effect>) {
    let ran = RUNTIME.with(|cell| {
        let Ok(mut guard) = cell.try_borrow_mut() else {
            warn!("Runtime busy; dropping direct call");
            return false;
        };
        let Some(runtime) = guard.as_mut() else {
            warn!("Runtime not started; dropping direct call");
            return false;
        };
        let effects = call(&mut runtime.app);
        runtime.apply_all(effects);
        true
    });
    if ran {
        drain();
    }
}

fn drain() {
    RUNTIME.with(|cell| {
        let Ok(mut guard) = cell.try_borrow_mut() else {
            return;
        };
        let Some(runtime) = guard.as_mut() else {
            return;
        };
        while let Some(message) = QUEUE.with(|queue| queue.borrow_mut().pop_front()) {
            if let Message::TimerFired(id) = &message {
                runtime.timers.remove(id);
            }
            let effects = runtime.app.update(message);
            runtime.apply_all(effects);
        }
    });
}

impl Runtime {
    fn apply_all(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::MeasureSections { offset } => {
                    let sections = self.dom.dom.measure_sections();
                    QUEUE.with(|queue| {
                        queue
                            .borrow_mut()
                            .push_back(Message::SectionsMeasured { offset, sections })
                    });
                }
                Effect::StartTimer { id, delay } => self.start_timer(id, delay.as_millis()),
                Effect::ClearTimer { id } => {
                    if let Some(handle) = self.timers.remove(&id) {
                        self.dom.dom.window.clear_timeout_with_handle(handle);
                    }
                }
                other => self.dom.apply(other),
            }
        }
    }

    fn start_timer(&mut self, id: TaskId, delay_ms: u128) {
        let callback = Closure::once_into_js(move || dispatch(Message::TimerFired(id)));
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match self
            .dom
            .dom
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
        {
            Ok(handle) => {
                self.timers.insert(id, handle);
            }
            Err(err) => warn!(%id, "Failed to start timer: {err:?}"),
        }
    }
}
