//! Browser bootstrap: forwards DOM events into [`EngineCore`] and carries out
//! the [`Action`]s it returns.
//!
//! Every listener borrows the engine only for the duration of one
//! [`EngineCore::handle`] call, and the catalog request runs without any
//! borrow held, so events are applied one at a time in delivery order.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DataTransfer, Document, DragEvent, Element, Event, KeyboardEvent};

use crate::consts::{DEFAULT_CATALOG_ENDPOINT, DRAG_FORMAT, RESET_BUTTON_ID};
use crate::dom::DomRenderer;
use crate::engine::EngineCore;
use crate::input::{Action, Key, UiEvent};
use crate::provider::{CatalogProvider, HttpProvider, absolute_endpoint, resolve_endpoint};
use crate::sandbox::EntryId;

type SharedEngine = Rc<RefCell<EngineCore<DomRenderer>>>;

/// Entry point run when the wasm module is instantiated.
///
/// # Errors
///
/// Returns an error if the page lacks a window, document, or one of the
/// library / sandbox regions.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("logger unavailable: {e}")));
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
    let renderer = DomRenderer::new(document.clone())?;

    let configured = renderer.configured_endpoint();
    let endpoint = absolute_endpoint(
        &resolve_endpoint(configured.as_deref(), DEFAULT_CATALOG_ENDPOINT),
        &window.location().origin()?,
    );

    let engine: SharedEngine = Rc::new(RefCell::new(EngineCore::new(renderer)));
    engine.borrow_mut().setup();
    wire_reset(&engine, &document)?;
    wire_drop_zone(&engine)?;

    wasm_bindgen_futures::spawn_local(async move {
        let provider = HttpProvider::new(endpoint);
        let result = provider.fetch().await;
        let count = engine.borrow_mut().finish_load(result, provider.endpoint());
        for card in 0..count {
            if let Err(e) = wire_card(&engine, card) {
                log::error!("failed to wire card {card}: {e:?}");
            }
        }
    });
    Ok(())
}

fn listen(target: &Element, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn data_transfer(event: &Event) -> Option<DataTransfer> {
    event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer)
}

fn dispatch(engine: &SharedEngine, ui_event: UiEvent, event: &Event) {
    let actions = engine.borrow_mut().handle(ui_event);
    let transfer = data_transfer(event);
    for action in actions {
        apply(engine, action, event, transfer.as_ref());
    }
}

fn apply(engine: &SharedEngine, action: Action, event: &Event, transfer: Option<&DataTransfer>) {
    match action {
        Action::PreventDefault => event.prevent_default(),
        Action::SetDragData { format, data } => {
            if let Some(transfer) = transfer {
                if let Err(e) = transfer.set_data(format, &data) {
                    log::warn!("failed to set drag data: {e:?}");
                }
            }
        }
        Action::SetEffectAllowed(effect) => {
            if let Some(transfer) = transfer {
                transfer.set_effect_allowed(effect.as_str());
            }
        }
        Action::SetDropEffect(effect) => {
            if let Some(transfer) = transfer {
                transfer.set_drop_effect(effect.as_str());
            }
        }
        Action::ClearDragData => {
            if let Some(transfer) = transfer {
                if let Err(e) = transfer.clear_data() {
                    log::warn!("failed to clear drag data: {e:?}");
                }
            }
        }
        Action::EntryAdded { entry } => {
            if let Err(e) = wire_entry(engine, entry) {
                log::error!("failed to wire entry {}: {e:?}", entry.0);
            }
        }
    }
}

fn wire_card(engine: &SharedEngine, card: usize) -> Result<(), JsValue> {
    let element = {
        let core = engine.borrow();
        core.cards
            .card(card)
            .and_then(|c| core.renderer().element(c.node()))
            .cloned()
    };
    let Some(element) = element else {
        return Err(JsValue::from_str("card has no element"));
    };

    let e = Rc::clone(engine);
    listen(&element, "click", move |event| dispatch(&e, UiEvent::CardClick { card }, &event))?;

    let e = Rc::clone(engine);
    listen(&element, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        dispatch(&e, UiEvent::CardKeyDown { card, key: Key(key) }, &event);
    })?;

    let e = Rc::clone(engine);
    listen(&element, "dragstart", move |event| dispatch(&e, UiEvent::CardDragStart { card }, &event))?;

    let e = Rc::clone(engine);
    listen(&element, "dragend", move |event| dispatch(&e, UiEvent::CardDragEnd { card }, &event))
}

fn wire_entry(engine: &SharedEngine, entry: EntryId) -> Result<(), JsValue> {
    let element = {
        let core = engine.borrow();
        core.sandbox
            .get(entry)
            .and_then(|e| core.renderer().element(e.node))
            .cloned()
    };
    let Some(element) = element else {
        return Err(JsValue::from_str("entry has no element"));
    };
    let Some(button) = element.query_selector("button")? else {
        return Err(JsValue::from_str("entry has no remove control"));
    };

    let e = Rc::clone(engine);
    listen(&button, "click", move |event| dispatch(&e, UiEvent::EntryRemove { entry }, &event))
}

fn wire_reset(engine: &SharedEngine, document: &Document) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(RESET_BUTTON_ID) else {
        log::warn!("no #{RESET_BUTTON_ID} control on the page");
        return Ok(());
    };
    let e = Rc::clone(engine);
    listen(&button, "click", move |event| dispatch(&e, UiEvent::ResetClick, &event))
}

fn wire_drop_zone(engine: &SharedEngine) -> Result<(), JsValue> {
    let zone = engine.borrow().renderer().sandbox_region().clone();

    let e = Rc::clone(engine);
    listen(&zone, "dragenter", move |event| dispatch(&e, UiEvent::SandboxDragEnter, &event))?;

    let e = Rc::clone(engine);
    listen(&zone, "dragover", move |event| dispatch(&e, UiEvent::SandboxDragOver, &event))?;

    let e = Rc::clone(engine);
    listen(&zone, "dragleave", move |event| dispatch(&e, UiEvent::SandboxDragLeave, &event))?;

    let e = Rc::clone(engine);
    listen(&zone, "drop", move |event| {
        let payload = match data_transfer(&event).map(|t| t.get_data(DRAG_FORMAT)) {
            Some(Ok(payload)) => payload,
            Some(Err(err)) => {
                log::debug!("drop payload unreadable: {err:?}");
                String::new()
            }
            None => String::new(),
        };
        dispatch(&e, UiEvent::SandboxDrop { payload }, &event);
    })
}
