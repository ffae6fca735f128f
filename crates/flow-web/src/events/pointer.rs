use crate::constants::{TOUCH_MEDIA_QUERY, WHEEL_PIXELS_PER_STEP};
use crate::dom;
use crate::input;
use flow_core::{normalize_client, OrbitController, PointerTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub orbit: Rc<RefCell<OrbitController>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    if is_touch_device() {
        wire_touchmove(&w);
    } else {
        wire_mousemove(&w);
    }
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn is_touch_device() -> bool {
    web::window()
        .and_then(|w| w.match_media(TOUCH_MEDIA_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn record_pointer(tracker: &RefCell<PointerTracker>, client: glam::Vec2) {
    let (width, height) = dom::viewport_size();
    let pos = normalize_client(client.x, client.y, width, height);
    tracker.borrow_mut().on_input(pos, Instant::now());
}

fn wire_mousemove(w: &InputWiring) {
    let pointer = w.pointer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        record_pointer(&pointer, input::mouse_client(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let pointer = w.pointer.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(client) = input::touch_client(&ev) {
            record_pointer(&pointer, client);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
    }
    log::info!("[input] touch device, tracking touchmove");
    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        w.drag_state
            .borrow_mut()
            .begin(ev.pointer_id(), input::pointer_client(&ev));
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let step = w
            .drag_state
            .borrow_mut()
            .step(ev.pointer_id(), input::pointer_client(&ev));
        if let Some(delta) = step {
            let height = w.canvas.get_bounding_client_rect().height() as f32;
            w.orbit.borrow_mut().rotate_by(delta.x, delta.y, height);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag_state.borrow_mut().end(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd
            .add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let steps = input::wheel_steps(ev.delta_y(), WHEEL_PIXELS_PER_STEP);
        if steps != 0.0 {
            w.orbit.borrow_mut().zoom_by(steps);
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
