#![cfg(target_arch = "wasm32")]
use flow_core::{sample_traces, FlowParams, OrbitController, PointCycler, PointerTracker};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::{BACKGROUND_URL, CANVAS_ID, PATH_SELECTOR};

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("flow-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Sample the inline svg once; traces are immutable apart from their cursors
    let params = FlowParams::default();
    let paths = dom::collect_paths(&document, PATH_SELECTOR)?;
    let traces = sample_traces(paths.iter(), &params)?;
    let cycler = PointCycler::new(traces, params, flow_core::SCATTER_SEED);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let gpu = frame::init_gpu(&canvas, cycler.buffer().capacity()).await;

    let queued_background: Rc<RefCell<Option<web::ImageBitmap>>> = Rc::new(RefCell::new(None));
    assets::queue_background(BACKGROUND_URL, queued_background.clone());

    // ---------------- Interaction state ----------------
    let pointer = Rc::new(RefCell::new(PointerTracker::default()));
    let orbit = Rc::new(RefCell::new(OrbitController::default()));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        orbit: orbit.clone(),
        drag_state,
    });

    // Cycler + renderer loop driven by requestAnimationFrame
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        cycler,
        clock: flow_core::FrameClock::new(),
        canvas,
        pointer,
        orbit,
        gpu,
        queued_background,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
