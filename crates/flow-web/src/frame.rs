use crate::render::{self, FrameUniforms};
use flow_core::{FrameClock, OrbitController, PointCycler, PointerTracker};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub cycler: PointCycler,
    pub clock: FrameClock,

    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<PointerTracker>>,
    pub orbit: Rc<RefCell<OrbitController>>,

    pub gpu: Option<render::GpuState>,
    pub queued_background: Rc<RefCell<Option<web::ImageBitmap>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let time = self.clock.elapsed_at(now).as_secs_f32();

        // Write every slot for this frame before anything reads the buffer
        self.cycler.tick();

        let pointer = {
            let mut tracker = self.pointer.borrow_mut();
            tracker.poll(now);
            tracker.position()
        };

        let Some(g) = &mut self.gpu else {
            return;
        };
        if let Some(bitmap) = self.queued_background.borrow_mut().take() {
            g.set_background_image(bitmap);
        }
        g.resize_if_needed(self.canvas.width(), self.canvas.height());

        let view_proj = {
            let mut orbit = self.orbit.borrow_mut();
            orbit.update();
            orbit.camera(g.aspect()).view_proj()
        };

        g.upload_points(self.cycler.buffer());
        if let Err(e) = g.render(&FrameUniforms {
            view_proj,
            time,
            pointer,
        }) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    capacity: usize,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, capacity).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
