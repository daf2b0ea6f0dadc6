//! Hero-section ambient field: owns the canvas, the simulation state and the
//! listeners/frame loop that drive it.

use crate::constants::FLUID_CANVAS_CLASS;
use crate::dom::{self, js_err};
use crate::events::{pointer, Listener};
use crate::frame::FrameLoop;
use crate::render::CanvasSurface;
use instant::Instant;
use portfolio_core::{FieldConfig, MotionField, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FieldRuntime {
    field: MotionField,
    surface: CanvasSurface,
    last_frame: Instant,
}

impl FieldRuntime {
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.field.frame(&mut self.surface, dt);
    }
}

struct Running {
    frame_loop: FrameLoop,
    _listeners: Vec<Listener>,
}

pub struct AmbientField {
    host: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    runtime: Rc<RefCell<FieldRuntime>>,
    running: Option<Running>,
}

impl AmbientField {
    /// Insert the field canvas as the first child of the element matching
    /// `host_selector`. A missing host is not an error: returns `Ok(None)`.
    pub fn mount(
        document: &web::Document,
        host_selector: &str,
        config: FieldConfig,
    ) -> anyhow::Result<Option<Self>> {
        let Some(host) = dom::query(document, host_selector) else {
            log::debug!("[field] no {} on this page", host_selector);
            return Ok(None);
        };
        let host = host
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let canvas = document
            .create_element("canvas")
            .map_err(js_err)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        canvas.set_class_name(FLUID_CANVAS_CLASS);
        host.insert_before(&canvas, host.first_child().as_ref())
            .map_err(js_err)?;

        let (width, height) = dom::sync_canvas_to_host(&canvas, &host);
        let surface = CanvasSurface::from_canvas(&canvas)?;
        let field = MotionField::new(Surface::new(width, height), config, &mut rand::thread_rng())?;
        log::info!(
            "[field] mounted {} particles on {}x{}",
            field.particles().len(),
            width,
            height
        );

        Ok(Some(Self {
            host,
            canvas,
            runtime: Rc::new(RefCell::new(FieldRuntime {
                field,
                surface,
                last_frame: Instant::now(),
            })),
            running: None,
        }))
    }

    /// Attach pointer/resize listeners and begin animating. No-op if running.
    pub fn start(&mut self) -> anyhow::Result<()> {
        if self.running.is_some() {
            return Ok(());
        }

        let rt_move = self.runtime.clone();
        let on_move = pointer::on_pointer_move(&self.host, move |p| {
            rt_move.borrow_mut().field.track_pointer(p.x, p.y);
        })?;

        let rt_resize = self.runtime.clone();
        let canvas = self.canvas.clone();
        let host = self.host.clone();
        let on_resize = pointer::on_window_resize(move || {
            let (w, h) = dom::sync_canvas_to_host(&canvas, &host);
            rt_resize.borrow_mut().field.resize(w, h);
        })?;

        self.runtime.borrow_mut().last_frame = Instant::now();
        let rt_frame = self.runtime.clone();
        let frame_loop = FrameLoop::start(move || rt_frame.borrow_mut().frame());

        self.running = Some(Running {
            frame_loop,
            _listeners: vec![on_move, on_resize],
        });
        Ok(())
    }

    /// Cancel the frame loop and detach listeners. The canvas keeps its last frame.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            running.frame_loop.stop();
            log::debug!("[field] stopped");
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
            .as_ref()
            .map(|r| r.frame_loop.is_running())
            .unwrap_or(false)
    }
}

impl Drop for AmbientField {
    fn drop(&mut self) {
        self.stop();
        self.canvas.remove();
    }
}
