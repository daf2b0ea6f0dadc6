use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A `requestAnimationFrame` loop that runs until stopped or dropped.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl FrameLoop {
    /// Call `frame` once per animation frame, starting with the next repaint.
    pub fn start(mut frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(LoopInner {
            tick: RefCell::new(None),
            pending: Cell::new(None),
            running: Cell::new(true),
        });
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        *inner.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            frame();
            inner.request();
        }) as Box<dyn FnMut()>));
        inner.request();
        Self { inner }
    }

    /// Cancel the pending frame; no further callbacks run.
    pub fn stop(&self) {
        self.inner.running.set(false);
        if let Some(id) = self.inner.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

impl LoopInner {
    fn request(&self) {
        if !self.running.get() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}
