//! `FieldCanvas` backed by a browser 2D canvas context.

use crate::dom::js_err;
use portfolio_core::{FieldCanvas, GlowGradient, Paint, Rect};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl FieldCanvas for CanvasSurface {
    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        self.ctx.set_fill_style_str(&paint.to_string());
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_rect_with_gradient(&mut self, rect: Rect, gradient: &GlowGradient) {
        let c = gradient.center;
        let g = match self.ctx.create_radial_gradient(
            c.x as f64,
            c.y as f64,
            0.0,
            c.x as f64,
            c.y as f64,
            gradient.radius as f64,
        ) {
            Ok(g) => g,
            // negative or non-finite radius; nothing sensible to draw
            Err(_) => return,
        };
        for stop in &gradient.stops {
            _ = g.add_color_stop(stop.offset, &stop.paint.to_string());
        }
        self.ctx.set_fill_style_canvas_gradient(&g);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }
}
