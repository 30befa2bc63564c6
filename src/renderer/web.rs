//! Canvas backed by the browser's 2D rendering context

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Canvas;

pub struct WebCanvas {
    ctx: CanvasRenderingContext2d,
}

impl WebCanvas {
    /// Acquire the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
    }
}

impl Canvas for WebCanvas {
    type Error = JsValue;

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        color: &str,
        line_width: f32,
    ) -> Result<(), JsValue> {
        self.circle_path(center, radius)?;
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
        Ok(())
    }
}
