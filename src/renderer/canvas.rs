//! 2D canvas renderer (browser only)

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::sim::{SpriteKind, Surface};

/// Draws the simulation onto a `<canvas>` through its 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    ship: HtmlImageElement,
    invader: HtmlImageElement,
    pub size: (f64, f64),
}

impl CanvasRenderer {
    /// Wrap `canvas`. The images may still be decoding; entities only ask
    /// for a sprite once the world has seen it load.
    pub fn new(
        canvas: &HtmlCanvasElement,
        ship: HtmlImageElement,
        invader: HtmlImageElement,
    ) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(Self {
            ctx,
            ship,
            invader,
            size: (canvas.width() as f64, canvas.height() as f64),
        })
    }

    fn image(&self, kind: SpriteKind) -> &HtmlImageElement {
        match kind {
            SpriteKind::Ship => &self.ship,
            SpriteKind::Invader => &self.invader,
        }
    }
}

impl Surface for CanvasRenderer {
    fn clear(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(0.0, 0.0, self.size.0, self.size.1);
    }

    fn draw_sprite(&mut self, kind: SpriteKind, position: Vec2, size: Vec2, rotation: f32) {
        let (x, y) = (position.x as f64, position.y as f64);
        let (w, h) = (size.x as f64, size.y as f64);
        let image = self.image(kind);

        if rotation == 0.0 {
            let _ = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h);
            return;
        }

        // Pivot about the sprite center
        let (cx, cy) = (x + w / 2.0, y + h / 2.0);
        self.ctx.save();
        let _ = self.ctx.translate(cx, cy);
        let _ = self.ctx.rotate(rotation as f64);
        let _ = self.ctx.translate(-cx, -cy);
        let _ = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, x, y, w, h);
        self.ctx.restore();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
    }
}
