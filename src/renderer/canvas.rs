//! `Surface` backed by a `CanvasRenderingContext2d`

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use super::{Sprite, Surface};
use crate::error::StartupError;

const TEXT_COLOR: &str = "#fff";
const TEXT_FONT: &str = "28px Arial";

/// Canvas 2D drawing surface holding the loaded sprite images
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    ship: HtmlImageElement,
    brick: HtmlImageElement,
}

impl CanvasSurface {
    pub fn new(
        canvas: &HtmlCanvasElement,
        ship: HtmlImageElement,
        brick: HtmlImageElement,
    ) -> Result<Self, StartupError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(StartupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| StartupError::NoContext)?;
        Ok(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            ship,
            brick,
        })
    }

    fn image(&self, sprite: Sprite) -> &HtmlImageElement {
        match sprite {
            Sprite::Ship => &self.ship,
            Sprite::Brick => &self.brick,
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, width: f32, height: f32) {
        let result = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(
                self.image(sprite),
                x as f64,
                y as f64,
                width as f64,
                height as f64,
            );
        if let Err(e) = result {
            log::warn!("drawImage failed for {:?}: {:?}", sprite, e);
        }
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32) {
        self.ctx.set_fill_style_str(TEXT_COLOR);
        self.ctx.set_font(TEXT_FONT);
        self.ctx.set_text_align("left");
        if let Err(e) = self.ctx.fill_text(text, x as f64, y as f64) {
            log::warn!("fillText failed: {:?}", e);
        }
    }
}
