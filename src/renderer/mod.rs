//! Canvas2D rendering
//!
//! Clears the surface and redraws the star backdrop, the player sprite and
//! the obstacle field once per frame. Sprites are `<img>` resources drawn
//! scaled and centered; one that has not finished loading (or failed to)
//! is skipped rather than treated as an error.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::{OBSTACLE_SPRITE, PLAYER_SPRITE, STAR_SIZE};
use crate::sim::GameState;

/// Sprite image handles, loaded by path at startup
pub struct Sprites {
    pub player: HtmlImageElement,
    pub obstacle: HtmlImageElement,
}

impl Sprites {
    /// Start loading both sprites. Loading is asynchronous in the browser;
    /// frames drawn before it finishes simply omit the sprite.
    pub fn load() -> Result<Self, JsValue> {
        let player = HtmlImageElement::new()?;
        player.set_src(PLAYER_SPRITE);
        let obstacle = HtmlImageElement::new()?;
        obstacle.set_src(OBSTACLE_SPRITE);
        Ok(Self { player, obstacle })
    }
}

/// Canvas2D render target
pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sprites: Sprites,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement, sprites: Sprites) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into()?;
        Ok(Self {
            canvas,
            ctx,
            sprites,
        })
    }

    /// Match the drawing surface to the viewport. Entity coordinates are
    /// not rescaled; anything already placed keeps its position.
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Redraw the whole frame: backdrop stars, then the player, then the
    /// obstacle field.
    pub fn render(&self, state: &GameState) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        self.draw_stars(state);
        self.draw_sprite(
            &self.sprites.player,
            state.player.pos.x,
            state.player.pos.y,
            state.player.size,
        );
        for obstacle in &state.obstacles {
            self.draw_sprite(
                &self.sprites.obstacle,
                obstacle.pos.x,
                obstacle.pos.y,
                obstacle.size,
            );
        }
    }

    fn draw_stars(&self, state: &GameState) {
        self.ctx.set_fill_style_str("white");
        for star in &state.stars {
            self.ctx
                .fill_rect(star.pos.x as f64, star.pos.y as f64, STAR_SIZE, STAR_SIZE);
        }
    }

    /// Draw an image scaled to `size` and centered on (x, y). Images still
    /// loading draw nothing; draw errors are swallowed.
    fn draw_sprite(&self, image: &HtmlImageElement, x: f32, y: f32, size: f32) {
        if !image.complete() {
            return;
        }
        let size = size as f64;
        let _ = self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            x as f64 - size / 2.0,
            y as f64 - size / 2.0,
            size,
            size,
        );
    }
}
