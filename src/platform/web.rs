//! Browser backend: HTML canvas 2D context plus DOM keyboard listeners

use std::cell::RefCell;
use std::rc::Rc;

use glam::IVec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use super::{Canvas, Input, Platform, PlatformEvent};
use crate::error::PlatformError;
use crate::settings::Settings;
use crate::sim::{Color, Key, PressedKeys, Rect};

/// Keyboard state shared with the DOM listeners
#[derive(Debug, Default)]
struct Keyboard {
    held: PressedKeys,
    events: Vec<PlatformEvent>,
}

/// Canvas-backed platform
pub struct WebPlatform {
    ctx: CanvasRenderingContext2d,
    width: i32,
    height: i32,
    text_height: i32,
    keyboard: Rc<RefCell<Keyboard>>,
}

impl WebPlatform {
    /// Size the canvas with id `canvas_id` to the arena and hook up input
    pub fn new(canvas_id: &str, settings: &Settings) -> Result<Self, PlatformError> {
        let fail = |reason: &str| PlatformError::WindowInit {
            width: settings.width,
            height: settings.height,
            reason: reason.to_string(),
        };

        let window = web_sys::window().ok_or_else(|| fail("no window"))?;
        let document = window.document().ok_or_else(|| fail("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| fail("canvas element not found"))?
            .dyn_into()
            .map_err(|_| fail("element is not a canvas"))?;
        canvas.set_width(settings.width as u32);
        canvas.set_height(settings.height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or_else(|| fail("2d context unavailable"))?
            .dyn_into()
            .map_err(|_| fail("unexpected context type"))?;
        ctx.set_font(&settings.css_font());
        ctx.set_text_baseline("top");

        let keyboard = Rc::new(RefCell::new(Keyboard::default()));
        install_listeners(&window, keyboard.clone());

        log::info!("Canvas {}x{} ready", settings.width, settings.height);
        Ok(Self {
            ctx,
            width: settings.width,
            height: settings.height,
            text_height: settings.font_size as i32,
            keyboard,
        })
    }
}

fn install_listeners(window: &web_sys::Window, keyboard: Rc<RefCell<Keyboard>>) {
    // Key down
    {
        let keyboard = keyboard.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_code(&event.code()) else {
                return;
            };
            // Keep arrows/space from scrolling the page
            event.prevent_default();
            let mut kb = keyboard.borrow_mut();
            kb.held.press(key);
            if !event.repeat() {
                kb.events.push(PlatformEvent::KeyDown(key));
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Key up
    {
        let keyboard = keyboard.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(key) = Key::from_code(&event.code()) {
                keyboard.borrow_mut().held.release(key);
            }
        });
        let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Blur: keyup never arrives for keys released while unfocused
    {
        let keyboard = keyboard.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            keyboard.borrow_mut().held.clear();
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // Page going away counts as closing the window
    {
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            keyboard.borrow_mut().events.push(PlatformEvent::Quit);
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

impl Canvas for WebPlatform {
    fn clear(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx
            .fill_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn text_height(&self) -> i32 {
        self.text_height
    }

    fn draw_text(&mut self, text: &str, pos: IVec2, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }

    fn present(&mut self) {
        // The browser composites when the animation frame callback returns
    }
}

impl Input for WebPlatform {
    fn poll_events(&mut self) -> Vec<PlatformEvent> {
        std::mem::take(&mut self.keyboard.borrow_mut().events)
    }

    fn pressed_keys(&self) -> PressedKeys {
        self.keyboard.borrow().held.clone()
    }
}

impl Platform for WebPlatform {
    /// Pacing comes from the requestAnimationFrame accumulator instead
    fn limit_frame(&mut self) {}
}
