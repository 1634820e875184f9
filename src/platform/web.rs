//! Browser input: DOM keyboard and mouse listeners feeding an `InputSource`

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

use super::{InputEvent, InputSource};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Key, PressedKeys};

#[derive(Default)]
struct Shared {
    pressed: PressedKeys,
    pointer: Vec2,
    pending: Vec<InputEvent>,
}

/// Input state shared with the DOM event closures
#[derive(Clone)]
pub struct WebInput {
    shared: Rc<RefCell<Shared>>,
}

impl WebInput {
    /// Install listeners on the window (keys) and canvas (pointer)
    pub fn attach(canvas: &HtmlCanvasElement) -> Self {
        let input = Self {
            shared: Rc::new(RefCell::new(Shared::default())),
        };
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let shared = input.shared.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let Some(key) = Key::from_code(&event.code()) else {
                    return;
                };
                // Keep arrows/space from scrolling the page
                event.prevent_default();
                let mut s = shared.borrow_mut();
                s.pressed.press(key);
                if !event.repeat() {
                    s.pending.push(InputEvent::KeyDown(key));
                }
            });
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let shared = input.shared.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    shared.borrow_mut().pressed.release(key);
                }
            });
            let _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Focus lost: key-up events will never arrive
        {
            let shared = input.shared.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                shared.borrow_mut().pressed.clear();
                log::info!("Window blurred, released all keys");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer, scaled from CSS pixels to field coordinates
        {
            let shared = input.shared.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let w = canvas_clone.client_width().max(1) as f32;
                let h = canvas_clone.client_height().max(1) as f32;
                let x = event.offset_x() as f32 * FIELD_WIDTH / w;
                let y = event.offset_y() as f32 * FIELD_HEIGHT / h;
                shared.borrow_mut().pointer = Vec2::new(x, y);
            });
            let _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        input
    }
}

impl InputSource for WebInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.shared.borrow_mut().pending)
    }

    fn pressed_keys(&self) -> PressedKeys {
        self.shared.borrow().pressed.clone()
    }

    fn pointer_position(&self) -> Vec2 {
        self.shared.borrow().pointer
    }
}
