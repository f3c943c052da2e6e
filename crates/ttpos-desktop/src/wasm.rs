//! Browser bindings for the desktop engine
//!
//! A thin wasm-bindgen wrapper exposing the engine to the host page. All
//! structured data crosses the boundary as JSON strings; pointer events
//! arrive as raw client coordinates.

use crate::engine::DesktopEngine;
use crate::input::InputResult;
use wasm_bindgen::prelude::*;

/// The exported desktop instance
#[wasm_bindgen]
pub struct Desktop {
    engine: DesktopEngine,
}

#[wasm_bindgen]
impl Desktop {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Desktop {
        let boot = js_sys::Date::now();
        web_sys::console::log_1(&format!("desktop booted at {}", boot).into());
        let mut engine = DesktopEngine::new();
        engine.init(width, height);
        Desktop { engine }
    }

    /// Open a window for an app kind; returns the window id
    #[wasm_bindgen(js_name = openApp)]
    pub fn open_app(&mut self, app_kind: &str) -> u64 {
        self.engine.open_app(app_kind)
    }

    #[wasm_bindgen(js_name = closeWindow)]
    pub fn close_window(&mut self, id: u64) {
        self.engine.close_window(id);
    }

    #[wasm_bindgen(js_name = focusWindow)]
    pub fn focus_window(&mut self, id: u64) {
        self.engine.focus_window(id);
    }

    #[wasm_bindgen(js_name = minimizeWindow)]
    pub fn minimize_window(&mut self, id: u64) {
        self.engine.minimize_window(id);
    }

    #[wasm_bindgen(js_name = toggleMaximize)]
    pub fn toggle_maximize(&mut self, id: u64) {
        self.engine.toggle_maximize(id);
    }

    #[wasm_bindgen(js_name = restoreWindow)]
    pub fn restore_window(&mut self, id: u64) {
        self.engine.restore_window(id);
    }

    #[wasm_bindgen(js_name = cycleFocus)]
    pub fn cycle_focus(&mut self) -> Option<u64> {
        self.engine.cycle_focus()
    }

    #[wasm_bindgen(js_name = focusedWindow)]
    pub fn focused_window(&self) -> Option<u64> {
        self.engine.focused()
    }

    /// Window content markup, or undefined for a stale id
    #[wasm_bindgen(js_name = contentFor)]
    pub fn content_for(&self, id: u64) -> Option<String> {
        self.engine.content_for(id)
    }

    #[wasm_bindgen(js_name = resizeDesktop)]
    pub fn resize_desktop(&mut self, width: f32, height: f32) {
        self.engine.resize_desktop(width, height);
    }

    /// Pointer press; returns "handled", "unhandled", or a JSON forward
    /// record for content clicks
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        input_result_json(self.engine.handle_pointer_down(x, y))
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        input_result_json(self.engine.handle_pointer_move(x, y))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> String {
        input_result_json(self.engine.handle_pointer_up())
    }

    #[wasm_bindgen(js_name = startMoveDrag)]
    pub fn start_move_drag(&mut self, id: u64, x: f32, y: f32) {
        self.engine.start_move_drag(id, x, y);
    }

    #[wasm_bindgen(js_name = startResizeDrag)]
    pub fn start_resize_drag(&mut self, id: u64, direction: &str, x: f32, y: f32) {
        self.engine.start_resize_drag(id, direction, x, y);
    }

    /// Visible windows back to front, as a JSON array
    #[wasm_bindgen(js_name = windowRects)]
    pub fn window_rects(&self) -> String {
        serde_json::to_string(&self.engine.window_rects()).unwrap_or_else(|_| "[]".to_string())
    }
}

fn input_result_json(result: InputResult) -> String {
    serde_json::to_string(&result).unwrap_or_else(|_| "\"unhandled\"".to_string())
}
