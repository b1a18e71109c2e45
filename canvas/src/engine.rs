//! `wasm-bindgen` host boundary.
//!
//! [`Engine`] owns the browser surface and a [`SceneController`]. The host
//! page forwards button clicks and pointer events; the engine redraws
//! whenever a handler reports [`Action::RenderNeeded`]. Property panels are
//! driven by the JS callbacks registered with [`Engine::on_selection`] and
//! [`Engine::on_object_change`], which receive the shape as JSON (or `null`).

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::controller::{Action, SceneController};
use crate::error::CanvasError;
use crate::input::Button;
use crate::random::ShapeFactory;
use crate::render::WebSurface;
use crate::shape::Shape;
use crate::vec2::Point;

/// Route `log` records and panics to the browser console. Safe to call
/// more than once.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("logger already installed: {e}");
    }
}

/// The canvas engine as seen from JavaScript.
#[wasm_bindgen]
pub struct Engine {
    surface: WebSurface,
    factory: ShapeFactory,
    rng: SmallRng,
    controller: SceneController,
}

#[wasm_bindgen]
impl Engine {
    /// Bind to `canvas` and draw the (empty) scene. Fails if the element
    /// has no 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Engine, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let width = f64::from(canvas.width());
        let height = f64::from(canvas.height());
        log::info!("canvas engine bound to {width}x{height} canvas");

        let mut engine = Self {
            surface: WebSurface::new(ctx, width, height),
            factory: ShapeFactory::new(width, height),
            rng: SmallRng::seed_from_u64(entropy_seed()),
            controller: SceneController::default(),
        };
        engine.render()?;
        Ok(engine)
    }

    /// Follow a resized canvas element.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.surface.resize(width, height);
        self.factory = ShapeFactory::new(width, height);
        self.render()
    }

    // --- Demo buttons ---

    #[wasm_bindgen(js_name = addRandomLine)]
    pub fn add_random_line(&mut self) -> Result<(), JsValue> {
        let line = self.factory.line(&mut self.rng);
        self.add_and_select(line.into())
    }

    #[wasm_bindgen(js_name = addRandomCircle)]
    pub fn add_random_circle(&mut self) -> Result<(), JsValue> {
        let circle = self.factory.circle(&mut self.rng);
        self.add_and_select(circle.into())
    }

    #[wasm_bindgen(js_name = addRandomCurve)]
    pub fn add_random_curve(&mut self) -> Result<(), JsValue> {
        let curve = self.factory.curve(&mut self.rng).map_err(to_js)?;
        self.add_and_select(curve.into())
    }

    // --- Pointer events ---

    #[wasm_bindgen(js_name = onPointerDown)]
    pub fn on_pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let Some(button) = Button::from_dom(button) else {
            return Ok(());
        };
        let actions = self.controller.on_pointer_down(Point::new(x, y), button);
        self.process(&actions)
    }

    #[wasm_bindgen(js_name = onPointerMove)]
    pub fn on_pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.controller.on_pointer_move(Point::new(x, y));
        self.process(&actions)
    }

    #[wasm_bindgen(js_name = onPointerUp)]
    pub fn on_pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let Some(button) = Button::from_dom(button) else {
            return Ok(());
        };
        let actions = self.controller.on_pointer_up(Point::new(x, y), button);
        self.process(&actions)
    }

    #[wasm_bindgen(js_name = onPointerCancel)]
    pub fn on_pointer_cancel(&mut self) -> Result<(), JsValue> {
        let actions = self.controller.on_pointer_cancel();
        self.process(&actions)
    }

    // --- Render ---

    /// Redraw the scene and the selection's draggers.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.controller.draw(&mut self.surface).map_err(to_js)
    }

    // --- Property panels ---

    /// `"circle"`, `"line"`, `"curve"`, or `undefined` without a selection.
    #[wasm_bindgen(js_name = selectedKind)]
    #[must_use]
    pub fn selected_kind(&self) -> Option<String> {
        self.controller.selected_object().map(|s| s.kind().as_str().to_owned())
    }

    /// The selected shape as JSON, or `undefined`.
    #[wasm_bindgen(js_name = selectedJson)]
    pub fn selected_json(&self) -> Result<Option<String>, JsValue> {
        self.controller
            .selected_object()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| to_js(e.into()))
    }

    /// Replace the selected shape from a property-panel edit.
    ///
    /// The JSON must carry a `kind` tag; missing style or curve fields fall
    /// back to their defaults. Non-finite numbers and negative radii are
    /// rejected and leave the shape untouched.
    #[wasm_bindgen(js_name = applySelectedJson)]
    pub fn apply_selected_json(&mut self, json: &str) -> Result<(), JsValue> {
        let shape: Shape = serde_json::from_str(json).map_err(|e| to_js(e.into()))?;
        let actions = self.controller.replace_selected(shape).map_err(to_js)?;
        self.process(&actions)
    }

    // --- Observers ---

    /// Call `callback(json | null)` after every selection change.
    #[wasm_bindgen(js_name = onSelection)]
    pub fn on_selection(&mut self, callback: js_sys::Function) {
        self.controller.on_selection(move |shape| notify(&callback, shape));
    }

    /// Call `callback(json)` after the selected shape changed.
    #[wasm_bindgen(js_name = onObjectChange)]
    pub fn on_object_change(&mut self, callback: js_sys::Function) {
        self.controller.on_object_change(move |shape| notify(&callback, Some(shape)));
    }
}

impl Engine {
    fn add_and_select(&mut self, shape: Shape) -> Result<(), JsValue> {
        let id = self.controller.scene_mut().add(shape);
        self.controller.deselect();
        let actions = self.controller.select(id);
        self.process(&actions)
    }

    fn process(&mut self, actions: &[Action]) -> Result<(), JsValue> {
        if actions.contains(&Action::RenderNeeded) {
            self.render()?;
        }
        Ok(())
    }
}

fn notify(callback: &js_sys::Function, shape: Option<&Shape>) {
    let payload = match shape.map(serde_json::to_string).transpose() {
        Ok(Some(json)) => JsValue::from_str(&json),
        Ok(None) => JsValue::NULL,
        Err(e) => {
            log::warn!("cannot serialize shape for observer: {e}");
            return;
        }
    };
    if let Err(e) = callback.call1(&JsValue::NULL, &payload) {
        log::warn!("observer callback threw: {e:?}");
    }
}

fn to_js(err: CanvasError) -> JsValue {
    log::warn!("{err}");
    JsValue::from_str(&err.to_string())
}

fn entropy_seed() -> u64 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    seed
}
