//! `wasm-bindgen` host boundary for the planet scene.
//!
//! The host page fetches the shader sources and earth images, then drives
//! [`PlanetApp`] from its key handler, option check boxes and a
//! `requestAnimationFrame` loop calling [`PlanetApp::tick`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, HtmlImageElement, WebGlRenderingContext};

use crate::animation::Animation;
use crate::error::PlanetError;
use crate::input::key_rotation;
use crate::scene::{PlanetScene, PlanetTextures, ShaderSources};
use crate::webgl::WebGlBackend;

/// Route `log` records and panics to the browser console. Safe to call
/// more than once.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::debug!("logger already installed: {e}");
    }
}

#[wasm_bindgen]
pub struct PlanetApp {
    backend: WebGlBackend,
    scene: PlanetScene,
    animation: Animation,
}

#[wasm_bindgen]
impl PlanetApp {
    /// Bind to `canvas`, build the scene from the shaders in `shaders_json`
    /// and draw the first frame.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, shaders_json: &str) -> Result<PlanetApp, JsValue> {
        let gl = canvas
            .get_context("webgl")?
            .ok_or_else(|| JsValue::from_str("canvas has no webgl context"))?
            .dyn_into::<WebGlRenderingContext>()?;
        let shaders: ShaderSources = serde_json::from_str(shaders_json).map_err(|e| to_js(e.into()))?;
        #[allow(clippy::cast_precision_loss)]
        let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;

        let mut backend = WebGlBackend::new(gl);
        let scene = PlanetScene::new(&mut backend, &shaders, aspect).map_err(to_js)?;
        let mut app = Self { backend, scene, animation: Animation::default() };
        app.draw()?;
        Ok(app)
    }

    pub fn draw(&mut self) -> Result<(), JsValue> {
        self.scene.draw(&mut self.backend).map_err(to_js)
    }

    /// Rotate a joint for a `KeyboardEvent.key`. Returns whether the key
    /// was bound.
    #[wasm_bindgen(js_name = keyPress)]
    pub fn key_press(&mut self, key: &str) -> Result<bool, JsValue> {
        let Some((joint, degrees)) = key_rotation(key) else {
            return Ok(false);
        };
        self.scene.rotate_joint(joint, degrees);
        self.draw()?;
        Ok(true)
    }

    /// Toggle one of the labelled draw options and redraw.
    #[wasm_bindgen(js_name = setDrawOption)]
    pub fn set_draw_option(&mut self, label: &str, on: bool) -> Result<(), JsValue> {
        self.scene.draw_options.set(label, on).map_err(to_js)?;
        self.draw()
    }

    /// Current options as `{"Planet": true, ...}`.
    #[wasm_bindgen(js_name = drawOptionsJson)]
    pub fn draw_options_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.scene.draw_options).map_err(|e| to_js(e.into()))
    }

    /// Upload the four earth images and bind them to the planet program.
    #[wasm_bindgen(js_name = setTextures)]
    pub fn set_textures(
        &mut self,
        day: &HtmlImageElement,
        night: &HtmlImageElement,
        bathymetry: &HtmlImageElement,
        clouds: &HtmlImageElement,
    ) -> Result<(), JsValue> {
        let textures = PlanetTextures {
            day: self.backend.upload_image(day).map_err(to_js)?,
            night: self.backend.upload_image(night).map_err(to_js)?,
            bathymetry: self.backend.upload_image(bathymetry).map_err(to_js)?,
            clouds: self.backend.upload_image(clouds).map_err(to_js)?,
        };
        self.scene.set_textures(&mut self.backend, &textures).map_err(to_js)?;
        self.draw()
    }

    /// Follow a resized canvas.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.scene.camera.set_aspect(width / height);
        self.draw()
    }

    /// Advance the animation by `dt` seconds, redrawing if anything moved.
    pub fn tick(&mut self, dt: f32) -> Result<(), JsValue> {
        if self.animation.tick(&mut self.scene, dt) {
            self.draw()?;
        }
        Ok(())
    }

    #[wasm_bindgen(js_name = startAnimation)]
    pub fn start_animation(&mut self) {
        self.animation.resume();
    }

    #[wasm_bindgen(js_name = stopAnimation)]
    pub fn stop_animation(&mut self) {
        self.animation.stop();
    }

    /// Degrees per second; non-finite values are ignored.
    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&mut self, degrees_per_second: f32) {
        self.animation.set_speed(degrees_per_second);
    }

    #[wasm_bindgen(js_name = isAnimating)]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_running()
    }
}

fn to_js(err: PlanetError) -> JsValue {
    log::warn!("{err}");
    JsValue::from_str(&err.to_string())
}
