//! Eyes Tracker entry point
//!
//! Handles platform-specific initialization and runs the render loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

    use eyes_tracker::Settings;
    use eyes_tracker::chrome;
    use eyes_tracker::platform::{FrameClock, PointerState, Viewport};
    use eyes_tracker::renderer::{RenderState, tessellate};
    use eyes_tracker::scene::{FrameInput, Layout, render_frame};

    /// Page instance holding all per-session state
    struct App {
        settings: Settings,
        layout: Layout,
        pointer: PointerState,
        clock: FrameClock,
        render_state: Option<RenderState>,
    }

    impl App {
        fn new(settings: Settings, viewport: Viewport) -> Self {
            Self {
                settings,
                layout: Layout::new(viewport.width, viewport.height),
                pointer: PointerState::default(),
                clock: FrameClock::new(),
                render_state: None,
            }
        }

        /// Apply a new viewport before the next frame
        fn resize(&mut self, canvas: &HtmlCanvasElement, viewport: Viewport) {
            self.layout.resize(viewport.width, viewport.height);

            let (w, h) = viewport.physical_size();
            canvas.set_width(w);
            canvas.set_height(h);
            if let Some(ref mut render_state) = self.render_state {
                render_state.resize(w, h, (viewport.width, viewport.height));
            }
            log::debug!(
                "Resized to {}x{} @{}x (logo y = {:.1})",
                viewport.width,
                viewport.height,
                viewport.pixel_ratio,
                self.layout.logo_y
            );
        }

        /// Build and present one frame
        fn frame(&mut self, time: f64) {
            let dt = self.clock.tick(time);
            if FrameClock::is_long_frame(dt) {
                log::debug!("Long frame: {:.0} ms", dt * 1000.0);
            }

            let input = FrameInput {
                layout: &self.layout,
                pointer: self.pointer.position(),
                time,
            };
            let commands = render_frame(&input, &self.settings);
            let tessellation = tessellate(&commands);

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&tessellation) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            if self.settings.log_fps && self.clock.should_report(time) {
                log::debug!("FPS: {}", self.clock.fps());
            }
        }
    }

    fn js_err(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    fn window() -> Result<Window, JsValue> {
        web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
    }

    fn document() -> Result<Document, JsValue> {
        window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))
    }

    fn read_viewport(window: &Window) -> Viewport {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Viewport::new(width as f32, height as f32, window.device_pixel_ratio() as f32)
    }

    /// Find `#canvas`, or create a full-window one
    fn canvas(document: &Document) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(el) = document.get_element_by_id("canvas") {
            return el
                .dyn_into::<HtmlCanvasElement>()
                .map_err(|_| JsValue::from_str("#canvas is not a canvas"));
        }
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_id("canvas");
        canvas.set_attribute(
            "style",
            "position:absolute;left:0;top:0;width:100vw;height:100vh",
        )?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&canvas)?;
        Ok(canvas)
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace).map_err(js_err)?;

        let window = window()?;
        let document = document()?;
        let canvas = canvas(&document)?;

        let settings = Settings::load(&canvas);
        log::set_max_level(settings.level().to_level_filter());
        log::info!("Eyes Tracker starting (border: {})", settings.border.as_str());

        let viewport = read_viewport(&window);
        let (width, height) = viewport.physical_size();
        canvas.set_width(width);
        canvas.set_height(height);

        chrome::dom::describe(&canvas)?;
        chrome::dom::mount(&document, viewport.height)?;

        let app = Rc::new(RefCell::new(App::new(settings, viewport)));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(js_err)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(js_err)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(
            surface,
            &adapter,
            width,
            height,
            (viewport.width, viewport.height),
        )
        .await
        .map_err(js_err)?;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&window, app.clone())?;
        setup_resize_handler(&window, &canvas, app.clone())?;

        request_animation_frame(app);

        log::info!("Eyes Tracker running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        // Mouse move - client coordinates match the full-window canvas
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                app.borrow_mut()
                    .pointer
                    .update(event.client_x() as f32, event.client_y() as f32);
            });
            window
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start/move - first touch drives the pointer
        for kind in ["touchstart", "touchmove"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    app.borrow_mut()
                        .pointer
                        .update(touch.client_x() as f32, touch.client_y() as f32);
                }
            });
            window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_resize_handler(
        window: &Window,
        canvas: &HtmlCanvasElement,
        app: Rc<RefCell<App>>,
    ) -> Result<(), JsValue> {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let viewport = read_viewport(&window);
            app.borrow_mut().resize(&canvas, viewport);
            if let Some(document) = window.document() {
                chrome::dom::reposition_footer(&document, viewport.height);
            }
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window, render loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("Eyes Tracker failed to start: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Eyes Tracker (native) starting...");
    log::info!("The page runs in the browser - build for wasm32 and serve it for the live version");

    preview::print_frame();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless preview: one frame's draw list as JSON on stdout
#[cfg(not(target_arch = "wasm32"))]
mod preview {
    use glam::Vec2;
    use serde::Serialize;

    use eyes_tracker::Settings;
    use eyes_tracker::renderer::tessellate;
    use eyes_tracker::scene::{DrawCommand, FrameInput, Layout, render_frame};

    const PREVIEW_WIDTH: f32 = 1280.0;
    const PREVIEW_HEIGHT: f32 = 720.0;

    #[derive(Serialize)]
    struct Preview<'a> {
        layout: &'a Layout,
        pointer: Vec2,
        commands: &'a [DrawCommand],
    }

    pub fn print_frame() {
        let settings = Settings::load();
        let layout = Layout::new(PREVIEW_WIDTH, PREVIEW_HEIGHT);
        let pointer = Vec2::new(PREVIEW_WIDTH / 4.0, PREVIEW_HEIGHT / 4.0);

        let input = FrameInput {
            layout: &layout,
            pointer,
            time: 0.0,
        };
        let commands = render_frame(&input, &settings);
        log::info!(
            "Preview frame: {} commands, {} vertices",
            commands.len(),
            tessellate(&commands).vertices.len()
        );

        let preview = Preview {
            layout: &layout,
            pointer,
            commands: &commands,
        };
        match serde_json::to_string_pretty(&preview) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize preview: {}", e),
        }
    }
}
