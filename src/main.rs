//! Evil Circle entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use evil_circle::renderer::WebCanvas;
    use evil_circle::settings::Settings;
    use evil_circle::sim::{
        Bounds, ControlCommand, ControlMode, Direction, SimState, surface_point, tick,
    };

    /// Everything the frame loop and input callbacks share
    struct Game {
        state: SimState,
        canvas: WebCanvas,
        /// Text element showing the live count
        label: Option<Element>,
    }

    impl Game {
        fn update_label(&self) {
            if let Some(el) = &self.label {
                el.set_text_content(Some(&self.state.live.label()));
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Evil Circle starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")?
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        // Canvas takes the viewport size once; no resize handling
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let bounds = Bounds::new(width as f32, height as f32);

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let state = SimState::new(&settings, bounds, seed);

        log::info!(
            "Canvas {}x{}, {} balls, {} control, seed {}",
            width,
            height,
            state.balls.len(),
            settings.control_mode.as_str(),
            seed
        );

        let game = Rc::new(RefCell::new(Game {
            state,
            canvas: WebCanvas::new(&canvas)?,
            label: document.query_selector("p")?,
        }));
        game.borrow().update_label();

        match settings.control_mode {
            ControlMode::Pointer => setup_pointer_handlers(&window, &canvas, game.clone())?,
            ControlMode::Keyboard => setup_keyboard_handler(&window, game.clone())?,
        }

        request_animation_frame(game);

        log::info!("Evil Circle running!");
        Ok(())
    }

    fn setup_pointer_handlers(
        window: &web_sys::Window,
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Offsets are taken once, like the canvas size
        let rect = canvas.get_bounding_client_rect();
        let (left, top) = (rect.left() as f32, rect.top() as f32);

        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let p = surface_point(event.client_x() as f32, event.client_y() as f32, left, top);
                game.borrow_mut().state.commands.push(ControlCommand::MoveTo(p));
            });
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move; not passive so the page does not scroll
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if let Some(touch) = event.touches().get(0) {
                    let p = surface_point(touch.client_x() as f32, touch.client_y() as f32, left, top);
                    game.borrow_mut().state.commands.push(ControlCommand::MoveTo(p));
                }
                event.prevent_default();
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_keyboard_handler(window: &web_sys::Window, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(dir) = Direction::from_key(&event.key()) {
                game.borrow_mut().state.commands.push(ControlCommand::Nudge(dir));
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window; frame loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
            return;
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let g = &mut *g;

            match tick(&mut g.state, &mut g.canvas) {
                Ok(report) => {
                    if report.eliminated > 0 {
                        g.update_label();
                    }
                }
                Err(e) => {
                    // Fatal: no further frames are scheduled
                    log::error!("Render error, stopping: {:?}", e);
                    return;
                }
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use evil_circle::renderer::RecordingCanvas;
    use evil_circle::settings::Settings;
    use evil_circle::sim::{Bounds, ControlCommand, ControlMode, Direction, SimState, tick};
    use glam::Vec2;

    /// Frames simulated in headless mode
    const HEADLESS_TICKS: u64 = 3600;

    env_logger::init();
    log::info!("Evil Circle (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the canvas version");

    let path = std::env::args().nth(1).map(std::path::PathBuf::from);
    let settings = Settings::load_from(path.as_deref());
    let seed = settings.seed.unwrap_or(0x5eed);
    let bounds = Bounds::new(800.0, 600.0);
    let mut state = SimState::new(&settings, bounds, seed);
    let mut canvas = RecordingCanvas::new();

    log::info!("{} balls, seed {}", state.balls.len(), seed);
    println!("{}", state.live.label());

    for frame in 0..HEADLESS_TICKS {
        // Sweep the evil circle across the canvas in a lissajous path
        let t = frame as f32 / 60.0;
        let command = match state.evil.mode() {
            ControlMode::Pointer => ControlCommand::MoveTo(Vec2::new(
                bounds.width * (0.5 + 0.45 * (t * 0.7).sin()),
                bounds.height * (0.5 + 0.45 * (t * 1.1).cos()),
            )),
            ControlMode::Keyboard => {
                let dirs = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
                ControlCommand::Nudge(dirs[(frame / 20 % 4) as usize])
            }
        };
        state.commands.push(command);

        canvas.clear();
        let report = match tick(&mut state, &mut canvas) {
            Ok(report) => report,
            Err(never) => match never {},
        };
        if report.eliminated > 0 {
            println!("{}", state.live.label());
        }
        if report.remaining == 0 {
            log::info!("All balls eaten after {} frames", frame + 1);
            break;
        }
    }

    log::info!(
        "Finished after {} frames with {} entities on screen",
        state.ticks,
        state.entities().count()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
