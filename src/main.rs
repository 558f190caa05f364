//! Invader Sweep entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlImageElement, KeyboardEvent};

    use invader_sweep::Tuning;
    use invader_sweep::platform::key_from_name;
    use invader_sweep::renderer::CanvasRenderer;
    use invader_sweep::sim::{Key, SpriteKind, World, tick};

    /// Game instance holding all state
    struct Game {
        world: World,
        renderer: CanvasRenderer,
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Invader Sweep starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        // Size the canvas to the viewport once; it is not resized afterwards
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        let tuning = load_tuning(&document);
        let seed = js_sys::Date::now() as u64;
        let world = World::new(Vec2::new(width as f32, height as f32), tuning, seed);
        log::info!("World initialized with seed: {}", seed);

        let ship = HtmlImageElement::new()?;
        let invader = HtmlImageElement::new()?;
        let renderer = CanvasRenderer::new(&canvas, ship.clone(), invader.clone())?;
        let game = Rc::new(RefCell::new(Game { world, renderer }));

        load_sprite(&ship, SpriteKind::Ship, game.clone());
        load_sprite(&invader, SpriteKind::Invader, game.clone());

        setup_input_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Invader Sweep running!");
        Ok(())
    }

    /// Read optional balance overrides from `<script id="tuning" type="application/json">`
    fn load_tuning(document: &Document) -> Tuning {
        let Some(json) = document
            .get_element_by_id("tuning")
            .and_then(|el| el.text_content())
        else {
            return Tuning::default();
        };

        match Tuning::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning overrides: {}", e);
                Tuning::default()
            }
        }
    }

    /// Start decoding a sprite; the world hears about it from `onload`
    fn load_sprite(image: &HtmlImageElement, kind: SpriteKind, game: Rc<RefCell<Game>>) {
        {
            let image_clone = image.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().world.sprite_loaded(
                    kind,
                    image_clone.natural_width() as f32,
                    image_clone.natural_height() as f32,
                );
            });
            image.set_onload(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                log::warn!("Failed to load sprite {}", kind.path());
            });
            image.set_onerror(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
        }

        image.set_src(kind.path());
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_from_name(&event.key()) {
                    if key == Key::Fire {
                        // Keep space from scrolling the page
                        event.prevent_default();
                    }
                    game.borrow_mut().world.key_down(key);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = key_from_name(&event.key()) {
                    game.borrow_mut().world.key_up(key);
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Window blur: key-up events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().world.input.clear();
                log::info!("Input cleared (window blur)");
            });
            window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { world, renderer } = &mut *g;
            let events = tick(world, renderer);
            if events.grids_cleared > 0 {
                log::info!("{} grid(s) cleared", events.grids_cleared);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(err) = wasm_game::run().await {
        web_sys::console::error_1(&err);
        log::error!("Startup failed: {:?}", err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Invader Sweep (native) starting...");
    log::info!("Native mode runs a headless session - run with `trunk serve` for the web version");

    run_headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a scripted session against a recording surface and print a summary
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_session() {
    use glam::Vec2;
    use invader_sweep::Tuning;
    use invader_sweep::renderer::RecordingSurface;
    use invader_sweep::sim::{Key, SpriteKind, World, tick};

    const SESSION_TICKS: u32 = 60 * 60;

    let mut world = World::new(Vec2::new(1280.0, 720.0), Tuning::default(), 0x5EED);
    world.sprite_loaded(SpriteKind::Ship, 256.0, 256.0);
    world.sprite_loaded(SpriteKind::Invader, 150.0, 150.0);

    let mut surface = RecordingSurface::new();
    let (mut shots, mut kills, mut spawned, mut cleared) = (0, 0, 0, 0);

    for frame in 0..SESSION_TICKS {
        // Sweep back and forth, tapping fire
        match frame % 180 {
            0 => {
                world.key_up(Key::Right);
                world.key_down(Key::Left);
            }
            90 => {
                world.key_up(Key::Left);
                world.key_down(Key::Right);
            }
            _ => {}
        }
        if frame % 12 == 0 {
            world.key_down(Key::Fire);
        } else if frame % 12 == 6 {
            world.key_up(Key::Fire);
        }

        surface.take();
        let events = tick(&mut world, &mut surface);
        shots += events.shots_fired;
        kills += events.kills;
        cleared += events.grids_cleared;
        if events.grid_spawned {
            spawned += 1;
        }
    }

    println!(
        "\nSession over after {} ticks: {} shots, {} kills, {} grids spawned, {} cleared, {} alive ({} invaders)",
        SESSION_TICKS,
        shots,
        kills,
        spawned,
        cleared,
        world.grids.len(),
        world.invader_count()
    );
}
