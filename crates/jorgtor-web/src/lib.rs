pub mod runner;

pub use runner::GameRunner;

pub use js_sys;

/// Copy the current draw commands into a JS-owned array.
/// Use when the host cannot read wasm memory directly.
pub fn float_array(floats: &[f32]) -> js_sys::Float32Array {
    js_sys::Float32Array::from(floats)
}

/// Sheet image paths as a JS array of strings, indexed by sheet id.
pub fn string_array(items: &[&str]) -> js_sys::Array {
    items
        .iter()
        .map(|s| js_sys::JsString::from(*s))
        .collect()
}

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, key handlers, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use jorgtor_engine::*;
///
/// mod game;
/// use game::MyGame;
///
/// jorgtor_web::export_game!(MyGame, "my-game");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The game struct type that implements `jorgtor_engine::Game`
/// - `$game_name`: A string literal used in the initialization log message
///
/// Every accessor returns a zero value if called before `game_init()`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R: Default>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
                Some(runner) => f(runner),
                None => {
                    log::warn!("{}: called before game_init()", $game_name);
                    R::default()
                }
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            if with_runner(|r| r.init().is_ok()) {
                log::info!("{}: initialized", $game_name);
            }
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) -> bool {
            with_runner(|r| r.tick(dt))
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_quit() {
            with_runner(|r| r.push_input(InputEvent::Quit));
        }

        #[wasm_bindgen]
        pub fn game_is_running() -> bool {
            with_runner(|r| r.is_running())
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.header_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_draw_commands_ptr() -> *const f32 {
            RUNNER.with(|cell| {
                cell.borrow()
                    .as_ref()
                    .map_or(std::ptr::null(), |r| r.draw_commands_ptr())
            })
        }

        #[wasm_bindgen]
        pub fn get_draw_command_count() -> u32 {
            with_runner(|r| r.draw_command_count())
        }

        #[wasm_bindgen]
        pub fn get_draw_commands() -> $crate::js_sys::Float32Array {
            RUNNER.with(|cell| match cell.borrow().as_ref() {
                Some(r) => $crate::float_array(r.draw_floats()),
                None => $crate::float_array(&[]),
            })
        }

        #[wasm_bindgen]
        pub fn get_sheet_images() -> $crate::js_sys::Array {
            RUNNER.with(|cell| match cell.borrow().as_ref() {
                Some(r) => $crate::string_array(&r.sheet_images()),
                None => $crate::string_array(&[]),
            })
        }

        #[wasm_bindgen]
        pub fn get_screen_width() -> u32 {
            with_runner(|r| r.screen_width())
        }

        #[wasm_bindgen]
        pub fn get_screen_height() -> u32 {
            with_runner(|r| r.screen_height())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_draw_commands() -> u32 {
            with_runner(|r| r.max_draw_commands())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
