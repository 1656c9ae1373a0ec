use wasm_bindgen::prelude::*;
use jorgtor_engine::InputEvent;

mod game;
use game::SuperJorgtor;

jorgtor_web::export_game!(SuperJorgtor, "super-jorgtor");
