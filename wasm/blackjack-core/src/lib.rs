use js_sys::Function;
use wasm_bindgen::prelude::*;

mod card;
mod deck;
mod error;
mod hand;
mod logger;
pub mod session;

pub use card::{battle, Battle, Card, Rank, Suit};
pub use deck::{CardSource, Deck};
pub use error::{Error, Result};
pub use hand::{Hand, HandState};

fn start(log_level: Option<&str>) {
    console_error_panic_hook::set_once();
    logger::init(logger::parse_level(log_level));
}

#[wasm_bindgen]
pub fn battle_cards(params: &JsValue) -> std::result::Result<JsValue, JsValue> {
    start(None);
    let input: session::BattleInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let result = session::run_battle(input)
        .map_err(|err| JsValue::from_str(&format!("Battle failed: {err}")))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn draw_cards(params: &JsValue) -> std::result::Result<JsValue, JsValue> {
    start(None);
    let input: session::DrawInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;

    let result = session::run_draw(input)
        .map_err(|err| JsValue::from_str(&format!("Draw failed: {err}")))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn run_session(params: &JsValue) -> std::result::Result<JsValue, JsValue> {
    let input: session::SessionInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
    start(input.log_level.as_deref());

    let result = session::run(input)
        .map_err(|err| JsValue::from_str(&format!("Session failed: {err}")))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}

#[wasm_bindgen]
pub fn run_session_with_progress(
    params: &JsValue,
    progress_callback: &Function,
) -> std::result::Result<JsValue, JsValue> {
    let input: session::SessionInput = serde_wasm_bindgen::from_value(params.clone())
        .map_err(|err| JsValue::from_str(&format!("Invalid input: {err}")))?;
    start(input.log_level.as_deref());

    let mut progress_cb = |current: u32, total: u32| {
        let _ = progress_callback.call2(
            &JsValue::NULL,
            &JsValue::from(current),
            &JsValue::from(total),
        );
    };

    let result = session::run_with_progress(input, &mut progress_cb)
        .map_err(|err| JsValue::from_str(&format!("Session failed: {err}")))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|err| JsValue::from_str(&format!("Serialization failed: {err}")))
}
