//! Visitor matching for the browser bundle.
//!
//! The login form calls these on every keystroke with the names it fetched
//! from `GET /api/users`.

use wasm_bindgen::prelude::wasm_bindgen;

/// Index of the first visitor whose name equals `typed`, ignoring case.
#[wasm_bindgen(js_name = findVisitor)]
pub fn find_visitor(typed: &str, names: Vec<String>) -> Option<u32> {
    visitor::find_name(typed, names.iter().map(String::as_str)).map(|idx| idx as u32)
}

#[wasm_bindgen(js_name = reasonRequired)]
pub fn reason_required(typed: &str, names: Vec<String>) -> bool {
    find_visitor(typed, names).is_none()
}

/// `None` when the name is acceptable, otherwise the message to show.
#[wasm_bindgen(js_name = validateName)]
pub fn validate_name(name: &str) -> Option<String> {
    visitor::validate_name(name).err().map(str::to_string)
}
