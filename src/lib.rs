// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
pub mod config;
pub mod controller;
pub mod intake;
pub mod web;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
	use crate::web::pages::app::App;
	console_error_panic_hook::set_once();
	leptos::mount::hydrate_body(App);
}
