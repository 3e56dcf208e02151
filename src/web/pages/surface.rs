// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::contact::submit_case;
use crate::controller::PageController;
use crate::controller::surface::{
	CaseRelay, FieldValidity, MenuState, NavbarPreset, PageSurface, RelayError, ResponseMessage, SubmitControl,
	Timekeeper, VisualState,
};
use crate::intake::case::{CaseSubmission, FormField};
use leptos::html;
use leptos::prelude::*;
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use web_sys::{ScrollIntoViewOptions, ScrollLogicalPosition};

/// Used only off the browser, where there is no viewer locale to follow
#[cfg(not(feature = "hydrate"))]
const FALLBACK_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub type LandingController = PageController<SignalSurface, ServerRelay, BrowserTimekeeper>;

#[derive(Clone, Copy)]
pub struct SectionRefs {
	pub home: NodeRef<html::Section>,
	pub services: NodeRef<html::Section>,
	pub about: NodeRef<html::Section>,
	pub contact: NodeRef<html::Section>,
}

impl SectionRefs {
	fn new() -> Self {
		Self {
			home: NodeRef::new(),
			services: NodeRef::new(),
			about: NodeRef::new(),
			contact: NodeRef::new(),
		}
	}

	fn by_id(&self, element_id: &str) -> Option<NodeRef<html::Section>> {
		match element_id {
			"home" => Some(self.home),
			"services" => Some(self.services),
			"about" => Some(self.about),
			"contact" => Some(self.contact),
			_ => None,
		}
	}
}

/// Page state held in signals; the view renders from these and the controller writes to them.
#[derive(Clone, Copy)]
pub struct SignalSurface {
	pub name: RwSignal<String>,
	pub discord: RwSignal<String>,
	pub case_type: RwSignal<String>,
	pub case_details: RwSignal<String>,
	pub menu: RwSignal<MenuState>,
	pub response: RwSignal<Option<ResponseMessage>>,
	pub submit: RwSignal<SubmitControl>,
	pub navbar: RwSignal<NavbarPreset>,
	pub validity: RwSignal<HashMap<FormField, FieldValidity>>,
	pub navbar_ref: NodeRef<html::Nav>,
	pub response_ref: NodeRef<html::Div>,
	pub sections: SectionRefs,
}

impl SignalSurface {
	pub fn new() -> Self {
		Self {
			name: RwSignal::new(String::new()),
			discord: RwSignal::new(String::new()),
			case_type: RwSignal::new(String::new()),
			case_details: RwSignal::new(String::new()),
			menu: RwSignal::new(MenuState::default()),
			response: RwSignal::new(None),
			submit: RwSignal::new(SubmitControl::default()),
			navbar: RwSignal::new(NavbarPreset::default()),
			validity: RwSignal::new(HashMap::new()),
			navbar_ref: NodeRef::new(),
			response_ref: NodeRef::new(),
			sections: SectionRefs::new(),
		}
	}

	pub fn field(&self, field: FormField) -> RwSignal<String> {
		match field {
			FormField::Name => self.name,
			FormField::DiscordHandle => self.discord,
			FormField::CaseType => self.case_type,
			FormField::CaseDetails => self.case_details,
		}
	}

	/// Tracked read of a field's validity for use in the view
	pub fn field_validity(&self, field: FormField) -> FieldValidity {
		self.validity
			.with(|validity| validity.get(&field).copied().unwrap_or_default())
	}
}

impl Default for SignalSurface {
	fn default() -> Self {
		Self::new()
	}
}

impl PageSurface for SignalSurface {
	fn field_value(&self, field: FormField) -> String {
		self.field(field).get_untracked()
	}

	fn menu_state(&self) -> MenuState {
		self.menu.get_untracked()
	}

	fn set_visual_state(&self, state: VisualState) {
		match state {
			VisualState::Menu(menu) => self.menu.set(menu),
			VisualState::Response(message) => self.response.set(Some(message)),
			VisualState::ResponseHidden => self.response.set(None),
			VisualState::Submit(submit) => self.submit.set(submit),
			VisualState::Navbar(preset) => {
				if self.navbar.get_untracked() != preset {
					self.navbar.set(preset);
				}
			}
			VisualState::Field(field, field_validity) => self.validity.update(|validity| {
				validity.insert(field, field_validity);
			}),
		}
	}

	fn clear_fields(&self) {
		for field in FormField::ALL {
			self.field(field).set(String::new());
		}
	}

	fn navbar_height(&self) -> f64 {
		self.navbar_ref
			.get_untracked()
			.map(|navbar| f64::from(navbar.offset_height()))
			.unwrap_or_default()
	}

	fn element_offset(&self, element_id: &str) -> Option<f64> {
		let section = self.sections.by_id(element_id)?.get_untracked()?;
		Some(f64::from(section.offset_top()))
	}

	fn scroll_to(&self, top: f64) {
		window().scroll_to_with_x_and_y(0.0, top);
	}

	fn reveal_response(&self) {
		if let Some(response) = self.response_ref.get_untracked() {
			let options = ScrollIntoViewOptions::new();
			options.set_block(ScrollLogicalPosition::Nearest);
			response.scroll_into_view_with_scroll_into_view_options(&options);
		}
	}
}

/// Sends submissions to the site's own server, which holds the webhook credentials.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerRelay;

impl CaseRelay for ServerRelay {
	fn deliver(&self, submission: CaseSubmission) -> impl Future<Output = Result<(), RelayError>> {
		async move {
			submit_case(submission).await.map_err(relay_error)
		}
	}
}

/// Failures to reach the server at all are told apart from the server refusing the case.
fn relay_error(error: ServerFnError) -> RelayError {
	match error {
		ServerFnError::Request(message) => RelayError::Unreachable(message),
		other => RelayError::Rejected(other.to_string()),
	}
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimekeeper;

impl Timekeeper for BrowserTimekeeper {
	#[cfg(feature = "hydrate")]
	fn local_timestamp(&self) -> String {
		js_sys::Date::new_0()
			.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
			.into()
	}

	#[cfg(not(feature = "hydrate"))]
	fn local_timestamp(&self) -> String {
		chrono::Local::now().format(FALLBACK_TIMESTAMP_FORMAT).to_string()
	}

	fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
		set_timeout(task, delay);
	}
}
