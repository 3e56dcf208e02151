// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The page controller: every behavior of the landing page, independent of how the page is rendered.
//!
//! The controller never touches the page directly. It reads and writes through a [PageSurface], sends cases through
//! a [CaseRelay] and reads the clock through a [Timekeeper], so each behavior can be driven with plain [UiEvent]s.

mod busy;
pub mod events;
pub mod surface;
#[cfg(test)]
mod tests;

use crate::intake::case::{CaseSubmission, FormField};
use crate::intake::validation::{ValidationError, validate_submission};
use busy::SubmitBusyGuard;
use events::UiEvent;
use leptos::logging::{error, warn};
use std::time::Duration;
use surface::{
	CaseRelay, FieldValidity, MenuState, NavbarPreset, PageSurface, RelayError, ResponseMessage, Timekeeper,
	VisualState,
};

pub const FALLBACK_CONTACT: &str = "HarveySpector#0001";
pub const SUCCESS_MESSAGE: &str =
	"✅ Your case has been submitted successfully. Our legal team will contact you via Discord within 2-4 hours.";

/// Extra room left between the fixed navbar and an anchor target
pub const ANCHOR_SCROLL_MARGIN: f64 = 20.0;
pub const SUCCESS_MESSAGE_LIFETIME: Duration = Duration::from_secs(10);

pub fn failure_message() -> String {
	format!(
		"❌ There was an error submitting your request. Please try again or contact {} directly on Discord.",
		FALLBACK_CONTACT
	)
}

/// How a form submission attempt ended
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SubmissionOutcome {
	Rejected(ValidationError),
	Delivered,
	Failed(RelayError),
}

#[derive(Clone, Copy)]
pub struct PageController<S, R, T> {
	surface: S,
	relay: R,
	timekeeper: T,
}

impl<S, R, T> PageController<S, R, T>
where
	S: PageSurface,
	R: CaseRelay,
	T: Timekeeper,
{
	pub fn new(surface: S, relay: R, timekeeper: T) -> Self {
		Self {
			surface,
			relay,
			timekeeper,
		}
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Handles one page event. Only form submission suspends; every other event completes without awaiting.
	pub async fn dispatch(&self, event: UiEvent) {
		match event {
			UiEvent::FormSubmitted => {
				self.submit_form().await;
			}
			other => self.handle_immediate(other),
		}
	}

	/// Handles the events that never suspend. Form submissions passed here are logged and dropped.
	pub fn handle_immediate(&self, event: UiEvent) {
		match event {
			UiEvent::MenuToggleRequested => self.toggle_menu(),
			UiEvent::NavLinkActivated => self.close_menu(),
			UiEvent::AnchorActivated { href } => self.scroll_to_anchor(&href),
			UiEvent::Scrolled { offset } => self.update_navbar(offset),
			UiEvent::FieldBlurred(field) => self.field_blurred(field),
			UiEvent::FieldChanged(field) => self.field_changed(field),
			UiEvent::FormSubmitted => warn!("Ignoring a form submission sent without awaiting dispatch"),
		}
	}

	fn toggle_menu(&self) {
		let new_state = self.surface.menu_state().toggled();
		self.surface.set_visual_state(VisualState::Menu(new_state));
	}

	fn close_menu(&self) {
		self.surface.set_visual_state(VisualState::Menu(MenuState::Closed));
	}

	fn scroll_to_anchor(&self, href: &str) {
		let Some(target_id) = href.strip_prefix('#') else {
			return;
		};
		if target_id.is_empty() {
			return;
		}
		let Some(target_offset) = self.surface.element_offset(target_id) else {
			return;
		};
		let top = target_offset - self.surface.navbar_height() - ANCHOR_SCROLL_MARGIN;
		self.surface.scroll_to(top);
	}

	fn update_navbar(&self, offset: f64) {
		self.surface
			.set_visual_state(VisualState::Navbar(NavbarPreset::for_offset(offset)));
	}

	fn field_blurred(&self, field: FormField) {
		let is_empty = self.surface.field_value(field).trim().is_empty();
		let validity = if is_empty && field.is_required() {
			FieldValidity::Invalid
		} else {
			FieldValidity::Neutral
		};
		self.surface.set_visual_state(VisualState::Field(field, validity));
	}

	fn field_changed(&self, field: FormField) {
		if !self.surface.field_value(field).trim().is_empty() {
			self.surface
				.set_visual_state(VisualState::Field(field, FieldValidity::Neutral));
		}
	}

	fn snapshot(&self) -> CaseSubmission {
		CaseSubmission::from_fields(
			&self.surface.field_value(FormField::Name),
			&self.surface.field_value(FormField::DiscordHandle),
			&self.surface.field_value(FormField::CaseType),
			&self.surface.field_value(FormField::CaseDetails),
			self.timekeeper.local_timestamp(),
		)
	}

	/// Validates the form and, if it passes, sends it through the relay and reports the result on the page.
	pub async fn submit_form(&self) -> SubmissionOutcome {
		let submission = self.snapshot();
		if let Err(validation_error) = validate_submission(&submission) {
			self.show_response(ResponseMessage::error(validation_error.to_string()));
			return SubmissionOutcome::Rejected(validation_error);
		}

		let delivery_result = {
			let _busy = SubmitBusyGuard::engage(&self.surface);
			self.relay.deliver(submission).await
		};

		match delivery_result {
			Ok(()) => {
				self.show_response(ResponseMessage::success(SUCCESS_MESSAGE));
				self.surface.clear_fields();
				self.surface.reveal_response();
				SubmissionOutcome::Delivered
			}
			Err(relay_error) => {
				error!("Error submitting form: {}", relay_error);
				self.show_response(ResponseMessage::error(failure_message()));
				SubmissionOutcome::Failed(relay_error)
			}
		}
	}

	fn show_response(&self, message: ResponseMessage) {
		let auto_hide = message.severity == surface::Severity::Success;
		self.surface.set_visual_state(VisualState::Response(message));

		if auto_hide {
			let surface = self.surface.clone();
			self.timekeeper.schedule_once(
				SUCCESS_MESSAGE_LIFETIME,
				Box::new(move || surface.set_visual_state(VisualState::ResponseHidden)),
			);
		}
	}
}
