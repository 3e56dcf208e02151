// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::intake::case::{CaseSubmission, FormField};
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MenuState {
	#[default]
	Closed,
	Open,
}

impl MenuState {
	pub fn toggled(self) -> Self {
		match self {
			Self::Closed => Self::Open,
			Self::Open => Self::Closed,
		}
	}

	pub fn is_open(self) -> bool {
		self == Self::Open
	}

	/// Font Awesome class of the menu button icon
	pub fn icon_class(self) -> &'static str {
		match self {
			Self::Closed => "fa-bars",
			Self::Open => "fa-times",
		}
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Severity {
	Success,
	Error,
}

impl Severity {
	pub fn class(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResponseMessage {
	pub text: String,
	pub severity: Severity,
}

impl ResponseMessage {
	pub fn success(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			severity: Severity::Success,
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			severity: Severity::Error,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SubmitControl {
	#[default]
	Ready,
	Busy,
}

/// The two navbar looks, picked by how far the page has scrolled
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NavbarPreset {
	#[default]
	AtTop,
	Scrolled,
}

impl NavbarPreset {
	pub const SCROLL_THRESHOLD: f64 = 50.0;

	pub fn for_offset(offset: f64) -> Self {
		if offset > Self::SCROLL_THRESHOLD {
			Self::Scrolled
		} else {
			Self::AtTop
		}
	}

	pub fn background(self) -> &'static str {
		match self {
			Self::AtTop => "rgba(13, 27, 42, 0.95)",
			Self::Scrolled => "rgba(13, 27, 42, 0.98)",
		}
	}

	pub fn box_shadow(self) -> &'static str {
		match self {
			Self::AtTop => "none",
			Self::Scrolled => "0 5px 20px rgba(0, 0, 0, 0.1)",
		}
	}
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FieldValidity {
	#[default]
	Neutral,
	Invalid,
}

impl FieldValidity {
	pub fn border_color(self) -> &'static str {
		match self {
			Self::Neutral => "rgba(255, 255, 255, 0.1)",
			Self::Invalid => "var(--error)",
		}
	}
}

/// A single change to what the page shows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum VisualState {
	Menu(MenuState),
	Response(ResponseMessage),
	ResponseHidden,
	Submit(SubmitControl),
	Navbar(NavbarPreset),
	Field(FormField, FieldValidity),
}

/// What the page controller can see and change on the rendered page.
pub trait PageSurface: Clone + 'static {
	/// Raw, untrimmed value of a form field
	fn field_value(&self, field: FormField) -> String;

	fn menu_state(&self) -> MenuState;

	fn set_visual_state(&self, state: VisualState);

	/// Resets every form field to its empty value
	fn clear_fields(&self);

	fn navbar_height(&self) -> f64;

	/// Vertical document offset of the element with the given ID, if it exists
	fn element_offset(&self, element_id: &str) -> Option<f64>;

	fn scroll_to(&self, top: f64);

	/// Brings the response message into view
	fn reveal_response(&self);
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RelayError {
	#[error("intake relay rejected the submission: {0}")]
	Rejected(String),
	#[error("intake relay could not be reached: {0}")]
	Unreachable(String),
}

/// Delivers a validated case submission to the firm.
pub trait CaseRelay: Clone + 'static {
	fn deliver(&self, submission: CaseSubmission) -> impl Future<Output = Result<(), RelayError>>;
}

/// Wall clock and timer access for the controller.
pub trait Timekeeper: Clone + 'static {
	/// The current time formatted with the viewer's local conventions
	fn local_timestamp(&self) -> String;

	/// Runs `task` once after `delay`. Scheduled tasks can't be cancelled.
	fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>);
}
