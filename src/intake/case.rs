// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used in the notification when no case category was chosen
pub const CASE_TYPE_NOT_SPECIFIED: &str = "Not specified";

/// The inputs of the contact form
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FormField {
	Name,
	DiscordHandle,
	CaseType,
	CaseDetails,
}

impl FormField {
	pub const ALL: [FormField; 4] = [
		FormField::Name,
		FormField::DiscordHandle,
		FormField::CaseType,
		FormField::CaseDetails,
	];

	/// The element ID of the field on the page
	pub fn element_id(&self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::DiscordHandle => "discord",
			Self::CaseType => "caseType",
			Self::CaseDetails => "case",
		}
	}

	/// Whether the field must be filled in for a submission to go through
	pub fn is_required(&self) -> bool {
		!matches!(self, Self::CaseType)
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
	Corporate,
	Criminal,
	Civil,
	Contract,
	IntellectualProperty,
	Other,
}

impl CaseCategory {
	pub const ALL: [CaseCategory; 6] = [
		CaseCategory::Corporate,
		CaseCategory::Criminal,
		CaseCategory::Civil,
		CaseCategory::Contract,
		CaseCategory::IntellectualProperty,
		CaseCategory::Other,
	];

	/// The option value used for the category in the form
	pub fn key(&self) -> &'static str {
		match self {
			Self::Corporate => "corporate",
			Self::Criminal => "criminal",
			Self::Civil => "civil",
			Self::Contract => "contract",
			Self::IntellectualProperty => "intellectual_property",
			Self::Other => "other",
		}
	}

	pub fn from_key(key: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|category| category.key() == key)
	}

	/// Resolves the display text for a selected option value. Empty and unknown values resolve to
	/// [CASE_TYPE_NOT_SPECIFIED].
	pub fn label_for_key(key: &str) -> &'static str {
		Self::from_key(key)
			.map(|category| category.label())
			.unwrap_or(CASE_TYPE_NOT_SPECIFIED)
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Corporate => "Corporate Law",
			Self::Criminal => "Criminal Defense",
			Self::Civil => "Civil Litigation",
			Self::Contract => "Contract Dispute",
			Self::IntellectualProperty => "Intellectual Property",
			Self::Other => "Other",
		}
	}
}

impl fmt::Display for CaseCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// Snapshot of the form taken when the user submits it.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct CaseSubmission {
	pub name: String,
	pub discord_handle: String,
	pub case_type: String,
	pub case_details: String,
	/// Submission time, formatted with the submitter's local conventions
	pub submitted_at: String,
}

impl CaseSubmission {
	/// Builds a snapshot from raw field values, trimming surrounding whitespace.
	pub fn from_fields(
		name: &str,
		discord_handle: &str,
		case_type: &str,
		case_details: &str,
		submitted_at: impl Into<String>,
	) -> Self {
		Self {
			name: name.trim().to_string(),
			discord_handle: discord_handle.trim().to_string(),
			case_type: case_type.trim().to_string(),
			case_details: case_details.trim().to_string(),
			submitted_at: submitted_at.into(),
		}
	}

	pub fn case_type_label(&self) -> &'static str {
		CaseCategory::label_for_key(&self.case_type)
	}
}
