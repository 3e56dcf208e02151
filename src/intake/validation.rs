// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::case::CaseSubmission;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static LEGACY_TAG: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[^#]{2,32}#[0-9]{4}$").expect("legacy tag pattern is valid"));
static MODERN_HANDLE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]{2,32}$").expect("modern handle pattern is valid"));

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
	#[error("Please fill in all required fields.")]
	MissingField,
	#[error("Please enter a valid Discord username (either username#0000 or username).")]
	InvalidHandleFormat,
}

/// Checks whether a Discord handle is in either the legacy `name#0000` form or the current username form.
pub fn is_valid_handle(handle: &str) -> bool {
	LEGACY_TAG.is_match(handle) || MODERN_HANDLE.is_match(handle)
}

/// Validates a trimmed form snapshot. The case type is optional.
pub fn validate_submission(submission: &CaseSubmission) -> Result<(), ValidationError> {
	if submission.name.is_empty() || submission.discord_handle.is_empty() || submission.case_details.is_empty() {
		return Err(ValidationError::MissingField);
	}
	if !is_valid_handle(&submission.discord_handle) {
		return Err(ValidationError::InvalidHandleFormat);
	}
	Ok(())
}
