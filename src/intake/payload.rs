// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::case::CaseSubmission;
use serde::{Deserialize, Serialize};

pub const NOTIFICATION_CONTENT: &str = "**NEW LEGAL CONSULTATION REQUEST**";
pub const NOTIFICATION_TITLE: &str = "Case Submission Details";
pub const NOTIFICATION_COLOR: u32 = 0xd4af37;
pub const NOTIFICATION_FOOTER: &str = "Harvey Spector Law Firm - Case Management System";

/// Maximum number of characters of case details carried in a notification
pub const MAX_CASE_DETAILS_LENGTH: usize = 1000;
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// The message posted to the intake webhook for one case submission
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationPayload {
	pub content: String,
	pub embeds: Vec<NotificationEmbed>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationEmbed {
	pub title: String,
	pub color: u32,
	pub fields: Vec<NotificationField>,
	pub footer: NotificationFooter,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationField {
	pub name: String,
	pub value: String,
	pub inline: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationFooter {
	pub text: String,
}

impl NotificationField {
	fn new(name: &str, value: impl Into<String>, inline: bool) -> Self {
		Self {
			name: name.to_string(),
			value: value.into(),
			inline,
		}
	}
}

impl NotificationPayload {
	pub fn for_submission(submission: &CaseSubmission) -> Self {
		let fields = vec![
			NotificationField::new("Client Name", submission.name.clone(), true),
			NotificationField::new("Discord Contact", submission.discord_handle.clone(), true),
			NotificationField::new("Case Type", submission.case_type_label(), true),
			NotificationField::new("Case Details", truncate_case_details(&submission.case_details), false),
			NotificationField::new("Submission Time", submission.submitted_at.clone(), true),
		];
		let embed = NotificationEmbed {
			title: NOTIFICATION_TITLE.to_string(),
			color: NOTIFICATION_COLOR,
			fields,
			footer: NotificationFooter {
				text: NOTIFICATION_FOOTER.to_string(),
			},
		};

		Self {
			content: NOTIFICATION_CONTENT.to_string(),
			embeds: vec![embed],
		}
	}
}

/// Cuts case details down to [MAX_CASE_DETAILS_LENGTH] characters, marking the cut with [TRUNCATION_MARKER].
pub fn truncate_case_details(details: &str) -> String {
	match details.char_indices().nth(MAX_CASE_DETAILS_LENGTH) {
		Some((cut_index, _)) => format!("{}{}", &details[..cut_index], TRUNCATION_MARKER),
		None => details.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn long_details_are_truncated() {
		let details = "a".repeat(600) + &"b".repeat(900);
		let truncated = truncate_case_details(&details);
		assert_eq!(truncated, format!("{}{}{}", "a".repeat(600), "b".repeat(400), TRUNCATION_MARKER));
	}

	#[test]
	fn details_at_the_limit_are_kept() {
		let details = "c".repeat(MAX_CASE_DETAILS_LENGTH);
		assert_eq!(truncate_case_details(&details), details);
	}

	#[test]
	fn truncation_counts_characters() {
		let details = "é".repeat(1001);
		let truncated = truncate_case_details(&details);
		assert_eq!(truncated.chars().count(), MAX_CASE_DETAILS_LENGTH + TRUNCATION_MARKER.len());
		assert!(truncated.starts_with(&"é".repeat(1000)));
	}

	#[test]
	fn payload_has_webhook_shape() {
		let submission = CaseSubmission::from_fields("Louis Litt", "louis#1234", "", "Mudding", "1/2/2025, 3:04:05 PM");
		let payload = NotificationPayload::for_submission(&submission);
		let value = serde_json::to_value(&payload).unwrap();

		assert_eq!(
			value,
			json!({
				"content": "**NEW LEGAL CONSULTATION REQUEST**",
				"embeds": [{
					"title": "Case Submission Details",
					"color": 0xd4af37,
					"fields": [
						{ "name": "Client Name", "value": "Louis Litt", "inline": true },
						{ "name": "Discord Contact", "value": "louis#1234", "inline": true },
						{ "name": "Case Type", "value": "Not specified", "inline": true },
						{ "name": "Case Details", "value": "Mudding", "inline": false },
						{ "name": "Submission Time", "value": "1/2/2025, 3:04:05 PM", "inline": true }
					],
					"footer": { "text": "Harvey Spector Law Firm - Case Management System" }
				}]
			})
		);
	}

	#[test]
	fn payload_carries_truncated_details() {
		let details = "d".repeat(1500);
		let submission = CaseSubmission::from_fields("Donna", "donna_p", "corporate", &details, "now");
		let payload = NotificationPayload::for_submission(&submission);
		let fields = &payload.embeds[0].fields;

		assert_eq!(fields[2].value, "Corporate Law");
		assert_eq!(fields[3].value, format!("{}{}", "d".repeat(1000), TRUNCATION_MARKER));
	}
}
