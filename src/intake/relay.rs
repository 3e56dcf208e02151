// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::payload::NotificationPayload;
use crate::config::WebhookConfig;
use miette::IntoDiagnostic;
use std::fmt;
use twilight_http::client::Client;
use twilight_model::channel::message::AllowedMentions;
use twilight_model::channel::message::embed::Embed;
use twilight_model::id::Id;
use twilight_model::id::marker::WebhookMarker;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder};
use twilight_validate::embed::EmbedValidationError;

/// Posts notifications to the intake webhook. Holds the webhook token, so it only ever lives on the server.
pub struct WebhookRelay {
	client: Client,
	webhook_id: Id<WebhookMarker>,
	token: String,
	username: Option<String>,
}

impl WebhookRelay {
	pub fn new(config: &WebhookConfig) -> Self {
		let client = Client::builder().timeout(config.timeout).build();
		Self {
			client,
			webhook_id: config.id,
			token: config.token.clone(),
			username: config.username.clone(),
		}
	}

	/// Executes the webhook with the notification. Any non-success response from Discord is an error.
	pub async fn deliver(&self, payload: &NotificationPayload) -> miette::Result<()> {
		let embeds = notification_embeds(payload).into_diagnostic()?;
		// Submitted text is user input; nothing in it may ping anyone.
		let allowed_mentions = AllowedMentions::default();

		let mut request = self
			.client
			.execute_webhook(self.webhook_id, &self.token)
			.content(&payload.content)
			.embeds(&embeds)
			.allowed_mentions(Some(&allowed_mentions));
		if let Some(username) = self.username.as_deref() {
			request = request.username(username);
		}

		request.await.into_diagnostic()?;
		tracing::debug!(webhook = %self.webhook_id, "Delivered intake notification");
		Ok(())
	}
}

impl fmt::Debug for WebhookRelay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WebhookRelay")
			.field("webhook_id", &self.webhook_id)
			.field("username", &self.username)
			.finish_non_exhaustive()
	}
}

/// Converts the notification into Discord embeds, checking them against Discord's embed limits.
pub fn notification_embeds(payload: &NotificationPayload) -> Result<Vec<Embed>, EmbedValidationError> {
	payload
		.embeds
		.iter()
		.map(|notification_embed| {
			let mut embed = EmbedBuilder::new()
				.title(notification_embed.title.clone())
				.color(notification_embed.color)
				.footer(EmbedFooterBuilder::new(notification_embed.footer.text.clone()));
			for field in notification_embed.fields.iter() {
				let mut field_builder = EmbedFieldBuilder::new(field.name.clone(), field.value.clone());
				if field.inline {
					field_builder = field_builder.inline();
				}
				embed = embed.field(field_builder);
			}
			Ok(embed.validate()?.build())
		})
		.collect()
}
