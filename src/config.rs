// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, Result, miette};
use std::fmt;
use std::time::Duration;
use tokio::fs::read_to_string;
use twilight_model::id::Id;
use twilight_model::id::marker::WebhookMarker;

const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 10;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	parse_config_document(&config_file_contents)
}

pub fn parse_config_document(config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents.parse()?;

	let web = section(&document, "web")?;
	let web = WebConfig {
		bind_addr: required_string(web, "web", "bind_addr")?,
	};

	let webhook = section(&document, "webhook")?;
	let id = webhook
		.get_arg("id")
		.and_then(|value| value.as_integer())
		.ok_or_else(|| miette!("webhook.id must be an integer"))?;
	let id = u64::try_from(id)
		.ok()
		.and_then(Id::new_checked)
		.ok_or_else(|| miette!("webhook.id must be a valid webhook ID, not {}", id))?;
	let timeout_secs = match webhook.get_arg("timeout_secs") {
		Some(value) => value
			.as_integer()
			.and_then(|secs| u64::try_from(secs).ok())
			.filter(|secs| *secs > 0)
			.ok_or_else(|| miette!("webhook.timeout_secs must be a positive number of seconds"))?,
		None => DEFAULT_WEBHOOK_TIMEOUT_SECS,
	};
	let webhook = WebhookConfig {
		id,
		token: required_string(webhook, "webhook", "token")?,
		username: optional_string(webhook, "webhook", "username")?,
		timeout: Duration::from_secs(timeout_secs),
	};

	Ok(ConfigData { web, webhook })
}

fn section<'a>(document: &'a KdlDocument, name: &str) -> Result<&'a KdlDocument> {
	document
		.get(name)
		.and_then(KdlNode::children)
		.ok_or_else(|| miette!("Config is missing the `{}` block", name))
}

fn optional_string(section: &KdlDocument, section_name: &str, key: &str) -> Result<Option<String>> {
	match section.get_arg(key) {
		Some(value) => match value.as_string() {
			Some(value) => Ok(Some(value.to_string())),
			None => Err(miette!("{}.{} must be a string", section_name, key)),
		},
		None => Ok(None),
	}
}

fn required_string(section: &KdlDocument, section_name: &str, key: &str) -> Result<String> {
	optional_string(section, section_name, key)?.ok_or_else(|| miette!("{}.{} is required", section_name, key))
}

#[derive(Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub webhook: WebhookConfig,
}

#[derive(Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}

pub struct WebhookConfig {
	pub id: Id<WebhookMarker>,
	pub token: String,
	pub username: Option<String>,
	pub timeout: Duration,
}

impl fmt::Debug for WebhookConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WebhookConfig")
			.field("id", &self.id)
			.field("token", &"<redacted>")
			.field("username", &self.username)
			.field("timeout", &self.timeout)
			.finish()
	}
}
