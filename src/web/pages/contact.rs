// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::surface::LandingController;
use crate::controller::events::UiEvent;
use crate::controller::surface::SubmitControl;
use crate::intake::case::{CaseCategory, CaseSubmission, FormField};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ContactSection(controller: LandingController) -> impl IntoView {
	let surface = *controller.surface();

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		spawn_local(async move {
			controller.dispatch(UiEvent::FormSubmitted).await;
		});
	};

	let border_color = move |field: FormField| surface.field_validity(field).border_color();
	let is_busy = move || surface.submit.get() == SubmitControl::Busy;
	let response_class = move || {
		surface.response.with(|response| match response {
			Some(message) => format!("response-message {}", message.severity.class()),
			None => String::from("response-message"),
		})
	};
	let response_display = move || {
		if surface.response.with(Option::is_some) {
			"block"
		} else {
			"none"
		}
	};
	let response_text = move || {
		surface
			.response
			.with(|response| response.as_ref().map(|message| message.text.clone()).unwrap_or_default())
	};

	view! {
		<section id="contact" class="contact" node_ref=surface.sections.contact>
			<div class="container">
				<h2 class="section-title">"Submit Your Case"</h2>
				<p class="section-subtitle">
					"Tell us what happened. A member of our legal team will reach out on Discord."
				</p>
				<form id="lawForm" class="contact-form" on:submit=form_submit>
					<div class="form-group">
						<label for="name">"Full Name *"</label>
						<input
							type="text"
							id="name"
							required
							placeholder="Your full name"
							prop:value=move || surface.name.get()
							style:border-color=move || border_color(FormField::Name)
							on:input=move |event| {
								surface.name.set(event_target_value(&event));
								controller.handle_immediate(UiEvent::FieldChanged(FormField::Name));
							}
							on:blur=move |_| controller.handle_immediate(UiEvent::FieldBlurred(FormField::Name))
						/>
					</div>
					<div class="form-group">
						<label for="discord">"Discord Username *"</label>
						<input
							type="text"
							id="discord"
							required
							placeholder="username or username#0000"
							prop:value=move || surface.discord.get()
							style:border-color=move || border_color(FormField::DiscordHandle)
							on:input=move |event| {
								surface.discord.set(event_target_value(&event));
								controller.handle_immediate(UiEvent::FieldChanged(FormField::DiscordHandle));
							}
							on:blur=move |_| {
								controller.handle_immediate(UiEvent::FieldBlurred(FormField::DiscordHandle))
							}
						/>
					</div>
					<div class="form-group">
						<label for="caseType">"Case Type"</label>
						<select
							id="caseType"
							prop:value=move || surface.case_type.get()
							style:border-color=move || border_color(FormField::CaseType)
							on:change=move |event| {
								surface.case_type.set(event_target_value(&event));
								controller.handle_immediate(UiEvent::FieldChanged(FormField::CaseType));
							}
							on:blur=move |_| controller.handle_immediate(UiEvent::FieldBlurred(FormField::CaseType))
						>
							<option value="">"Select a case type"</option>
							{CaseCategory::ALL
								.into_iter()
								.map(|category| view! { <option value=category.key()>{category.label()}</option> })
								.collect_view()}
						</select>
					</div>
					<div class="form-group">
						<label for="case">"Case Details *"</label>
						<textarea
							id="case"
							rows="6"
							required
							placeholder="Describe your situation"
							prop:value=move || surface.case_details.get()
							style:border-color=move || border_color(FormField::CaseDetails)
							on:input=move |event| {
								surface.case_details.set(event_target_value(&event));
								controller.handle_immediate(UiEvent::FieldChanged(FormField::CaseDetails));
							}
							on:blur=move |_| {
								controller.handle_immediate(UiEvent::FieldBlurred(FormField::CaseDetails))
							}
						></textarea>
					</div>
					<button type="submit" class="btn btn-primary submit-btn" disabled=is_busy>
						{move || {
							if is_busy() {
								view! {
									<i class="fas fa-spinner fa-spin"></i>
									" Submitting..."
								}
									.into_any()
							} else {
								view! {
									<i class="fas fa-paper-plane"></i>
									" Submit Case"
								}
									.into_any()
							}
						}}
					</button>
				</form>
				<div
					id="responseMsg"
					node_ref=surface.response_ref
					class=response_class
					style:display=response_display
				>
					{response_text}
				</div>
			</div>
		</section>
	}
}

/// Relays a case submission to the firm's intake webhook.
/// The submission is validated again here since the browser's checks can't be trusted.
#[server]
pub async fn submit_case(submission: CaseSubmission) -> Result<(), ServerFnError> {
	use crate::intake::payload::NotificationPayload;
	use crate::intake::validation::validate_submission;
	use crate::web::state::AppState;

	let submission = CaseSubmission::from_fields(
		&submission.name,
		&submission.discord_handle,
		&submission.case_type,
		&submission.case_details,
		submission.submitted_at.trim(),
	);
	if let Err(error) = validate_submission(&submission) {
		return Err(ServerFnError::ServerError(error.to_string()));
	}

	let state: AppState = expect_context();
	let payload = NotificationPayload::for_submission(&submission);

	if let Err(error) = state.webhook_relay.deliver(&payload).await {
		tracing::error!(source = ?error, "Failed to relay a case submission to the intake webhook");
		return Err(ServerFnError::ServerError(String::from(
			"The case submission could not be delivered",
		)));
	}

	tracing::info!(case_type = submission.case_type_label(), "Relayed a case submission");
	Ok(())
}
