// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::*;
use crate::intake::payload::TRUNCATION_MARKER;
use futures::FutureExt;
use futures::executor::block_on;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use surface::{Severity, SubmitControl};

#[derive(Debug, Default)]
struct PageState {
	values: HashMap<FormField, String>,
	menu: MenuState,
	response: Option<ResponseMessage>,
	submit: SubmitControl,
	navbar: NavbarPreset,
	validity: HashMap<FormField, FieldValidity>,
	element_offsets: HashMap<String, f64>,
	navbar_height: f64,
	scrolled_to: Vec<f64>,
	reveal_count: usize,
}

#[derive(Clone, Default)]
struct RecordingSurface {
	state: Rc<RefCell<PageState>>,
}

impl RecordingSurface {
	fn with_fields(name: &str, handle: &str, case_type: &str, details: &str) -> Self {
		let surface = Self::default();
		surface.type_into(FormField::Name, name);
		surface.type_into(FormField::DiscordHandle, handle);
		surface.type_into(FormField::CaseType, case_type);
		surface.type_into(FormField::CaseDetails, details);
		surface
	}

	fn type_into(&self, field: FormField, value: &str) {
		self.state.borrow_mut().values.insert(field, value.to_string());
	}

	fn value(&self, field: FormField) -> String {
		self.field_value(field)
	}

	fn response(&self) -> Option<ResponseMessage> {
		self.state.borrow().response.clone()
	}

	fn submit(&self) -> SubmitControl {
		self.state.borrow().submit
	}

	fn validity(&self, field: FormField) -> FieldValidity {
		self.state.borrow().validity.get(&field).copied().unwrap_or_default()
	}
}

impl PageSurface for RecordingSurface {
	fn field_value(&self, field: FormField) -> String {
		self.state.borrow().values.get(&field).cloned().unwrap_or_default()
	}

	fn menu_state(&self) -> MenuState {
		self.state.borrow().menu
	}

	fn set_visual_state(&self, visual_state: VisualState) {
		let mut state = self.state.borrow_mut();
		match visual_state {
			VisualState::Menu(menu) => state.menu = menu,
			VisualState::Response(message) => state.response = Some(message),
			VisualState::ResponseHidden => state.response = None,
			VisualState::Submit(submit) => state.submit = submit,
			VisualState::Navbar(preset) => state.navbar = preset,
			VisualState::Field(field, validity) => {
				state.validity.insert(field, validity);
			}
		}
	}

	fn clear_fields(&self) {
		self.state.borrow_mut().values.clear();
	}

	fn navbar_height(&self) -> f64 {
		self.state.borrow().navbar_height
	}

	fn element_offset(&self, element_id: &str) -> Option<f64> {
		self.state.borrow().element_offsets.get(element_id).copied()
	}

	fn scroll_to(&self, top: f64) {
		self.state.borrow_mut().scrolled_to.push(top);
	}

	fn reveal_response(&self) {
		self.state.borrow_mut().reveal_count += 1;
	}
}

#[derive(Clone)]
enum RelayMode {
	Accept,
	Fail(RelayError),
	Hang,
}

#[derive(Clone)]
struct RecordingRelay {
	mode: RelayMode,
	surface: RecordingSurface,
	deliveries: Rc<RefCell<Vec<CaseSubmission>>>,
	submit_state_while_sending: Rc<RefCell<Vec<SubmitControl>>>,
}

impl RecordingRelay {
	fn new(mode: RelayMode, surface: &RecordingSurface) -> Self {
		Self {
			mode,
			surface: surface.clone(),
			deliveries: Rc::default(),
			submit_state_while_sending: Rc::default(),
		}
	}

	fn deliveries(&self) -> Vec<CaseSubmission> {
		self.deliveries.borrow().clone()
	}
}

impl CaseRelay for RecordingRelay {
	fn deliver(&self, submission: CaseSubmission) -> impl std::future::Future<Output = Result<(), RelayError>> {
		let relay = self.clone();
		async move {
			relay.deliveries.borrow_mut().push(submission);
			relay
				.submit_state_while_sending
				.borrow_mut()
				.push(relay.surface.submit());
			match relay.mode {
				RelayMode::Accept => Ok(()),
				RelayMode::Fail(error) => Err(error),
				RelayMode::Hang => std::future::pending().await,
			}
		}
	}
}

struct ScheduledTask {
	delay: Duration,
	due_at: Duration,
	task: Box<dyn FnOnce()>,
}

/// Simulated clock; time only moves when a test advances it.
#[derive(Clone, Default)]
struct ManualClock {
	now: Rc<Cell<Duration>>,
	pending: Rc<RefCell<Vec<ScheduledTask>>>,
}

impl ManualClock {
	fn scheduled_delays(&self) -> Vec<Duration> {
		self.pending.borrow().iter().map(|scheduled| scheduled.delay).collect()
	}

	/// Moves the clock forward by `elapsed` and runs every task that has come due
	fn advance(&self, elapsed: Duration) {
		let now = self.now.get() + elapsed;
		self.now.set(now);
		let (due, waiting): (Vec<ScheduledTask>, Vec<ScheduledTask>) = self
			.pending
			.borrow_mut()
			.drain(..)
			.partition(|scheduled| scheduled.due_at <= now);
		*self.pending.borrow_mut() = waiting;
		for scheduled in due {
			(scheduled.task)();
		}
	}
}

impl Timekeeper for ManualClock {
	fn local_timestamp(&self) -> String {
		String::from("10/16/2026, 9:30:00 AM")
	}

	fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce() + 'static>) {
		self.pending.borrow_mut().push(ScheduledTask {
			delay,
			due_at: self.now.get() + delay,
			task,
		});
	}
}

fn controller(
	surface: &RecordingSurface,
	mode: RelayMode,
) -> (PageController<RecordingSurface, RecordingRelay, ManualClock>, RecordingRelay, ManualClock) {
	let relay = RecordingRelay::new(mode, surface);
	let clock = ManualClock::default();
	let controller = PageController::new(surface.clone(), relay.clone(), clock.clone());
	(controller, relay, clock)
}

#[test]
fn blank_required_fields_never_reach_the_relay() {
	let cases = [
		("", "alice_99", "", "Need help"),
		("Alice", "   ", "", "Need help"),
		("Alice", "alice_99", "civil", " \n\t "),
	];
	for (name, handle, case_type, details) in cases {
		let surface = RecordingSurface::with_fields(name, handle, case_type, details);
		let (controller, relay, _) = controller(&surface, RelayMode::Accept);

		let outcome = block_on(controller.submit_form());

		assert_eq!(outcome, SubmissionOutcome::Rejected(ValidationError::MissingField));
		assert!(relay.deliveries().is_empty());
		assert_eq!(
			surface.response(),
			Some(ResponseMessage::error("Please fill in all required fields."))
		);
	}
}

#[test]
fn malformed_handle_is_reported_inline() {
	let surface = RecordingSurface::with_fields("Alice", "alice#12", "", "Need help");
	let (controller, relay, _) = controller(&surface, RelayMode::Accept);

	let outcome = block_on(controller.submit_form());

	assert_eq!(outcome, SubmissionOutcome::Rejected(ValidationError::InvalidHandleFormat));
	assert!(relay.deliveries().is_empty());
	let response = surface.response().unwrap();
	assert_eq!(response.severity, Severity::Error);
	assert!(response.text.contains("username#0000"));
}

#[test]
fn submission_is_trimmed_and_timestamped() {
	let surface = RecordingSurface::with_fields("  Harvey  ", " alice#1234 ", "corporate", " Merger ");
	let (controller, relay, _) = controller(&surface, RelayMode::Accept);

	block_on(controller.dispatch(UiEvent::FormSubmitted));

	let deliveries = relay.deliveries();
	assert_eq!(deliveries.len(), 1);
	assert_eq!(
		deliveries[0],
		CaseSubmission {
			name: String::from("Harvey"),
			discord_handle: String::from("alice#1234"),
			case_type: String::from("corporate"),
			case_details: String::from("Merger"),
			submitted_at: String::from("10/16/2026, 9:30:00 AM"),
		}
	);
}

#[test]
fn long_details_are_sent_whole_and_truncated_in_the_payload() {
	use crate::intake::payload::NotificationPayload;

	let details = "x".repeat(1500);
	let surface = RecordingSurface::with_fields("Rachel", "rachel_z", "", &details);
	let (controller, relay, _) = controller(&surface, RelayMode::Accept);

	block_on(controller.submit_form());

	let payload = NotificationPayload::for_submission(&relay.deliveries()[0]);
	assert_eq!(
		payload.embeds[0].fields[3].value,
		format!("{}{}", "x".repeat(1000), TRUNCATION_MARKER)
	);
}

#[test]
fn successful_submission_clears_form_and_hides_message_later() {
	let surface = RecordingSurface::with_fields("Mike", "mike_r", "criminal", "Fraud");
	let (controller, relay, clock) = controller(&surface, RelayMode::Accept);

	let outcome = block_on(controller.submit_form());

	assert_eq!(outcome, SubmissionOutcome::Delivered);
	assert_eq!(*relay.submit_state_while_sending.borrow(), vec![SubmitControl::Busy]);
	assert_eq!(surface.submit(), SubmitControl::Ready);
	for field in FormField::ALL {
		assert_eq!(surface.value(field), "");
	}
	assert_eq!(surface.response(), Some(ResponseMessage::success(SUCCESS_MESSAGE)));
	assert_eq!(surface.state.borrow().reveal_count, 1);
	assert_eq!(clock.scheduled_delays(), vec![SUCCESS_MESSAGE_LIFETIME]);

	clock.advance(Duration::from_secs(9));
	assert!(surface.response().is_some());

	clock.advance(Duration::from_secs(1));
	assert_eq!(surface.response(), None);
}

#[test]
fn auto_hide_counts_from_when_the_message_was_shown() {
	let surface = RecordingSurface::with_fields("Rachel", "rachel_z", "", "Lease review");
	let (controller, _, clock) = controller(&surface, RelayMode::Accept);

	clock.advance(Duration::from_secs(30));
	assert_eq!(block_on(controller.submit_form()), SubmissionOutcome::Delivered);

	clock.advance(Duration::from_secs(5));
	assert!(surface.response().is_some());
	clock.advance(Duration::from_secs(4));
	assert!(surface.response().is_some());
	clock.advance(Duration::from_secs(1));
	assert_eq!(surface.response(), None);
}

#[test]
fn submit_sent_to_the_synchronous_path_is_ignored() {
	let surface = RecordingSurface::with_fields("Donna", "donna_p", "", "Contract");
	let (controller, relay, _) = controller(&surface, RelayMode::Accept);

	controller.handle_immediate(UiEvent::FormSubmitted);

	assert!(relay.deliveries().is_empty());
	assert_eq!(surface.submit(), SubmitControl::Ready);
	assert_eq!(surface.response(), None);
	assert_eq!(surface.value(FormField::Name), "Donna");
}

#[test]
fn failed_submission_keeps_the_form() {
	let surface = RecordingSurface::with_fields("Louis", "louis#1234", "", "Mudding dispute");
	let (controller, _, clock) = controller(
		&surface,
		RelayMode::Fail(RelayError::Rejected(String::from("500 Internal Server Error"))),
	);

	let outcome = block_on(controller.submit_form());

	assert!(matches!(outcome, SubmissionOutcome::Failed(RelayError::Rejected(_))));
	assert_eq!(surface.response(), Some(ResponseMessage::error(failure_message())));
	assert!(failure_message().contains(FALLBACK_CONTACT));
	assert_eq!(surface.value(FormField::Name), "Louis");
	assert_eq!(surface.value(FormField::CaseDetails), "Mudding dispute");
	assert_eq!(surface.submit(), SubmitControl::Ready);
	assert!(clock.scheduled_delays().is_empty());
	assert_eq!(surface.state.borrow().reveal_count, 0);
}

#[test]
fn unreachable_relay_is_a_failure() {
	let surface = RecordingSurface::with_fields("Louis", "louis_l", "", "Help");
	let (controller, _, _) = controller(
		&surface,
		RelayMode::Fail(RelayError::Unreachable(String::from("network down"))),
	);

	let outcome = block_on(controller.submit_form());

	assert!(matches!(outcome, SubmissionOutcome::Failed(RelayError::Unreachable(_))));
	assert_eq!(surface.response().map(|message| message.severity), Some(Severity::Error));
}

#[test]
fn abandoned_submission_releases_the_submit_control() {
	let surface = RecordingSurface::with_fields("Jessica", "jessica_p", "", "Partnership");
	let (controller, relay, _) = controller(&surface, RelayMode::Hang);

	assert!(controller.submit_form().now_or_never().is_none());

	assert_eq!(relay.deliveries().len(), 1);
	assert_eq!(*relay.submit_state_while_sending.borrow(), vec![SubmitControl::Busy]);
	assert_eq!(surface.submit(), SubmitControl::Ready);
}

#[test]
fn menu_button_toggles_menu() {
	let surface = RecordingSurface::default();
	let (controller, _, _) = controller(&surface, RelayMode::Accept);

	controller.handle_immediate(UiEvent::MenuToggleRequested);
	assert_eq!(surface.menu_state(), MenuState::Open);
	assert_eq!(surface.menu_state().icon_class(), "fa-times");

	controller.handle_immediate(UiEvent::MenuToggleRequested);
	assert_eq!(surface.menu_state(), MenuState::Closed);
	assert_eq!(surface.menu_state().icon_class(), "fa-bars");
}

#[test]
fn nav_link_always_closes_menu() {
	let surface = RecordingSurface::default();
	let (controller, _, _) = controller(&surface, RelayMode::Accept);

	controller.handle_immediate(UiEvent::MenuToggleRequested);
	controller.handle_immediate(UiEvent::NavLinkActivated);
	assert_eq!(surface.menu_state(), MenuState::Closed);
	assert_eq!(surface.menu_state().icon_class(), "fa-bars");

	controller.handle_immediate(UiEvent::NavLinkActivated);
	assert_eq!(surface.menu_state(), MenuState::Closed);
}

#[test]
fn anchor_scroll_leaves_room_for_navbar() {
	let surface = RecordingSurface::default();
	{
		let mut state = surface.state.borrow_mut();
		state.navbar_height = 80.0;
		state.element_offsets.insert(String::from("services"), 900.0);
	}
	let (controller, _, _) = controller(&surface, RelayMode::Accept);

	controller.handle_immediate(UiEvent::AnchorActivated {
		href: String::from("#services"),
	});
	controller.handle_immediate(UiEvent::AnchorActivated { href: String::from("#") });
	controller.handle_immediate(UiEvent::AnchorActivated {
		href: String::from("#missing"),
	});

	assert_eq!(surface.state.borrow().scrolled_to, vec![800.0]);
}

#[test]
fn navbar_preset_follows_scroll_threshold() {
	let surface = RecordingSurface::default();
	let (controller, _, _) = controller(&surface, RelayMode::Accept);
	let cases = [
		(0.0, NavbarPreset::AtTop),
		(50.0, NavbarPreset::AtTop),
		(51.0, NavbarPreset::Scrolled),
		(1_000_000.0, NavbarPreset::Scrolled),
		(10.0, NavbarPreset::AtTop),
	];

	for (offset, expected) in cases {
		block_on(controller.dispatch(UiEvent::Scrolled { offset }));
		assert_eq!(surface.state.borrow().navbar, expected, "offset {}", offset);
	}
}

#[test]
fn blurred_required_field_is_flagged_until_typed_in() {
	let surface = RecordingSurface::default();
	let (controller, _, _) = controller(&surface, RelayMode::Accept);

	controller.handle_immediate(UiEvent::FieldBlurred(FormField::Name));
	assert_eq!(surface.validity(FormField::Name), FieldValidity::Invalid);

	surface.type_into(FormField::Name, "  ");
	controller.handle_immediate(UiEvent::FieldChanged(FormField::Name));
	assert_eq!(surface.validity(FormField::Name), FieldValidity::Invalid);

	surface.type_into(FormField::Name, "H");
	controller.handle_immediate(UiEvent::FieldChanged(FormField::Name));
	assert_eq!(surface.validity(FormField::Name), FieldValidity::Neutral);
}

#[test]
fn optional_field_is_never_flagged() {
	let surface = RecordingSurface::default();
	let (controller, _, _) = controller(&surface, RelayMode::Accept);

	controller.handle_immediate(UiEvent::FieldBlurred(FormField::CaseType));
	assert_eq!(surface.validity(FormField::CaseType), FieldValidity::Neutral);
}
