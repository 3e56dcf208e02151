// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::contact::ContactSection;
use super::navbar::Navbar;
use super::sections::{AboutSection, Hero, PageFooter, ServicesSection};
use super::surface::{BrowserTimekeeper, LandingController, ServerRelay, SignalSurface};
use crate::controller::PageController;
use crate::controller::events::UiEvent;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
	let controller: LandingController = PageController::new(SignalSurface::new(), ServerRelay, BrowserTimekeeper);

	let scroll_listener = window_event_listener(ev::scroll, move |_| {
		let offset = window().scroll_y().unwrap_or_default();
		controller.handle_immediate(UiEvent::Scrolled { offset });
	});
	on_cleanup(move || scroll_listener.remove());

	view! {
		<Navbar controller />
		<main>
			<Hero controller />
			<ServicesSection controller />
			<AboutSection controller />
			<ContactSection controller />
		</main>
		<PageFooter controller />
	}
}
