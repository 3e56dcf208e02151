// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::surface::LandingController;
use crate::controller::events::UiEvent;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

const NAV_LINKS: [(&str, &str); 4] = [
	("#home", "Home"),
	("#services", "Practice Areas"),
	("#about", "About"),
	("#contact", "Contact"),
];

#[component]
pub fn Navbar(controller: LandingController) -> impl IntoView {
	let surface = *controller.surface();

	let menu_class = move || {
		if surface.menu.get().is_open() {
			"nav-menu active"
		} else {
			"nav-menu"
		}
	};
	let icon_class = move || format!("fas {}", surface.menu.get().icon_class());
	let menu_button_click = move |_: MouseEvent| controller.handle_immediate(UiEvent::MenuToggleRequested);

	view! {
		<nav
			class="navbar"
			node_ref=surface.navbar_ref
			style:background=move || surface.navbar.get().background()
			style:box-shadow=move || surface.navbar.get().box_shadow()
		>
			<div class="container nav-container">
				<AnchorLink controller href="#home" class="logo">
					<i class="fas fa-balance-scale"></i>
					" Harvey Spector"
				</AnchorLink>
				<ul class=menu_class>
					{NAV_LINKS
						.into_iter()
						.map(|(href, label)| {
							view! {
								<li>
									<AnchorLink controller href closes_menu=true>
										{label}
									</AnchorLink>
								</li>
							}
						})
						.collect_view()}
				</ul>
				<button
					type="button"
					class="mobile-menu-btn"
					aria-label="Toggle navigation"
					on:click=menu_button_click
				>
					<i class=icon_class></i>
				</button>
			</div>
		</nav>
	}
}

/// A link to a section of the page. Following it scrolls the section into place below the navbar instead of jumping.
#[component]
pub fn AnchorLink(
	controller: LandingController,
	href: &'static str,
	#[prop(optional)] class: &'static str,
	#[prop(optional)] closes_menu: bool,
	children: Children,
) -> impl IntoView {
	let link_click = move |event: MouseEvent| {
		event.prevent_default();
		if closes_menu {
			controller.handle_immediate(UiEvent::NavLinkActivated);
		}
		controller.handle_immediate(UiEvent::AnchorActivated {
			href: href.to_string(),
		});
	};

	view! {
		<a href=href class=class on:click=link_click>
			{children()}
		</a>
	}
}
