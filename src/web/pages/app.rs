// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::not_found::NotFound;
use super::landing::LandingPage;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet id="leptos" href="/pkg/case-intake.css" />
		<Link
			rel="stylesheet"
			href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
		/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta
			name="description"
			content="Harvey Spector Law Firm. Submit your case and our legal team will contact you on Discord."
		/>
		<Title text="Harvey Spector Law Firm" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=LandingPage />
			</Routes>
		</Router>
	}
}
