// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::navbar::AnchorLink;
use super::surface::LandingController;
use crate::controller::FALLBACK_CONTACT;
use crate::intake::case::CaseCategory;
use leptos::prelude::*;

fn practice_area_icon(category: CaseCategory) -> &'static str {
	match category {
		CaseCategory::Corporate => "fas fa-building",
		CaseCategory::Criminal => "fas fa-gavel",
		CaseCategory::Civil => "fas fa-landmark",
		CaseCategory::Contract => "fas fa-file-signature",
		CaseCategory::IntellectualProperty => "fas fa-lightbulb",
		CaseCategory::Other => "fas fa-briefcase",
	}
}

fn practice_area_summary(category: CaseCategory) -> &'static str {
	match category {
		CaseCategory::Corporate => "Mergers, acquisitions and the boardroom fights that come with them.",
		CaseCategory::Criminal => "Aggressive defense when your freedom and reputation are on the line.",
		CaseCategory::Civil => "Disputes taken to court, or settled long before they get there.",
		CaseCategory::Contract => "Drafting, review and enforcement of agreements that hold up.",
		CaseCategory::IntellectualProperty => "Protecting the ideas, brands and work that set you apart.",
		CaseCategory::Other => "If it needs a closer, tell us about it.",
	}
}

#[component]
pub fn Hero(controller: LandingController) -> impl IntoView {
	let surface = controller.surface();

	view! {
		<section id="home" class="hero" node_ref=surface.sections.home>
			<div class="container hero-content">
				<h1>"We don't play the odds. We play the man."</h1>
				<p>"Sharp counsel for the cases other firms walk away from."</p>
				<div class="hero-buttons">
					<AnchorLink controller href="#contact" class="btn btn-primary">
						"Submit Your Case"
					</AnchorLink>
					<AnchorLink controller href="#services" class="btn btn-secondary">
						"Practice Areas"
					</AnchorLink>
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn ServicesSection(controller: LandingController) -> impl IntoView {
	let surface = controller.surface();

	view! {
		<section id="services" class="services" node_ref=surface.sections.services>
			<div class="container">
				<h2 class="section-title">"Practice Areas"</h2>
				<div class="services-grid">
					{CaseCategory::ALL
						.into_iter()
						.map(|category| {
							view! {
								<div class="service-card">
									<i class=practice_area_icon(category)></i>
									<h3>{category.label()}</h3>
									<p>{practice_area_summary(category)}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</div>
		</section>
	}
}

#[component]
pub fn AboutSection(controller: LandingController) -> impl IntoView {
	let surface = controller.surface();

	view! {
		<section id="about" class="about" node_ref=surface.sections.about>
			<div class="container">
				<h2 class="section-title">"About the Firm"</h2>
				<p>
					"We take on a small number of clients and win for every one of them. "
					"Every case is reviewed by a senior partner before we reach out."
				</p>
				<p>"Consultations are handled over Discord so you hear back from us fast."</p>
			</div>
		</section>
	}
}

#[component]
pub fn PageFooter(controller: LandingController) -> impl IntoView {
	view! {
		<footer class="footer">
			<div class="container">
				<p>
					"Urgent matter? Reach "
					<strong>{FALLBACK_CONTACT}</strong>
					" directly on Discord."
				</p>
				<AnchorLink controller href="#home">
					"Back to top"
				</AnchorLink>
			</div>
		</footer>
	}
}
