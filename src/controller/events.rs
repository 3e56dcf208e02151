// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::intake::case::FormField;

/// Everything on the page the controller reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
	MenuToggleRequested,
	NavLinkActivated,
	FormSubmitted,
	AnchorActivated { href: String },
	Scrolled { offset: f64 },
	FieldBlurred(FormField),
	FieldChanged(FormField),
}
