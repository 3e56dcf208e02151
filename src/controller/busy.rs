// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::surface::{PageSurface, SubmitControl, VisualState};

/// Keeps the submit control in its busy state for as long as the guard lives.
/// The control is restored when the guard is dropped, including when the submission future is dropped mid-flight.
pub struct SubmitBusyGuard<S: PageSurface> {
	surface: S,
}

impl<S: PageSurface> SubmitBusyGuard<S> {
	pub fn engage(surface: &S) -> Self {
		surface.set_visual_state(VisualState::Submit(SubmitControl::Busy));
		Self {
			surface: surface.clone(),
		}
	}
}

impl<S: PageSurface> Drop for SubmitBusyGuard<S> {
	fn drop(&mut self) {
		self.surface.set_visual_state(VisualState::Submit(SubmitControl::Ready));
	}
}
