// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::pages::app::App;
use super::pages::shell::shell;
use super::state::AppState;
use crate::config::ConfigData;
use crate::intake::relay::WebhookRelay;
use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list, render_app_to_stream};
use miette::IntoDiagnostic;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower::util::ServiceExt;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub async fn run_server(config: Arc<ConfigData>) -> miette::Result<()> {
	let web_config = get_configuration(None).into_diagnostic()?;
	let site_addr = &config.web.bind_addr;
	let leptos_options = web_config.leptos_options;
	let routes = generate_route_list(App);

	let app_state = AppState {
		leptos_options,
		config: Arc::clone(&config),
		webhook_relay: Arc::new(WebhookRelay::new(&config.webhook)),
	};

	let app = Router::new()
		.leptos_routes_with_context(
			&app_state,
			routes,
			{
				let app_state = app_state.clone();
				move || provide_context(app_state.clone())
			},
			{
				let leptos_options = app_state.leptos_options.clone();
				move || shell(leptos_options.clone())
			},
		)
		.fallback(file_and_error_handler)
		.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
		.with_state(app_state);

	tracing::info!(webhook = ?config.webhook, "Listening on http://{}", site_addr);
	let listener = TcpListener::bind(site_addr).await.into_diagnostic()?;
	axum::serve(listener, app.into_make_service()).await.into_diagnostic()?;

	Ok(())
}

async fn file_and_error_handler(uri: Uri, State(state): State<AppState>, request: Request) -> Response {
	let leptos_options = state.leptos_options.clone();
	let site_root_dir = leptos_options.site_root.clone();
	let response = match get_static_file(uri, &site_root_dir).await {
		Ok(response) => response,
		Err(error) => return error.into_response(),
	};

	if response.status() == StatusCode::OK {
		response
	} else {
		let handler = render_app_to_stream(move || shell(leptos_options.clone()));
		handler(request).await.into_response()
	}
}

async fn get_static_file(uri: Uri, root: &str) -> Result<Response, StatusCode> {
	let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
		return Err(StatusCode::INTERNAL_SERVER_ERROR);
	};

	match ServeDir::new(root).oneshot(request).await {
		Ok(response) => Ok(response.into_response()),
		Err(error) => {
			tracing::error!(source = ?error, "Failed to serve a static file");
			Err(StatusCode::INTERNAL_SERVER_ERROR)
		}
	}
}
