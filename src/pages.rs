use axum::{
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::{
    guard::{Decision, Navigate, Navigator, View},
    models::Role,
};

/// HttpNavigator
///
/// Executes a guard's navigation command as an HTTP redirect. The last command wins.
#[derive(Debug, Default)]
pub struct HttpNavigator {
    location: Option<String>,
}

impl HttpNavigator {
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

impl Navigator for HttpNavigator {
    fn navigate(&mut self, command: &Navigate) {
        self.location = Some(command.to.clone());
    }
}

/// respond
///
/// Turns a guard decision into a page response. A redirect is a `303 See Other`
/// whose body is still the loading page, so nothing protected leaks on that pass.
/// A pending session gets the loading page with a short refresh so the browser
/// asks again once the session settles.
pub fn respond(decision: Decision, login_path: &str) -> Response {
    let mut navigator = HttpNavigator::default();
    let view = decision.dispatch(&mut navigator);

    match navigator.location() {
        Some(location) => (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, location.to_string())],
            Html(render(view, false, login_path)),
        )
            .into_response(),
        None => Html(render(view, view == View::Loading, login_path)).into_response(),
    }
}

/// Renders the HTML shell for a view. `login_path` is the sign-in target linked
/// from the landing page.
pub fn render(view: View, refresh: bool, login_path: &str) -> String {
    match view {
        View::Loading => shell(
            "Loading",
            r#"<div class="spinner" role="status" aria-live="polite">Loading…</div>"#,
            refresh,
        ),
        View::Landing => shell(
            "Welcome",
            &format!(
                r#"<section id="landing"><h1>RentalPro</h1><p>Manage rentals, bookings and payments in one place.</p><a href="{login_path}">Sign in</a></section>"#
            ),
            false,
        ),
        View::Dashboard(role) => shell(
            dashboard_title(role),
            &format!(r#"<main id="{}-dashboard" data-role="{}"></main>"#, role.as_str(), role.as_str()),
            false,
        ),
    }
}

fn dashboard_title(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin Dashboard",
        Role::Staff => "Staff Dashboard",
        Role::Customer => "My Rentals",
    }
}

fn shell(title: &str, body: &str, refresh: bool) -> String {
    let refresh = if refresh {
        r#"<meta http-equiv="refresh" content="2">"#
    } else {
        ""
    };
    format!(
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">{refresh}<title>{title} | RentalPro</title></head><body>{body}</body></html>"
    )
}
