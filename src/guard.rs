use uuid::Uuid;

use crate::{models::Role, session::Session};

/// Where an authenticated visitor of the landing page is sent.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Policy
///
/// The access rule attached to a page route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Policy {
    /// Only users holding `role` may see the page; everyone else is sent to `login`.
    RequireRole { role: Role, login: String },
    /// Only anonymous visitors see the page; signed-in users are sent to `home`.
    GuestOnly { home: String },
    /// Never renders: signed-in users go to their role's dashboard, others to `login`.
    RoleHome { login: String },
}

impl Policy {
    pub fn require(role: Role, login: impl Into<String>) -> Self {
        Self::RequireRole {
            role,
            login: login.into(),
        }
    }

    pub fn guest_only() -> Self {
        Self::GuestOnly {
            home: DASHBOARD_PATH.to_string(),
        }
    }

    pub fn role_home(login: impl Into<String>) -> Self {
        Self::RoleHome {
            login: login.into(),
        }
    }
}

/// Phase
///
/// Where a guard stands for the session it last saw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Pending,
    Unauthorized,
    Authorized,
}

/// View
///
/// What a page renders on this pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Loading,
    Landing,
    Dashboard(Role),
}

/// Navigate
///
/// A navigation command produced by a guard and executed by a [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigate {
    pub to: String,
}

impl Navigate {
    pub fn to(target: impl Into<String>) -> Self {
        Self { to: target.into() }
    }
}

/// Decision
///
/// Outcome of evaluating a policy: the view to render now, plus an optional
/// navigation to perform once that view has been handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub phase: Phase,
    pub view: View,
    pub navigate: Option<Navigate>,
}

impl Decision {
    fn loading() -> Self {
        Self {
            phase: Phase::Pending,
            view: View::Loading,
            navigate: None,
        }
    }

    fn redirect(phase: Phase, target: &str) -> Self {
        Self {
            phase,
            view: View::Loading,
            navigate: Some(Navigate::to(target)),
        }
    }

    fn render(view: View) -> Self {
        Self {
            phase: Phase::Authorized,
            view,
            navigate: None,
        }
    }

    /// Hands the navigation command (if any) to `navigator` and returns the view.
    pub fn dispatch<N: Navigator + ?Sized>(self, navigator: &mut N) -> View {
        if let Some(navigate) = &self.navigate {
            navigator.navigate(navigate);
        }
        self.view
    }
}

/// Navigator
///
/// The router seam that executes navigation commands.
pub trait Navigator {
    fn navigate(&mut self, command: &Navigate);
}

/// evaluate
///
/// Pure guard decision for one session snapshot. Protected content is only ever
/// returned for a resolved session; every redirect is paired with the loading view.
pub fn evaluate(policy: &Policy, session: &Session) -> Decision {
    if matches!(session, Session::Pending) {
        return Decision::loading();
    }

    match policy {
        Policy::RequireRole { role, login } => match session.role() {
            Some(current) if current == *role => Decision::render(View::Dashboard(*role)),
            _ => Decision::redirect(Phase::Unauthorized, login),
        },
        Policy::GuestOnly { home } => match session.user() {
            Some(_) => Decision::redirect(Phase::Unauthorized, home),
            None => Decision::render(View::Landing),
        },
        Policy::RoleHome { login } => match session.role() {
            Some(role) => Decision::redirect(Phase::Authorized, role.home_path()),
            None => Decision::redirect(Phase::Unauthorized, login),
        },
    }
}

/// MountedGuard
///
/// A guard attached to a live route instance. It re-evaluates on every session
/// snapshot but emits a navigation only when the outcome changes: a new phase, a new
/// target, or a different user. Re-observing the same snapshot never redirects twice.
/// Going back through `Pending` starts a fresh resolution.
#[derive(Debug, Clone)]
pub struct MountedGuard {
    policy: Policy,
    last: Option<Outcome>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Outcome {
    phase: Phase,
    target: Option<String>,
    user: Option<Uuid>,
}

impl MountedGuard {
    pub fn new(policy: Policy) -> Self {
        Self { policy, last: None }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn phase(&self) -> Option<Phase> {
        self.last.as_ref().map(|outcome| outcome.phase)
    }

    pub fn observe(&mut self, session: &Session) -> Decision {
        let mut decision = evaluate(&self.policy, session);
        let current = Outcome {
            phase: decision.phase,
            target: decision.navigate.as_ref().map(|nav| nav.to.clone()),
            user: session.user().map(|user| user.id),
        };

        if self.last.as_ref() == Some(&current) {
            decision.navigate = None;
        }
        self.last = Some(current);
        decision
    }
}

