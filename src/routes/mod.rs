/// Router Module Index
///
/// Organizes the application's routes by who may reach them. Page routes carry their
/// access rule in the handler (evaluated by the route guard against the resolved
/// session); the JSON API lives under `/api`.

/// Routes open to everyone: health check, landing page and the `/dashboard` dispatcher.
pub mod public;

/// Pages restricted to users with the 'admin' role.
pub mod admin;

/// Pages restricted to users with the 'staff' role.
pub mod staff;

/// Pages restricted to users with the 'customer' role.
pub mod customer;

/// The mock payment API.
pub mod payment;
