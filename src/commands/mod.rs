pub mod auth;
pub mod teams;
pub mod volumes;

pub use auth::handle_auth;
pub use teams::handle_teams;
pub use volumes::handle_volumes;
