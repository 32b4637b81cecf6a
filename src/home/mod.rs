//! Home page module
//!
//! Provides the landing page: a greeting, the balance summary card, and the
//! most recent transactions. Prompts for a display name on first run.

mod handlers;

pub use handlers::get_home_page;
