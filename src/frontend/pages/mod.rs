//! Page components for the documentation site

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFound;
