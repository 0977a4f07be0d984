//! Application pages: the single marketing page and the 404 page

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
