//! Sections of the single marketing page, top to bottom

mod about;
mod contact;
mod footer;
mod gallery;
mod hero;
mod packages;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use packages::Packages;
pub use services::Services;
