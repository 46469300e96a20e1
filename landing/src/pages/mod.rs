// Routed pages

mod landing;
mod not_found;

pub use landing::{LandingHandle, LandingPage, dispatch_action};
pub use not_found::NotFound;
