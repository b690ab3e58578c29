//! Routed pages: the site itself and the 404 fallback

mod not_found;
mod site;

pub use not_found::NotFoundPage;
pub use site::SitePage;
