pub mod decorations;
pub mod footer;
#[cfg(not(feature = "ssr"))]
pub mod google;
pub mod icon;
pub mod navbar;
pub mod pages;
pub mod reveal;
pub mod sections;
pub mod seo;
pub mod session;
pub mod styles;

pub use icon::{Icon, icons};
pub use pages::{NotFoundPage, SitePage};
pub use session::{SessionContext, provide_session_context, use_session_context};
