//! Framework-free site logic: views, reveal state, identity and session

pub mod accordion;
#[cfg(feature = "ssr")]
pub mod config;
mod credential;
mod identity;
pub mod meta;
mod navigation;
pub mod pricing;
mod reveal;
mod session;
#[cfg(test)]
mod tests;
mod view;

pub use credential::*;
pub use identity::*;
pub use navigation::*;
pub use reveal::*;
pub use session::*;
pub use view::*;
