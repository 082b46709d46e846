//! ohara - navigation and form helpers for server-rendered web apps.
//!
//! Keeps a per-session page history for breadcrumbs, renders and scrapes
//! inline-edit table cells, and binds string fields onto typed models.

pub mod binding;
pub mod cli;
pub mod config;
pub mod error;
pub mod html;
pub mod navigation;
pub mod session;
pub mod text;

pub use config::Config;
pub use error::{Error, Result};
pub use navigation::{NavigationKit, PageState, Properties, RequestContext};
pub use session::SessionStore;
