//! Per-session page history and breadcrumb rendering.

pub mod kit;
pub mod page_state;
pub mod request;

pub use kit::NavigationKit;
pub use page_state::{PageState, Properties};
pub use request::RequestContext;
