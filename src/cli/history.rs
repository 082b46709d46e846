//! `ohara history` and `ohara breadcrumbs` command implementations.

use crate::config::{NavigationConfig, load_config};
use crate::error::Result;
use crate::navigation::{NavigationKit, PageState, RequestContext};
use crate::session::{FileSession, SessionStore};

/// Run the history command.
///
/// Prints the session's page history as pretty JSON.
///
/// # Errors
///
/// Returns an error if the session cannot be opened or its history is
/// unreadable.
pub fn run(session_id: &str) -> Result<()> {
    let config = load_config()?;
    let session = FileSession::open(&config.storage.path, session_id)?;
    let request = RequestContext::parse("http://localhost/")?;
    let nav = NavigationKit::with_config(&session, request, config.navigation);

    let history = nav.history()?;
    if history.is_empty() {
        println!("No page history for session {session_id}.");
        return Ok(());
    }

    println!("{}", format_history(&history)?);
    Ok(())
}

/// Run the breadcrumbs command.
///
/// Renders breadcrumbs as the request for `url` would. Like a real request,
/// this drops history entries after the current page.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the history is unreadable.
pub fn run_breadcrumbs(session_id: &str, url: &str, page: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let session = FileSession::open(&config.storage.path, session_id)?;
    println!("{}", breadcrumbs(&session, url, page, config.navigation)?);
    Ok(())
}

fn breadcrumbs(
    session: &dyn SessionStore,
    url: &str,
    page: Option<&str>,
    config: NavigationConfig,
) -> Result<String> {
    let mut nav = NavigationKit::with_config(session, RequestContext::parse(url)?, config);
    if page.is_some() {
        nav.set_current_page(page);
    }
    nav.render_breadcrumbs()
}

fn format_history(history: &[PageState]) -> Result<String> {
    Ok(serde_json::to_string_pretty(history)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Properties;
    use crate::session::MemorySession;

    fn seed(session: &MemorySession) {
        for page in ["Orders", "Order", "Lines"] {
            let request = RequestContext::parse(&format!("http://h/{page}")).unwrap();
            NavigationKit::new(session, request)
                .record(Some(page), None, Properties::new())
                .unwrap();
        }
    }

    #[test]
    fn history_is_printed_as_json() {
        let session = MemorySession::new();
        seed(&session);

        let nav = NavigationKit::new(&session, RequestContext::parse("http://h/").unwrap());
        let json = format_history(&nav.history().unwrap()).unwrap();

        assert!(json.contains("\"Page\": \"Orders\""));
        assert!(json.contains("\"Index\": 3"));
    }

    #[test]
    fn breadcrumbs_for_explicit_page() {
        let session = MemorySession::new();
        seed(&session);

        let html = breadcrumbs(
            &session,
            "http://h/whatever",
            Some("Order"),
            NavigationConfig::default(),
        )
        .unwrap();

        assert!(html.contains(">Orders</a>"));
        assert!(html.ends_with(r#"id="current">Order</span>"#));
    }

    #[test]
    fn breadcrumbs_default_to_url_page() {
        let session = MemorySession::new();
        seed(&session);

        let html = breadcrumbs(&session, "http://h/Lines", None, NavigationConfig::default())
            .unwrap();
        assert_eq!(html.matches("navigation_link").count(), 2);
    }
}
