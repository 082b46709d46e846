//! Session-backed page history and breadcrumbs.

use crate::config::NavigationConfig;
use crate::error::Result;
use crate::navigation::page_state::{PageState, Properties};
use crate::navigation::request::RequestContext;
use crate::session::SessionStore;
use crate::text::escape_html;

/// Page history for one request, read from and written to the session.
///
/// Every mutation is a read-modify-write of the whole history blob. Two
/// concurrent requests on the same session can lose an update; the last
/// writer wins.
pub struct NavigationKit<'a> {
    session: &'a dyn SessionStore,
    request: RequestContext,
    config: NavigationConfig,
    default_page: String,
    default_name: String,
    current_page: Option<String>,
    current_page_state: Option<PageState>,
}

impl<'a> NavigationKit<'a> {
    /// Create a kit with the default session key and separator.
    #[must_use]
    pub fn new(session: &'a dyn SessionStore, request: RequestContext) -> Self {
        Self::with_config(session, request, NavigationConfig::default())
    }

    /// Create a kit with explicit navigation settings.
    ///
    /// The default page id and name come from the request path, and the
    /// current page starts out as that default.
    #[must_use]
    pub fn with_config(
        session: &'a dyn SessionStore,
        request: RequestContext,
        config: NavigationConfig,
    ) -> Self {
        let default_page = request.default_page();
        Self {
            session,
            config,
            default_name: default_page.clone(),
            current_page: Some(default_page.clone()),
            default_page,
            request,
            current_page_state: None,
        }
    }

    /// Page the breadcrumbs end at.
    #[must_use]
    pub fn current_page(&self) -> Option<&str> {
        self.current_page.as_deref()
    }

    /// Override the current page.
    pub fn set_current_page(&mut self, page: Option<&str>) {
        self.current_page = page.map(ToString::to_string);
    }

    /// State recorded during this request, if any.
    #[must_use]
    pub fn current_page_state(&self) -> Option<&PageState> {
        self.current_page_state.as_ref()
    }

    /// Record a visit to the current request's default page.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn record_properties(&mut self, properties: Properties) -> Result<()> {
        self.record(None, None, properties)
    }

    /// Record a visit to `page`. Empty or missing `page` and `name` fall back
    /// to the defaults derived from the request path.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn record(
        &mut self,
        page: Option<&str>,
        name: Option<&str>,
        properties: Properties,
    ) -> Result<()> {
        let page = non_empty(page).unwrap_or(&self.default_page).to_string();
        let name = non_empty(name).unwrap_or(&self.default_name).to_string();
        self.store_page_state(PageState::new(&page, Some(&name), properties))
    }

    /// Record a visit with `defaults` merged under `properties`.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn record_with_defaults(
        &mut self,
        page: Option<&str>,
        name: Option<&str>,
        properties: Properties,
        defaults: Properties,
    ) -> Result<()> {
        self.record(page, name, Properties::with_defaults(properties, defaults))
    }

    /// Append `state` to the history.
    ///
    /// An existing entry for the same page is replaced, and every entry at
    /// or after its position is dropped. The new entry goes to the end with
    /// the request URL and the next index.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn store_page_state(&mut self, mut state: PageState) -> Result<()> {
        let mut states = self.history()?;
        let position = index_of(states.len() + 1);
        let evict_from = states
            .iter()
            .find(|s| s.page == state.page)
            .map_or(position, |s| s.index.min(position));

        let before = states.len();
        states.retain(|s| s.index < evict_from && s.page != state.page);
        log::debug!(
            "recording page {:?}: evicted {} of {} entries",
            state.page,
            before - states.len(),
            before
        );

        state.index = index_of(states.len() + 1);
        state.url = Some(self.request.url());
        states.push(state.clone());
        reindex(&mut states);
        self.write_history(&states)?;

        self.current_page = Some(state.page.clone());
        self.current_page_state = Some(state);
        Ok(())
    }

    /// Read the history, sorted by index. A missing or empty blob is an
    /// empty history.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be read or the stored blob is
    /// not valid history JSON.
    pub fn history(&self) -> Result<Vec<PageState>> {
        let bytes = match self.session.get(&self.config.session_key)? {
            Some(bytes) if !bytes.is_empty() => bytes,
            _ => return Ok(Vec::new()),
        };

        let mut states: Vec<PageState> = serde_json::from_slice(&bytes)?;
        states.sort_by_key(|s| s.index);
        Ok(states)
    }

    /// Look up the current page in the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn current_page_in_history(&self, clear_newer_pages: bool) -> Result<Option<PageState>> {
        match self.current_page.as_deref() {
            Some(page) => self.page_state(page, clear_newer_pages),
            None => Ok(None),
        }
    }

    /// Find the entry for `page`. With `clear_newer_pages`, every entry after
    /// it is dropped (navigating back truncates forward history).
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn page_state(&self, page: &str, clear_newer_pages: bool) -> Result<Option<PageState>> {
        let found = self.history()?.into_iter().find(|s| s.page == page);

        if let Some(state) = &found {
            if clear_newer_pages {
                self.clear_by_index(state.index)?;
            }
        }

        Ok(found)
    }

    /// Drop every entry with an index above `max_index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn clear_by_index(&self, max_index: u32) -> Result<()> {
        let mut states = self.history()?;
        if states.is_empty() {
            return Ok(());
        }

        let before = states.len();
        states.retain(|s| s.index <= max_index);
        if states.len() != before {
            log::debug!(
                "cleared {} entries above index {max_index}",
                before - states.len()
            );
        }

        reindex(&mut states);
        self.write_history(&states)
    }

    /// Drop the whole history and forget the current page.
    ///
    /// # Errors
    ///
    /// Returns an error if the session key cannot be removed.
    pub fn clear_all(&mut self) -> Result<()> {
        self.current_page = None;
        self.current_page_state = None;
        self.session.remove(&self.config.session_key)
    }

    /// Drop every key of the session, not only the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be cleared.
    pub fn clear_session(&mut self) -> Result<()> {
        self.current_page = None;
        self.current_page_state = None;
        self.session.clear()
    }

    /// Render the history as breadcrumb links ending at the current page.
    ///
    /// Entries after the current page are removed from the session first.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read or written.
    pub fn render_breadcrumbs(&self) -> Result<String> {
        let states = self.history()?;
        let current = self.current_page_in_history(true)?;

        let links: Vec<String> = states
            .iter()
            .filter(|s| current.as_ref().is_none_or(|c| s.index < c.index))
            .map(render_link)
            .collect();
        let mut html = links.join(self.config.separator.as_str());

        if let Some(page) = self.current_page.as_deref() {
            let label = current.as_ref().map_or(page, PageState::label);
            if !html.is_empty() {
                html.push_str(&self.config.separator);
            }
            html.push_str(&format!(
                r#"<span class="navigation_current_link" id="current">{}</span>"#,
                escape_html(label)
            ));
        }

        Ok(html)
    }

    fn write_history(&self, states: &[PageState]) -> Result<()> {
        let bytes = serde_json::to_vec(states)?;
        self.session.set(&self.config.session_key, &bytes)
    }
}

fn render_link(state: &PageState) -> String {
    format!(
        r#"<a class="navigation_link" id="{}" href="{}">{}</a>"#,
        escape_html(&state.page),
        escape_html(state.url.as_deref().unwrap_or("#")),
        escape_html(state.label())
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn index_of(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

/// Renumber `states` 1..=n in their current order.
fn reindex(states: &mut [PageState]) {
    for (i, state) in states.iter_mut().enumerate() {
        state.index = index_of(i + 1);
    }
}
