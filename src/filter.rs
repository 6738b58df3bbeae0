use crate::{Presenter, Row, User};

/// Whether the visible set is currently narrowed down by the query
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Unfiltered,
    Filtered,
}

/// Holds the full user list and decides which users are visible
///
/// Filtering only applies while the search is active *and* the query is not
/// empty. Every change recomputes the visible set from scratch and hands it to
/// the presenter.
pub struct FilterEngine<P> {
    users: Vec<User>,
    query: String,
    search_active: bool,
    // indices into `users`, always ascending
    visible: Vec<usize>,
    empty_message: String,
    presenter: P,
}

impl<P> std::fmt::Debug for FilterEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("users", &self.users.len())
            .field("query", &self.query)
            .field("search_active", &self.search_active)
            .field("visible", &self.visible.len())
            .finish()
    }
}

impl<P: Presenter> FilterEngine<P> {
    /// Create an engine over `users`. Nothing is rendered until [`refresh`] or
    /// one of the setters is called.
    ///
    /// [`refresh`]: FilterEngine::refresh
    pub fn new(users: Vec<User>, presenter: P, empty_message: impl Into<String>) -> Self {
        let visible = (0..users.len()).collect();
        Self {
            users,
            query: String::new(),
            search_active: false,
            visible,
            empty_message: empty_message.into(),
            presenter,
        }
    }

    /// Replace the stored query and recompute
    pub fn set_query(&mut self, text: impl Into<String>) -> anyhow::Result<()> {
        self.query = text.into();
        self.refresh()
    }

    /// Engage or release the search. Releasing it shows every user again, the
    /// stored query is kept.
    pub fn set_search_active(&mut self, active: bool) -> anyhow::Result<()> {
        self.search_active = active;
        self.refresh()
    }

    /// Engage the search with `text` in a single recompute
    pub fn search(&mut self, text: impl Into<String>) -> anyhow::Result<()> {
        self.query = text.into();
        self.search_active = true;
        self.refresh()
    }

    /// Recompute the visible set and render it
    pub fn refresh(&mut self) -> anyhow::Result<()> {
        self.recompute();
        self.present()
    }

    fn recompute(&mut self) {
        self.visible.clear();
        match self.mode() {
            Mode::Unfiltered => self.visible.extend(0..self.users.len()),
            Mode::Filtered => {
                let needle = self.query.to_lowercase();
                let matches = self
                    .users
                    .iter()
                    .enumerate()
                    .filter(|(_, user)| user.name_contains(&needle))
                    .map(|(i, _)| i);
                self.visible.extend(matches);
            }
        }
        log::debug!(
            "{:?} for {:?}: {}/{} visible",
            self.mode(),
            self.query,
            self.visible.len(),
            self.users.len()
        );
    }

    fn present(&mut self) -> anyhow::Result<()> {
        if self.visible.is_empty() {
            return self.presenter.render_empty_state(&self.empty_message);
        }

        let users = &self.users;
        let rows = self
            .visible
            .iter()
            .map(|&i| users[i].as_row())
            .collect::<Vec<Row<'_>>>();
        self.presenter.render(&rows)
    }
}

impl<P> FilterEngine<P> {
    pub fn mode(&self) -> Mode {
        if self.search_active && !self.query.is_empty() {
            Mode::Filtered
        } else {
            Mode::Unfiltered
        }
    }

    /// The visible users, in their original order
    pub fn visible(&self) -> impl Iterator<Item = &User> + '_ {
        self.visible.iter().map(move |&i| &self.users[i])
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_search_active(&self) -> bool {
        self.search_active
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
