//! Host-side browsing history.

/// Request from a component to move elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationIntent {
    /// Return to the previous location.
    Back,
    /// Go to the given URL.
    Navigate(String),
}

/// Stack of visited URLs owned by the host.
///
/// # Examples
///
/// ```
/// use task_app::navigation::{NavigationHistory, NavigationIntent};
///
/// let mut history = NavigationHistory::new();
/// history.visit("/task");
/// history.visit("/task/1/view");
/// assert_eq!(history.apply(NavigationIntent::Back), Some("/task"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
}

impl NavigationHistory {
    /// Creates an empty history.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Records a visit to `url`.
    pub fn visit(&mut self, url: impl Into<String>) {
        self.entries.push(url.into());
    }

    /// Returns the current URL.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Applies `intent` and returns the resulting URL.
    ///
    /// Going back from the first entry stays there.
    pub fn apply(&mut self, intent: NavigationIntent) -> Option<&str> {
        match intent {
            NavigationIntent::Back => {
                if self.entries.len() > 1 {
                    self.entries.pop();
                }
            }
            NavigationIntent::Navigate(url) => self.entries.push(url),
        }
        self.current()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been visited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
