//! Entity route registration with lazily loaded child routes.

use crate::task::domain::TaskId;
use std::sync::OnceLock;

/// Kind of screen a child route leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    /// Paginated list.
    List,
    /// Empty form for a new record.
    Create,
    /// Read-only view of one record.
    Detail,
    /// Pre-populated form for one record.
    Edit,
}

/// Screen selected by a URL, with its record identifier where relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Paginated list.
    List,
    /// Empty form for a new record.
    Create,
    /// Read-only view of the record.
    Detail(TaskId),
    /// Pre-populated form for the record.
    Edit(TaskId),
}

/// Route below an entity path. `:id` segments capture the record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRoute {
    /// Path pattern relative to the entity path; empty for the list.
    pub path: &'static str,
    /// Screen the route leads to.
    pub kind: ScreenKind,
}

/// Top-level route of one entity.
#[derive(Debug, Clone, Copy)]
pub struct EntityRoute {
    /// Path segment of the entity, without slashes.
    pub path: &'static str,
    /// Translation key of the page title.
    pub page_title: &'static str,
    /// Produces the child routes on first navigation.
    pub load_children: fn() -> Vec<ChildRoute>,
}

/// Outcome of resolving a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Path segment of the matched entity.
    pub entity: &'static str,
    /// Translation key of the page title.
    pub page_title: &'static str,
    /// Selected screen.
    pub screen: Screen,
}

#[derive(Debug)]
struct RegisteredRoute {
    route: EntityRoute,
    children: OnceLock<Vec<ChildRoute>>,
}

impl RegisteredRoute {
    fn children(&self) -> &[ChildRoute] {
        self.children.get_or_init(|| {
            tracing::debug!(entity = self.route.path, "loading child routes");
            (self.route.load_children)()
        })
    }
}

/// Registered entity routes.
///
/// # Examples
///
/// ```
/// use task_app::navigation::{RouteTable, Screen};
///
/// let routes = RouteTable::entities();
/// assert!(!routes.is_loaded("task"));
///
/// let resolved = routes.resolve("/task/new").expect("create route");
/// assert_eq!(resolved.screen, Screen::Create);
/// assert!(routes.is_loaded("task"));
/// ```
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<RegisteredRoute>,
}

/// Child routes of the task entity.
fn task_routes() -> Vec<ChildRoute> {
    vec![
        ChildRoute {
            path: "",
            kind: ScreenKind::List,
        },
        ChildRoute {
            path: ":id/view",
            kind: ScreenKind::Detail,
        },
        ChildRoute {
            path: "new",
            kind: ScreenKind::Create,
        },
        ChildRoute {
            path: ":id/edit",
            kind: ScreenKind::Edit,
        },
    ]
}

impl RouteTable {
    /// Creates a table from entity routes; children load lazily.
    #[must_use]
    pub fn new(routes: impl IntoIterator<Item = EntityRoute>) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|route| RegisteredRoute {
                    route,
                    children: OnceLock::new(),
                })
                .collect(),
        }
    }

    /// Creates the table of every generated entity.
    #[must_use]
    pub fn entities() -> Self {
        Self::new([EntityRoute {
            path: "task",
            page_title: "taskApp.task.home.title",
            load_children: task_routes,
        }])
    }

    /// Returns `true` once the child routes of `entity` have been loaded.
    #[must_use]
    pub fn is_loaded(&self, entity: &str) -> bool {
        self.routes
            .iter()
            .any(|registered| registered.route.path == entity && registered.children.get().is_some())
    }

    /// Resolves a URL such as `/task/12/edit?page=0` to a screen.
    ///
    /// Query strings and fragments are ignored. Returns `None` when no route
    /// matches or an `:id` segment is not a valid identifier.
    #[must_use]
    pub fn resolve(&self, url: &str) -> Option<ResolvedRoute> {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let mut segments = path.split('/').filter(|segment| !segment.is_empty());
        let entity = segments.next()?;
        let rest: Vec<&str> = segments.collect();

        let registered = self
            .routes
            .iter()
            .find(|registered| registered.route.path == entity)?;
        let screen = registered
            .children()
            .iter()
            .find_map(|child| match_child(child, &rest))?;

        Some(ResolvedRoute {
            entity: registered.route.path,
            page_title: registered.route.page_title,
            screen,
        })
    }
}

fn match_child(child: &ChildRoute, segments: &[&str]) -> Option<Screen> {
    let pattern: Vec<&str> = child
        .path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();
    if pattern.len() != segments.len() {
        return None;
    }

    let mut id = None;
    for (expected, actual) in pattern.iter().zip(segments) {
        if *expected == ":id" {
            let value = actual.parse::<i64>().ok()?;
            id = Some(TaskId::new(value).ok()?);
        } else if expected != actual {
            return None;
        }
    }

    match (child.kind, id) {
        (ScreenKind::List, None) => Some(Screen::List),
        (ScreenKind::Create, None) => Some(Screen::Create),
        (ScreenKind::Detail, Some(task_id)) => Some(Screen::Detail(task_id)),
        (ScreenKind::Edit, Some(task_id)) => Some(Screen::Edit(task_id)),
        _ => None,
    }
}
