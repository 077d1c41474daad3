//! Navigation registration for entity screens.
//!
//! Declares where each entity lives in the URL space, how its screens are
//! reached and how it appears in the navigation menu. The host owns the
//! browsing history; components only hand it [`NavigationIntent`]s.

mod history;
mod navbar;
mod routes;

pub use history::{NavigationHistory, NavigationIntent};
pub use navbar::{ENTITY_NAVBAR_ITEMS, NavbarItem};
pub use routes::{ChildRoute, EntityRoute, ResolvedRoute, RouteTable, Screen, ScreenKind};
