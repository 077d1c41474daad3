//! Entity entries of the navigation menu.

/// One entry of the entity menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarItem {
    /// Label shown when no translation is available.
    pub name: &'static str,
    /// Route the entry links to.
    pub route: &'static str,
    /// Translation key of the label.
    pub translation_key: &'static str,
}

/// Menu entries for every registered entity.
pub const ENTITY_NAVBAR_ITEMS: &[NavbarItem] = &[NavbarItem {
    name: "Task",
    route: "/task",
    translation_key: "global.menu.entities.task",
}];

impl NavbarItem {
    /// Finds a menu entry by label, ignoring ASCII case.
    #[must_use]
    pub fn find(name: &str) -> Option<&'static Self> {
        ENTITY_NAVBAR_ITEMS
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }
}
