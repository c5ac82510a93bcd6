use super::kv_store::KeyValueStore;
use crate::shared::config::SidebarConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub aria_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavGroup {
    pub header: &'static str,
    pub items: &'static [NavItem],
}

/// Навигация админки по группам
pub const NAVIGATION: &[NavGroup] = &[
    NavGroup {
        header: "Main",
        items: &[NavItem {
            name: "Dashboard",
            href: "/admin/dashboard",
            aria_label: "Go to dashboard overview",
        }],
    },
    NavGroup {
        header: "Management",
        items: &[
            NavItem {
                name: "Activities",
                href: "/admin/activities",
                aria_label: "Manage activity listings",
            },
            NavItem {
                name: "Bookings",
                href: "/admin/bookings",
                aria_label: "View and manage bookings",
            },
            NavItem {
                name: "Users",
                href: "/admin/users",
                aria_label: "Manage user accounts",
            },
            NavItem {
                name: "Media",
                href: "/admin/media",
                aria_label: "Manage media library",
            },
            NavItem {
                name: "Blog",
                href: "/admin/blog",
                aria_label: "Manage blog content",
            },
            NavItem {
                name: "Payments",
                href: "/admin/payments",
                aria_label: "Manage payments and transactions",
            },
        ],
    },
    NavGroup {
        header: "Analytics",
        items: &[NavItem {
            name: "Analytics",
            href: "/admin/analytics",
            aria_label: "View analytics and reports",
        }],
    },
    NavGroup {
        header: "Settings",
        items: &[NavItem {
            name: "Settings",
            href: "/admin/settings",
            aria_label: "Configure system settings",
        }],
    },
];

/// Что должен сделать слой отрисовки после нажатия клавиши
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarCommand {
    None,
    /// Клавиша обработана, `preventDefault`
    Handled,
    /// Снять фокус с активного элемента
    Blur,
    Navigate(&'static str),
}

/// Состояние боковой панели: свёрнута ли она, открыто ли мобильное меню
/// и какой пункт в фокусе при навигации с клавиатуры.
///
/// Флаг свёрнутости хранится в `KeyValueStore` как "true"/"false".
pub struct SidebarState<S: KeyValueStore> {
    store: S,
    storage_key: String,
    collapsed: bool,
    mobile_open: bool,
    focused: Option<usize>,
    items: Vec<NavItem>,
}

impl<S: KeyValueStore> SidebarState<S> {
    pub fn load(store: S, config: &SidebarConfig) -> Self {
        let collapsed = store
            .get(&config.storage_key)
            .map(|v| v == "true")
            .unwrap_or(false);
        Self {
            store,
            storage_key: config.storage_key.clone(),
            collapsed,
            mobile_open: false,
            focused: None,
            items: NAVIGATION.iter().flat_map(|g| g.items.iter().copied()).collect(),
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        let value = if collapsed { "true" } else { "false" };
        self.store.set(&self.storage_key, value);
        tracing::debug!("Sidebar collapsed: {}", collapsed);
    }

    pub fn toggle_collapsed(&mut self) {
        self.set_collapsed(!self.collapsed);
    }

    pub fn is_mobile_open(&self) -> bool {
        self.mobile_open
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_open = false;
    }

    pub fn focused(&self) -> Option<NavItem> {
        self.focused.and_then(|i| self.items.get(i).copied())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Обработка клавиатуры, пока фокус внутри панели
    pub fn handle_key(&mut self, key: &str) -> SidebarCommand {
        let last = self.items.len().saturating_sub(1);
        match key {
            "ArrowDown" => {
                self.focused = Some(self.focused.map(|i| (i + 1).min(last)).unwrap_or(0));
                SidebarCommand::Handled
            }
            "ArrowUp" => {
                self.focused = Some(self.focused.map(|i| i.saturating_sub(1)).unwrap_or(0));
                SidebarCommand::Handled
            }
            "Enter" | " " => match self.focused() {
                Some(item) => {
                    self.mobile_open = false;
                    SidebarCommand::Navigate(item.href)
                }
                None => SidebarCommand::None,
            },
            "Escape" => {
                self.focused = None;
                SidebarCommand::Blur
            }
            "Home" => {
                self.focused = Some(0);
                SidebarCommand::Handled
            }
            "End" => {
                self.focused = Some(last);
                SidebarCommand::Handled
            }
            _ => SidebarCommand::None,
        }
    }
}

/// Активен ли пункт меню для текущего пути
pub fn is_active(item: &NavItem, pathname: &str) -> bool {
    item.href == pathname
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::state::kv_store::MemoryKeyValueStore;

    fn config() -> SidebarConfig {
        SidebarConfig::default()
    }

    #[test]
    fn test_collapsed_flag_is_persisted() {
        let mut sidebar = SidebarState::load(MemoryKeyValueStore::new(), &config());
        assert!(!sidebar.is_collapsed());
        sidebar.toggle_collapsed();
        assert_eq!(
            sidebar.store().get("admin:sidebar-collapsed").as_deref(),
            Some("true")
        );

        let restored = SidebarState::load(sidebar.store().clone(), &config());
        assert!(restored.is_collapsed());
    }

    #[test]
    fn test_garbage_value_means_expanded() {
        let mut store = MemoryKeyValueStore::new();
        store.set("admin:sidebar-collapsed", "yes");
        assert!(!SidebarState::load(store, &config()).is_collapsed());
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut sidebar = SidebarState::load(MemoryKeyValueStore::new(), &config());
        assert_eq!(sidebar.handle_key("Enter"), SidebarCommand::None);

        sidebar.handle_key("ArrowUp");
        assert_eq!(sidebar.focused().map(|i| i.name), Some("Dashboard"));
        sidebar.handle_key("ArrowDown");
        assert_eq!(sidebar.focused().map(|i| i.name), Some("Activities"));

        sidebar.handle_key("End");
        sidebar.handle_key("ArrowDown");
        assert_eq!(sidebar.focused().map(|i| i.name), Some("Settings"));

        sidebar.toggle_mobile_menu();
        assert_eq!(sidebar.handle_key(" "), SidebarCommand::Navigate("/admin/settings"));
        assert!(!sidebar.is_mobile_open());

        assert_eq!(sidebar.handle_key("Escape"), SidebarCommand::Blur);
        assert_eq!(sidebar.focused(), None);
        assert_eq!(sidebar.handle_key("x"), SidebarCommand::None);
    }

    #[test]
    fn test_active_item() {
        let item = NAVIGATION[1].items[1];
        assert!(is_active(&item, "/admin/bookings"));
        assert!(!is_active(&item, "/admin/bookings/BK1"));
    }
}
