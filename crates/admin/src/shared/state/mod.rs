pub mod kv_store;
pub mod sidebar;

#[cfg(feature = "browser")]
pub use kv_store::LocalStorage;
pub use kv_store::{KeyValueStore, MemoryKeyValueStore};
pub use sidebar::{NavGroup, NavItem, SidebarCommand, SidebarState};
