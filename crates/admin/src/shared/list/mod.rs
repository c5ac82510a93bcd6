//! Ядро табличных списков админки: сортировка, фильтрация, выбор строк
//! и массовые действия. Без зависимостей от UI.

pub mod bulk;
pub mod columns;
pub mod comparator;
pub mod filter;
pub mod projection;
pub mod selection;
pub mod sort;
pub mod view;

pub use bulk::{bulk_actions, run_bulk, BulkAction};
pub use columns::Column;
pub use filter::{enum_options, Choice, DateWindow, ListFilter};
pub use selection::Selection;
pub use sort::{SortDirection, SortState};
pub use view::{ListStatus, ListSummary, ListView};
