//! Ядро списков админки: сортировка, фильтры, выбор строк, экспорт CSV
//! и состояние боковой панели. Не зависит от UI-фреймворка.

pub mod domain;
pub mod shared;
pub mod usecases;
