//! Общие DTO админки: типизированные записи сущностей, конверт ответа
//! бэкенда и отчёт о массовых операциях.

pub mod domain;
pub mod shared;
