pub mod api_utils;
pub mod cell_format;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod list;
pub mod logger;
pub mod state;
