pub mod config;
pub mod date_utils;
pub mod dom;
pub mod error;
pub mod storage;
