pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod features;
pub mod logging;
pub mod mvi;
