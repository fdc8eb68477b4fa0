// src/gui/mod.rs
pub mod actions;
pub mod app;
pub mod capture;
pub mod components;
pub mod pages;
pub mod progress;
pub mod router;

pub use app::run;
