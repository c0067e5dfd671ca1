//! Dioxus shell: routing, layouts and pages.

pub mod app;
pub mod components;
pub mod pages;
pub mod services;
