// src/gui/components/mod.rs
pub mod alert;
pub mod config_tab;
pub mod export_tab;
pub mod tabs;
