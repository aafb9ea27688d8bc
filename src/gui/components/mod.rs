// src/gui/components/mod.rs
pub mod controls;
pub mod preview_table;
