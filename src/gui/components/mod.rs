// src/gui/components/mod.rs
pub mod charts;
pub mod column_panel;
pub mod data_table;
pub mod export_bar;
pub mod filter_bar;
pub mod pager;
pub mod tabs;
