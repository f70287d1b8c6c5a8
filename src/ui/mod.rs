pub mod classes;
pub mod container;
pub mod status_bar;
pub mod tab;
pub mod tab_list;
pub mod tab_panel;
pub mod tab_panels;
