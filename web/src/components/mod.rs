pub mod edge_info_table;
pub mod panel;
pub mod table_view;
