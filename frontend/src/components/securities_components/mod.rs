pub mod filter_bar;
pub mod filterable_table;
pub mod pagination_controls;
