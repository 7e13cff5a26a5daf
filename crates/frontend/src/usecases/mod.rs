pub mod u508_item_quick_entry;
pub mod u510_size_grid;
