pub mod common;
pub mod u508_create_fashion_items;
pub mod u509_size_presets;
pub mod u510_size_grid;
