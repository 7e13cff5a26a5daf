pub mod u508_create_fashion_items;
pub mod u510_size_grid;
