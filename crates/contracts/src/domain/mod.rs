pub mod common;

pub mod a025_size_preset;
pub mod a026_fashion_item;
pub mod a027_item_attribute;
