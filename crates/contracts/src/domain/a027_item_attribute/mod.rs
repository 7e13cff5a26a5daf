pub mod aggregate;

pub use aggregate::{AttributeValue, ItemAttribute, COLOR_ATTRIBUTE, SIZE_ATTRIBUTE};
