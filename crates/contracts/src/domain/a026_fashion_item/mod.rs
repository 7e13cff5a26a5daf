pub mod aggregate;

pub use aggregate::{FashionItem, FashionItemDto, FashionItemId, ItemBarcode, ItemVariantAttribute};
