pub mod aggregate;

pub use aggregate::{SizePreset, SizePresetDto, SizePresetId};
