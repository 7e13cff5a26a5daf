pub mod model;
pub mod state;
pub mod view;

pub use state::SizePresetQuickEntryState;
pub use view::SizePresetQuickEntry;
