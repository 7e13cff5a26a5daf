pub mod api;
pub mod state;
pub mod view;

pub use api::{FashionItemsGateway, HttpGateway};
pub use state::{PresetLoadOutcome, QuickEntryError, QuickEntryState};
pub use view::ItemQuickEntryDialog;
