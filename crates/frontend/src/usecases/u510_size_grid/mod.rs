pub mod api;
pub mod state;
pub mod view;

pub use state::SizeGridState;
pub use view::SizeGridDialog;
