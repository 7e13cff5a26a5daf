pub mod executor;

pub use executor::CreateItemsExecutor;
