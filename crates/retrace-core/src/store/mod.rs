pub mod history_store;
pub mod selection_store;
pub mod views;

pub use history_store::HistoryStore;
pub use selection_store::SelectionStore;
pub use views::{history_by_day, history_by_day_and_hour};
