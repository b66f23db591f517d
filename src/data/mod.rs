pub mod loader;
pub mod table;

pub use loader::{load_data, load_table};
pub use table::{Columns, TripTable};
