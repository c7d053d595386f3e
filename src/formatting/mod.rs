pub mod table;
pub mod utils;

pub use table::{Cell, Table};
pub use utils::mask_token;
