pub mod cursor;
pub mod record;

pub use cursor::{Cursor, Mark};
pub use record::{read_point, read_polygon};
