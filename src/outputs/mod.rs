mod list;
pub use list::List;
mod triangle;
pub use triangle::Triangle;
pub(crate) use triangle::oriented;
mod winding;
pub use winding::Winding;
