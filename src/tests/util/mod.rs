pub mod polygon;
pub mod random;
mod indexed;
mod load_polygon_list;
mod vtest;
use std::{env, path};

pub use indexed::Indexed;
pub use load_polygon_list::load_polygon_list;
pub use vtest::VTest;

pub fn polygons_path() -> path::PathBuf {
    path::Path::new(&env::var("CARGO_MANIFEST_DIR").unwrap()).join("resources").join("polygons")
}
