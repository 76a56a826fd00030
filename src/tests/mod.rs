pub mod util;

#[cfg(test)]
mod mesh;
