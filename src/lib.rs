mod matcher;
pub use matcher::*;

mod method;
pub use method::*;

pub mod annotate;
pub mod convert;
pub mod display;
pub mod gallery;
pub mod loader;
