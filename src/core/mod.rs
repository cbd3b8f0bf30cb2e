pub mod constants;
pub mod distribution;
pub mod name_resolver;

pub use distribution::*;
pub use name_resolver::{aliases_of, resolve};
