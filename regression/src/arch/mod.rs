pub mod loss;
mod params;

pub use params::{ModelState, Params};
