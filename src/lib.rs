#![recursion_limit = "1024"]

extern crate clap;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate nalgebra;

pub mod color;
pub mod errors;
pub mod math;
pub mod surface;
pub mod tempconv;

pub use surface::{Surface, SurfaceSpec};
