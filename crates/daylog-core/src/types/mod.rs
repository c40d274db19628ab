//! Core types shared by the formatter and the router

mod level;

pub use level::{Level, LevelSet};
