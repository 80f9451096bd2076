//! Value types shared by the store, selection, rendering and interaction layers.

mod cell;
mod region;
mod selection;

pub use cell::*;
pub use region::*;
pub use selection::*;
