// src/gui/actions/mod.rs
//
// Button actions. Layout lives in components; the operational logic here.

mod copy;
mod export;
mod load;

pub use copy::copy;
pub use export::export;
pub use load::load;
