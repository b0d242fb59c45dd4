pub mod implementation;
pub mod keypad;
pub mod public_types;


pub use implementation::{compute_grand_total, OrderAggregator, OrderLine};
pub use keypad::KeypadBuffer;
pub use public_types::*;
