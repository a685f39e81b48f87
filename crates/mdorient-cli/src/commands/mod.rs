pub mod atoms;
pub mod orient;
