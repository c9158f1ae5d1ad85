pub mod range;
pub mod reference;
