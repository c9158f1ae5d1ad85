pub mod autofill;
pub mod conditional;
pub mod outline;
pub mod populate;
pub mod sort;
pub mod value;
