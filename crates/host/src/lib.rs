pub mod controller;
pub mod keyboard;
pub mod shortcuts;
pub mod widget;

#[cfg(test)]
pub mod harness;
