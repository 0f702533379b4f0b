pub mod health;
pub mod questions;
