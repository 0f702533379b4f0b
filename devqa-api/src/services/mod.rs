pub mod answer;
pub mod reply;
