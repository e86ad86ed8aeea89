pub mod deal;
pub mod outcome;
