//! Game implementations.

pub mod tic_tac_toe;
pub mod twenty_one;
