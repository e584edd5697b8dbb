pub mod hotlines;
pub mod intro;
pub mod mistakes;
pub mod prohibited;
pub mod quiz;
pub mod rescuers;
