pub mod binomial;
pub mod bit_game;
pub mod k_subset;
pub mod reader;
pub mod selector;
pub mod spiral;
pub mod summation;
