pub mod spotify;
pub mod weatherapi;
