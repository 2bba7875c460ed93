pub mod echo;
pub mod input;
pub mod status_bar;
