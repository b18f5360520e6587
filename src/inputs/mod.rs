/// Domain list file:
pub mod file;
