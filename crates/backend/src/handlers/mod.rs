pub mod pages;
pub mod rb;
