pub mod rb;
