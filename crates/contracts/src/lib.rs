//! Types shared by the room booking frontend and backend.

pub mod rb;
pub mod shared;
