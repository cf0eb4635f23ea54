//! Backend API entry points.

pub mod securities;
