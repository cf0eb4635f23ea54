//! Backend library: the securities query service behind the frontend server functions.

pub mod api;
pub mod mock_utils;
