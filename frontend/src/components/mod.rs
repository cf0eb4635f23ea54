pub mod error_boundary;
pub mod loading_indicator;
pub mod securities_components;
