pub mod securities_api;
