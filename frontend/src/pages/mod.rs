pub mod securities_page;
