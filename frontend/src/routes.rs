use dioxus::prelude::*;

use crate::pages::securities_page::SecuritiesPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    SecuritiesPage {},
}
