use dioxus::prelude::*;

use crate::pages::editor_page::EditorPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    EditorPage {},
}
