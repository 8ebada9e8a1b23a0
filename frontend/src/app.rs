use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}
