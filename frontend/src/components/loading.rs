use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                position: absolute;
                top: 16px;
                left: 50%;
                transform: translateX(-50%);
                color:black;
                font-size: 20px;
                border: 1px solid black;
                padding: 10px;
                border-radius: 5px;
                background: white;
                z-index: 5;
            ",
            "Loading page..."
        }
    }
}
