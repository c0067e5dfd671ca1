use crate::frontend::services::context::use_shell;
use chrono::Datelike;
use dioxus::prelude::*;

const POWERED_BY_URL: &str = "https://graphile.org/postgraphile";

pub fn open_external(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        log::error!("Failed to open {url}: {e}");
    }
}

#[component]
pub fn Footer() -> Element {
    let shell = use_shell();
    let year = chrono::Local::now().year();
    let company = shell.config.company_name.clone();
    let terms_url = shell.config.terms_url.clone();

    rsx! {
        footer {
            class: "footer",
            span {
                class: "footer-copyright",
                "Copyright © {year} {company}. All rights reserved."
                if let Some(url) = terms_url {
                    " "
                    a {
                        class: "footer-link",
                        href: "#",
                        onclick: move |e| {
                            e.prevent_default();
                            open_external(&url);
                        },
                        "Terms and conditions"
                    }
                }
            }
            span {
                class: "footer-powered",
                "Powered by "
                a {
                    class: "footer-link",
                    href: "#",
                    onclick: move |e| {
                        e.prevent_default();
                        open_external(POWERED_BY_URL);
                    },
                    "PostGraphile"
                }
            }
        }
    }
}
