//! Page Header Component
//!
//! Sticky header with a back button and the breadcrumb trail.

use leptos::prelude::*;
use leptos_router::components::A;

/// One breadcrumb; the last one is usually not a link
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    pub label: String,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label: label.into(), href: Some(href.into()) }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self { label: label.into(), href: None }
    }
}

pub fn go_back() {
    if let Err(e) = window().history().and_then(|h| h.back()) {
        tracing::warn!("[UI] history.back failed: {:?}", e);
    }
}

#[component]
pub fn PageHeader(#[prop(into)] crumbs: Signal<Vec<Crumb>>) -> impl IntoView {
    view! {
        <header class="page-header">
            <button class="icon-btn back-btn" title="Back" on:click=move |_| go_back()>"←"</button>
            <span class="header-separator"></span>
            <ol class="breadcrumb">
                {move || {
                    crumbs
                        .get()
                        .into_iter()
                        .map(|crumb| match crumb.href {
                            Some(href) => view! {
                                <li class="breadcrumb-item"><A href=href>{crumb.label}</A></li>
                            }
                            .into_any(),
                            None => view! {
                                <li class="breadcrumb-item current">{crumb.label}</li>
                            }
                            .into_any(),
                        })
                        .collect_view()
                }}
            </ol>
        </header>
    }
}
