//! Catalog Tree Component
//!
//! Sidebar tree of courses, modules, lessons and questions. Rows are the
//! flattened visible part of the catalog; expansion lives in the UI store.

use catalog_core::tree::{flatten_catalog, NodeKey, TreeRow};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_app_context;
use crate::store::{expanded_nodes, toggle_node, use_ui_store, UiStore};

#[component]
pub fn CatalogTree() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();

    let rows = Memo::new(move |_| {
        let expanded = expanded_nodes(&ui);
        ctx.stores
            .catalog
            .with_value(|catalogs| flatten_catalog(catalogs, &expanded))
            .unwrap_or_default()
    });

    view! {
        <nav class="catalog-tree">
            <Show
                when=move || !rows.with(Vec::is_empty)
                fallback=|| view! { <p class="empty-hint">"No courses yet"</p> }
            >
                <For
                    each=move || rows.get()
                    key=|row| (row.key.clone(), row.title.clone(), row.expanded)
                    children=move |row| view! { <TreeRowView row=row ui=ui /> }
                />
            </Show>
        </nav>
    }
}

#[component]
fn TreeRowView(row: TreeRow, ui: UiStore) -> impl IntoView {
    let TreeRow { key, title, depth, expandable, expanded, route } = row;
    let kind = key.kind;
    let toggle_key: NodeKey = key.clone();

    let label = match route {
        Some(route) => view! {
            <A href=route.path()>
                <span class="tree-title">{title}</span>
            </A>
        }
        .into_any(),
        None => view! { <span class="tree-title">{title}</span> }.into_any(),
    };

    view! {
        <div
            class=format!("tree-row {}", kind.css_class())
            style=format!("padding-left: {}px", depth * 16)
        >
            {expandable.then(|| {
                let toggle_key = toggle_key.clone();
                view! {
                    <button
                        class="tree-toggle"
                        on:click=move |_| toggle_node(&ui, toggle_key.clone())
                    >
                        {if expanded { "▼" } else { "▶" }}
                    </button>
                }
            })}
            <span class="tree-icon">{kind.icon()}</span>
            {label}
        </div>
    }
}
