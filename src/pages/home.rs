use catalog_core::routes::EntityRoute;
use catalog_core::tree::NodeKind;
use leptos::prelude::*;

use crate::components::{AdminLayout, Crumb, EntityCard, PageHeader};
use crate::context::use_app_context;

/// Landing page: every course as a card
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let navigating = RwSignal::new(false);
    let courses = move || {
        ctx.stores
            .catalog
            .with_value(|catalogs| catalogs.iter().map(|c| (c.item_id.clone(), c.title.clone())).collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <AdminLayout>
            <PageHeader crumbs=vec![Crumb::current("Courses")] />
            <div class="page-content">
                <section class="card">
                    <h2 class="card-title">"Courses"</h2>
                    <p class="card-description">"Pick a course to edit, or add one from the sidebar"</p>
                    <div class="card-list">
                        <For
                            each=courses
                            key=|course| course.clone()
                            children=move |(id, title)| view! {
                                <EntityCard
                                    route=EntityRoute::Course(id)
                                    title=title
                                    icon=NodeKind::Catalog.icon()
                                    navigating=navigating
                                />
                            }
                        />
                    </div>
                </section>
            </div>
        </AdminLayout>
    }
}
