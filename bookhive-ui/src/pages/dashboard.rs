//! Dashboard Page
//!
//! Read-only overview: the catalog, public PDFs and recommendations.

use leptos::*;

use bookhive::{DashboardController, Lifecycle};

use crate::components::{CatalogCard, DocumentCard, Loading, RecommendationCard, Section};
use crate::state::AppServices;

/// Dashboard page component
#[component]
pub fn DashboardPage(services: AppServices) -> impl IntoView {
    let lifecycle = Lifecycle::new();
    let controller = DashboardController::new(
        services.api.clone(),
        services.config.ui.recommendation_subject.clone(),
        lifecycle.clone(),
    );

    let state = create_rw_signal(controller.state());
    controller.subscribe(move |s| state.set(s.clone()));
    on_cleanup(move || lifecycle.end());

    spawn_local(async move {
        controller.load().await;
    });

    view! {
        {move || if state.with(|s| s.is_loading()) {
            view! { <Loading min_height="min-h-[80vh]" /> }.into_view()
        } else {
            let dashboard = state.get();
            view! {
                <div class="bg-gray-50 min-h-screen py-10">
                    <div class="container mx-auto max-w-6xl px-4">
                        <h1 class="text-4xl font-bold">"📚 BookHive Dashboard"</h1>

                        <Section title="All Books">
                            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                                {dashboard.books.into_iter()
                                    .map(|book| view! { <CatalogCard book=book /> })
                                    .collect_view()}
                            </div>
                        </Section>

                        <Section title="Public PDFs">
                            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                                {dashboard.documents.into_iter()
                                    .map(|document| view! { <DocumentCard document=document /> })
                                    .collect_view()}
                            </div>
                        </Section>

                        <Section title="Recommended For You">
                            <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6">
                                {dashboard.recommendations.into_iter()
                                    .map(|book| view! { <RecommendationCard book=book /> })
                                    .collect_view()}
                            </div>
                        </Section>
                    </div>
                </div>
            }.into_view()
        }}
    }
}
