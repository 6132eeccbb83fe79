//! Titled page section.

use leptos::*;

#[component]
pub fn Section(
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="my-10">
            <h2 class="text-2xl font-medium mb-2">{title}</h2>
            <hr class="mb-6 border-gray-300" />
            {children()}
        </section>
    }
}
