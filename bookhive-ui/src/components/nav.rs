//! Navigation Component
//!
//! Header bar with the page links and the login state.

use leptos::*;
use leptos_router::*;

use bookhive::Route;

use crate::state::SessionState;

/// Navigation header component
#[component]
pub fn Nav(session: SessionState) -> impl IntoView {
    let user = session.user();
    let for_login = session.clone();
    let for_logout = session.clone();

    view! {
        <nav class="bg-green-800 text-white shadow">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=Route::Welcome.path() class="flex items-center space-x-3">
                        <span class="text-2xl">"📖"</span>
                        <span class="text-xl font-bold">"BookHive"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        {Route::NAV
                            .into_iter()
                            .map(|route| view! { <NavLink href=route.path() label=route.label() /> })
                            .collect_view()}

                        {move || match user.get() {
                            Some(user) => {
                                let session = for_logout.clone();
                                view! {
                                    <div class="flex items-center space-x-3 ml-4">
                                        <img
                                            src=user.picture
                                            alt=user.name
                                            class="w-8 h-8 rounded-full"
                                        />
                                        <button
                                            class="px-4 py-2 rounded-lg hover:bg-green-700 transition-colors"
                                            on:click=move |_| session.logout()
                                        >
                                            "Logout"
                                        </button>
                                    </div>
                                }.into_view()
                            }
                            None => {
                                let session = for_login.clone();
                                view! {
                                    <button
                                        class="ml-4 px-4 py-2 rounded-lg hover:bg-green-700 transition-colors"
                                        on:click=move |_| session.login()
                                    >
                                        "Login"
                                    </button>
                                }.into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-green-100 hover:text-white hover:bg-green-700 transition-colors"
            active_class="bg-green-700 text-white"
        >
            {label}
        </A>
    }
}
