//! App Root Component
//!
//! Builds the REST client and session context, then routes to pages. Both
//! are handed to each page explicitly as props.

use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use bookhive::{
    Config, HttpBookApi, IdentityProvider, RedirectIdentity, Route as Page, Session,
    SessionContext, StaticIdentity,
};

use crate::browser::WebEnv;
use crate::components::Nav;
use crate::pages::{BooksPage, DashboardPage, ProfilePage, WelcomePage};
use crate::state::{AppServices, SessionState};

/// Root application component
#[component]
pub fn App(config: Config) -> impl IntoView {
    let provider: Rc<dyn IdentityProvider> = if config.identity.is_configured() {
        Rc::new(RedirectIdentity::new(config.identity.clone(), WebEnv))
    } else {
        log::warn!("Identity provider not configured; login is disabled");
        Rc::new(StaticIdentity::new(Session::anonymous()))
    };

    let context = SessionContext::new(provider);
    let session = SessionState::new(context.clone());

    // Resolve the session, consuming a login callback if we are returning from one
    spawn_local(async move {
        context.initialize().await;
    });

    let services = AppServices::new(Rc::new(HttpBookApi::new(&config.api.base_url)), config);

    let books = (services.clone(), session.clone());
    let dashboard = services.clone();
    let profile = session.clone();

    view! {
        <Router>
            <div class="min-h-screen bg-green-50 text-gray-900 flex flex-col">
                <Nav session=session />

                <main class="flex-1">
                    <Routes>
                        <Route path=Page::Welcome.path() view=WelcomePage />
                        <Route
                            path=Page::Books.path()
                            view=move || view! {
                                <BooksPage services=books.0.clone() session=books.1.clone() />
                            }
                        />
                        <Route
                            path=Page::Dashboard.path()
                            view=move || view! { <DashboardPage services=dashboard.clone() /> }
                        />
                        <Route
                            path=Page::Profile.path()
                            view=move || view! { <ProfilePage session=profile.clone() /> }
                        />
                        <Route path=Page::NotFound.path() view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Page::Welcome.path()
                class="px-6 py-3 bg-green-700 hover:bg-green-800 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
