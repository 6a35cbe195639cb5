//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::require_role::RequireRole;
use crate::net::types::Role;
use crate::pages::admin::areas::AdminAreasPage;
use crate::pages::admin::dashboard::AdminDashboardPage;
use crate::pages::company::dashboard::CompanyDashboardPage;
use crate::pages::company::new_job_offer::NewJobOfferPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register_company::RegisterCompanyPage;
use crate::pages::register_student::RegisterStudentPage;
use crate::pages::student::dashboard::StudentDashboardPage;
use crate::pages::student::profile::StudentProfilePage;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing;
/// each protected subtree is wrapped in [`RequireRole`] with its
/// allow-list.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Session context: seeded from the persisted store so a reload keeps
    // the signed-in identity without a network round trip.
    let auth = RwSignal::new(AuthState::from_store());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/portal-client.css"/>
        <Title text="Placement Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=(StaticSegment("register"), StaticSegment("student"))
                    view=RegisterStudentPage
                />
                <Route
                    path=(StaticSegment("register"), StaticSegment("company"))
                    view=RegisterCompanyPage
                />
                <ParentRoute
                    path=StaticSegment("admin")
                    view=|| view! { <RequireRole allowed_roles=vec![Role::Admin]/> }
                >
                    <Route path=StaticSegment("") view=AdminDashboardPage/>
                    <Route path=StaticSegment("areas") view=AdminAreasPage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("company")
                    view=|| view! { <RequireRole allowed_roles=vec![Role::Company]/> }
                >
                    <Route path=StaticSegment("") view=CompanyDashboardPage/>
                    <Route path=StaticSegment("new-offer") view=NewJobOfferPage/>
                </ParentRoute>
                <ParentRoute
                    path=StaticSegment("student")
                    view=|| view! { <RequireRole allowed_roles=vec![Role::Student]/> }
                >
                    <Route path=StaticSegment("") view=StudentDashboardPage/>
                    <Route path=StaticSegment("profile") view=StudentProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
