//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::basic_layout::BasicLayout;
use crate::components::error_boundary::AppErrorBoundary;
use crate::components::route_guard::{RouteGuard, redirect_options};
use crate::components::toast_host::ToastHost;
use crate::net::request::ApiClient;
use crate::pages::{
    dashboard::DashboardPage, init_admin::InitAdminPage, inspection_devices::InspectionDevicesPage,
    login::LoginPage, oil_samples::OilSamplesPage, projects::ProjectsPage, register::RegisterPage,
    test_stations::TestStationsPage, users::UsersPage,
};
use crate::routes;
use crate::state::notifications::Notifications;
use crate::state::session::SessionStore;
use crate::state::system_status::SystemStatusProber;

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

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <a href=routes::DASHBOARD>"Back to dashboard"</a>
        </div>
    }
}

/// Root application component.
///
/// Provides the session, notification, and status-probe services and sets up
/// client-side routing. Public pages are guarded one by one; protected pages
/// share one guard around the layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::load();
    let notices = Notifications::new();
    let api = ApiClient::new(session, notices);
    let prober = SystemStatusProber::new(api);

    provide_context(session);
    provide_context(notices);
    provide_context(prober);

    view! {
        <Stylesheet id="leptos" href="/pkg/oiltest-admin.css"/>
        <Title text="Oil Test Admin"/>

        <Router>
            <AppErrorBoundary>
                <Routes fallback=|| view! { <RouteGuard><NotFound/></RouteGuard> }>
                    <Route path=path!("/login") view=|| view! { <RouteGuard><LoginPage/></RouteGuard> }/>
                    <Route path=path!("/register") view=|| view! { <RouteGuard><RegisterPage/></RouteGuard> }/>
                    <Route path=path!("/init-admin") view=|| view! { <RouteGuard><InitAdminPage/></RouteGuard> }/>
                    <ParentRoute path=path!("") view=|| view! { <RouteGuard><BasicLayout/></RouteGuard> }>
                        <Route path=path!("") view=|| view! { <Redirect path=routes::DASHBOARD options=redirect_options()/> }/>
                        <Route path=path!("/dashboard") view=DashboardPage/>
                        <Route path=path!("/test-line/projects") view=ProjectsPage/>
                        <Route path=path!("/test-line/devices") view=InspectionDevicesPage/>
                        <Route path=path!("/test-line/stations") view=TestStationsPage/>
                        <Route path=path!("/sample/oil-samples") view=OilSamplesPage/>
                        <Route path=path!("/system/users") view=UsersPage/>
                    </ParentRoute>
                </Routes>
            </AppErrorBoundary>
            <ToastHost/>
        </Router>
    }
}
