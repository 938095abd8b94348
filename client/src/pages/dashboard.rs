//! Dashboard page: welcome card and record counts per resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Each count is one page request
//! with size 1, so only the `total` of the response is used.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::crud::{self, InspectionDevices, OilSamples, Projects, Resource, TestStations, Users};
use crate::net::request::ApiClient;
use crate::net::types::PageRequest;
use crate::routes;
use crate::state::session::SessionStore;

/// One dashboard tile.
#[derive(Clone, Copy)]
struct Tile {
    label: &'static str,
    href: &'static str,
    total: RwSignal<Option<u64>>,
}

/// Text shown for a count that may still be loading or have failed.
fn total_label(total: Option<u64>) -> String {
    total.map_or_else(|| "-".to_owned(), |n| n.to_string())
}

/// Request for the first row only; the response `total` is what matters.
fn count_request<R: Resource>() -> PageRequest<R::Filter> {
    PageRequest { page: Some(1), size: Some(1), ..PageRequest::default() }
}

fn load_total<R: Resource>(api: ApiClient, total: RwSignal<Option<u64>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(page) = crud::page::<R>(api, &count_request::<R>()).await {
            total.set(Some(page.total));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, total);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = ApiClient::from_context();
    let session = expect_context::<SessionStore>();

    let tile = |label, href| Tile { label, href, total: RwSignal::new(None) };
    let tiles = [
        tile("Projects", routes::PROJECTS),
        tile("Inspection devices", routes::INSPECTION_DEVICES),
        tile("Oil samples", routes::OIL_SAMPLES),
        tile("Test stations", routes::TEST_STATIONS),
        tile("Users", routes::USERS),
    ];
    load_total::<Projects>(api, tiles[0].total);
    load_total::<InspectionDevices>(api, tiles[1].total);
    load_total::<OilSamples>(api, tiles[2].total);
    load_total::<TestStations>(api, tiles[3].total);
    load_total::<Users>(api, tiles[4].total);

    let greeting = move || {
        session.user_info().map_or_else(
            || "Welcome".to_owned(),
            |user| format!("Welcome, {} ({})", user.username, user.role.as_str()),
        )
    };

    view! {
        <div class="dashboard-page">
            <section class="card dashboard-page__welcome">
                <h2>{greeting}</h2>
                <p>"Manage projects, inspection devices, oil samples, and test stations from the menu."</p>
            </section>
            <div class="dashboard-page__tiles">
                {tiles
                    .into_iter()
                    .map(|t| {
                        view! {
                            <A href=t.href attr:class="card dashboard-tile">
                                <span class="dashboard-tile__label">{t.label}</span>
                                <span class="dashboard-tile__total">{move || total_label(t.total.get())}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
