//! Authenticated shell: sidebar menu, header, breadcrumb, and routed outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once for every protected route, behind the route guard. Menu
//! entries and breadcrumbs both come from `routes::MENU`.

#[cfg(test)]
#[path = "basic_layout_test.rs"]
mod basic_layout_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::net::request::ApiClient;
use crate::routes::{MENU, MenuItem, menu_trail, normalize_path};
use crate::util::dark_mode::{self, Theme};

/// Labels from the menu root down to the entry for `path`.
fn breadcrumb(path: &str) -> Vec<&'static str> {
    menu_trail(path).into_iter().map(|item| item.label).collect()
}

/// Whether `item` or one of its children is the current page.
fn is_active(item: &MenuItem, path: &str) -> bool {
    let path = normalize_path(path);
    item.path == path || item.children.iter().any(|child| is_active(child, &path))
}

fn menu_entry(item: &'static MenuItem, pathname: Memo<String>) -> AnyView {
    let active = move || is_active(item, &pathname.get());
    if item.children.is_empty() {
        return view! {
            <li class=move || if active() { "sidebar__item sidebar__item--active" } else { "sidebar__item" }>
                <A href=item.path>{item.label}</A>
            </li>
        }
        .into_any();
    }
    view! {
        <li class=move || if active() { "sidebar__group sidebar__group--active" } else { "sidebar__group" }>
            <span class="sidebar__group-label">{item.label}</span>
            <ul class="sidebar__children">
                {item.children.iter().map(|child| menu_entry(child, pathname)).collect_view()}
            </ul>
        </li>
    }
    .into_any()
}

#[component]
pub fn BasicLayout() -> impl IntoView {
    let api = ApiClient::from_context();
    let session = api.session();
    let location = use_location();
    let pathname = Memo::new(move |_| location.pathname.get());

    let theme = RwSignal::new(Theme::Light);
    Effect::new(move || {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        theme.set(preferred);
    });

    // A session restored from storage can carry a token without the user record.
    Effect::new(move || {
        if session.has_token() && session.user_info().is_none() {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                if let Ok(user) = crate::net::api::me(api).await {
                    session.set_user_info(Some(user));
                }
            });
        }
    });

    let username = move || session.user_info().map(|u| u.username).unwrap_or_default();
    let crumbs = move || {
        breadcrumb(&pathname.get())
            .into_iter()
            .map(|label| view! { <span class="breadcrumb__item">{label}</span> })
            .collect_view()
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // The server session may already be gone; the local one is cleared either way.
            let _ = crate::net::api::logout(api).await;
            session.logout();
            leptos::logging::log!("logged out");
        });
        #[cfg(not(feature = "hydrate"))]
        session.logout();
    };

    view! {
        <div class="layout">
            <aside class="sidebar">
                <div class="sidebar__brand">"Oil Test Admin"</div>
                <nav>
                    <ul class="sidebar__menu">
                        {MENU.iter().map(|item| menu_entry(item, pathname)).collect_view()}
                    </ul>
                </nav>
            </aside>
            <div class="layout__main">
                <header class="layout__header">
                    <nav class="breadcrumb">{crumbs}</nav>
                    <span class="layout__spacer"></span>
                    <button
                        class="btn layout__theme-toggle"
                        title="Toggle dark mode"
                        on:click=move |_| theme.set(dark_mode::toggle(theme.get()))
                    >
                        {move || if theme.get().is_dark() { "☀" } else { "☾" }}
                    </button>
                    <span class="layout__user">{username}</span>
                    <button class="btn layout__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="layout__content">
                    <Outlet/>
                </main>
            </div>
        </div>
    }
}
