//! Generic paginated CRUD table with create/edit dialog and delete confirm.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each resource page implements [`AdminResource`] (columns, form fields, and
//! form conversions) and renders [`resource_table`]. Paging, sorting, search,
//! uniqueness checks, and modal state are shared here.
//!
//! ERROR HANDLING
//! ==============
//! Form validation errors stay inside the dialog. API failures were already
//! toasted by the request layer, so this module only resets its busy flags.

#[cfg(test)]
#[path = "resource_table_test.rs"]
mod resource_table_test;

use leptos::prelude::*;

use crate::net::crud::{self, EnabledSwitch, Projects, Resource};
use crate::net::request::ApiClient;
use crate::state::table::{FormMode, PAGE_SIZE_OPTIONS, QueryKey, TableState};
use crate::util::forms::{FieldKind, FieldSpec, FormValues, check_required};
use crate::util::validation::ValidationError;

/// A table column; sortable when `sort` names the backend sort field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub sort: Option<&'static str>,
}

impl Column {
    pub const fn plain(label: &'static str) -> Self {
        Self { label, sort: None }
    }

    pub const fn sorted(label: &'static str, field: &'static str) -> Self {
        Self { label, sort: Some(field) }
    }
}

/// Presentation and form mapping for one admin resource.
pub trait AdminResource: Resource {
    const TITLE: &'static str;
    const SINGULAR: &'static str;
    const SEARCH_HINT: &'static str;

    fn columns() -> &'static [Column];
    fn fields() -> &'static [FieldSpec];
    fn id(item: &Self::Item) -> i64;
    fn cells(item: &Self::Item) -> Vec<String>;
    /// Filter applied for the search box keyword.
    fn filter(keyword: &str) -> Self::Filter;
    fn values(item: &Self::Item) -> FormValues;

    /// # Errors
    ///
    /// The first invalid field.
    fn to_create(values: &FormValues) -> Result<Self::Create, ValidationError>;

    /// # Errors
    ///
    /// The first invalid field.
    fn to_update(values: &FormValues) -> Result<Self::Update, ValidationError>;

    /// Initial values for the create dialog.
    fn defaults() -> FormValues {
        FormValues::new()
    }

    /// Current enabled flag for resources with enable/disable endpoints.
    fn enabled(_item: &Self::Item) -> Option<bool> {
        None
    }
}

/// A validated dialog submission.
pub enum Submission<R: Resource> {
    Create(R::Create),
    Update(i64, R::Update),
}

/// Validate the dialog and build the request body. Required fields are
/// enforced on create only; blank fields on edit mean "unchanged".
///
/// # Errors
///
/// The first invalid field.
pub fn prepare<R: AdminResource>(mode: FormMode, values: &FormValues) -> Result<Submission<R>, ValidationError> {
    match mode {
        FormMode::Create => {
            check_required(R::fields(), values)?;
            R::to_create(values).map(Submission::Create)
        }
        FormMode::Edit(id) => R::to_update(values).map(|body| Submission::Update(id, body)),
    }
}

enum SaveOutcome {
    Saved,
    Taken(&'static str),
    Failed,
}

async fn save<R: AdminResource>(api: ApiClient, submission: Submission<R>, values: FormValues) -> SaveOutcome {
    match submission {
        Submission::Create(body) => {
            for check in R::UNIQUE_CHECKS {
                let Some(value) = values.text(check.field) else {
                    continue;
                };
                match crud::check_unique::<R>(api, check, &value).await {
                    Ok(true) => {}
                    Ok(false) => return SaveOutcome::Taken(check.taken),
                    Err(_) => return SaveOutcome::Failed,
                }
            }
            match crud::create::<R>(api, &body).await {
                Ok(_) => SaveOutcome::Saved,
                Err(_) => SaveOutcome::Failed,
            }
        }
        Submission::Update(id, body) => match crud::update::<R>(api, id, &body).await {
            Ok(_) => SaveOutcome::Saved,
            Err(_) => SaveOutcome::Failed,
        },
    }
}

fn fetch_page<R: AdminResource>(
    api: ApiClient,
    table: RwSignal<TableState>,
    rows: RwSignal<Vec<R::Item>>,
    key: QueryKey,
) {
    table.update(TableState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let req = table.with_untracked(|t| t.page_request(R::filter(&t.keyword)));
        let result = crud::page::<R>(api, &req).await;
        // A newer query superseded this one while it was in flight.
        if table.with_untracked(TableState::query_key) != key {
            return;
        }
        match result {
            Ok(page) => {
                rows.set(page.content);
                table.update(|t| {
                    t.loaded(page.total);
                });
            }
            Err(_) => table.update(TableState::load_failed),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, rows, key);
    }
}

fn load_projects(api: ApiClient, options: RwSignal<Vec<(i64, String)>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Ok(projects) = crud::list_all::<Projects>(api).await {
            options.set(projects.into_iter().map(|p| (p.id, format!("{} · {}", p.project_no, p.project_name))).collect());
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, options);
    }
}

fn header_cell(col: Column, table: RwSignal<TableState>) -> AnyView {
    let Some(field) = col.sort else {
        return view! { <th>{col.label}</th> }.into_any();
    };
    let indicator = move || {
        table.with(|t| match (t.sort_field.as_deref() == Some(field), t.sort_order) {
            (true, crate::net::types::SortOrder::Asc) => " ▲",
            (true, crate::net::types::SortOrder::Desc) => " ▼",
            (false, _) => "",
        })
    };
    view! {
        <th class="resource-table__sortable" on:click=move |_| table.update(|t| t.toggle_sort(field))>
            {col.label}
            {indicator}
        </th>
    }
    .into_any()
}

fn field_input(spec: FieldSpec, values: RwSignal<FormValues>, projects: RwSignal<Vec<(i64, String)>>) -> AnyView {
    let key = spec.key;
    let current = move || values.with(|v| v.get(key).to_owned());
    let on_input = move |ev| values.update(|v| v.set(key, event_target_value(&ev)));
    match spec.kind {
        FieldKind::Text | FieldKind::Password | FieldKind::Number => {
            let input_type = match spec.kind {
                FieldKind::Password => "password",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! { <input class="form-input" type=input_type prop:value=current on:input=on_input/> }.into_any()
        }
        FieldKind::TextArea | FieldKind::Pairs => {
            let placeholder = if spec.kind == FieldKind::Pairs { "key=value, one per line" } else { "" };
            view! {
                <textarea class="form-input form-input--area" placeholder=placeholder prop:value=current on:input=on_input/>
            }
            .into_any()
        }
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                prop:checked=move || values.with(|v| v.flag(key))
                on:change=move |ev| values.update(|v| v.set_flag(key, event_target_checked(&ev)))
            />
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select class="form-input" prop:value=current on:change=on_input>
                <option value="">"-- select --"</option>
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::ProjectRef => view! {
            <select class="form-input" prop:value=current on:change=on_input>
                <option value="">"-- select project --"</option>
                {move || {
                    projects
                        .get()
                        .into_iter()
                        .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
                        .collect_view()
                }}
            </select>
        }
        .into_any(),
    }
}

/// Full CRUD screen for `R`.
pub fn resource_table<R: AdminResource>() -> impl IntoView {
    let api = ApiClient::from_context();
    let notices = api.notices();

    let table = RwSignal::new(TableState::default());
    let rows = RwSignal::new(Vec::<R::Item>::new());
    let search = RwSignal::new(String::new());
    let lookup_value = RwSignal::new(String::new());
    let values = RwSignal::new(FormValues::new());
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let projects = RwSignal::new(Vec::<(i64, String)>::new());

    let query = Memo::new(move |_| table.with(TableState::query_key));
    Effect::new(move || {
        let key = query.get();
        fetch_page::<R>(api, table, rows, key);
    });

    if R::fields().iter().any(|f| f.kind == FieldKind::ProjectRef) {
        Effect::new(move || load_projects(api, projects));
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let keyword = search.get_untracked();
        table.update(|t| t.search(&keyword));
    };

    let open_create = move |_| {
        values.set(R::defaults());
        form_error.set(None);
        table.update(TableState::open_create);
    };

    let open_edit = move |id: i64| {
        form_error.set(None);
        if let Some(item) = rows.with_untracked(|rs| rs.iter().find(|r| R::id(r) == id).cloned()) {
            values.set(R::values(&item));
        }
        table.update(|t| t.open_edit(id));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crud::get::<R>(api, id).await {
                Ok(item) => values.set(R::values(&item)),
                Err(_) => table.update(TableState::close_form),
            }
        });
    };

    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = lookup_value.get_untracked().trim().to_owned();
        if value.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(item) = crud::lookup::<R>(api, &value).await {
                form_error.set(None);
                values.set(R::values(&item));
                table.update(|t| t.open_edit(R::id(&item)));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(mode) = table.with_untracked(|t| t.form) else {
            return;
        };
        let current = values.get_untracked();
        let submission = match prepare::<R>(mode, &current) {
            Ok(submission) => submission,
            Err(err) => {
                form_error.set(Some(err.to_string()));
                return;
            }
        };
        form_error.set(None);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match save::<R>(api, submission, current).await {
                SaveOutcome::Saved => {
                    notices.success(format!("{} saved", R::SINGULAR));
                    table.update(TableState::mutated);
                }
                SaveOutcome::Taken(message) => form_error.set(Some(message.to_owned())),
                SaveOutcome::Failed => {}
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, current, notices);
            busy.set(false);
        }
    };

    let on_confirm_delete = move |_| {
        let Some(id) = table.with_untracked(|t| t.confirm_delete) else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crud::delete::<R>(api, id).await.is_ok() {
                notices.success(format!("{} deleted", R::SINGULAR));
                table.update(TableState::mutated);
            } else {
                table.update(TableState::cancel_delete);
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            busy.set(false);
        }
    };

    let on_toggle = move |id: i64, enabled: bool| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crud::switch_enabled::<R>(api, id, EnabledSwitch::flipping(enabled)).await.is_ok() {
                table.update(TableState::mutated);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, enabled);
        }
    };

    let dialog_title = move || match table.with(|t| t.form) {
        Some(FormMode::Edit(_)) => format!("Edit {}", R::SINGULAR),
        _ => format!("New {}", R::SINGULAR),
    };

    view! {
        <section class="resource-page">
            <header class="resource-page__header">
                <h2>{R::TITLE}</h2>
                <button class="btn btn--primary" on:click=open_create>
                    {format!("New {}", R::SINGULAR)}
                </button>
            </header>

            <div class="resource-page__toolbar">
                <form class="resource-page__search" on:submit=on_search>
                    <input
                        class="form-input"
                        placeholder=R::SEARCH_HINT
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
                {R::LOOKUP
                    .map(|_| {
                        view! {
                            <form class="resource-page__lookup" on:submit=on_lookup>
                                <input
                                    class="form-input"
                                    placeholder="Open by number"
                                    prop:value=move || lookup_value.get()
                                    on:input=move |ev| lookup_value.set(event_target_value(&ev))
                                />
                                <button class="btn" type="submit">"Open"</button>
                            </form>
                        }
                    })}
            </div>

            <table class="resource-table">
                <thead>
                    <tr>
                        {R::columns().iter().map(|col| header_cell(*col, table)).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|item| (R::id(item), R::cells(item))
                        children=move |item| {
                            let id = R::id(&item);
                            let enabled = R::enabled(&item);
                            view! {
                                <tr>
                                    {R::cells(&item).into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                    <td class="resource-table__actions">
                                        <button class="btn btn--link" on:click=move |_| open_edit(id)>"Edit"</button>
                                        {enabled
                                            .map(|on| {
                                                view! {
                                                    <button class="btn btn--link" on:click=move |_| on_toggle(id, on)>
                                                        {if on { "Disable" } else { "Enable" }}
                                                    </button>
                                                }
                                            })}
                                        <button
                                            class="btn btn--link btn--danger"
                                            on:click=move |_| table.update(|t| t.ask_delete(id))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || table.with(|t| t.loading)>
                <div class="resource-table__loading">"Loading..."</div>
            </Show>
            <Show when=move || table.with(|t| !t.loading && t.total == 0)>
                <div class="resource-table__empty">"No records"</div>
            </Show>

            <nav class="pagination">
                <button
                    class="btn"
                    disabled=move || table.with(|t| t.page <= 1)
                    on:click=move |_| table.update(TableState::prev_page)
                >
                    "Prev"
                </button>
                <span class="pagination__info">
                    {move || table.with(|t| format!("Page {} of {} ({} total)", t.page, t.page_count(), t.total))}
                </span>
                <button
                    class="btn"
                    disabled=move || table.with(|t| t.page >= t.page_count())
                    on:click=move |_| table.update(TableState::next_page)
                >
                    "Next"
                </button>
                <select
                    class="form-input pagination__size"
                    prop:value=move || table.with(|t| t.size.to_string())
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            table.update(|t| t.set_size(size));
                        }
                    }
                >
                    {PAGE_SIZE_OPTIONS
                        .iter()
                        .map(|s| view! { <option value=s.to_string()>{format!("{s} / page")}</option> })
                        .collect_view()}
                </select>
            </nav>

            <Show when=move || table.with(|t| t.form.is_some())>
                <div class="dialog-backdrop">
                    <form class="dialog" on:submit=on_submit>
                        <h2>{dialog_title}</h2>
                        {R::fields()
                            .iter()
                            .map(|spec| {
                                view! {
                                    <label class="form-field">
                                        <span class="form-field__label">
                                            {spec.label}
                                            {spec.required.then_some(" *")}
                                        </span>
                                        {field_input(*spec, values, projects)}
                                    </label>
                                }
                            })
                            .collect_view()}
                        {move || form_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| table.update(TableState::close_form)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </div>
            </Show>

            <Show when=move || table.with(|t| t.confirm_delete.is_some())>
                <div class="dialog-backdrop">
                    <div class="dialog dialog--confirm">
                        <h2>{format!("Delete {}?", R::SINGULAR)}</h2>
                        <p>"This cannot be undone."</p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| table.update(TableState::cancel_delete)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=move || busy.get()
                                on:click=on_confirm_delete
                            >
                                "Delete"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </section>
    }
}
