//! Generic CRUD calls for the admin resources.
//!
//! DESIGN
//! ======
//! Every resource exposes the same six endpoints under its own prefix, so the
//! calls are written once against the [`Resource`] trait. Lookup-by-number and
//! uniqueness endpoints differ per resource only in their action segment, so
//! each resource declares those as constants.
//! Path values supplied by users are percent-encoded as a single segment.

#[cfg(test)]
#[path = "crud_test.rs"]
mod crud_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::{ApiClient, encode_segment};
use super::resources::{
    CreateInspectionDevice, CreateOilSample, CreateProject, CreateTestStation, CreateUser, InspectionDevice,
    InspectionDeviceFilter, OilSample, OilSampleFilter, Project, ProjectFilter, TestStation, TestStationFilter,
    UpdateInspectionDevice, UpdateOilSample, UpdateProject, UpdateTestStation, UpdateUser, User, UserFilter,
};
use super::types::{PageFilter, PageRequest, PageResponse};

/// A REST collection with the standard list/page/get/create/update/delete set.
pub trait Resource: 'static {
    /// Collection prefix, e.g. `/projects`.
    const PATH: &'static str;
    type Item: DeserializeOwned + Clone + PartialEq + Send + Sync + 'static;
    type Create: Serialize;
    type Update: Serialize;
    type Filter: PageFilter + Send + Sync + 'static;
    /// Lookup-by-number action, e.g. `by-project-no`.
    const LOOKUP: Option<&'static str> = None;
    /// Uniqueness checks run before creating a row.
    const UNIQUE_CHECKS: &'static [UniqueCheck] = &[];
}

/// A `validate-*` endpoint and the form field whose value it checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniqueCheck {
    pub action: &'static str,
    /// Form field key, matching the wire field name.
    pub field: &'static str,
    /// Shown when the value is taken.
    pub taken: &'static str,
}

pub struct Users;
pub struct Projects;
pub struct InspectionDevices;
pub struct OilSamples;
pub struct TestStations;

impl Resource for Users {
    const PATH: &'static str = "/users";
    type Item = User;
    type Create = CreateUser;
    type Update = UpdateUser;
    type Filter = UserFilter;
    const UNIQUE_CHECKS: &'static [UniqueCheck] =
        &[UniqueCheck { action: "validate-username", field: "username", taken: "Username already taken" }];
}

impl Resource for Projects {
    const PATH: &'static str = "/projects";
    type Item = Project;
    type Create = CreateProject;
    type Update = UpdateProject;
    type Filter = ProjectFilter;
    const LOOKUP: Option<&'static str> = Some("by-project-no");
    const UNIQUE_CHECKS: &'static [UniqueCheck] =
        &[UniqueCheck { action: "validate-unique", field: "projectNo", taken: "Project number already exists" }];
}

impl Resource for InspectionDevices {
    const PATH: &'static str = "/inspection-devices";
    type Item = InspectionDevice;
    type Create = CreateInspectionDevice;
    type Update = UpdateInspectionDevice;
    type Filter = InspectionDeviceFilter;
    const LOOKUP: Option<&'static str> = Some("by-device-no");
    const UNIQUE_CHECKS: &'static [UniqueCheck] = &[
        UniqueCheck { action: "validate-serial-number", field: "serialNumber", taken: "Serial number already exists" },
        UniqueCheck { action: "validate-ip", field: "ip", taken: "IP address already in use" },
    ];
}

impl Resource for OilSamples {
    const PATH: &'static str = "/oil-samples";
    type Item = OilSample;
    type Create = CreateOilSample;
    type Update = UpdateOilSample;
    type Filter = OilSampleFilter;
    const LOOKUP: Option<&'static str> = Some("by-sample-no");
    const UNIQUE_CHECKS: &'static [UniqueCheck] =
        &[UniqueCheck { action: "validate-unique", field: "sampleNo", taken: "Sample number already exists" }];
}

impl Resource for TestStations {
    const PATH: &'static str = "/test-stations";
    type Item = TestStation;
    type Create = CreateTestStation;
    type Update = UpdateTestStation;
    type Filter = TestStationFilter;
    const LOOKUP: Option<&'static str> = Some("by-station-no");
    const UNIQUE_CHECKS: &'static [UniqueCheck] =
        &[UniqueCheck { action: "validate-station-no", field: "stationNo", taken: "Station number already exists" }];
}

pub fn item_path<R: Resource>(id: i64) -> String {
    format!("{}/{id}", R::PATH)
}

pub fn page_path<R: Resource>() -> String {
    format!("{}/page", R::PATH)
}

/// `{PATH}/{action}/{value}` with `value` encoded as one segment.
pub fn lookup_path<R: Resource>(action: &str, value: &str) -> String {
    format!("{}/{action}/{}", R::PATH, encode_segment(value))
}

// =============================================================================
// GENERIC OPERATIONS
// =============================================================================

/// `GET {PATH}`: every row, unpaginated.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn list_all<R: Resource>(api: ApiClient) -> Result<Vec<R::Item>, ApiError> {
    api.get(R::PATH, Vec::new()).await
}

/// `GET {PATH}/page` with the normalized paging, sort, and filter query.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn page<R: Resource>(
    api: ApiClient,
    req: &PageRequest<R::Filter>,
) -> Result<PageResponse<R::Item>, ApiError> {
    api.get(&page_path::<R>(), req.query_pairs()).await
}

/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn get<R: Resource>(api: ApiClient, id: i64) -> Result<R::Item, ApiError> {
    api.get(&item_path::<R>(id), Vec::new()).await
}

/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn create<R: Resource>(api: ApiClient, body: &R::Create) -> Result<R::Item, ApiError> {
    api.post(R::PATH, body).await
}

/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn update<R: Resource>(api: ApiClient, id: i64, body: &R::Update) -> Result<R::Item, ApiError> {
    api.put(&item_path::<R>(id), body).await
}

/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn delete<R: Resource>(api: ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete(&item_path::<R>(id)).await
}

// =============================================================================
// RESOURCE-SPECIFIC ENDPOINTS
// =============================================================================

/// `GET {PATH}/{LOOKUP}/{value}`: fetch one row by its business number.
///
/// # Errors
///
/// [`ApiError::Unavailable`] when the resource has no lookup endpoint,
/// otherwise the transport or envelope failure.
pub async fn lookup<R: Resource>(api: ApiClient, value: &str) -> Result<R::Item, ApiError> {
    let Some(action) = R::LOOKUP else {
        return Err(ApiError::Unavailable);
    };
    api.get(&lookup_path::<R>(action, value), Vec::new()).await
}

/// `GET {PATH}/{check.action}/{value}`; `true` means the value is free.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn check_unique<R: Resource>(api: ApiClient, check: &UniqueCheck, value: &str) -> Result<bool, ApiError> {
    api.get(&lookup_path::<R>(check.action, value), Vec::new()).await
}

/// Enabled-state transitions (test stations expose these).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnabledSwitch {
    Enable,
    Disable,
    Toggle,
}

impl EnabledSwitch {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Toggle => "toggle",
        }
    }

    /// The switch that moves a row away from `enabled`.
    #[must_use]
    pub fn flipping(enabled: bool) -> Self {
        if enabled { Self::Disable } else { Self::Enable }
    }
}

pub fn switch_path<R: Resource>(id: i64, switch: EnabledSwitch) -> String {
    format!("{}/{}", item_path::<R>(id), switch.as_str())
}

/// `PATCH {PATH}/{id}/{enable|disable|toggle}`.
///
/// # Errors
///
/// Returns the transport or envelope failure.
pub async fn switch_enabled<R: Resource>(api: ApiClient, id: i64, switch: EnabledSwitch) -> Result<R::Item, ApiError> {
    api.patch(&switch_path::<R>(id, switch)).await
}
