//! DTOs for the five CRUD resources.
//!
//! DESIGN
//! ======
//! Each resource has a response item, a create body, a partial update body,
//! and a page filter. Update bodies skip `None` fields on the wire so a PUT
//! only touches what the form changed.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use serde::{Deserialize, Serialize};

use super::types::{PageFilter, UserRole};

fn opt<T: ToString>(value: Option<&T>) -> Option<String> {
    value.map(ToString::to_string)
}

// =============================================================================
// USERS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilter {
    pub username: Option<String>,
    pub role: Option<UserRole>,
}

impl PageFilter for UserFilter {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![("username", self.username.clone()), ("role", self.role.map(|r| r.as_str().to_owned()))]
    }
}

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub project_no: String,
    pub project_name: String,
    #[serde(default)]
    pub project_leader: String,
    pub remark: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: Option<String>,
    pub updated_by: Option<i64>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub project_no: String,
    pub project_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_leader: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectFilter {
    pub project_no: Option<String>,
    pub project_name: Option<String>,
    pub project_leader: Option<String>,
}

impl PageFilter for ProjectFilter {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("projectNo", self.project_no.clone()),
            ("projectName", self.project_name.clone()),
            ("projectLeader", self.project_leader.clone()),
        ]
    }
}

// =============================================================================
// INSPECTION DEVICES
// =============================================================================

pub const DEFAULT_DEVICE_PORT: u16 = 102;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    #[default]
    PendingInspection,
    UnderInspection,
    Calibrated,
    FactoryQualified,
    FactoryUnqualified,
    UnderRepair,
    ReservedOne,
    ReservedTwo,
}

impl DeviceStatus {
    pub const ALL: [DeviceStatus; 8] = [
        DeviceStatus::PendingInspection,
        DeviceStatus::UnderInspection,
        DeviceStatus::Calibrated,
        DeviceStatus::FactoryQualified,
        DeviceStatus::FactoryUnqualified,
        DeviceStatus::UnderRepair,
        DeviceStatus::ReservedOne,
        DeviceStatus::ReservedTwo,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingInspection => "PENDING_INSPECTION",
            Self::UnderInspection => "UNDER_INSPECTION",
            Self::Calibrated => "CALIBRATED",
            Self::FactoryQualified => "FACTORY_QUALIFIED",
            Self::FactoryUnqualified => "FACTORY_UNQUALIFIED",
            Self::UnderRepair => "UNDER_REPAIR",
            Self::ReservedOne => "RESERVED_ONE",
            Self::ReservedTwo => "RESERVED_TWO",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PendingInspection => "Pending inspection",
            Self::UnderInspection => "Under inspection",
            Self::Calibrated => "Calibrating",
            Self::FactoryQualified => "Factory qualified",
            Self::FactoryUnqualified => "Factory unqualified",
            Self::UnderRepair => "Under repair",
            Self::ReservedOne => "Reserved 1",
            Self::ReservedTwo => "Reserved 2",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionDevice {
    pub id: i64,
    pub device_no: Option<String>,
    pub serial_number: String,
    pub device_model: Option<String>,
    pub ip: String,
    pub port: u16,
    pub project_id: i64,
    pub project_internal_no: Option<i64>,
    pub status: DeviceStatus,
    pub remark: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: Option<String>,
    pub updated_by: Option<i64>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInspectionDevice {
    pub serial_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    pub ip: String,
    pub port: u16,
    pub project_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInspectionDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeviceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InspectionDeviceFilter {
    pub device_no: Option<String>,
    pub serial_number: Option<String>,
    pub ip: Option<String>,
    pub status: Option<DeviceStatus>,
    pub project_id: Option<i64>,
}

impl PageFilter for InspectionDeviceFilter {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("deviceNo", self.device_no.clone()),
            ("serialNumber", self.serial_number.clone()),
            ("ip", self.ip.clone()),
            ("status", self.status.map(|s| s.as_str().to_owned())),
            ("projectId", opt(self.project_id.as_ref())),
        ]
    }
}

// =============================================================================
// OIL SAMPLES
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OilSampleUsage {
    #[default]
    Cleaning,
    Calibration,
    FactoryTest,
    CrossSensitivityTest,
}

impl OilSampleUsage {
    pub const ALL: [OilSampleUsage; 4] = [
        OilSampleUsage::Cleaning,
        OilSampleUsage::Calibration,
        OilSampleUsage::FactoryTest,
        OilSampleUsage::CrossSensitivityTest,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cleaning => "CLEANING",
            Self::Calibration => "CALIBRATION",
            Self::FactoryTest => "FACTORY_TEST",
            Self::CrossSensitivityTest => "CROSS_SENSITIVITY_TEST",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == raw.trim())
    }
}

/// Dissolved-gas parameter keys measured on an oil sample.
pub const OIL_PARAMETER_KEYS: [&str; 8] = ["CH4", "C2H2", "C2H4", "C2H6", "H2", "CO", "CO2", "H2O"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterItem {
    pub key: String,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OilSample {
    pub id: i64,
    pub sample_no: String,
    pub sample_name: String,
    /// Kept as a string so unknown usages from the backend still render.
    pub usage: String,
    #[serde(default)]
    pub parameters: Vec<ParameterItem>,
    pub cylinder_no: i64,
    pub offline_tested_at: Option<String>,
    pub offline_test_no: Option<String>,
    pub enabled: bool,
    pub remark: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: Option<String>,
    pub updated_by: Option<i64>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOilSample {
    pub sample_no: String,
    pub sample_name: String,
    pub usage: String,
    pub parameters: Vec<ParameterItem>,
    pub cylinder_no: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_tested_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_test_no: Option<String>,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOilSample {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cylinder_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_tested_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offline_test_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OilSampleFilter {
    pub sample_no: Option<String>,
    pub sample_name: Option<String>,
    pub usage: Option<OilSampleUsage>,
    pub enabled: Option<bool>,
    pub cylinder_no: Option<i64>,
}

impl PageFilter for OilSampleFilter {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("sampleNo", self.sample_no.clone()),
            ("sampleName", self.sample_name.clone()),
            ("usage", self.usage.map(|u| u.as_str().to_owned())),
            ("enabled", opt(self.enabled.as_ref())),
            ("cylinderNo", opt(self.cylinder_no.as_ref())),
        ]
    }
}

// =============================================================================
// TEST STATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestStationUsage {
    #[default]
    InhouseTest,
    RndTest,
}

impl TestStationUsage {
    pub const ALL: [TestStationUsage; 2] = [TestStationUsage::InhouseTest, TestStationUsage::RndTest];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InhouseTest => "INHOUSE_TEST",
            Self::RndTest => "RND_TEST",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == raw.trim())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValveCommType {
    #[default]
    SerialModbus,
    TcpModbus,
}

impl ValveCommType {
    pub const ALL: [ValveCommType; 2] = [ValveCommType::SerialModbus, ValveCommType::TcpModbus];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SerialModbus => "SERIAL_MODBUS",
            Self::TcpModbus => "TCP_MODBUS",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw.trim())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationParameter {
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStation {
    pub id: i64,
    pub station_no: i64,
    pub station_name: String,
    pub usage: String,
    pub valve_comm_type: String,
    #[serde(default)]
    pub valve_control_params: Vec<StationParameter>,
    #[serde(default)]
    pub oil_valve_mapping: Vec<StationParameter>,
    pub responsible_person: String,
    pub enabled: bool,
    pub created_by: Option<i64>,
    pub created_at: Option<String>,
    pub updated_by: Option<i64>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTestStation {
    pub station_no: i64,
    pub station_name: String,
    pub usage: String,
    pub valve_comm_type: String,
    pub valve_control_params: Vec<StationParameter>,
    pub oil_valve_mapping: Vec<StationParameter>,
    pub responsible_person: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTestStation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valve_comm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valve_control_params: Option<Vec<StationParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oil_valve_mapping: Option<Vec<StationParameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TestStationFilter {
    pub station_no: Option<i64>,
    pub station_name: Option<String>,
    pub usage: Option<TestStationUsage>,
    pub valve_comm_type: Option<ValveCommType>,
    pub responsible_person: Option<String>,
    pub enabled: Option<bool>,
}

impl PageFilter for TestStationFilter {
    fn query_pairs(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("stationNo", opt(self.station_no.as_ref())),
            ("stationName", self.station_name.clone()),
            ("usage", self.usage.map(|u| u.as_str().to_owned())),
            ("valveCommType", self.valve_comm_type.map(|t| t.as_str().to_owned())),
            ("responsiblePerson", self.responsible_person.clone()),
            ("enabled", opt(self.enabled.as_ref())),
        ]
    }
}
