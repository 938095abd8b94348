//! Inspection device management page.

#[cfg(test)]
#[path = "inspection_devices_test.rs"]
mod inspection_devices_test;

use leptos::prelude::*;

use crate::components::resource_table::{AdminResource, Column, resource_table};
use crate::net::crud::InspectionDevices;
use crate::net::resources::{
    CreateInspectionDevice, DEFAULT_DEVICE_PORT, DeviceStatus, InspectionDevice, InspectionDeviceFilter,
    UpdateInspectionDevice,
};
use crate::util::forms::{FieldKind, FieldSpec, FormValues};
use crate::util::validation::{ValidationError, validate_ipv4};

const STATUS_OPTIONS: [&str; 8] = [
    "PENDING_INSPECTION",
    "UNDER_INSPECTION",
    "CALIBRATED",
    "FACTORY_QUALIFIED",
    "FACTORY_UNQUALIFIED",
    "UNDER_REPAIR",
    "RESERVED_ONE",
    "RESERVED_TWO",
];

const SERIAL_NUMBER: FieldSpec = FieldSpec::new("serialNumber", "Serial number", FieldKind::Text).required();
const DEVICE_MODEL: FieldSpec = FieldSpec::new("deviceModel", "Model", FieldKind::Text);
const IP: FieldSpec = FieldSpec::new("ip", "IP address", FieldKind::Text).required();
const PORT: FieldSpec = FieldSpec::new("port", "Port", FieldKind::Number).required();
const PROJECT: FieldSpec = FieldSpec::new("projectId", "Project", FieldKind::ProjectRef).required();
const STATUS: FieldSpec = FieldSpec::new("status", "Status", FieldKind::Select(&STATUS_OPTIONS));
const REMARK: FieldSpec = FieldSpec::new("remark", "Remark", FieldKind::TextArea);

impl AdminResource for InspectionDevices {
    const TITLE: &'static str = "Inspection devices";
    const SINGULAR: &'static str = "device";
    const SEARCH_HINT: &'static str = "Search by serial number";

    fn columns() -> &'static [Column] {
        const {
            &[
                Column::sorted("Device no.", "deviceNo"),
                Column::sorted("Serial number", "serialNumber"),
                Column::plain("Model"),
                Column::plain("Address"),
                Column::sorted("Project", "projectId"),
                Column::sorted("Status", "status"),
            ]
        }
    }

    fn fields() -> &'static [FieldSpec] {
        &[SERIAL_NUMBER, DEVICE_MODEL, IP, PORT, PROJECT, STATUS, REMARK]
    }

    fn id(item: &InspectionDevice) -> i64 {
        item.id
    }

    fn cells(item: &InspectionDevice) -> Vec<String> {
        vec![
            item.device_no.clone().unwrap_or_else(|| "-".to_owned()),
            item.serial_number.clone(),
            item.device_model.clone().unwrap_or_default(),
            format!("{}:{}", item.ip, item.port),
            match item.project_internal_no {
                Some(no) => format!("#{} ({no})", item.project_id),
                None => format!("#{}", item.project_id),
            },
            item.status.label().to_owned(),
        ]
    }

    fn filter(keyword: &str) -> InspectionDeviceFilter {
        InspectionDeviceFilter { serial_number: Some(keyword.to_owned()), ..InspectionDeviceFilter::default() }
    }

    fn defaults() -> FormValues {
        FormValues::from_pairs([
            ("port", DEFAULT_DEVICE_PORT.to_string()),
            ("status", DeviceStatus::default().as_str().to_owned()),
        ])
    }

    fn values(item: &InspectionDevice) -> FormValues {
        FormValues::from_pairs([
            ("serialNumber", item.serial_number.clone()),
            ("deviceModel", item.device_model.clone().unwrap_or_default()),
            ("ip", item.ip.clone()),
            ("port", item.port.to_string()),
            ("projectId", item.project_id.to_string()),
            ("status", item.status.as_str().to_owned()),
            ("remark", item.remark.clone().unwrap_or_default()),
        ])
    }

    fn to_create(values: &FormValues) -> Result<CreateInspectionDevice, ValidationError> {
        let ip = values.required_text(&IP)?;
        validate_ipv4(IP.label, &ip)?;
        Ok(CreateInspectionDevice {
            serial_number: values.required_text(&SERIAL_NUMBER)?,
            device_model: values.text(DEVICE_MODEL.key),
            ip,
            port: values.number(&PORT)?.unwrap_or(DEFAULT_DEVICE_PORT),
            project_id: values.required_number(&PROJECT)?,
            status: values.choice(&STATUS, DeviceStatus::parse)?,
            remark: values.text(REMARK.key),
        })
    }

    fn to_update(values: &FormValues) -> Result<UpdateInspectionDevice, ValidationError> {
        let ip = values.text(IP.key);
        if let Some(ip) = &ip {
            validate_ipv4(IP.label, ip)?;
        }
        Ok(UpdateInspectionDevice {
            serial_number: values.text(SERIAL_NUMBER.key),
            device_model: values.text(DEVICE_MODEL.key),
            ip,
            port: values.number(&PORT)?,
            status: values.choice(&STATUS, DeviceStatus::parse)?,
            remark: values.text(REMARK.key),
        })
    }
}

#[component]
pub fn InspectionDevicesPage() -> impl IntoView {
    resource_table::<InspectionDevices>()
}
