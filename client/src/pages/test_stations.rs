//! Test station management page.

#[cfg(test)]
#[path = "test_stations_test.rs"]
mod test_stations_test;

use leptos::prelude::*;

use crate::components::resource_table::{AdminResource, Column, resource_table};
use crate::net::crud::TestStations;
use crate::net::resources::{
    CreateTestStation, StationParameter, TestStation, TestStationFilter, TestStationUsage, UpdateTestStation,
    ValveCommType,
};
use crate::util::forms::{FieldKind, FieldSpec, FormValues, format_pairs};
use crate::util::validation::ValidationError;

const USAGE_OPTIONS: [&str; 2] = ["INHOUSE_TEST", "RND_TEST"];
const COMM_OPTIONS: [&str; 2] = ["SERIAL_MODBUS", "TCP_MODBUS"];

const STATION_NO: FieldSpec = FieldSpec::new("stationNo", "Station no.", FieldKind::Number).required();
const STATION_NAME: FieldSpec = FieldSpec::new("stationName", "Station name", FieldKind::Text).required();
const USAGE: FieldSpec = FieldSpec::new("usage", "Usage", FieldKind::Select(&USAGE_OPTIONS)).required();
const COMM_TYPE: FieldSpec =
    FieldSpec::new("valveCommType", "Valve communication", FieldKind::Select(&COMM_OPTIONS)).required();
const CONTROL_PARAMS: FieldSpec = FieldSpec::new("valveControlParams", "Valve control parameters", FieldKind::Pairs);
const VALVE_MAPPING: FieldSpec = FieldSpec::new("oilValveMapping", "Oil to valve mapping", FieldKind::Pairs);
const RESPONSIBLE: FieldSpec = FieldSpec::new("responsiblePerson", "Responsible person", FieldKind::Text).required();
const ENABLED: FieldSpec = FieldSpec::new("enabled", "Enabled", FieldKind::Checkbox);

fn station_params(values: &FormValues, spec: &FieldSpec) -> Result<Vec<StationParameter>, ValidationError> {
    Ok(values.pairs(spec)?.into_iter().map(|(key, value)| StationParameter { key, value }).collect())
}

fn format_params(params: &[StationParameter]) -> String {
    format_pairs(params.iter().map(|p| (p.key.as_str(), p.value.clone())))
}

fn usage(values: &FormValues) -> Result<Option<String>, ValidationError> {
    Ok(values.choice(&USAGE, TestStationUsage::parse)?.map(|u| u.as_str().to_owned()))
}

fn comm_type(values: &FormValues) -> Result<Option<String>, ValidationError> {
    Ok(values.choice(&COMM_TYPE, ValveCommType::parse)?.map(|t| t.as_str().to_owned()))
}

impl AdminResource for TestStations {
    const TITLE: &'static str = "Test stations";
    const SINGULAR: &'static str = "test station";
    const SEARCH_HINT: &'static str = "Search by station name";

    fn columns() -> &'static [Column] {
        const {
            &[
                Column::sorted("Station no.", "stationNo"),
                Column::sorted("Name", "stationName"),
                Column::sorted("Usage", "usage"),
                Column::plain("Valve comm."),
                Column::plain("Responsible"),
                Column::plain("Enabled"),
            ]
        }
    }

    fn fields() -> &'static [FieldSpec] {
        &[STATION_NO, STATION_NAME, USAGE, COMM_TYPE, CONTROL_PARAMS, VALVE_MAPPING, RESPONSIBLE, ENABLED]
    }

    fn id(item: &TestStation) -> i64 {
        item.id
    }

    fn cells(item: &TestStation) -> Vec<String> {
        vec![
            item.station_no.to_string(),
            item.station_name.clone(),
            item.usage.clone(),
            item.valve_comm_type.clone(),
            item.responsible_person.clone(),
            if item.enabled { "yes" } else { "no" }.to_owned(),
        ]
    }

    fn filter(keyword: &str) -> TestStationFilter {
        TestStationFilter { station_name: Some(keyword.to_owned()), ..TestStationFilter::default() }
    }

    fn defaults() -> FormValues {
        let mut values = FormValues::from_pairs([
            ("usage", TestStationUsage::default().as_str()),
            ("valveCommType", ValveCommType::default().as_str()),
        ]);
        values.set_flag(ENABLED.key, true);
        values
    }

    fn values(item: &TestStation) -> FormValues {
        let mut values = FormValues::from_pairs([
            ("stationNo", item.station_no.to_string()),
            ("stationName", item.station_name.clone()),
            ("usage", item.usage.clone()),
            ("valveCommType", item.valve_comm_type.clone()),
            ("valveControlParams", format_params(&item.valve_control_params)),
            ("oilValveMapping", format_params(&item.oil_valve_mapping)),
            ("responsiblePerson", item.responsible_person.clone()),
        ]);
        values.set_flag(ENABLED.key, item.enabled);
        values
    }

    fn to_create(values: &FormValues) -> Result<CreateTestStation, ValidationError> {
        Ok(CreateTestStation {
            station_no: values.required_number(&STATION_NO)?,
            station_name: values.required_text(&STATION_NAME)?,
            usage: usage(values)?.ok_or(ValidationError::Required(USAGE.label))?,
            valve_comm_type: comm_type(values)?.ok_or(ValidationError::Required(COMM_TYPE.label))?,
            valve_control_params: station_params(values, &CONTROL_PARAMS)?,
            oil_valve_mapping: station_params(values, &VALVE_MAPPING)?,
            responsible_person: values.required_text(&RESPONSIBLE)?,
            enabled: values.flag(ENABLED.key),
        })
    }

    fn to_update(values: &FormValues) -> Result<UpdateTestStation, ValidationError> {
        Ok(UpdateTestStation {
            station_no: values.number(&STATION_NO)?,
            station_name: values.text(STATION_NAME.key),
            usage: usage(values)?,
            valve_comm_type: comm_type(values)?,
            valve_control_params: Some(station_params(values, &CONTROL_PARAMS)?),
            oil_valve_mapping: Some(station_params(values, &VALVE_MAPPING)?),
            responsible_person: values.text(RESPONSIBLE.key),
            enabled: Some(values.flag(ENABLED.key)),
        })
    }

    fn enabled(item: &TestStation) -> Option<bool> {
        Some(item.enabled)
    }
}

#[component]
pub fn TestStationsPage() -> impl IntoView {
    resource_table::<TestStations>()
}
