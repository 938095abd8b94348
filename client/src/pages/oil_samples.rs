//! Oil sample management page.
//!
//! Gas concentrations are edited as `KEY=value` lines. New samples start with
//! one empty line per measured gas; entries left blank are not sent.

#[cfg(test)]
#[path = "oil_samples_test.rs"]
mod oil_samples_test;

use leptos::prelude::*;

use crate::components::resource_table::{AdminResource, Column, resource_table};
use crate::net::crud::OilSamples;
use crate::net::resources::{
    CreateOilSample, OIL_PARAMETER_KEYS, OilSample, OilSampleFilter, OilSampleUsage, ParameterItem, UpdateOilSample,
};
use crate::util::forms::{FieldKind, FieldSpec, FormValues, format_pairs};
use crate::util::validation::ValidationError;

const USAGE_OPTIONS: [&str; 4] = ["CLEANING", "CALIBRATION", "FACTORY_TEST", "CROSS_SENSITIVITY_TEST"];

const SAMPLE_NO: FieldSpec = FieldSpec::new("sampleNo", "Sample no.", FieldKind::Text).required();
const SAMPLE_NAME: FieldSpec = FieldSpec::new("sampleName", "Sample name", FieldKind::Text).required();
const USAGE: FieldSpec = FieldSpec::new("usage", "Usage", FieldKind::Select(&USAGE_OPTIONS)).required();
const CYLINDER_NO: FieldSpec = FieldSpec::new("cylinderNo", "Cylinder no.", FieldKind::Number).required();
const PARAMETERS: FieldSpec = FieldSpec::new("parameters", "Gas parameters", FieldKind::Pairs);
const OFFLINE_TESTED_AT: FieldSpec = FieldSpec::new("offlineTestedAt", "Offline tested at", FieldKind::Text);
const OFFLINE_TEST_NO: FieldSpec = FieldSpec::new("offlineTestNo", "Offline test no.", FieldKind::Text);
const ENABLED: FieldSpec = FieldSpec::new("enabled", "Enabled", FieldKind::Checkbox);
const REMARK: FieldSpec = FieldSpec::new("remark", "Remark", FieldKind::TextArea);

fn usage(values: &FormValues) -> Result<Option<String>, ValidationError> {
    Ok(values.choice(&USAGE, OilSampleUsage::parse)?.map(|u| u.as_str().to_owned()))
}

fn parameters(values: &FormValues) -> Result<Vec<ParameterItem>, ValidationError> {
    values
        .pairs(&PARAMETERS)?
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(ParameterItem { key, value: parsed }),
            _ => Err(ValidationError::InvalidEntry { field: PARAMETERS.label, entry: format!("{key}={value}") }),
        })
        .collect()
}

impl AdminResource for OilSamples {
    const TITLE: &'static str = "Oil samples";
    const SINGULAR: &'static str = "oil sample";
    const SEARCH_HINT: &'static str = "Search by sample name";

    fn columns() -> &'static [Column] {
        const {
            &[
                Column::sorted("Sample no.", "sampleNo"),
                Column::sorted("Name", "sampleName"),
                Column::sorted("Usage", "usage"),
                Column::sorted("Cylinder", "cylinderNo"),
                Column::plain("Parameters"),
                Column::plain("Enabled"),
            ]
        }
    }

    fn fields() -> &'static [FieldSpec] {
        &[SAMPLE_NO, SAMPLE_NAME, USAGE, CYLINDER_NO, PARAMETERS, OFFLINE_TESTED_AT, OFFLINE_TEST_NO, ENABLED, REMARK]
    }

    fn id(item: &OilSample) -> i64 {
        item.id
    }

    fn cells(item: &OilSample) -> Vec<String> {
        let params = item.parameters.iter().map(|p| format!("{} {}", p.key, p.value)).collect::<Vec<_>>().join(", ");
        vec![
            item.sample_no.clone(),
            item.sample_name.clone(),
            item.usage.clone(),
            item.cylinder_no.to_string(),
            params,
            if item.enabled { "yes" } else { "no" }.to_owned(),
        ]
    }

    fn filter(keyword: &str) -> OilSampleFilter {
        OilSampleFilter { sample_name: Some(keyword.to_owned()), ..OilSampleFilter::default() }
    }

    fn defaults() -> FormValues {
        let mut values = FormValues::from_pairs([
            ("usage", OilSampleUsage::default().as_str().to_owned()),
            ("parameters", format_pairs(OIL_PARAMETER_KEYS.map(|key| (key, String::new())))),
        ]);
        values.set_flag(ENABLED.key, true);
        values
    }

    fn values(item: &OilSample) -> FormValues {
        let mut values = FormValues::from_pairs([
            ("sampleNo", item.sample_no.clone()),
            ("sampleName", item.sample_name.clone()),
            ("usage", item.usage.clone()),
            ("cylinderNo", item.cylinder_no.to_string()),
            ("parameters", format_pairs(item.parameters.iter().map(|p| (p.key.as_str(), p.value.to_string())))),
            ("offlineTestedAt", item.offline_tested_at.clone().unwrap_or_default()),
            ("offlineTestNo", item.offline_test_no.clone().unwrap_or_default()),
            ("remark", item.remark.clone().unwrap_or_default()),
        ]);
        values.set_flag(ENABLED.key, item.enabled);
        values
    }

    fn to_create(values: &FormValues) -> Result<CreateOilSample, ValidationError> {
        Ok(CreateOilSample {
            sample_no: values.required_text(&SAMPLE_NO)?,
            sample_name: values.required_text(&SAMPLE_NAME)?,
            usage: usage(values)?.ok_or(ValidationError::Required(USAGE.label))?,
            parameters: parameters(values)?,
            cylinder_no: values.required_number(&CYLINDER_NO)?,
            offline_tested_at: values.text(OFFLINE_TESTED_AT.key),
            offline_test_no: values.text(OFFLINE_TEST_NO.key),
            enabled: values.flag(ENABLED.key),
            remark: values.text(REMARK.key),
        })
    }

    fn to_update(values: &FormValues) -> Result<UpdateOilSample, ValidationError> {
        Ok(UpdateOilSample {
            sample_no: values.text(SAMPLE_NO.key),
            sample_name: values.text(SAMPLE_NAME.key),
            usage: usage(values)?,
            parameters: Some(parameters(values)?),
            cylinder_no: values.number(&CYLINDER_NO)?,
            offline_tested_at: values.text(OFFLINE_TESTED_AT.key),
            offline_test_no: values.text(OFFLINE_TEST_NO.key),
            enabled: Some(values.flag(ENABLED.key)),
            remark: values.text(REMARK.key),
        })
    }

    fn enabled(item: &OilSample) -> Option<bool> {
        Some(item.enabled)
    }
}

#[component]
pub fn OilSamplesPage() -> impl IntoView {
    resource_table::<OilSamples>()
}
