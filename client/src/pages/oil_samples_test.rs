use super::*;

fn filled() -> FormValues {
    let mut values = OilSamples::defaults();
    values.set("sampleNo", "S-01");
    values.set("sampleName", "Calibration oil A");
    values.set("cylinderNo", "3");
    values
}

#[test]
fn usage_options_match_wire_names() {
    let wire: Vec<&str> = OilSampleUsage::ALL.iter().map(|u| u.as_str()).collect();
    assert_eq!(wire, USAGE_OPTIONS);
}

#[test]
fn defaults_list_every_gas_and_start_enabled() {
    let values = OilSamples::defaults();
    let listed = values.pairs(&PARAMETERS).unwrap();
    assert_eq!(listed.len(), OIL_PARAMETER_KEYS.len());
    assert!(listed.iter().all(|(_, v)| v.is_empty()));
    assert!(values.flag("enabled"));
}

#[test]
fn blank_gas_values_are_not_sent() {
    let mut values = filled();
    values.set("parameters", "CH4=12.5\nC2H2=\nH2=0.4");
    let body = OilSamples::to_create(&values).unwrap();
    assert_eq!(body.parameters, vec![
        ParameterItem { key: "CH4".into(), value: 12.5 },
        ParameterItem { key: "H2".into(), value: 0.4 },
    ]);
    assert_eq!(body.usage, "CLEANING");
    assert!(body.enabled);
}

#[test]
fn non_numeric_gas_value_is_rejected() {
    let mut values = filled();
    values.set("parameters", "CO=high");
    assert_eq!(
        OilSamples::to_create(&values).err(),
        Some(ValidationError::InvalidEntry { field: "Gas parameters", entry: "CO=high".into() })
    );
}

#[test]
fn unknown_usage_is_rejected() {
    let mut values = filled();
    values.set("usage", "DRINKING");
    assert_eq!(OilSamples::to_create(&values).err(), Some(ValidationError::InvalidChoice("Usage")));
}

#[test]
fn edit_values_round_to_update_body() {
    let sample = OilSample {
        id: 9,
        sample_no: "S-09".into(),
        sample_name: "Factory oil".into(),
        usage: "FACTORY_TEST".into(),
        parameters: vec![ParameterItem { key: "CO2".into(), value: 150.0 }],
        cylinder_no: 4,
        offline_tested_at: None,
        offline_test_no: None,
        enabled: false,
        remark: None,
        created_by: None,
        created_at: None,
        updated_by: None,
        updated_at: None,
    };
    let body = OilSamples::to_update(&OilSamples::values(&sample)).unwrap();
    assert_eq!(body.usage.as_deref(), Some("FACTORY_TEST"));
    assert_eq!(body.enabled, Some(false));
    assert_eq!(body.parameters.unwrap()[0].value, 150.0);
    assert_eq!(OilSamples::enabled(&sample), Some(false));
}
