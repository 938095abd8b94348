use super::*;

fn filled() -> FormValues {
    let mut values = InspectionDevices::defaults();
    values.set("serialNumber", "SN-77");
    values.set("ip", "192.168.10.5");
    values.set("projectId", "2");
    values
}

#[test]
fn status_options_match_wire_names() {
    let wire: Vec<&str> = DeviceStatus::ALL.iter().map(|s| s.as_str()).collect();
    assert_eq!(wire, STATUS_OPTIONS);
}

#[test]
fn create_uses_default_port_and_status() {
    let body = InspectionDevices::to_create(&filled()).unwrap();
    assert_eq!(body.port, 102);
    assert_eq!(body.status, Some(DeviceStatus::PendingInspection));
    assert_eq!(body.project_id, 2);
}

#[test]
fn create_rejects_bad_ip() {
    let mut values = filled();
    values.set("ip", "10.0.0");
    assert_eq!(InspectionDevices::to_create(&values).err(), Some(ValidationError::InvalidIp("IP address")));
}

#[test]
fn update_rejects_out_of_range_port() {
    let values = FormValues::from_pairs([("port", "99999")]);
    assert_eq!(InspectionDevices::to_update(&values).err(), Some(ValidationError::InvalidNumber("Port")));
}
