use std::str::FromStr;
use uptimerobot_rs::monitors::models::*;
#[test]


fn test_monitor_deserialization_minimal() {
    let json = r#"{"id":99,"friendly_name":"foo","url":"http://nothing.test","type":1}"#;
    let m: Monitor = serde_json::from_str(json).unwrap();
    assert_eq!(m.id, 99);
    assert_eq!(m.monitor_type, MonitorType::Http);
    assert_eq!(m.status, None);
    assert!(m.logs.is_empty());
}
#[test]


fn test_monitor_deserialization_http_port_alias() {
    let json = r#"{"id":1,"friendly_name":"p","url":"p.test","type":4,"http_port":"25","sub_type":"4"}"#;
    let m: Monitor = serde_json::from_str(json).unwrap();
    assert_eq!(m.port, Some(25));
    assert_eq!(m.sub_type, Some(MonitorSubType::Smtp));
}
#[test]


fn test_monitor_deserialization_empty_strings_are_absent() {
    let json = r#"{"id":1,"friendly_name":"k","url":"k.test","type":2,"keyword_value":"","http_username":"","http_password":null,"monitor_group":"","is_group_main":true}"#;
    let m: Monitor = serde_json::from_str(json).unwrap();
    assert_eq!(m.keyword_value, None);
    assert_eq!(m.http_username, None);
    assert_eq!(m.http_password, None);
    assert_eq!(m.monitor_group, None);
    assert_eq!(m.is_group_main, Some(true));
}
#[test]


fn test_monitor_deserialization_unknown_status_is_absent() {
    let json = r#"{"id":1,"friendly_name":"x","url":"x.test","type":1,"status":7}"#;
    let m: Monitor = serde_json::from_str(json).unwrap();
    assert_eq!(m.status, None);
}
#[test]


fn test_monitor_deserialization_live_down_codes() {
    let json = r#"{"id":1,"friendly_name":"x","url":"x.test","type":1,"status":"8"}"#;
    let m: Monitor = serde_json::from_str(json).unwrap();
    assert_eq!(m.status, Some(MonitorStatus::SeemsDown));

    let json = r#"{"id":2,"friendly_name":"y","url":"y.test","type":1,"status":9}"#;
    let m: Monitor = serde_json::from_str(json).unwrap();
    assert_eq!(m.status, Some(MonitorStatus::Down));
}
#[test]


fn test_monitor_serialization_skips_unset_fields() {
    let m = Monitor::new("make_friendly", "http://make.test", MonitorType::Ping);
    let value = serde_json::to_value(&m).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id":0,"friendly_name":"make_friendly","url":"http://make.test","type":3})
    );
}
#[test]


fn test_changed_monitor_deserialization() {
    let json = r#"{"id":"99","status":1}"#;
    let c: ChangedMonitor = serde_json::from_str(json).unwrap();
    assert_eq!(c.id, 99);
    assert_eq!(c.status, Some(MonitorStatus::NotChecked));
}
#[test]


fn test_monitors_page_without_pagination() {
    let json = r#"{"stat":"ok","monitors":[]}"#;
    let page: MonitorsPage = serde_json::from_str(json).unwrap();
    assert_eq!(page.pagination, Pagination::default());
    assert!(page.monitors.is_empty());
}
#[test]


fn test_log_timestamps() {
    let json = r#"{"type":99,"datetime":1546300800,"duration":"120"}"#;
    let log: Log = serde_json::from_str(json).unwrap();
    assert_eq!(log.kind(), Some(LogType::Paused));
    assert_eq!(log.duration, 120);
    assert_eq!(
        log.occurred_at().unwrap().to_rfc3339(),
        "2019-01-01T00:00:00+00:00"
    );
}
#[test]


fn test_monitor_type_names() {
    for name in ["HTTP", "HTTPS", "HTTP(s)", "http", "https"] {
        assert_eq!(MonitorType::from_str(name).unwrap(), MonitorType::Http);
    }
    assert_eq!("keyword".parse::<MonitorType>().unwrap(), MonitorType::Keyword);
    assert_eq!("ping".parse::<MonitorType>().unwrap(), MonitorType::Ping);
    assert_eq!("port".parse::<MonitorType>().unwrap(), MonitorType::Port);
    assert!("dns".parse::<MonitorType>().is_err());
    assert_eq!(MonitorType::Http.to_string(), "HTTP(s)");
    assert_eq!(MonitorStatus::SeemsDown.to_string(), "seems down");
}
