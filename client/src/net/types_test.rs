use super::*;
use serde_json::json;

fn user(value: Value) -> UserInfo {
    UserInfo::from_value(value).unwrap()
}

// =============================================================
// UserInfo admin check
// =============================================================

#[test]
fn null_extends_is_admin() {
    assert!(user(json!({ "operator": "root", "extends": null })).is_admin());
}

#[test]
fn missing_extends_is_not_admin() {
    assert!(!user(json!({ "operator": "guest" })).is_admin());
}

#[test]
fn empty_string_extends_is_not_admin() {
    assert!(!user(json!({ "extends": "" })).is_admin());
}

#[test]
fn non_empty_extends_is_not_admin() {
    assert!(!user(json!({ "extends": "root-passkey" })).is_admin());
}

#[test]
fn from_value_rejects_non_objects() {
    assert!(UserInfo::from_value(json!(null)).is_none());
    assert!(UserInfo::from_value(json!("text")).is_none());
    assert!(UserInfo::from_value(json!([1, 2])).is_none());
}

#[test]
fn accessors_read_string_fields() {
    let info = user(json!({ "operator": "lab", "description": "curator", "extends": null }));
    assert_eq!(info.operator(), Some("lab"));
    assert_eq!(info.description(), Some("curator"));
    assert_eq!(info.extends(), Some(&Value::Null));
}

#[test]
fn user_info_serializes_as_plain_object() {
    let info = user(json!({ "operator": "lab", "extends": null }));
    let raw = serde_json::to_string(&info).unwrap();
    let back: UserInfo = serde_json::from_str(&raw).unwrap();
    assert_eq!(back, info);
    assert!(raw.contains("\"extends\":null"));
}

// =============================================================
// Envelope / login payload
// =============================================================

#[test]
fn login_envelope_success_splits_token_from_user() {
    let raw = r#"{"code":200200,"msg":"success","data":{"token":"jwt","operator":"lab","description":"d"}}"#;
    let env: ApiEnvelope<LoginData> = serde_json::from_str(raw).unwrap();
    assert!(env.is_success());
    let data = env.data.unwrap();
    assert_eq!(data.token, "jwt");
    assert!(!data.user.contains_key("token"));
    assert_eq!(data.user.get("operator"), Some(&json!("lab")));
}

#[test]
fn login_envelope_error_has_no_data() {
    let raw = r#"{"code":200401,"msg":"invalid passkey","data":null}"#;
    let env: ApiEnvelope<LoginData> = serde_json::from_str(raw).unwrap();
    assert!(!env.is_success());
    assert!(env.data.is_none());
    assert_eq!(env.msg, "invalid passkey");
}

#[test]
fn http_response_ok_is_2xx_only() {
    assert!(HttpResponse::new(200, "").ok());
    assert!(HttpResponse::new(204, "").ok());
    assert!(!HttpResponse::new(199, "").ok());
    assert!(!HttpResponse::new(301, "").ok());
    assert!(!HttpResponse::new(401, "").ok());
}
