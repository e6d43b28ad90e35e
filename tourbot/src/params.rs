//! Parameter extraction from the skill request.
//!
//! The builder sends plain parameters as strings, and entity parameters as
//! `{ "origin": ..., "value": ... }` objects. Anything else degrades to the
//! caller's default.

use crate::kakao::SkillRequest;
use serde_json::{Map, Value};

pub const REGION_CODE: &str = "region_code";
pub const ROUTE_NUMBER: &str = "route_number";

/// Reads `name` from a parameter map. Blank strings count as missing.
pub fn param_from(params: &Map<String, Value>, name: &str) -> Option<String> {
    let raw = match params.get(name)? {
        Value::String(s) => s.as_str(),
        Value::Object(obj) => obj.get("value").and_then(Value::as_str)?,
        _ => return None,
    };
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Looks in `action.params`, then `action.detailParams`.
pub fn param(request: &SkillRequest, name: &str) -> Option<String> {
    param_from(&request.action.params, name)
        .or_else(|| param_from(&request.action.detail_params, name))
}

pub fn param_or(request: &SkillRequest, name: &str, default: &str) -> String {
    param(request, name).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(action: Value) -> SkillRequest {
        serde_json::from_value(json!({ "action": action })).unwrap()
    }

    #[test]
    fn test_plain_string_param() {
        let req = request(json!({ "params": { "region_code": "yeongju" } }));
        assert_eq!(param_or(&req, REGION_CODE, "gyeongsan"), "yeongju");
    }

    #[test]
    fn test_value_object_param() {
        let req = request(json!({ "params": { "region_code": { "value": "yeongju" } } }));
        assert_eq!(param(&req, REGION_CODE).as_deref(), Some("yeongju"));
    }

    #[test]
    fn test_detail_params_fallback() {
        let req = request(json!({
            "params": {},
            "detailParams": { "route_number": { "origin": "100번", "value": "100" } }
        }));
        assert_eq!(param(&req, ROUTE_NUMBER).as_deref(), Some("100"));
    }

    #[test]
    fn test_params_take_precedence_over_detail_params() {
        let req = request(json!({
            "params": { "route_number": "200" },
            "detailParams": { "route_number": { "value": "100" } }
        }));
        assert_eq!(param(&req, ROUTE_NUMBER).as_deref(), Some("200"));
    }

    #[test]
    fn test_malformed_shapes_fall_back_to_default() {
        for raw in [
            json!(null),
            json!(7),
            json!(true),
            json!(["gyeongsan"]),
            json!({ "value": 3 }),
            json!({ "origin": "x" }),
            json!("   "),
        ] {
            let req = request(json!({ "params": { "region_code": raw } }));
            assert_eq!(param_or(&req, REGION_CODE, "gyeongsan"), "gyeongsan");
        }
    }

    #[test]
    fn test_missing_action_falls_back_to_default() {
        let req: SkillRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(param_or(&req, REGION_CODE, "gyeongsan"), "gyeongsan");
        assert!(param(&req, ROUTE_NUMBER).is_none());
    }
}
