//! OCS response parsing.
//!
//! The share API wraps every payload in an OCS document:
//!
//! ```json
//! { "ocs": { "meta": { "status": "ok", "statuscode": 100, "message": null },
//!            "data": [ { ...share... } ] } }
//! ```
//!
//! `meta.statuscode` carries the API-level outcome even when the HTTP
//! status is 200, so it is consulted first; the HTTP status only decides
//! when no OCS document can be read at all.

use chrono::DateTime;
use serde::{Deserialize, Deserializer};

use sharelink_core::envelope::{RemoteOperationResult, ResultCode};
use sharelink_core::error::{AppError, ErrorKind};
use sharelink_core::result::AppResult;
use sharelink_core::wire::HttpResponse;
use sharelink_entity::{RemoteShare, SharePermissions, ShareType};

#[derive(Debug, Deserialize)]
struct OcsDocument {
    ocs: OcsBody,
}

#[derive(Debug, Deserialize)]
struct OcsBody {
    meta: OcsMeta,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct OcsMeta {
    statuscode: u16,
    #[serde(default)]
    message: Option<String>,
}

/// A share element as the server serializes it.
#[derive(Debug, Deserialize)]
struct OcsShare {
    #[serde(deserialize_with = "i64_from_string_or_number")]
    id: i64,
    share_type: i32,
    permissions: u32,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    item_type: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    share_with: Option<String>,
    #[serde(default)]
    stime: Option<i64>,
    #[serde(default)]
    expiration: Option<i64>,
    #[serde(default)]
    token: Option<String>,
}

impl OcsShare {
    fn into_remote_share(self) -> AppResult<RemoteShare> {
        let share_type = ShareType::try_from(self.share_type)
            .map_err(AppError::serialization)?;

        Ok(RemoteShare {
            id: self.id,
            share_type,
            path: self.path.unwrap_or_default(),
            is_folder: self.item_type.as_deref() == Some("folder"),
            name: self.name.unwrap_or_default(),
            share_link: self.url,
            share_with: self.share_with.filter(|s| !s.is_empty()),
            permissions: SharePermissions(self.permissions),
            expiration_date: self.expiration.and_then(|s| DateTime::from_timestamp(s, 0)),
            shared_date: self.stime.and_then(|s| DateTime::from_timestamp(s, 0)),
            token: self.token,
        })
    }
}

/// Some server versions send share IDs as JSON strings.
fn i64_from_string_or_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

fn shares_from_value(value: serde_json::Value) -> AppResult<Vec<RemoteShare>> {
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Array(elements) => elements
            .into_iter()
            .map(|element| {
                serde_json::from_value::<OcsShare>(element)
                    .map_err(AppError::from)?
                    .into_remote_share()
            })
            .collect(),
        // create/update return the single affected share as a bare object
        object @ serde_json::Value::Object(_) => {
            let share = serde_json::from_value::<OcsShare>(object)
                .map_err(AppError::from)?
                .into_remote_share()?;
            Ok(vec![share])
        }
        other => Err(AppError::serialization(format!(
            "Unexpected OCS data payload: {other}"
        ))),
    }
}

/// Interpret a share API response as an operation envelope.
///
/// Payload ordering follows the order of elements in the response body.
pub fn parse_share_response(response: &HttpResponse) -> RemoteOperationResult<Vec<RemoteShare>> {
    let text = match response.text() {
        Ok(text) => text,
        Err(err) => {
            return RemoteOperationResult::failure_with_status(
                ResultCode::WrongServerResponse,
                response.status,
                Some(err.message),
            );
        }
    };

    match serde_json::from_str::<OcsDocument>(text) {
        Ok(document) => {
            let code = ResultCode::from_status(document.ocs.meta.statuscode);
            if code.is_success() {
                match shares_from_value(document.ocs.data) {
                    Ok(shares) => {
                        RemoteOperationResult::success_with_status(shares, response.status)
                    }
                    Err(err) => RemoteOperationResult::failure_with_status(
                        ResultCode::WrongServerResponse,
                        response.status,
                        Some(err.message),
                    ),
                }
            } else {
                let phrase = document
                    .ocs
                    .meta
                    .message
                    .filter(|message| !message.is_empty())
                    .or_else(|| response.reason.clone());
                RemoteOperationResult::failure_with_status(code, response.status, phrase)
            }
        }
        Err(_) if !response.status.is_success() => RemoteOperationResult::failure_with_status(
            ResultCode::from_http_status(response.status.as_u16()),
            response.status,
            response.reason.clone(),
        ),
        Err(err) => RemoteOperationResult::failure_with_status(
            ResultCode::WrongServerResponse,
            response.status,
            Some(format!("Malformed server response: {err}")),
        ),
    }
}

/// Fold a transport error into a failure envelope.
pub fn failure_from_transport(err: AppError) -> RemoteOperationResult<Vec<RemoteShare>> {
    let code = match err.kind {
        ErrorKind::Serialization => ResultCode::WrongServerResponse,
        _ => ResultCode::ServerError,
    };
    RemoteOperationResult::failure(code, Some(err.message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    fn ocs_body(statuscode: u16, message: Option<&str>, data: serde_json::Value) -> String {
        serde_json::json!({
            "ocs": {
                "meta": {
                    "status": if statuscode == 100 || statuscode == 200 { "ok" } else { "failure" },
                    "statuscode": statuscode,
                    "message": message,
                },
                "data": data,
            }
        })
        .to_string()
    }

    fn share_element(id: serde_json::Value, path: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "share_type": 3,
            "permissions": 1,
            "path": path,
            "item_type": "file",
            "name": name,
            "url": format!("http://server:port/s/{name}"),
            "share_with": "",
            "stime": 1_546_300_800,
            "token": "tok",
        })
    }

    #[test]
    fn test_parse_success_keeps_element_order() {
        let body = ocs_body(
            100,
            None,
            serde_json::json!([
                share_element(serde_json::json!(1), "/Photos/", "first"),
                share_element(serde_json::json!(2), "/Photos/image1.jpg", "second"),
                share_element(serde_json::json!(3), "/Photos/image2.jpg", "third"),
            ]),
        );
        let response = HttpResponse::new(StatusCode::OK, None, body);

        let result = parse_share_response(&response);
        assert!(result.is_success());
        let names: Vec<&str> = result.data().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(result.data()[0].path, "/Photos/");
    }

    #[test]
    fn test_parse_single_object_payload() {
        let body = ocs_body(
            100,
            None,
            share_element(serde_json::json!("42"), "Photos/img1.png", "img1 link"),
        );
        let response = HttpResponse::new(StatusCode::OK, None, body);

        let result = parse_share_response(&response);
        assert!(result.is_success());
        assert_eq!(result.data().len(), 1);
        // string-typed id is accepted
        assert_eq!(result.data()[0].id, 42);
        assert!(!result.data()[0].is_folder);
        assert_eq!(result.data()[0].share_with, None);
    }

    #[test]
    fn test_parse_failure_meta_carries_code_and_message() {
        let body = ocs_body(
            404,
            Some("Wrong path, file/folder doesn't exist"),
            serde_json::json!([]),
        );
        let response = HttpResponse::new(StatusCode::OK, None, body);

        let result = parse_share_response(&response);
        assert!(!result.is_success());
        assert_eq!(result.code(), ResultCode::ShareNotFound);
        assert_eq!(
            result.http_phrase(),
            Some("Wrong path, file/folder doesn't exist")
        );
        assert!(result.data().is_empty());
    }

    #[test]
    fn test_parse_http_error_without_ocs_body() {
        let response = HttpResponse::new(
            StatusCode::SERVICE_UNAVAILABLE,
            Some("Service Unavailable".to_string()),
            "<html>maintenance</html>",
        );

        let result = parse_share_response(&response);
        assert_eq!(result.code(), ResultCode::ServerError);
        assert_eq!(result.http_phrase(), Some("Service Unavailable"));
    }

    #[test]
    fn test_bare_http_statuses_map_to_resource_codes() {
        let forbidden = HttpResponse::new(
            StatusCode::FORBIDDEN,
            Some("Forbidden".to_string()),
            "<html>forbidden</html>",
        );
        let result = parse_share_response(&forbidden);
        assert_eq!(result.code(), ResultCode::Forbidden);
        assert!(result.data().is_empty());

        let not_found = HttpResponse::new(
            StatusCode::NOT_FOUND,
            Some("Not Found".to_string()),
            "<html>not found</html>",
        );
        let result = parse_share_response(&not_found);
        assert_eq!(result.code(), ResultCode::FileNotFound);
        assert_eq!(result.http_phrase(), Some("Not Found"));
    }

    #[test]
    fn test_parse_malformed_success_body() {
        let response = HttpResponse::new(StatusCode::OK, None, "not json at all");

        let result = parse_share_response(&response);
        assert_eq!(result.code(), ResultCode::WrongServerResponse);
        assert!(result.data().is_empty());
    }

    #[test]
    fn test_null_data_is_empty_payload() {
        let body = ocs_body(100, None, serde_json::Value::Null);
        let response = HttpResponse::new(StatusCode::OK, None, body);

        let result = parse_share_response(&response);
        assert!(result.is_success());
        assert!(result.data().is_empty());
    }

    #[test]
    fn test_transport_error_folds_to_failure() {
        let result = failure_from_transport(AppError::transport("connection refused"));
        assert_eq!(result.code(), ResultCode::ServerError);
        assert_eq!(result.http_phrase(), Some("connection refused"));
        assert!(result.data().is_empty());
    }
}
