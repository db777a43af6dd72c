//! User-facing error messages for HTTP status codes.
//!
//! Each endpoint family has a fixed status table. The mapping is a pure
//! function of `(endpoint, status, body)` so it can be tested without any
//! DOM rendering; flows pass the `ApiResponse` body straight through.

use serde_json::Value as JsonValue;

/// Which endpoint family produced the response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Login,
    Recover,
    Verify,
    Resend,
    ChangePassword,
    DeleteAccount,
    ProfileUpdate,
}

/// First `detail[].msg` from a validation-error body, or a bare string detail
pub fn detail_message(data: Option<&JsonValue>) -> Option<String> {
    match data?.get("detail")? {
        JsonValue::String(message) => Some(message.clone()),
        JsonValue::Array(items) => items
            .first()?
            .get("msg")?
            .as_str()
            .map(str::to_string),
        _ => None,
    }
}

fn unknown(status: u16) -> String {
    format!("unknown error: {status}")
}

/// Server-provided detail when present, otherwise the unknown-status fallback.
/// For endpoints without a dedicated table.
pub fn generic_message(status: u16, data: Option<&JsonValue>) -> String {
    detail_message(data).unwrap_or_else(|| unknown(status))
}

/// Map an HTTP status to the user-facing message for the given endpoint.
///
/// Statuses outside a table fall back to a message that preserves the
/// numeric code for diagnosis. 2xx statuses are not expected here; callers
/// only consult the table on `ok == false`.
pub fn user_message(endpoint: EndpointKind, status: u16, data: Option<&JsonValue>) -> String {
    match endpoint {
        EndpointKind::Login => match status {
            400 => "account has no e-mail on file".to_string(),
            401 => "invalid credentials".to_string(),
            403 => "account blocked/inactive".to_string(),
            422 => detail_message(data)
                .unwrap_or_else(|| "invalid login or password".to_string()),
            429 => "too many attempts".to_string(),
            500 => "mail delivery error".to_string(),
            other => unknown(other),
        },
        EndpointKind::Recover => match status {
            404 => "user not found".to_string(),
            422 => detail_message(data)
                .unwrap_or_else(|| "enter a valid e-mail address".to_string()),
            429 => "too many attempts".to_string(),
            500 => "mail delivery error".to_string(),
            other => unknown(other),
        },
        EndpointKind::Verify => detail_message(data)
            .unwrap_or_else(|| format!("verification failed: {status}")),
        EndpointKind::Resend => match status {
            429 => "too many attempts".to_string(),
            other => detail_message(data).unwrap_or_else(|| unknown(other)),
        },
        EndpointKind::ChangePassword => match status {
            401 => "invalid credentials".to_string(),
            403 => "account blocked/inactive".to_string(),
            422 => detail_message(data)
                .unwrap_or_else(|| "password does not meet requirements".to_string()),
            429 => "too many attempts".to_string(),
            other => unknown(other),
        },
        EndpointKind::DeleteAccount => generic_message(status, data),
        EndpointKind::ProfileUpdate => match status {
            409 => "e-mail already in use".to_string(),
            422 => detail_message(data)
                .unwrap_or_else(|| "enter a valid e-mail address".to_string()),
            429 => "too many attempts".to_string(),
            other => unknown(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_table_matches_documented_text() {
        let cases = [
            (400, "account has no e-mail on file"),
            (401, "invalid credentials"),
            (403, "account blocked/inactive"),
            (429, "too many attempts"),
            (500, "mail delivery error"),
        ];
        for (status, expected) in cases {
            assert_eq!(user_message(EndpointKind::Login, status, None), expected);
        }
    }

    #[test]
    fn unmapped_status_preserves_numeric_code() {
        for status in [418u16, 502, 503] {
            let message = user_message(EndpointKind::Login, status, None);
            assert!(message.contains(&status.to_string()), "{message}");
        }
    }

    #[test]
    fn login_422_uses_first_detail_entry() {
        let body = json!({"detail": [
            {"msg": "login must not be empty"},
            {"msg": "second entry ignored"}
        ]});
        assert_eq!(
            user_message(EndpointKind::Login, 422, Some(&body)),
            "login must not be empty"
        );
    }

    #[test]
    fn login_422_without_detail_falls_back() {
        assert_eq!(
            user_message(EndpointKind::Login, 422, Some(&json!({}))),
            "invalid login or password"
        );
    }

    #[test]
    fn verify_prefers_server_message() {
        let body = json!({"detail": [{"msg": "invalid code"}]});
        assert_eq!(
            user_message(EndpointKind::Verify, 401, Some(&body)),
            "invalid code"
        );
    }

    #[test]
    fn verify_falls_back_to_status() {
        assert_eq!(
            user_message(EndpointKind::Verify, 401, None),
            "verification failed: 401"
        );
    }

    #[test]
    fn recover_table() {
        assert_eq!(
            user_message(EndpointKind::Recover, 404, None),
            "user not found"
        );
        assert_eq!(
            user_message(EndpointKind::Recover, 429, None),
            "too many attempts"
        );
        assert_eq!(
            user_message(EndpointKind::Recover, 500, None),
            "mail delivery error"
        );
        assert_eq!(
            user_message(EndpointKind::Recover, 418, None),
            "unknown error: 418"
        );
    }

    #[test]
    fn detail_accepts_bare_string() {
        let body = json!({"detail": "challenge expired"});
        assert_eq!(detail_message(Some(&body)).as_deref(), Some("challenge expired"));
    }

    #[test]
    fn detail_ignores_malformed_shapes() {
        assert_eq!(detail_message(None), None);
        assert_eq!(detail_message(Some(&json!({"detail": 42}))), None);
        assert_eq!(detail_message(Some(&json!({"detail": [{"no_msg": 1}]}))), None);
        assert_eq!(detail_message(Some(&json!({"detail": []}))), None);
    }

    #[test]
    fn generic_message_prefers_detail() {
        let body = json!({"detail": "order already paid"});
        assert_eq!(generic_message(409, Some(&body)), "order already paid");
        assert_eq!(generic_message(409, None), "unknown error: 409");
    }

    #[test]
    fn profile_update_table() {
        assert_eq!(
            user_message(EndpointKind::ProfileUpdate, 409, None),
            "e-mail already in use"
        );
        assert_eq!(
            user_message(EndpointKind::ProfileUpdate, 422, None),
            "enter a valid e-mail address"
        );
        assert_eq!(
            user_message(EndpointKind::ProfileUpdate, 503, None),
            "unknown error: 503"
        );
    }

    #[test]
    fn change_password_table() {
        assert_eq!(
            user_message(EndpointKind::ChangePassword, 401, None),
            "invalid credentials"
        );
        assert_eq!(
            user_message(EndpointKind::ChangePassword, 422, None),
            "password does not meet requirements"
        );
    }
}
