use {
    crate::domain::{error::ApruveError, transport::ApiResponse},
    reqwest::StatusCode,
};

/// Pass 2xx responses through; turn everything else into a typed error.
pub fn error_for_status(response: ApiResponse) -> Result<ApiResponse, ApruveError> {
    let status = response.status;
    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::NOT_FOUND => {
            tracing::warn!(%status, "resource not found");
            Err(ApruveError::NotFound {
                body: response.body,
            })
        }
        _ => {
            tracing::warn!(%status, body = %response.body, "api request failed");
            Err(ApruveError::Api {
                status,
                body: response.body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_pass_through() {
        for status in [StatusCode::OK, StatusCode::CREATED] {
            let resp = error_for_status(ApiResponse::new(status, "{}")).unwrap();
            assert_eq!(resp.body, "{}");
        }
    }

    #[test]
    fn not_found_is_its_own_kind() {
        let err = error_for_status(ApiResponse::new(StatusCode::NOT_FOUND, "Not Found"))
            .unwrap_err();
        assert!(matches!(err, ApruveError::NotFound { ref body } if body == "Not Found"));
    }

    #[test]
    fn other_failures_carry_status_and_body() {
        for code in [400u16, 401, 403, 422, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = error_for_status(ApiResponse::new(status, "boom")).unwrap_err();
            match err {
                ApruveError::Api { status: got, body } => {
                    assert_eq!(got, status);
                    assert_eq!(body, "boom");
                }
                other => panic!("expected Api error for {code}, got {other:?}"),
            }
        }
    }
}
