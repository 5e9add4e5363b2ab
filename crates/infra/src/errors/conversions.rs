//! Conversions from external infrastructure errors into domain errors.

use classgrid_domain::ClassGridError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ClassGridError);

impl From<InfraError> for ClassGridError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ClassGridError> for InfraError {
    fn from(value: ClassGridError) -> Self {
        Self(value)
    }
}

trait IntoClassGridError {
    fn into_classgrid(self) -> ClassGridError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ClassGridError */
/* -------------------------------------------------------------------------- */

impl IntoClassGridError for HttpError {
    fn into_classgrid(self) -> ClassGridError {
        if self.is_timeout() {
            return ClassGridError::remote("HTTP request timed out");
        }

        if self.is_connect() {
            return ClassGridError::remote("HTTP connection failure");
        }

        if self.is_builder() {
            return ClassGridError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let text = status.canonical_reason().unwrap_or("unknown status");
            let message = format!("HTTP {code} {text}");

            return match code {
                401 | 403 => ClassGridError::Auth(message),
                _ => ClassGridError::remote(message),
            };
        }

        ClassGridError::remote(format!("HTTP error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_classgrid())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ClassGridError */
/* -------------------------------------------------------------------------- */

impl IntoClassGridError for serde_json::Error {
    fn into_classgrid(self) -> ClassGridError {
        ClassGridError::remote(format!("malformed response body: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        Self(value.into_classgrid())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use tokio::runtime::Runtime;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[test]
    fn http_status_401_maps_to_auth_error() {
        Runtime::new().unwrap().block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(StatusCode::UNAUTHORIZED))
                .mount(&server)
                .await;

            let client = Client::builder().no_proxy().build().unwrap();
            let error =
                client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

            let mapped: ClassGridError = InfraError::from(error).into();
            match mapped {
                ClassGridError::Auth(msg) => assert!(msg.contains("401")),
                other => panic!("expected auth error, got {other:?}"),
            }
        });
    }

    #[test]
    fn http_status_500_maps_to_remote_error() {
        Runtime::new().unwrap().block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(StatusCode::INTERNAL_SERVER_ERROR))
                .mount(&server)
                .await;

            let client = Client::builder().no_proxy().build().unwrap();
            let error =
                client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err();

            let mapped: ClassGridError = InfraError::from(error).into();
            assert_eq!(mapped.reason(), None);
            assert!(matches!(mapped, ClassGridError::Remote { .. }));
        });
    }

    #[test]
    fn json_error_maps_to_remote_error() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let mapped: ClassGridError = InfraError::from(err).into();
        match mapped {
            ClassGridError::Remote { message, .. } => assert!(message.contains("malformed")),
            other => panic!("expected remote error, got {other:?}"),
        }
    }
}
