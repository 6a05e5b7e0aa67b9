/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Response envelope and status-keyed decoding
//!
//! What a response body decodes into depends on the operation and the HTTP status.
//! Every operation declares its table with [`status_response!`], which generates an
//! enum with one variant per registered status. Bodies without a JSON content type
//! stay raw, and JSON bodies for unregistered statuses are passed through verbatim.

use pretty_simple_display::DisplaySimple;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body shared by most non-success statuses
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable code
    pub error_code: Option<String>,
    /// Human-readable message
    pub error_message: Option<String>,
}

/// Per-operation table from HTTP status to body shape
pub trait DecodePlan: Sized {
    /// Whether `status` has a registered shape
    fn registered(status: u16) -> bool;

    /// Decodes `body` into the shape registered for `status`
    ///
    /// # Errors
    /// Fails if the body does not match the shape, or if `status` is not registered.
    fn decode(status: u16, body: Value) -> Result<Self, serde_json::Error>;
}

/// How the body of a response was interpreted
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody<T> {
    /// JSON decoded through the operation's table
    Decoded(T),
    /// JSON for a status the operation does not register, left as parsed
    Json(Value),
    /// No content type, a non-JSON content type or an empty body; see `raw_body`
    Raw,
}

/// Everything a caller needs from one API call
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    /// Request method
    pub method: Method,
    /// Request path, placeholders substituted
    pub path: String,
    /// HTTP status
    pub status: StatusCode,
    /// Canonical reason phrase of the status
    pub reason: Option<String>,
    /// `Content-Type` header, if any
    pub content_type: Option<String>,
    /// Body as received
    pub raw_body: String,
    /// Interpreted body
    pub body: ResponseBody<T>,
}

impl<T> Response<T> {
    /// Decoded body, when the status was registered
    #[must_use]
    pub fn decoded(&self) -> Option<&T> {
        match &self.body {
            ResponseBody::Decoded(body) => Some(body),
            _ => None,
        }
    }

    /// Takes the decoded body out of the envelope
    #[must_use]
    pub fn into_decoded(self) -> Option<T> {
        match self.body {
            ResponseBody::Decoded(body) => Some(body),
            _ => None,
        }
    }

    /// Parsed JSON of an unregistered status
    #[must_use]
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Whether the status is 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl<T: DecodePlan> Response<T> {
    /// Interprets a received body for `status`
    ///
    /// # Errors
    /// Fails if a JSON content type carries malformed JSON, or if a registered status
    /// carries a body that does not match its shape.
    pub fn interpret(
        method: Method,
        path: String,
        status: StatusCode,
        content_type: Option<String>,
        raw_body: String,
    ) -> Result<Self, serde_json::Error> {
        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"));

        let body = if !is_json || raw_body.trim().is_empty() {
            ResponseBody::Raw
        } else {
            let value: Value = serde_json::from_str(&raw_body)?;
            if T::registered(status.as_u16()) {
                ResponseBody::Decoded(T::decode(status.as_u16(), value)?)
            } else {
                ResponseBody::Json(value)
            }
        };

        Ok(Self {
            method,
            path,
            status,
            reason: status.canonical_reason().map(str::to_string),
            content_type,
            raw_body,
            body,
        })
    }
}

/// Declares the status table of one operation
///
/// ```ignore
/// status_response! {
///     /// Result of closing a trade
///     pub enum CloseTradeResponse {
///         200 => Ok(CloseTradeOk),
///         400 => BadRequest(CloseTradeRejected),
///     }
/// }
/// ```
macro_rules! status_response {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $status:literal => $variant:ident($shape:ty), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                #[doc = concat!("HTTP ", stringify!($status))]
                $variant($shape),
            )+
        }

        impl $crate::model::response::DecodePlan for $name {
            fn registered(status: u16) -> bool {
                matches!(status, $($status)|+)
            }

            fn decode(status: u16, body: serde_json::Value) -> Result<Self, serde_json::Error> {
                match status {
                    $( $status => serde_json::from_value(body).map($name::$variant), )+
                    other => Err(<serde_json::Error as serde::de::Error>::custom(format!(
                        "{} has no shape for status {}",
                        stringify!($name),
                        other
                    ))),
                }
            }
        }

        impl $name {
            /// HTTP status this variant was decoded from
            #[must_use]
            pub fn status(&self) -> u16 {
                match self {
                    $( $name::$variant(_) => $status, )+
                }
            }
        }
    };
}

pub(crate) use status_response;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Greeting {
        hello: Option<String>,
    }

    status_response! {
        pub enum GreetingResponse {
            200 => Ok(Greeting),
            400 => BadRequest(ApiError),
        }
    }

    fn interpret(status: u16, content_type: Option<&str>, body: &str) -> Response<GreetingResponse> {
        Response::interpret(
            Method::GET,
            "/v3/greeting".to_string(),
            StatusCode::from_u16(status).unwrap(),
            content_type.map(str::to_string),
            body.to_string(),
        )
        .unwrap()
    }

    #[test]
    fn registered_status_selects_its_shape() {
        let ok = interpret(200, Some("application/json"), r#"{"hello": "world"}"#);
        assert_eq!(
            ok.decoded(),
            Some(&GreetingResponse::Ok(Greeting {
                hello: Some("world".into())
            }))
        );

        let bad = interpret(400, Some("application/json"), r#"{"errorMessage": "nope"}"#);
        let Some(GreetingResponse::BadRequest(err)) = bad.decoded() else {
            panic!("expected the 400 shape");
        };
        assert_eq!(err.error_message.as_deref(), Some("nope"));
        assert_eq!(bad.decoded().unwrap().status(), 400);
    }

    #[test]
    fn unregistered_status_passes_json_through() {
        let response = interpret(418, Some("application/json"), r#"{"teapot": true}"#);
        assert_eq!(response.json(), Some(&serde_json::json!({"teapot": true})));
        assert!(response.decoded().is_none());
    }

    #[test]
    fn non_json_content_stays_raw() {
        let response = interpret(200, Some("text/html"), "<html></html>");
        assert_eq!(response.body, ResponseBody::Raw);
        assert_eq!(response.raw_body, "<html></html>");

        let response = interpret(200, None, r#"{"hello": "world"}"#);
        assert_eq!(response.body, ResponseBody::Raw);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let result = Response::<GreetingResponse>::interpret(
            Method::GET,
            "/v3/greeting".to_string(),
            StatusCode::OK,
            Some("application/json".to_string()),
            "{not json".to_string(),
        );
        assert!(result.is_err());
    }
}
