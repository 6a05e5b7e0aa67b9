/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Outbound request description
//!
//! A [`Request`] is built fresh for every call and handed to the transport once.

use crate::error::{AppError, V20Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z][A-Za-z0-9_]*)\}").expect("valid placeholder pattern"));

/// Method, path template, bindings and body of one API call
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    method: Method,
    template: &'static str,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(String, String)>,
    body: Option<Value>,
    stream: bool,
}

impl Request {
    /// Starts a request for `template`, e.g. `/v3/accounts/{accountID}/orders`
    #[must_use]
    pub fn new(method: Method, template: &'static str) -> Self {
        Self {
            method,
            template,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
            stream: false,
        }
    }

    /// `GET` request
    #[must_use]
    pub fn get(template: &'static str) -> Self {
        Self::new(Method::GET, template)
    }

    /// `POST` request
    #[must_use]
    pub fn post(template: &'static str) -> Self {
        Self::new(Method::POST, template)
    }

    /// `PUT` request
    #[must_use]
    pub fn put(template: &'static str) -> Self {
        Self::new(Method::PUT, template)
    }

    /// `PATCH` request
    #[must_use]
    pub fn patch(template: &'static str) -> Self {
        Self::new(Method::PATCH, template)
    }

    /// Binds a `{name}` placeholder of the path template
    #[must_use]
    pub fn path_param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.retain(|(n, _)| *n != name);
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds a query parameter; `None` leaves it out of the query string
    #[must_use]
    pub fn query_param(mut self, name: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Adds every set field of `params` as a query parameter
    ///
    /// `params` must serialize to a JSON object. Null fields are left out, arrays are
    /// joined with commas and strings are sent verbatim.
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] if `params` is not an object or holds a
    /// nested object.
    pub fn query_from<T: Serialize>(mut self, params: &T) -> V20Result<Self> {
        let Value::Object(map) = serde_json::to_value(params)? else {
            return Err(AppError::InvalidInput(
                "query parameters must serialize to an object".to_string(),
            ));
        };
        for (name, value) in map {
            if let Some(value) = query_value(&name, value)? {
                self.query.push((name, value));
            }
        }
        Ok(self)
    }

    /// Sets the JSON body; fields the caller did not set are left out
    ///
    /// # Errors
    /// Fails if `body` cannot be serialized.
    pub fn body<T: Serialize>(mut self, body: &T) -> V20Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sends the request to the streaming host
    #[must_use]
    pub fn streaming(mut self) -> Self {
        self.stream = true;
        self
    }

    /// HTTP method
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Unexpanded path template
    #[must_use]
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Query pairs in insertion order
    #[must_use]
    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// JSON body, if any
    #[must_use]
    pub fn json_body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Whether the request goes to the streaming host
    #[must_use]
    pub fn is_stream(&self) -> bool {
        self.stream
    }

    /// Path with every placeholder substituted
    ///
    /// # Errors
    /// Returns [`AppError::InvalidInput`] naming the first placeholder without a
    /// binding.
    pub fn path(&self) -> V20Result<String> {
        if let Some(missing) = PLACEHOLDER
            .captures_iter(self.template)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .find(|name| self.binding(name).is_none())
        {
            return Err(AppError::InvalidInput(format!(
                "path parameter {missing} is not bound for {}",
                self.template
            )));
        }

        Ok(PLACEHOLDER
            .replace_all(self.template, |caps: &regex::Captures<'_>| {
                self.binding(&caps[1]).unwrap_or_default().to_string()
            })
            .into_owned())
    }

    fn binding(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

fn query_value(name: &str, value: Value) -> V20Result<Option<String>> {
    Ok(match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                if let Some(part) = query_value(name, item)? {
                    parts.push(part);
                }
            }
            Some(parts.join(","))
        }
        Value::Object(_) => {
            return Err(AppError::InvalidInput(format!(
                "query parameter {name} cannot be an object"
            )));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        instruments: Option<Vec<String>>,
        include_units_available: Option<bool>,
        since: Option<String>,
    }

    #[test]
    fn substitutes_every_placeholder() {
        let request = Request::put("/v3/accounts/{accountID}/trades/{tradeSpecifier}/close")
            .path_param("accountID", "101-004-1-001")
            .path_param("tradeSpecifier", "42");
        assert_eq!(
            request.path().unwrap(),
            "/v3/accounts/101-004-1-001/trades/42/close"
        );
    }

    #[test]
    fn unbound_placeholder_is_invalid_input() {
        let err = Request::get("/v3/accounts/{accountID}/summary").path().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg.contains("accountID")));
    }

    #[test]
    fn unset_query_fields_are_omitted_and_lists_joined() {
        let request = Request::get("/v3/accounts/{accountID}/pricing")
            .query_from(&Params {
                instruments: Some(vec!["EUR_USD".into(), "USD_JPY".into()]),
                include_units_available: None,
                since: None,
            })
            .unwrap();
        assert_eq!(
            request.query(),
            &[("instruments".to_string(), "EUR_USD,USD_JPY".to_string())]
        );
    }

    #[test]
    fn none_query_param_is_skipped() {
        let request = Request::get("/v3/x")
            .query_param("count", Some(5))
            .query_param("from", None::<String>);
        assert_eq!(request.query(), &[("count".to_string(), "5".to_string())]);
    }
}
