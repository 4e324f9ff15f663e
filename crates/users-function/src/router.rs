//! Request dispatch for the users API.
//!
//! A single ordered table maps (method, path pattern) to a handler. The
//! dispatch step is also the failure-isolation boundary: any error a handler
//! returns is converted to its error envelope here, so every request yields
//! exactly one well-formed envelope.

use edge_function_sdk::{HandlerError, Request, Response};

use crate::config::FunctionConfig;
use crate::handlers;
use crate::users::UserDirectory;

type Handler = fn(&Request, &UserDirectory) -> Result<Response, HandlerError>;

/// How a route matches the request path
enum PathPattern {
    Exact(&'static str),
    Prefix(&'static str),
}

impl PathPattern {
    fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(p) => path == *p,
            PathPattern::Prefix(p) => path.starts_with(p),
        }
    }
}

struct Route {
    method: &'static str,
    pattern: PathPattern,
    handler: Handler,
}

/// Routing table, consulted in order: exact paths before prefix matches
const ROUTES: &[Route] = &[
    Route {
        method: "GET",
        pattern: PathPattern::Exact("/users"),
        handler: handlers::list_users,
    },
    Route {
        method: "POST",
        pattern: PathPattern::Exact("/users"),
        handler: handlers::create_user,
    },
    Route {
        method: "GET",
        pattern: PathPattern::Prefix("/users/"),
        handler: handlers::get_user_by_id,
    },
];

/// The users API: the fixed directory plus the response policy
pub struct UsersApi {
    directory: UserDirectory,
    allow_origin: String,
}

impl UsersApi {
    pub fn new(config: &FunctionConfig) -> Self {
        Self {
            directory: UserDirectory::seeded(),
            allow_origin: config.allow_origin.clone(),
        }
    }

    /// Dispatch one request to its handler and produce the envelope.
    ///
    /// The cross-origin header is stamped here so error envelopes carry it
    /// too.
    pub fn handle(&self, req: &Request) -> Response {
        let response = match self.dispatch(req) {
            Ok(response) => response,
            Err(e) => e.to_response(),
        };

        tracing::debug!(
            method = %req.method,
            path = %req.path,
            status = response.status,
            "Handled request"
        );

        response.with_cors(self.allow_origin.as_str())
    }

    fn dispatch(&self, req: &Request) -> Result<Response, HandlerError> {
        for route in ROUTES {
            if req.is_method(route.method) && route.pattern.matches(&req.path) {
                return (route.handler)(req, &self.directory);
            }
        }

        Err(HandlerError::NotFound("Route not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn api() -> UsersApi {
        UsersApi::new(&FunctionConfig {
            allow_origin: "*".to_string(),
        })
    }

    fn request(method: &str, path: &str, body: Option<&str>) -> Request {
        Request {
            method: method.to_string(),
            path: path.to_string(),
            body: body.map(|b| b.to_string()),
        }
    }

    fn body_json(response: &Response) -> Value {
        serde_json::from_str(&response.body).expect("body is valid JSON")
    }

    #[test]
    fn list_users_returns_fixed_records() {
        let response = api().handle(&request("GET", "/users", None));
        assert_eq!(response.status, 200);

        let body = body_json(&response);
        let users = body["users"].as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0]["id"], 1);
        assert_eq!(users[0]["name"], "John Doe");
        assert_eq!(users[1]["id"], 2);
        assert_eq!(users[1]["name"], "Jane Smith");
        assert_eq!(body["count"], 2);
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn create_user_synthesizes_record() {
        let response = api().handle(&request(
            "POST",
            "/users",
            Some(r#"{"name":"Alice","email":"a@x.com"}"#),
        ));
        assert_eq!(response.status, 201);

        let body = body_json(&response);
        assert_eq!(body["user"]["id"], 3);
        assert_eq!(body["user"]["name"], "Alice");
        assert_eq!(body["user"]["email"], "a@x.com");
        assert!(body["user"]["created_at"].is_string());
    }

    #[test]
    fn create_user_missing_email() {
        let response = api().handle(&request("POST", "/users", Some(r#"{"name":"Alice"}"#)));
        assert_eq!(response.status, 400);
        assert_eq!(
            body_json(&response)["error"],
            "Missing required field: email"
        );
    }

    #[test]
    fn create_user_reports_name_before_email() {
        let response = api().handle(&request("POST", "/users", Some("{}")));
        assert_eq!(response.status, 400);
        assert_eq!(body_json(&response)["error"], "Missing required field: name");
    }

    #[test]
    fn create_user_without_body_validates_like_empty_object() {
        let response = api().handle(&request("POST", "/users", None));
        assert_eq!(response.status, 400);
        assert_eq!(body_json(&response)["error"], "Missing required field: name");
    }

    #[test]
    fn create_user_malformed_body_is_internal() {
        let response = api().handle(&request("POST", "/users", Some("{not json")));
        assert_eq!(response.status, 500);

        let body = body_json(&response);
        let error = body["error"].as_str().unwrap();
        assert!(error.starts_with("Internal error:"), "got: {}", error);
        assert!(body["timestamp"].is_string());
    }

    #[test]
    fn get_user_by_id_hits() {
        let response = api().handle(&request("GET", "/users/1", None));
        assert_eq!(response.status, 200);
        assert_eq!(body_json(&response)["user"]["name"], "John Doe");
    }

    #[test]
    fn get_user_by_id_misses() {
        let response = api().handle(&request("GET", "/users/99", None));
        assert_eq!(response.status, 404);
        assert_eq!(body_json(&response)["error"], "User 99 not found");
    }

    #[test]
    fn get_user_trailing_slash_is_an_empty_id() {
        let response = api().handle(&request("GET", "/users/", None));
        assert_eq!(response.status, 404);
        assert_eq!(body_json(&response)["error"], "User  not found");
    }

    #[test]
    fn unmatched_routes_are_not_found() {
        for (method, path) in [
            ("DELETE", "/users"),
            ("PUT", "/users/1"),
            ("GET", "/orders"),
            ("POST", "/users/1"),
            ("GET", "/"),
        ] {
            let response = api().handle(&request(method, path, None));
            assert_eq!(response.status, 404, "{} {}", method, path);
            assert_eq!(body_json(&response)["error"], "Route not found");
        }
    }

    #[test]
    fn method_match_is_case_insensitive() {
        let response = api().handle(&request("get", "/users", None));
        assert_eq!(response.status, 200);
    }

    #[test]
    fn every_envelope_is_well_formed() {
        let requests = [
            request("GET", "/users", None),
            request("POST", "/users", Some(r#"{"name":"Alice","email":"a@x.com"}"#)),
            request("POST", "/users", Some("{not json")),
            request("POST", "/users", None),
            request("GET", "/users/2", None),
            request("GET", "/users/99", None),
            request("DELETE", "/users", None),
        ];

        let api = api();
        for req in &requests {
            let response = api.handle(req);
            assert!(
                [200, 201, 400, 404, 500].contains(&response.status),
                "{} {} -> {}",
                req.method,
                req.path,
                response.status
            );
            assert_eq!(
                response.headers.get("Content-Type").map(String::as_str),
                Some("application/json")
            );
            assert_eq!(
                response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
                Some("*")
            );
            assert!(serde_json::from_str::<Value>(&response.body).is_ok());
        }
    }

    #[test]
    fn get_user_is_idempotent() {
        let api = api();
        let first = api.handle(&request("GET", "/users/1", None));
        for _ in 0..3 {
            let again = api.handle(&request("GET", "/users/1", None));
            assert_eq!(body_json(&again)["user"], body_json(&first)["user"]);
        }
    }

    #[test]
    fn configured_origin_is_stamped() {
        let api = UsersApi::new(&FunctionConfig {
            allow_origin: "https://app.example.com".to_string(),
        });
        let response = api.handle(&request("GET", "/users", None));
        assert_eq!(
            response.headers.get("Access-Control-Allow-Origin").map(String::as_str),
            Some("https://app.example.com")
        );
    }
}
