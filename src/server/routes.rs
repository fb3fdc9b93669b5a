use crate::server::api;
use crate::server::api::EnginePayloadError;

pub struct HttpResponse {
    pub status_code: u16,
    pub status_text: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl HttpResponse {
    pub fn to_http_string(&self) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            self.status_code,
            self.status_text,
            self.content_type,
            self.body.len(),
            self.body
        )
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    match (method, path) {
        ("GET", "/") => match index_payload() {
            Ok(payload) => ok_json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        ("GET", "/api/health") => match api::health_payload() {
            Ok(payload) => ok_json(payload),
            Err(err) => error_response(500, "Internal Server Error", &err.to_string()),
        },
        (method, path) if method == "GET" && path.starts_with("/api/heroes") => {
            engine_response(api::heroes_payload(path))
        }
        ("GET", "/api/teamups") => engine_response(api::team_ups_payload()),
        ("GET", "/api/data/version") => engine_response(api::data_version_payload()),
        ("POST", "/api/evaluate") => engine_response(api::evaluate_payload(body)),
        ("POST", "/api/recommend") => engine_response(api::recommend_payload(body)),
        ("POST", "/api/scan") => engine_response(api::scan_payload(body)),
        ("POST", "/api/compose") => engine_response(api::compose_payload(body)),
        _ => error_response(404, "Not Found", "Route not found"),
    }
}

fn engine_response(result: Result<String, EnginePayloadError>) -> HttpResponse {
    match result {
        Ok(payload) => ok_json(payload),
        Err(EnginePayloadError::Parse(err)) => {
            error_response(400, "Bad Request", &format!("Invalid request body: {err}"))
        }
        Err(EnginePayloadError::Validation(validation)) => {
            validation_error_response(400, "Bad Request", validation)
        }
        Err(EnginePayloadError::Registry(err)) => {
            error_response(500, "Internal Server Error", &err.to_string())
        }
    }
}

fn ok_json(body: String) -> HttpResponse {
    HttpResponse {
        status_code: 200,
        status_text: "OK",
        content_type: "application/json",
        body,
    }
}

fn validation_error_response(
    status_code: u16,
    status_text: &'static str,
    payload: api::ValidationErrorResponse,
) -> HttpResponse {
    let fallback =
        "{\n  \"status\": \"error\",\n  \"message\": \"Validation failed\"\n}".to_string();

    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: serde_json::to_string_pretty(&payload).unwrap_or(fallback),
    }
}

fn error_response(status_code: u16, status_text: &'static str, message: &str) -> HttpResponse {
    HttpResponse {
        status_code,
        status_text,
        content_type: "application/json",
        body: format!(
            "{{\n  \"status\": \"error\",\n  \"message\": {}\n}}",
            serde_json::to_string(message).unwrap_or_else(|_| "\"Unknown error\"".to_string())
        ),
    }
}

fn index_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "service": "shotcaller-api",
        "endpoints": [
            "GET /api/health",
            "GET /api/heroes?role=<vanguard|duelist|strategist>",
            "GET /api/teamups",
            "GET /api/data/version",
            "POST /api/evaluate",
            "POST /api/recommend",
            "POST /api/scan",
            "POST /api/compose"
        ]
    }))
}
