//! Minimal local HTTP host for the engine. One request per connection,
//! routed by method and path; all payloads are JSON.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};

pub mod api;
pub mod routes;

const MAX_REQUEST_BYTES: usize = 16_384;

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr)?;
    println!("shotcaller server listening on http://{bind_addr}");

    for stream in listener.incoming() {
        match stream {
            Ok(mut stream) => {
                if let Err(err) = handle_connection(&mut stream) {
                    eprintln!("request error: {err}");
                }
            }
            Err(err) => eprintln!("connection failed: {err}"),
        }
    }

    Ok(())
}

fn handle_connection(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut buffer = [0_u8; MAX_REQUEST_BYTES];
    let bytes_read = stream.read(&mut buffer)?;
    if bytes_read == 0 {
        return Ok(());
    }

    let request = String::from_utf8_lossy(&buffer[..bytes_read]);
    let (method, path, body) = parse_request(&request);

    let response = routes::route_request(method, path, body).to_http_string();
    stream.write_all(response.as_bytes())?;
    stream.flush()
}

/// Split a raw HTTP request into method, path, and body. Headers are ignored;
/// the routes only need the request line and the JSON payload.
fn parse_request(request: &str) -> (&str, &str, &str) {
    let request_line = request.lines().next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("GET");
    let path = parts.next().unwrap_or("/");

    let body = request
        .split_once("\r\n\r\n")
        .or_else(|| request.split_once("\n\n"))
        .map(|(_, body)| body)
        .unwrap_or("");

    (method, path, body)
}

#[cfg(test)]
mod tests {
    use super::parse_request;

    #[test]
    fn request_line_and_body_are_extracted() {
        let raw = "POST /api/evaluate HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"roster\":[]}";
        let (method, path, body) = parse_request(raw);
        assert_eq!(method, "POST");
        assert_eq!(path, "/api/evaluate");
        assert_eq!(body, "{\"roster\":[]}");
    }

    #[test]
    fn missing_body_defaults_to_empty() {
        let (method, path, body) = parse_request("GET /api/health HTTP/1.1\r\n\r\n");
        assert_eq!(method, "GET");
        assert_eq!(path, "/api/health");
        assert_eq!(body, "");
    }
}
