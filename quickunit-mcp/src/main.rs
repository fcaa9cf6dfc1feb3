//! quickunit MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdio. Logs go to stderr.
//!
//! Tools:
//! - quick_convert: Convert with the quick table (length, temperature)
//! - mini_convert: Convert with a category's mini table
//! - list_conversions: List supported pairs and formulas

mod config;
mod tools;

use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use quickunit_core::ErrorReport;
use config::Config;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "quickunit";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[serde(default)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
pub struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    /// Protocol error whose `data` is the structured report
    fn with_report(code: i32, report: ErrorReport) -> Self {
        McpError {
            code,
            message: report.message.clone(),
            data: serde_json::to_value(&report).ok(),
        }
    }

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::with_report(-32700, ErrorReport::parse_error(details))
    }

    pub fn invalid_request(details: impl Into<String>) -> Self {
        Self::with_report(-32600, ErrorReport::invalid_request(details))
    }

    pub fn method_not_found(method: &str) -> Self {
        McpError { code: -32601, message: format!("Method not found: {}", method), data: None }
    }

    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::with_report(-32602, ErrorReport::invalid_params(details))
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::with_report(-32603, ErrorReport::internal(details))
    }
}

impl McpResponse {
    fn new(id: Option<JsonValue>, result: Result<JsonValue, McpError>) -> Self {
        match result {
            Ok(r) => McpResponse {
                jsonrpc: "2.0".to_string(),
                id,
                result: Some(r),
                error: None,
            },
            Err(e) => McpResponse {
                jsonrpc: "2.0".to_string(),
                id,
                result: None,
                error: Some(e),
            },
        }
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let config = Config::from_env();
    init_tracing(&config);

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "quickunit MCP server started");
    info!(default_table = config.default_table.name(), "server ready, waiting for requests");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = process_line(&config, &line) else {
                    continue;
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response) {
                    error!(error = %e, "failed to write response");
                    break;
                }
                if let Err(e) = stdout.flush() {
                    error!(error = %e, "failed to flush stdout");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("server shutting down");
}

/// Handle one input line; `None` when nothing should be written back
fn process_line(config: &Config, line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    debug!(bytes = line.len(), "received");

    let value = match serde_json::from_str::<JsonValue>(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "failed to parse request");
            let response = McpResponse::new(None, Err(McpError::parse_error(e.to_string())));
            return serde_json::to_string(&response).ok();
        }
    };

    // Well-formed JSON that is not a request still answers to its id
    let id = value.get("id").filter(|id| !id.is_null()).cloned();

    let response = match serde_json::from_value::<McpRequest>(value) {
        Ok(request) => {
            if request.jsonrpc != "2.0" {
                warn!(jsonrpc = %request.jsonrpc, "unexpected jsonrpc version");
            }
            debug!(method = %request.method, "processing");
            let response = handle_request(config, &request);

            // Notifications (no id) do not get a response
            if request.id.is_none() {
                debug!(method = %request.method, "notification processed");
                return None;
            }
            response
        }
        Err(e) => {
            warn!(error = %e, "invalid request");
            McpResponse::new(id, Err(McpError::invalid_request(e.to_string())))
        }
    };

    match serde_json::to_string(&response) {
        Ok(json) => Some(json),
        Err(e) => {
            error!(error = %e, "failed to serialize response");
            let fallback = McpResponse::new(
                response.id,
                Err(McpError::internal("Failed to serialize response")),
            );
            serde_json::to_string(&fallback).ok()
        }
    }
}

fn handle_request(config: &Config, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => tools::handle_tools_list(),
        "tools/call" => tools::handle_tool_call(config, &request.params),

        _ => Err(McpError::method_not_found(&request.method)),
    };

    McpResponse::new(request.id.clone(), result)
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Use client's protocol version for compatibility
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit conversion for length, area, volume, temperature and mass"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use quick_convert for length and temperature, mini_convert with a category for area, volume and mass. Results are rounded to 4 decimal places. Use list_conversions to see which unit pairs each converter supports."
    }))
}
