//! Interaction contents handed to the protobuf plugin.
//!
//! The plugin owns matching and verification. This module only checks what can be
//! checked before the plugin is loaded.

use std::path::PathBuf;

use pact_models::content_types::ContentType;
use pact_models::matchingrules::expressions::{
    MatchingRuleDefinition, is_matcher_def, parse_matcher_def,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::{ContractError, Result};

/// Name of the plugin the contracts are written for.
pub const PROTOBUF_PLUGIN: &str = "protobuf";

/// Transport the plugin's mock server is started with.
pub const GRPC_TRANSPORT: &str = "protobuf/transport/grpc";

/// Content types the protobuf plugin registers for.
pub const PROTOBUF_CONTENT_TYPES: [&str; 2] = ["application/protobuf", "application/grpc"];

const PROTO_KEY: &str = "pact:proto";
const SERVICE_KEY: &str = "pact:proto-service";
const CONTENT_TYPE_KEY: &str = "pact:content-type";

#[derive(Debug, Clone)]
pub struct InteractionContents {
    pub proto_file: PathBuf,
    pub service: String,
    pub method: String,
    pub content_type: String,
    body: Value,
}

impl InteractionContents {
    /// Parse and check a contract body
    ///
    /// The proto file must exist, the service selector must be `Service/Method` and
    /// every matcher expression under `request` and `response` must parse.
    pub async fn load(json: &str) -> Result<Self> {
        let body: Value = serde_json::from_str(json)?;
        let fields = body
            .as_object()
            .ok_or_else(|| ContractError::Contract("expected a JSON object".into()))?;

        let proto_file = PathBuf::from(required_str(fields, PROTO_KEY)?);
        let metadata = tokio::fs::metadata(&proto_file)
            .await
            .map_err(|e| ContractError::io(&proto_file, e))?;
        if !metadata.is_file() {
            return Err(ContractError::Contract(format!(
                "{} is not a file",
                proto_file.display()
            )));
        }

        let selector = required_str(fields, SERVICE_KEY)?;
        let (service, method) = selector
            .split_once('/')
            .filter(|(service, method)| {
                !service.is_empty() && !method.is_empty() && !method.contains('/')
            })
            .ok_or_else(|| {
                ContractError::Contract(format!(
                    "'{SERVICE_KEY}' must look like 'Service/Method', got '{selector}'"
                ))
            })?;

        let content_type = fields
            .get(CONTENT_TYPE_KEY)
            .and_then(Value::as_str)
            .unwrap_or(PROTOBUF_CONTENT_TYPES[0]);
        // parameters such as `;message=Foo` are the plugin's business
        let base_type = ContentType::parse(content_type)
            .map(|parsed| parsed.base_type().to_string())
            .map_err(|_| ContractError::UnsupportedContentType(content_type.to_string()))?;
        if !PROTOBUF_CONTENT_TYPES.contains(&base_type.as_str()) {
            return Err(ContractError::UnsupportedContentType(content_type.to_string()));
        }

        let contents = Self {
            proto_file,
            service: service.to_string(),
            method: method.to_string(),
            content_type: content_type.to_string(),
            body,
        };
        let definitions = contents.matcher_definitions()?;
        debug!(
            "contract for {} carries {} matcher expressions",
            contents.selector(),
            definitions.len()
        );
        Ok(contents)
    }

    /// `Service/Method`, as written in the contract.
    pub fn selector(&self) -> String {
        format!("{}/{}", self.service, self.method)
    }

    /// Interaction description, unique per service method.
    pub fn description(&self, prefix: &str) -> String {
        format!("{} {}", prefix, self.selector())
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }

    /// Every matcher expression in the request and response parts, keyed by its
    /// JSON path. Array items get an index, e.g. `$.request.type[0]`.
    pub fn matcher_definitions(&self) -> Result<Vec<(String, MatchingRuleDefinition)>> {
        let mut definitions = Vec::new();
        for part in ["request", "response"] {
            if let Some(value) = self.body.get(part) {
                collect_definitions(&format!("$.{part}"), value, &mut definitions)?;
            }
        }
        Ok(definitions)
    }
}

/// Parse one matcher expression such as `notEmpty('TYPE1')`.
pub fn parse_expression(expression: &str) -> Result<MatchingRuleDefinition> {
    parse_matcher_def(expression).map_err(|e| ContractError::Expression {
        expression: expression.to_string(),
        message: e.to_string(),
    })
}

fn required_str<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    match fields.get(key) {
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(ContractError::Contract(format!(
            "'{key}' must be a non-empty string"
        ))),
        None => Err(ContractError::Contract(format!("'{key}' is missing"))),
    }
}

fn collect_definitions(
    path: &str,
    value: &Value,
    definitions: &mut Vec<(String, MatchingRuleDefinition)>,
) -> Result<()> {
    match value {
        // anything else is a literal example value
        Value::String(expression) if is_matcher_def(expression) => {
            definitions.push((path.to_string(), parse_expression(expression)?));
        }
        Value::Object(fields) => {
            for (name, value) in fields {
                collect_definitions(&format!("{path}.{name}"), value, definitions)?;
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                collect_definitions(&format!("{path}[{index}]"), value, definitions)?;
            }
        }
        _ => {}
    }
    Ok(())
}
