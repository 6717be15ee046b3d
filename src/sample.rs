//! Generated messages and clients for `proto/sample.proto`, plus the contract
//! fixtures used by the scenarios.

use std::path::{Path, PathBuf};

use serde_json::json;

tonic::include_proto!("_");

pub use broken_sample_service_client::BrokenSampleServiceClient;
pub use working_sample_service_client::WorkingSampleServiceClient;

/// Absolute path of the proto file the contracts point at.
pub fn sample_proto_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("proto/sample.proto")
}

/// Contract for `WorkingSampleService/GetSample`: a single enum value.
pub fn working_interaction(proto_path: &Path) -> String {
    json!({
        "pact:proto": proto_path.to_string_lossy(),
        "pact:proto-service": "WorkingSampleService/GetSample",
        "pact:content-type": "application/protobuf",
        "request": {
            "type": "notEmpty('TYPE1')"
        },
        "response": {
            "ok": "matching(boolean, true)"
        }
    })
    .to_string()
}

/// Contract for `BrokenSampleService/GetSample`: the same value inside a repeated field.
pub fn broken_interaction(proto_path: &Path) -> String {
    json!({
        "pact:proto": proto_path.to_string_lossy(),
        "pact:proto-service": "BrokenSampleService/GetSample",
        "pact:content-type": "application/protobuf",
        "request": {
            "type": [
                "notEmpty('TYPE1')"
            ]
        },
        "response": {
            "ok": "matching(boolean, true)"
        }
    })
    .to_string()
}

/// Contract where the provider answers `WorkingSampleService/GetSample` with a gRPC
/// status instead of a message.
pub fn unimplemented_interaction(proto_path: &Path, message: &str) -> String {
    json!({
        "pact:proto": proto_path.to_string_lossy(),
        "pact:proto-service": "WorkingSampleService/GetSample",
        "pact:content-type": "application/protobuf",
        "request": {
            "type": "notEmpty('TYPE2')"
        },
        "responseMetadata": {
            "grpc-status": "UNIMPLEMENTED",
            "grpc-message": message
        }
    })
    .to_string()
}
