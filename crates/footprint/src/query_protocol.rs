//! Query protocol types for the `--query` headless mode.
//!
//! Defines the JSON command/response envelope that external programs (scripts,
//! web front-ends, test harnesses) use to request calculations over
//! newline-delimited JSON on stdin/stdout.
//!
//! These types live in the `footprint` crate so they can be unit-tested
//! without pulling in the app binary. The I/O loop lives in
//! `crates/app/src/query_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::calculator::{calculate, compare_to_average, AverageComparison, FootprintResult};
use crate::emission_factors::{EmissionFactorTable, EmissionFactors};
use crate::error::FootprintError;
use crate::inputs::{InputField, UserInputs};

// ---------------------------------------------------------------------------
// Commands (stdin → calculator)
// ---------------------------------------------------------------------------

/// A single command read from one line of stdin. The `cmd` field is the tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd")]
pub enum QueryCommand {
    /// Calculate the annual footprint for `inputs` in `region`.
    #[serde(rename = "calculate")]
    Calculate { region: String, inputs: UserInputs },

    /// List every loaded region with its factors.
    #[serde(rename = "regions")]
    Regions,

    /// End the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (calculator → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Client-error categories. A network front-end maps all of them to 4xx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnknownRegion,
    InvalidInput,
    ParseError,
}

/// One region as listed by the `regions` command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionEntry {
    pub name: String,
    #[serde(flatten)]
    pub factors: EmissionFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// The calculator is ready to accept commands.
    #[serde(rename = "ready")]
    Ready,

    /// A successful calculation.
    #[serde(rename = "footprint")]
    Footprint {
        region: String,
        result: FootprintResult,
        #[serde(skip_serializing_if = "Option::is_none")]
        comparison: Option<AverageComparison>,
    },

    /// Response to `regions`.
    #[serde(rename = "regions")]
    Regions { regions: Vec<RegionEntry> },

    /// The command was rejected. `field`, `min` and `max` are set for
    /// out-of-range inputs.
    #[serde(rename = "error")]
    Error {
        kind: ErrorKind,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        field: Option<InputField>,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },

    /// The session is ending (response to `quit`).
    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Wraps a payload with the current protocol version.
pub fn make_response(payload: ResponsePayload) -> QueryResponse {
    QueryResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

impl From<&FootprintError> for ResponsePayload {
    fn from(err: &FootprintError) -> Self {
        match err {
            FootprintError::UnknownRegion { .. } => ResponsePayload::Error {
                kind: ErrorKind::UnknownRegion,
                message: err.to_string(),
                field: None,
                min: None,
                max: None,
            },
            FootprintError::InvalidInput {
                field, min, max, ..
            } => ResponsePayload::Error {
                kind: ErrorKind::InvalidInput,
                message: err.to_string(),
                field: Some(*field),
                min: Some(*min),
                max: Some(*max),
            },
        }
    }
}

/// Parses one line of input into a command, or into the error response that
/// should be sent back.
pub fn parse_command(line: &str) -> Result<QueryCommand, QueryResponse> {
    serde_json::from_str(line).map_err(|e| {
        make_response(ResponsePayload::Error {
            kind: ErrorKind::ParseError,
            message: format!("Parse error: {e}"),
            field: None,
            min: None,
            max: None,
        })
    })
}

/// Executes a command against `table`. Pure: no I/O, no mutation.
pub fn process_command(table: &EmissionFactorTable, cmd: QueryCommand) -> QueryResponse {
    match cmd {
        QueryCommand::Calculate { region, inputs } => match calculate(table, &region, &inputs) {
            Ok(result) => {
                let comparison = table
                    .lookup(&region)
                    .ok()
                    .and_then(|factors| compare_to_average(&result, factors));
                make_response(ResponsePayload::Footprint {
                    region,
                    result,
                    comparison,
                })
            }
            Err(err) => make_response((&err).into()),
        },

        QueryCommand::Regions => {
            let regions = table
                .iter()
                .map(|(name, factors)| RegionEntry {
                    name: name.to_string(),
                    factors: *factors,
                })
                .collect();
            make_response(ResponsePayload::Regions { regions })
        }

        QueryCommand::Quit => make_response(ResponsePayload::Goodbye),
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
