//! Session resources.

use bevy::prelude::*;

use crate::calculator::{AverageComparison, FootprintResult};
use crate::constants::DEFAULT_REGION;
use crate::error::FootprintError;
use crate::inputs::UserInputs;

/// What the user has currently entered.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CalculatorInputs {
    /// Selected region name.
    pub region: String,
    pub inputs: UserInputs,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            inputs: UserInputs::default(),
        }
    }
}

/// Outcome of the most recent calculation request.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct FootprintReport {
    /// `None` until the first request has been handled.
    pub outcome: Option<Result<FootprintResult, FootprintError>>,
    /// Region the outcome was calculated for.
    pub region: String,
    /// Only set for a successful outcome in a region with a published average.
    pub comparison: Option<AverageComparison>,
    /// Number of requests handled so far.
    pub calculations: u32,
}

impl FootprintReport {
    /// The latest successful result, if the latest request succeeded.
    pub fn result(&self) -> Option<&FootprintResult> {
        self.outcome.as_ref().and_then(|o| o.as_ref().ok())
    }

    /// The latest error, if the latest request failed.
    pub fn error(&self) -> Option<&FootprintError> {
        self.outcome.as_ref().and_then(|o| o.as_ref().err())
    }
}
