//! Suggestion requests and reply parsing.

use serde::{Deserialize, Serialize};

use crate::search::SearchResult;

use super::error::AiError;
use super::prompts::{destination_prompt, travel_plan_prompt};
use super::TextGenerator;

/// At most this many destination suggestions are kept.
pub const MAX_DESTINATION_SUGGESTIONS: usize = 3;

/// Free-text travel ideas for a booked trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTravelSuggestion {
    pub text: String,
}

/// Ask the generator for destinations reachable from `origin_name`.
pub async fn suggest_destinations(
    generator: &dyn TextGenerator,
    origin_name: &str,
) -> Result<Vec<String>, AiError> {
    let reply = generator.generate(&destination_prompt(origin_name)).await?;
    Ok(parse_destinations(&reply))
}

/// Ask the generator what to do at the destination of a booked shuttle.
pub async fn suggest_travel_plan(
    generator: &dyn TextGenerator,
    booked: &SearchResult,
) -> Result<AiTravelSuggestion, AiError> {
    let text = generator.generate(&travel_plan_prompt(booked)).await?;
    Ok(AiTravelSuggestion { text })
}

/// Split a comma-separated reply into trimmed, non-empty names, keeping
/// the first three.
pub fn parse_destinations(reply: &str) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_DESTINATION_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}
