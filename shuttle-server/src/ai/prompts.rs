//! Prompt text for the suggestion features.

use crate::search::SearchResult;

/// Ask for three destinations reachable by shuttle from `origin_name`.
pub fn destination_prompt(origin_name: &str) -> String {
    format!(
        "You are a helpful travel assistant for Himalayan Shuttle.
A traveler is starting their journey from \"{origin_name}\" in the Indian Himalayas.
Suggest three popular and relevant destinations they could travel to by shuttle from this starting point.
Return only the destination names, separated by commas. For example: Destination One, Destination Two, Destination Three.
Do not include the starting location in the suggestions. Ensure suggestions are distinct and suitable for shuttle travel in that region."
    )
}

/// Ask for two or three things to do at the destination of a booked shuttle.
pub fn travel_plan_prompt(booked: &SearchResult) -> String {
    let to = &booked.to_name;
    format!(
        "You are a Himalayan travel expert. A user has just booked a shuttle:
From: {from}
To: {to}
Date: {date}
Shuttle Type: {shuttle}
Booking Type: {mode}

Suggest 2-3 interesting things to do or see in or around the destination \"{to}\", considering they are arriving by shuttle.
Focus on activities that are reasonably accessible. Keep the suggestions concise and inspiring.
Example: \"Explore the local market near {to} for unique handicrafts. Or, consider a short trek to a nearby viewpoint for stunning vistas.\"",
        from = booked.from_name,
        date = booked.journey_date,
        shuttle = booked.shuttle_type_name,
        mode = booked.booking_type,
    )
}
