// web_app/api/mod.rs - Access to the recommendation endpoint
//
// The widgets talk to exactly one remote endpoint. This module owns the HTTP
// request, the JSON decoding and the error taxonomy for that call.

pub mod client;

pub use client::{FetchError, RecommendationClient, FETCH_FAILED_MESSAGE};
