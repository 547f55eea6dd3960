//! Core types for crime-proxy

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::openapi::{ObjectBuilder, RefOr, Schema, SchemaType};
use utoipa::ToSchema;

/// A single reported incident as published by the upstream provider.
///
/// Nothing here is validated locally. The documented fields are kept as raw
/// JSON, so a mistyped value or an explicit `null` is forwarded as received.
/// A field the provider leaves out stays `None` and is left out again.
/// Any other key ends up in `extra` and is forwarded unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CrimeEvent {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub location: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub headline: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub published: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub image: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A key that is present maps to `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl<'s> ToSchema<'s> for CrimeEvent {
    fn schema() -> (&'s str, RefOr<Schema>) {
        let string = || ObjectBuilder::new().schema_type(SchemaType::String);
        let schema: RefOr<Schema> = ObjectBuilder::new()
            .description(Some(
                "Crime event as published by Brottsplatskartan; further provider fields are passed through",
            ))
            .property("id", ObjectBuilder::new().schema_type(SchemaType::Integer))
            .property("title", string())
            .property("location", string())
            .property("headline", string())
            .property("description", string())
            .property("published", string())
            .property("image", string())
            .property("link", string())
            .into();

        ("CrimeEvent", schema)
    }
}

/// Body returned by the upstream events endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct EventsEnvelope {
    pub data: Vec<CrimeEvent>,
}

/// Headlines in upstream order; events without one keep their slot as `null`.
pub fn headlines(events: Vec<CrimeEvent>) -> Vec<Value> {
    events
        .into_iter()
        .map(|event| event.headline.unwrap_or(Value::Null))
        .collect()
}

/// The most recent event, i.e. the first one the provider lists.
pub fn latest(events: Vec<CrimeEvent>) -> Option<CrimeEvent> {
    events.into_iter().next()
}
