// src/presentation/http/extractors.rs
//
// Actor identity arrives from the auth gateway as trusted x-actor-*
// headers; this service never authenticates sessions itself. Absent or
// malformed headers degrade to an anonymous actor rather than rejecting.
use std::convert::Infallible;
use std::str::FromStr;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use headers::{HeaderMapExt, UserAgent};

use crate::application::dto::{ActorContext, ClientInfo};
use crate::domain::staff::{ActorId, Role};

#[derive(Debug, Clone)]
pub struct MaybeActor(pub Option<ActorContext>);

#[derive(Debug, Clone)]
pub struct ClientDetails(pub ClientInfo);

impl<S> FromRequestParts<S> for MaybeActor
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(actor_from_headers(&parts.headers)))
    }
}

impl<S> FromRequestParts<S> for ClientDetails
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let ip_address = header_str(&parts.headers, "x-forwarded-for")
            .map(|raw| raw.split(',').next().unwrap_or(raw).trim().to_string());
        let user_agent = parts
            .headers
            .typed_get::<UserAgent>()
            .map(|ua| ua.to_string());

        Ok(Self(ClientInfo {
            ip_address,
            user_agent,
        }))
    }
}

fn actor_from_headers(headers: &HeaderMap) -> Option<ActorContext> {
    let id = header_str(headers, "x-actor-id")
        .and_then(|raw| raw.parse::<i64>().ok())
        .and_then(|raw| ActorId::new(raw).ok());
    let email = header_str(headers, "x-actor-email").map(str::to_string);
    let display_name = header_str(headers, "x-actor-name").map(str::to_string);
    let role = header_str(headers, "x-actor-role").and_then(|raw| Role::from_str(raw).ok());

    if id.is_none() && email.is_none() && display_name.is_none() && role.is_none() {
        return None;
    }

    Some(ActorContext {
        id,
        email,
        display_name,
        role,
    })
}

fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> Option<&'h str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
