use catalog_core::{ApiError, ApiResult};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::config::app_config;
use crate::session::load_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    fn as_str(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Patch => "PATCH",
            Verb::Delete => "DELETE",
        }
    }
}

fn request(verb: Verb, path: &str) -> RequestBuilder {
    let url = app_config().endpoint(path);
    tracing::debug!("[API] {} {}", verb.as_str(), url);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Patch => Request::patch(&url),
        Verb::Delete => Request::delete(&url),
    };
    match load_session() {
        Some(session) => builder.header("Authorization", &session.bearer()),
        None => builder,
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    tracing::warn!("[API] {} answered {}", response.url(), status);
    Err(ApiError::from_status(status, body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check(response).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn get<T: DeserializeOwned>(path: &str) -> ApiResult<T> {
    let response = request(Verb::Get, path).send().await.map_err(network)?;
    decode(response).await
}

/// Send a JSON body and decode a JSON reply
pub(crate) async fn send_json<T, B>(verb: Verb, path: &str, body: &B) -> ApiResult<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let req = request(verb, path).json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    decode(req.send().await.map_err(network)?).await
}

/// Send a JSON body; the reply body is ignored
pub(crate) async fn send_json_unit<B: Serialize>(verb: Verb, path: &str, body: &B) -> ApiResult<()> {
    let req = request(verb, path).json(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    check(req.send().await.map_err(network)?).await?;
    Ok(())
}

pub(crate) async fn delete(path: &str) -> ApiResult<()> {
    check(request(Verb::Delete, path).send().await.map_err(network)?).await?;
    Ok(())
}

pub(crate) async fn post_form<T: DeserializeOwned>(path: &str, form: FormData) -> ApiResult<T> {
    let req = request(Verb::Post, path).body(form).map_err(network)?;
    decode(req.send().await.map_err(network)?).await
}
