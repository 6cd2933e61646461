#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, Response, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use pet_toys_api::{auth::generate_jwt, config::AppConfig, database::MemoryPetStore, AppState};

/// An app over an in-memory store, plus the handles tests need to inspect it
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryPetStore>,
    pub config: AppConfig,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(AppConfig::test())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let store = Arc::new(MemoryPetStore::new());
        let router = pet_toys_api::app(AppState::new(config.clone(), store.clone()));
        Self {
            router,
            store,
            config,
        }
    }

    pub fn token_for(&self, user: Uuid) -> String {
        generate_jwt(&self.config.security, user).expect("token")
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Result<Response<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        Ok(self.router.clone().oneshot(request).await?)
    }

    /// Send `body` verbatim, without a Content-Type header
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: &str,
    ) -> Result<Response<Body>> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = builder.body(Body::from(body.to_string()))?;

        Ok(self.router.clone().oneshot(request).await?)
    }

    /// POST /pets as `owner`, returning the new pet's id
    pub async fn create_pet(&self, owner: Uuid, name: &str, kind: &str, age: u32) -> Result<String> {
        let token = self.token_for(owner);
        let res = self
            .send(
                Method::POST,
                "/pets",
                Some(&token),
                Some(json!({ "pet": { "name": name, "type": kind, "age": age } })),
            )
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body = body_json(res).await?;
        Ok(body["pet"]["id"].as_str().expect("pet id").to_string())
    }

    /// POST /toys/:pet_id anonymously, returning the response pet
    pub async fn create_toy(&self, pet_id: &str, toy: Value) -> Result<Value> {
        let res = self
            .send(
                Method::POST,
                &format!("/toys/{}", pet_id),
                None,
                Some(json!({ "toy": toy })),
            )
            .await?;
        assert_eq!(res.status(), StatusCode::CREATED);
        Ok(body_json(res).await?["pet"].clone())
    }

    pub async fn show_pet(&self, pet_id: &str) -> Result<Value> {
        let res = self
            .send(Method::GET, &format!("/pets/{}", pet_id), None, None)
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        Ok(body_json(res).await?["pet"].clone())
    }
}

pub async fn body_bytes(response: Response<Body>) -> Result<Vec<u8>> {
    Ok(response.into_body().collect().await?.to_bytes().to_vec())
}

pub async fn body_json(response: Response<Body>) -> Result<Value> {
    let bytes = body_bytes(response).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
