mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use common::{body_bytes, body_json, TestApp};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn created_pet_includes_derived_fields() -> Result<()> {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let pet_id = app.create_pet(owner, "Rex", "dog", 3).await?;

    let pet = app.show_pet(&pet_id).await?;
    assert_eq!(pet["name"], "Rex");
    assert_eq!(pet["type"], "dog");
    assert_eq!(pet["adoptable"], false);
    assert_eq!(pet["age"], json!(3));
    assert_eq!(pet["owner"], owner.to_string());
    assert_eq!(pet["fullTitle"], "Rex the dog");
    assert_eq!(pet["isABaby"], "Yeah, theyre just a baby");
    assert_eq!(pet["toys"], json!([]));
    assert!(pet["createdAt"].is_string());
    Ok(())
}

#[tokio::test]
async fn is_a_baby_variants_by_age() -> Result<()> {
    let app = TestApp::new();
    let owner = Uuid::new_v4();

    let cases = [
        (3, "Yeah, theyre just a baby"),
        (7, "Not really a baby, but like, still a baby"),
        (15, "A good old pet(definitely still a baby)"),
    ];
    for (age, expected) in cases {
        let pet_id = app.create_pet(owner, "Tom", "cat", age).await?;
        assert_eq!(app.show_pet(&pet_id).await?["isABaby"], expected);
    }
    Ok(())
}

#[tokio::test]
async fn creating_a_pet_requires_a_token() -> Result<()> {
    let app = TestApp::new();
    let res = app
        .send(
            Method::POST,
            "/pets",
            None,
            Some(json!({ "pet": { "name": "Rex", "type": "dog", "age": 3 } })),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = app
        .send(
            Method::POST,
            "/pets",
            Some("not-a-jwt"),
            Some(json!({ "pet": { "name": "Rex", "type": "dog", "age": 3 } })),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty().await);
    Ok(())
}

#[tokio::test]
async fn invalid_pet_is_422_naming_fields() -> Result<()> {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let res = app
        .send(
            Method::POST,
            "/pets",
            Some(&token),
            Some(json!({ "pet": { "name": "", "age": "old" } })),
        )
        .await?;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(res).await?;
    for field in ["name", "type", "age"] {
        assert!(body["field_errors"].get(field).is_some(), "missing {}: {}", field, body);
    }
    Ok(())
}

#[tokio::test]
async fn missing_or_malformed_pet_id_is_bodiless_404() -> Result<()> {
    let app = TestApp::new();
    for uri in [format!("/pets/{}", Uuid::new_v4()), "/pets/not-an-id".to_string()] {
        let res = app.send(Method::GET, &uri, None, None).await?;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert!(body_bytes(res).await?.is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn malformed_pet_body_is_422() -> Result<()> {
    let app = TestApp::new();
    let token = app.token_for(Uuid::new_v4());
    let res = app.send_raw(Method::POST, "/pets", Some(&token), "{not json").await?;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body_json(res).await?["field_errors"]["body"].is_string());
    assert!(app.store.is_empty().await);
    Ok(())
}
