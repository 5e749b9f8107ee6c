mod common;

use chrono::{TimeZone, Utc};
use common::MockServer;
use tcgcollector_api::Request;
use tcgcollector_api::endpoints::card_lists::NewCardListEntry;
use tcgcollector_api::endpoints::collections::NewCollection;

const EMPTY_PAGE: &str = r#"{"items":[],"itemCount":0,"totalItemCount":0,"page":1,"pageCount":0}"#;

const CARD: &str = r#"{
    "id": 58,
    "setId": 1,
    "name": "Pikachu",
    "number": "58/102",
    "rarity": "Common",
    "imageUrl": "https://example.com/pikachu.png",
    "createdAt": "2024-01-01T00:00:00Z",
    "updatedAt": "2024-01-01T00:00:00Z",
    "description": "Mouse Pokemon"
}"#;

#[tokio::test]
async fn users_with_missing_fields_decode() {
    let body = r#"{
        "items": [
            {
                "id": 1,
                "username": "testuser",
                "email": "test@example.com",
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z"
            }
        ],
        "itemCount": 1,
        "totalItemCount": 1,
        "page": 1,
        "pageCount": 1
    }"#;
    let server = MockServer::start(200, body).await;

    let users = server
        .client()
        .send(Request::users().list().page(1).page_size(10).search("test"))
        .await
        .unwrap();

    assert_eq!(users.items.len(), 1);
    let user = &users.items[0];
    assert_eq!(user.id, 1);
    assert_eq!(user.display_name, "");
    assert!(!user.is_admin);
    assert_eq!(user.premium_start_date_time, None);
    assert_eq!(user.last_visit_date_time, chrono::DateTime::<Utc>::default());

    let request = server.single_request();
    assert_eq!(request.path, "/api/users");
    assert_eq!(
        request.query.as_deref(),
        Some("page=1&pageSize=10&search=test")
    );
}

#[tokio::test]
async fn card_filters_become_query_parameters() {
    let server = MockServer::start(200, EMPTY_PAGE).await;

    let page = server
        .client()
        .send(Request::cards().list().set_id(3).rarity("Rare").page(1))
        .await
        .unwrap();

    assert!(page.is_empty());
    let request = server.single_request();
    assert_eq!(request.path, "/api/cards");
    assert_eq!(request.query.as_deref(), Some("setId=3&rarity=Rare&page=1"));
}

#[tokio::test]
async fn unfiltered_list_sends_no_query_string() {
    let server = MockServer::start(200, EMPTY_PAGE).await;

    server
        .client()
        .send(Request::collections().list())
        .await
        .unwrap();

    let request = server.single_request();
    assert_eq!(request.path, "/api/collections");
    assert_eq!(request.query, None);
}

#[tokio::test]
async fn zero_page_is_still_sent() {
    let server = MockServer::start(200, EMPTY_PAGE).await;

    server
        .client()
        .send(Request::catalog().tcg_regions().page(0).page_size(25))
        .await
        .unwrap();

    let request = server.single_request();
    assert_eq!(request.path, "/api/tcg-regions");
    assert_eq!(request.query.as_deref(), Some("page=0&pageSize=25"));
}

#[tokio::test]
async fn set_release_date_filter_is_rfc3339() {
    let server = MockServer::start(200, EMPTY_PAGE).await;
    let date = Utc.with_ymd_and_hms(1999, 1, 9, 0, 0, 0).unwrap();

    server
        .client()
        .send(Request::sets().list().release_date(date))
        .await
        .unwrap();

    let request = server.single_request();
    assert_eq!(
        request.query.as_deref(),
        Some("releaseDate=1999-01-09T00%3A00%3A00Z")
    );
}

#[tokio::test]
async fn get_card_decodes_record() {
    let server = MockServer::start(200, CARD).await;

    let card = server.client().send(Request::cards().get(58)).await.unwrap();

    assert_eq!(card.name, "Pikachu");
    assert_eq!(card.number, "58/102");
    assert_eq!(server.single_request().path, "/api/cards/58");
}

#[tokio::test]
async fn set_cards_use_paginated_envelope() {
    let body = format!(
        r#"{{"items":[{CARD}],"itemCount":1,"totalItemCount":102,"page":1,"pageCount":102}}"#
    );
    let server = MockServer::start(200, &body).await;

    let page = server.client().send(Request::sets().cards(1)).await.unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_item_count, 102);
    assert_eq!(page.next_page(), Some(2));
    assert_eq!(server.single_request().path, "/api/sets/1/cards");
}

#[tokio::test]
async fn create_collection_posts_json() {
    let body = r#"{
        "id": 11,
        "userId": 1,
        "name": "Base Set",
        "description": "",
        "isPublic": true,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;
    let server = MockServer::start(201, body).await;

    let collection = server
        .client()
        .send(Request::collections().create("Base Set").is_public(true))
        .await
        .unwrap();

    assert_eq!(collection.id, 11);
    let request = server.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/collections");
    assert_eq!(
        request.json(),
        serde_json::json!({ "name": "Base Set", "description": "", "isPublic": true })
    );
}

#[tokio::test]
async fn update_collection_puts_to_resource() {
    let body = r#"{
        "id": 11,
        "userId": 1,
        "name": "Jungle",
        "description": "",
        "isPublic": false,
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z"
    }"#;
    let server = MockServer::start(200, body).await;

    server
        .client()
        .send(Request::collections().update(11, NewCollection::new("Jungle")))
        .await
        .unwrap();

    let request = server.single_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.path, "/api/collections/11");
}

#[tokio::test]
async fn remove_collection_card_deletes_nested_resource() {
    let server = MockServer::start(204, "").await;

    server
        .client()
        .send(Request::collections().remove_card(11, 58))
        .await
        .unwrap();

    let request = server.single_request();
    assert_eq!(request.method, "DELETE");
    assert_eq!(request.path, "/api/collections/11/cards/58");
}

#[tokio::test]
async fn bulk_replace_sends_entry_array() {
    let server = MockServer::start(200, "").await;
    let entries = vec![
        NewCardListEntry {
            card_id: 1,
            quantity: 4,
        },
        NewCardListEntry {
            card_id: 2,
            quantity: 1,
        },
    ];

    server
        .client()
        .send(Request::card_lists().replace_entries(7, entries))
        .await
        .unwrap();

    let request = server.single_request();
    assert_eq!(request.path, "/api/card-lists/7/entries/bulk-replace");
    assert_eq!(
        request.json(),
        serde_json::json!([
            { "cardId": 1, "quantity": 4 },
            { "cardId": 2, "quantity": 1 }
        ])
    );
}

#[tokio::test]
async fn catalog_lookup_decodes_plain_array() {
    let body = r#"[{
        "id": 1,
        "code": "USD",
        "name": "US Dollar",
        "symbol": "$",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }]"#;
    let server = MockServer::start(200, body).await;

    let currencies = server
        .client()
        .send(Request::catalog().currencies())
        .await
        .unwrap();

    assert_eq!(currencies.len(), 1);
    assert_eq!(currencies[0].symbol, "$");
    assert_eq!(server.single_request().path, "/api/currencies");
}

#[tokio::test]
async fn news_posts_use_items_and_total() {
    let body = r#"{"items":[],"total":0}"#;
    let server = MockServer::start(200, body).await;

    let posts = server
        .client()
        .send(Request::news_posts().list().page_size(5))
        .await
        .unwrap();

    assert_eq!(posts.total, 0);
    assert_eq!(server.single_request().query.as_deref(), Some("pageSize=5"));
}

#[tokio::test]
async fn scalar_results_decode_into_wrappers() {
    let server = MockServer::start(200, r#"{"count":42}"#).await;
    let count = server.client().send(Request::users().count()).await.unwrap();
    assert_eq!(count.count, 42);
    assert_eq!(server.single_request().path, "/api/users/count");

    let server = MockServer::start(200, r#"{"token":"abc123"}"#).await;
    let token = server
        .client()
        .send(Request::users().generate_api_access_token(3))
        .await
        .unwrap();
    assert_eq!(token.token, "abc123");
    let request = server.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/users/3/generate-api-access-token");
}

#[tokio::test]
async fn logout_ignores_response_body() {
    let server = MockServer::start(200, "not json at all").await;

    server.client().send(Request::auth().logout()).await.unwrap();

    let request = server.single_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/api/auth/logout");
    assert!(request.body.is_empty());
}

#[tokio::test]
async fn image_upload_is_base64_encoded() {
    let body = r#"{
        "id": 1,
        "url": "https://example.com/1.png",
        "contentType": "image/png",
        "size": 3,
        "width": 1,
        "height": 1,
        "sizes": [],
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z"
    }"#;
    let server = MockServer::start(201, body).await;

    let image = server
        .client()
        .send(Request::images().create(b"PNG".to_vec()))
        .await
        .unwrap();

    assert_eq!(image.content_type, "image/png");
    assert_eq!(server.single_request().json(), serde_json::json!({ "file": "UE5H" }));
}

#[tokio::test]
async fn base_url_path_is_replaced_by_absolute_endpoint() {
    let server = MockServer::start(200, EMPTY_PAGE).await;
    let client = tcgcollector_api::Client::builder(common::API_KEY)
        .base_url(&format!("{}/ignored/", server.url()))
        .build();

    client.send(Request::references().cards()).await.unwrap();

    assert_eq!(server.single_request().path, "/api/card-references");
}
