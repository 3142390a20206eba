mod common;

use axum::http::{Method, StatusCode};
use common::{context, router, send, send_raw, sequential_context};
use grubdash_backend_rs::{modules::dish::repository::Dish, utils::seed::Seed};
use serde_json::{json, Value};

fn seeded() -> Seed {
    Seed {
        dishes: vec![Dish {
            id: String::from("d1"),
            name: String::from("Falafel and tahini bagel"),
            description: String::from("A warm bagel filled with falafel and tahini"),
            price: 6,
            image_url: String::from("https://images.example.com/bagel.jpg"),
        }],
        orders: vec![],
    }
}

fn new_dish() -> Value {
    json!({
        "name": "Half-baked cookies",
        "description": "Warm, gooey chocolate chip cookies",
        "price": 9,
        "image_url": "https://images.example.com/cookies.jpg"
    })
}

#[tokio::test]
async fn should_list_seeded_dishes() {
    let ctx = context(seeded());
    let app = router(&ctx);

    let (status, body) = send(&app, Method::GET, "/dishes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["id"], "d1");
    assert_eq!(body["data"][0]["image_url"], "https://images.example.com/bagel.jpg");
}

#[tokio::test]
async fn should_create_dish_with_generated_id() {
    let ctx = sequential_context(Seed::default());
    let app = router(&ctx);

    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": new_dish() }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], "id-1");
    assert_eq!(body["data"]["name"], "Half-baked cookies");
    assert_eq!(body["data"]["price"], 9);

    let (_, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": new_dish() }))).await;
    assert_eq!(body["data"]["id"], "id-2");

    assert_eq!(ctx.dishes.lock().await.len(), 2);
}

#[tokio::test]
async fn should_ignore_client_supplied_id_on_create() {
    let ctx = context(Seed::default());
    let app = router(&ctx);

    let mut dish = new_dish();
    dish["id"] = json!("chosen-by-client");

    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": dish }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["data"]["id"], "chosen-by-client");
}

#[tokio::test]
async fn should_reject_create_missing_each_field() {
    let ctx = context(Seed::default());
    let app = router(&ctx);

    for field in ["name", "description", "price", "image_url"] {
        let mut dish = new_dish();
        dish.as_object_mut().unwrap().remove(field);

        let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": dish }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], format!("Dish must include a {field}"));
    }

    assert!(ctx.dishes.lock().await.is_empty());
}

#[tokio::test]
async fn should_treat_missing_data_envelope_as_missing_fields() {
    let ctx = context(Seed::default());
    let app = router(&ctx);

    let (status, body) = send(&app, Method::POST, "/dishes", Some(new_dish())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dish must include a name");
}

#[tokio::test]
async fn should_validate_price() {
    let ctx = context(Seed::default());
    let app = router(&ctx);

    let mut dish = new_dish();
    dish["price"] = json!(0);
    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": dish }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Dish must include a price");

    for price in [json!(-1), json!("17")] {
        let mut dish = new_dish();
        dish["price"] = price;

        let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": dish }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "Dish must have a price that is an integer greater than 0"
        );
    }

    let mut dish = new_dish();
    dish["price"] = json!(1);
    let (status, body) = send(&app, Method::POST, "/dishes", Some(json!({ "data": dish }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], 1);
}

#[tokio::test]
async fn should_read_dish_by_id() {
    let ctx = context(seeded());
    let app = router(&ctx);

    let (status, body) = send(&app, Method::GET, "/dishes/d1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Falafel and tahini bagel");

    let (status, body) = send(&app, Method::GET, "/dishes/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Dish with id missing not found");
}

#[tokio::test]
async fn should_update_dish_in_place() {
    let ctx = context(seeded());
    let app = router(&ctx);

    let mut dish = new_dish();
    dish["id"] = json!("d1");

    let (status, body) = send(&app, Method::PUT, "/dishes/d1", Some(json!({ "data": dish }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "d1");
    assert_eq!(body["data"]["name"], "Half-baked cookies");

    let (status, body) = send(&app, Method::PUT, "/dishes/d1", Some(json!({ "data": new_dish() }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "d1");

    let dishes = ctx.dishes.lock().await;
    assert_eq!(dishes.len(), 1);
    assert_eq!(dishes.find("d1").unwrap().price, 9);
}

#[tokio::test]
async fn should_reject_update_with_mismatched_id() {
    let ctx = context(seeded());
    let app = router(&ctx);

    let mut dish = new_dish();
    dish["id"] = json!("d2");

    let (status, body) = send(&app, Method::PUT, "/dishes/d1", Some(json!({ "data": dish }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Dish id does not match route id. Dish: d2, Route: d1"
    );
}

#[tokio::test]
async fn should_leave_dishes_unchanged_after_rejected_update() {
    let ctx = context(seeded());
    let app = router(&ctx);

    let (_, before) = send(&app, Method::GET, "/dishes", None).await;

    let mut dish = new_dish();
    dish["price"] = json!(-5);
    let (status, _) = send(&app, Method::PUT, "/dishes/d1", Some(json!({ "data": dish }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/dishes/nope", Some(json!({ "data": new_dish() }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let ctx = context(Seed::default());
    let app = router(&ctx);

    let (status, body) = send_raw(&app, Method::POST, "/dishes", "{ not json").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn should_answer_unknown_paths_with_not_found() {
    let ctx = context(Seed::default());
    let app = router(&ctx);

    let (status, body) = send(&app, Method::GET, "/menus", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Path not found: /menus");

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn should_leave_dishes_unchanged_after_rejected_create() {
    let ctx = context(seeded());
    let app = router(&ctx);

    let (_, before) = send(&app, Method::GET, "/dishes", None).await;

    let mut dish = new_dish();
    dish["price"] = json!(-5);
    let (status, _) = send(&app, Method::POST, "/dishes", Some(json!({ "data": dish }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut dish = new_dish();
    dish["name"] = json!("");
    let (status, _) = send(&app, Method::POST, "/dishes", Some(json!({ "data": dish }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, after) = send(&app, Method::GET, "/dishes", None).await;
    assert_eq!(before, after);
}
