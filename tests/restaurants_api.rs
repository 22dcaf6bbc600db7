//! HTTP-level tests for the restaurant endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, count_rows, delete, get, post_json};
use pizza_api::RestaurantPizzaRepo;
use serde_json::json;

#[tokio::test]
async fn list_restaurants_returns_projection_only() {
    let app = common::build_test_app(common::seeded_pool().await);
    let response = get(app, "/restaurants").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!([
            {"id": 1, "name": "Karen's Pizza Shack", "address": "address1"},
            {"id": 2, "name": "Sanjay's Pizza", "address": "address2"},
            {"id": 3, "name": "Kiki's Pizza", "address": "address3"}
        ])
    );
}

#[tokio::test]
async fn list_restaurants_on_empty_store_is_empty_array() {
    let app = common::build_test_app(common::empty_pool().await);
    let response = get(app, "/restaurants").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn get_restaurant_embeds_restaurant_pizzas() {
    let app = common::build_test_app(common::seeded_pool().await);
    let response = get(app, "/restaurants/2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(
        json,
        json!({
            "id": 2,
            "name": "Sanjay's Pizza",
            "address": "address2",
            "restaurant_pizzas": [{
                "id": 2,
                "price": 4.0,
                "pizza_id": 2,
                "restaurant_id": 2,
                "pizza": {
                    "id": 2,
                    "name": "Geri",
                    "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"
                }
            }]
        })
    );
}

#[tokio::test]
async fn get_restaurant_lists_repeated_pairings_in_order() {
    let pool = common::seeded_pool().await;
    for price in [10, 0] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            "/restaurant_pizzas",
            json!({"price": price, "restaurant_id": 1, "pizza_id": 3}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let json = body_json(get(common::build_test_app(pool), "/restaurants/1").await).await;
    let items = json["restaurant_pizzas"].as_array().unwrap();
    let ids: Vec<i64> = items.iter().map(|i| i["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [1, 4, 5]);
    assert_eq!(items[1]["pizza"]["name"], "Melanie");
    assert_eq!(items[2]["price"], 0.0);
}

#[tokio::test]
async fn get_missing_restaurant_returns_404() {
    let app = common::build_test_app(common::seeded_pool().await);
    let response = get(app, "/restaurants/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Restaurant not found"}));
}

#[tokio::test]
async fn non_integer_id_is_rejected_by_router() {
    let app = common::build_test_app(common::seeded_pool().await);
    let response = get(app, "/restaurants/abc").await;
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn delete_restaurant_cascades_to_restaurant_pizzas() {
    let pool = common::seeded_pool().await;

    let response = delete(common::build_test_app(pool.clone()), "/restaurants/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());

    let response = get(common::build_test_app(pool.clone()), "/restaurants/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let orphans = RestaurantPizzaRepo::find_by_restaurant(&pool, 1).await.unwrap();
    assert!(orphans.is_empty());
    assert_eq!(count_rows(&pool, "restaurants").await, 2);
    assert_eq!(count_rows(&pool, "restaurant_pizzas").await, 2);
    // Pizzas are never deleted with a restaurant.
    assert_eq!(count_rows(&pool, "pizzas").await, 3);
}

#[tokio::test]
async fn delete_missing_restaurant_returns_404_and_changes_nothing() {
    let pool = common::seeded_pool().await;
    let response = delete(common::build_test_app(pool.clone()), "/restaurants/42").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({"error": "Restaurant not found"}));
    assert_eq!(count_rows(&pool, "restaurants").await, 3);
    assert_eq!(count_rows(&pool, "restaurant_pizzas").await, 3);
}

#[tokio::test]
async fn deleting_twice_returns_404_the_second_time() {
    let pool = common::seeded_pool().await;
    let first = delete(common::build_test_app(pool.clone()), "/restaurants/3").await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let second = delete(common::build_test_app(pool), "/restaurants/3").await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}
