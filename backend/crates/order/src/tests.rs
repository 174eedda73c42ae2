//! Use-case and router tests against the in-memory adapters

mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{OrderId, ProductId, UserId};
    use platform::cache::{CacheStore, InMemoryCache};

    use crate::application::{
        CreateOrderInput, CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase,
        ListOrdersUseCase,
    };
    use crate::error::OrderError;
    use crate::infra::memory::{InMemoryOrderRepository, RecordingPublisher};

    fn input() -> CreateOrderInput {
        CreateOrderInput {
            user_id: UserId::new(1),
            product_ids: vec![ProductId::new(10), ProductId::new(20)],
            quantity: 3,
            total_price: 17.0,
            status: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_publishes_one_event() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let cache = Arc::new(InMemoryCache::new());

        let order = CreateOrderUseCase::new(repo.clone(), publisher.clone(), cache)
            .execute(input())
            .await
            .unwrap();

        assert_eq!(order.id, OrderId::new(1));
        assert!(order.status.is_new());

        let events = publisher.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].order_id, order.id);
        assert_eq!(events[0].user_id, order.user_id);
        assert_eq!(events[0].product_ids, order.product_ids);
        assert_eq!(events[0].quantity, 3);
        assert_eq!(events[0].total_price, 17.0);
    }

    #[tokio::test]
    async fn test_invalid_order_publishes_nothing() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let publisher = Arc::new(RecordingPublisher::new());
        let use_case =
            CreateOrderUseCase::new(repo.clone(), publisher.clone(), Arc::new(InMemoryCache::new()));

        let mut empty = input();
        empty.product_ids.clear();
        assert!(matches!(
            use_case.execute(empty).await,
            Err(OrderError::Validation(_))
        ));

        let mut negative = input();
        negative.total_price = -1.0;
        assert!(matches!(
            use_case.execute(negative).await,
            Err(OrderError::Validation(_))
        ));

        assert!(publisher.events().is_empty());
        assert!(ListOrdersUseCase::new(repo).execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_publisher_does_not_fail_create() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let order = CreateOrderUseCase::new(
            repo.clone(),
            Arc::new(RecordingPublisher::failing()),
            Arc::new(InMemoryCache::new()),
        )
        .execute(input())
        .await
        .unwrap();

        let listed = ListOrdersUseCase::new(repo).execute().await.unwrap();
        assert_eq!(listed, vec![order]);
    }

    #[tokio::test]
    async fn test_unknown_status_is_kept() {
        let mut shipped = input();
        shipped.status = "shipped".to_string();

        let order = CreateOrderUseCase::new(
            Arc::new(InMemoryOrderRepository::new()),
            Arc::new(RecordingPublisher::new()),
            Arc::new(InMemoryCache::new()),
        )
        .execute(shipped)
        .await
        .unwrap();
        assert_eq!(order.status.as_str(), "shipped");
    }

    #[tokio::test]
    async fn test_get_cache_aside_and_delete_invalidation() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let cache = Arc::new(InMemoryCache::new());
        let order = CreateOrderUseCase::new(
            repo.clone(),
            Arc::new(RecordingPublisher::new()),
            cache.clone(),
        )
        .execute(input())
        .await
        .unwrap();

        let get = GetOrderUseCase::new(repo.clone(), cache.clone());
        assert_eq!(get.execute(order.id).await.unwrap(), order);
        assert_eq!(get.execute(order.id).await.unwrap(), order);
        assert_eq!(repo.lookups(), 1);
        assert!(cache.get("order:1").await.unwrap().is_some());

        DeleteOrderUseCase::new(repo.clone(), cache.clone())
            .execute(order.id)
            .await
            .unwrap();
        assert!(cache.is_empty());
        assert!(matches!(
            get.execute(order.id).await,
            Err(OrderError::NotFound(_))
        ));

        // deleting again is fine
        DeleteOrderUseCase::new(repo, cache)
            .execute(order.id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = Arc::new(InMemoryOrderRepository::new());
        let create = CreateOrderUseCase::new(
            repo.clone(),
            Arc::new(RecordingPublisher::new()),
            Arc::new(InMemoryCache::new()),
        );
        for _ in 0..3 {
            create.execute(input()).await.unwrap();
        }

        let ids: Vec<i64> = ListOrdersUseCase::new(repo)
            .execute()
            .await
            .unwrap()
            .iter()
            .map(|o| o.id.get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

mod router_tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use platform::cache::InMemoryCache;

    use crate::infra::memory::{InMemoryOrderRepository, RecordingPublisher};
    use crate::presentation::router::order_router;

    fn app() -> Router {
        order_router(
            InMemoryOrderRepository::new(),
            RecordingPublisher::new(),
            InMemoryCache::new(),
        )
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_order_lifecycle() {
        let app = app();

        let response = app
            .clone()
            .oneshot(post_json(
                "/orders",
                json!({"user_id": 1, "product_ids": [10, 20], "quantity": 3, "total_price": 17.0, "status": "new"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["product_ids"], json!([10, 20]));
        assert_eq!(created["status"], "new");

        let response = app
            .clone()
            .oneshot(Request::get("/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["total_price"], 17.0);

        let response = app
            .clone()
            .oneshot(Request::get("/orders").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(Request::delete("/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::get("/orders/1").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_order_is_400() {
        let response = app()
            .oneshot(post_json(
                "/orders",
                json!({"user_id": 1, "product_ids": [], "quantity": 1, "total_price": 1.0}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "product ids can't be empty");
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
