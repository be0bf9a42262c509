//! 端到端测试：真实服务器 + 真实 HTTP 客户端

use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;

use product_catalog::app::catalog::handler::router;
use product_catalog::app::catalog::model::sample_products;
use product_catalog::app::catalog::store::ProductStore;
use product_catalog::client::api::{ApiError, HttpProductApi, ProductApi};
use product_catalog::client::controller::{LoadState, ProductListController};

/// 在随机端口上启动服务器，返回 API 基础地址
async fn spawn_server() -> String {
    let store = Arc::new(Mutex::new(ProductStore::new(sample_products())));
    let app = router(store);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/api", addr)
}

#[tokio::test]
async fn test_full_crud_round_trip() {
    let api = HttpProductApi::new(spawn_server().await);

    let products = api.fetch_products().await.unwrap();
    assert_eq!(products.len(), 8);

    // 更新
    let mut merged = products[0].clone();
    merged.name = "Updated".to_string();
    merged.price = 100.0;
    let updated = api.update_product("1", &merged).await.unwrap();
    assert_eq!(updated.name, "Updated");
    assert_eq!(updated.price, 100.0);

    // 删除后列表减一，且不再包含该 id
    api.delete_product("1").await.unwrap();
    let remaining = api.fetch_products().await.unwrap();
    assert_eq!(remaining.len(), 7);
    assert!(remaining.iter().all(|p| p.id != "1"));
}

#[tokio::test]
async fn test_error_statuses_over_the_wire() {
    let api = HttpProductApi::new(spawn_server().await);
    let products = api.fetch_products().await.unwrap();

    // 未知 id
    match api.update_product("999", &products[0]).await {
        Err(ApiError::UnexpectedStatus { status: 404, .. }) => {}
        other => panic!("期望 404，实际: {:?}", other.map(|p| p.id)),
    }

    // 无效名称
    let mut invalid = products[0].clone();
    invalid.name = String::new();
    match api.update_product("1", &invalid).await {
        Err(ApiError::UnexpectedStatus { status: 400, .. }) => {}
        other => panic!("期望 400，实际: {:?}", other.map(|p| p.id)),
    }

    match api.delete_product("999").await {
        Err(ApiError::UnexpectedStatus { status: 404, .. }) => {}
        other => panic!("期望 404，实际: {:?}", other),
    }
}

#[tokio::test]
async fn test_controller_against_live_server() {
    let base_url = spawn_server().await;
    let mut controller = ProductListController::new(HttpProductApi::new(base_url));

    controller.load().await;
    assert_eq!(controller.state(), LoadState::Loaded);
    assert_eq!(controller.products().len(), 8);
    // 过滤条件初始化为观测到的价格范围
    assert_eq!(controller.criteria().min_price, 29.99);
    assert_eq!(controller.criteria().max_price, 899.99);

    // 搜索
    controller.set_search_term("chair");
    let displayed = controller.displayed();
    assert_eq!(displayed.len(), 1);
    assert_eq!(displayed[0].name, "Modern Ergonomic Chair");

    controller.clear_filters();
    assert_eq!(controller.displayed().len(), 8);

    // 编辑
    controller.open_edit("2");
    controller.set_edit_name("Updated Lamp");
    controller.set_edit_price("75");
    controller.submit_edit().await;
    assert!(controller.edit_form().is_none());
    assert!(controller
        .products()
        .iter()
        .any(|p| p.name == "Updated Lamp" && p.price == 75.0));

    // 删除（已确认）
    controller.delete("3", |_| true).await;
    assert_eq!(controller.products().len(), 7);
    assert!(controller.products().iter().all(|p| p.id != "3"));
}

#[tokio::test]
async fn test_controller_fetch_failure_leaves_list_empty() {
    // 无法连接的地址：初始拉取失败，回到 Idle，列表保持为空
    let mut controller =
        ProductListController::new(HttpProductApi::new("http://127.0.0.1:1/api"));

    controller.load().await;

    assert_eq!(controller.state(), LoadState::Idle);
    assert!(controller.products().is_empty());
    assert!(controller.displayed().is_empty());
    assert!(controller.take_error().is_some());
}
