//! 产品目录处理器

use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, Method, StatusCode},
    middleware::from_fn,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use serde_json::Value;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::{model::Product, store::ProductStore};
use crate::core::{
    error::CoreError, middleware::request_logging_middleware, response::DeleteResponse,
};

/// 应用状态类型
pub type SharedStore = Arc<Mutex<ProductStore>>;

/// 构建完整路由
///
/// 存储由调用方创建并注入，处理器不持有任何全局状态。
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/products", get(list_products).fallback(unmatched))
        .route(
            "/api/products/:id",
            put(update_product).delete(delete_product).fallback(unmatched),
        )
        .fallback(unmatched)
        .layer(from_fn(request_logging_middleware))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// CORS：任意来源，方法和请求头按 API 契约放开
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// 获取所有产品
async fn list_products(State(store): State<SharedStore>) -> Json<Vec<Product>> {
    let store = store.lock().unwrap();
    Json(store.list())
}

/// 更新产品（部分字段合并）
async fn update_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Product>, CoreError> {
    // 请求体已完整缓冲，再尝试解码
    let patch: Value = serde_json::from_slice(&body)
        .map_err(|_| CoreError::BadRequest("Invalid JSON".to_string()))?;

    let mut store = store.lock().unwrap();
    let updated = store.update(&id, &patch)?;
    Ok(Json(updated))
}

/// 删除产品
async fn delete_product(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, CoreError> {
    // 验证产品 ID
    if id.trim().is_empty() {
        return Err(CoreError::BadRequest("Invalid product ID".to_string()));
    }

    let mut store = store.lock().unwrap();
    let deleted = store.delete(&id)?;
    Ok(Json(DeleteResponse::deleted(deleted)))
}

/// 兜底处理：OPTIONS 预检返回 200，其余一律 404 纯文本
///
/// 同时挂在路由器和各 method router 上，未注册的方法不会漏出 405。
async fn unmatched(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        (StatusCode::NOT_FOUND, "404 Not Found").into_response()
    }
}
