//! 客户端配置

use std::env;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// 解析 API 基础地址，所有 /products 请求都以它为前缀
pub fn api_base_url() -> String {
    env::var("CATALOG_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}
