//! 产品 API 客户端

use async_trait::async_trait;

use crate::app::catalog::model::Product;

/// 客户端错误类型
#[derive(Debug)]
pub enum ApiError {
    /// 网络层失败（连接失败、响应体解码失败等）
    Network(String),
    /// 服务端返回非 2xx 状态
    UnexpectedStatus { status: u16, body: String },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络请求失败: {}", msg),
            ApiError::UnexpectedStatus { status, body } => {
                write!(f, "请求失败: {} - {}", status, body)
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// 产品 API 访问接口
///
/// 控制器通过这个 trait 访问后端，测试中可替换为内存实现。
#[async_trait]
pub trait ProductApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// 发送完整的合并记录
    async fn update_product(&self, id: &str, product: &Product) -> Result<Product, ApiError>;

    async fn delete_product(&self, id: &str) -> Result<(), ApiError>;
}

/// 基于 reqwest 的 HTTP 实现
pub struct HttpProductApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProductApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// 检查响应状态，非 2xx 时带上错误文本
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::UnexpectedStatus { status, body })
    }
}

#[async_trait]
impl ProductApi for HttpProductApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn update_product(&self, id: &str, product: &Product) -> Result<Product, ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);
        let response = self
            .client
            .put(&url)
            .json(product)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }
}
