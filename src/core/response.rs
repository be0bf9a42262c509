//! 核心响应处理模块

use serde::{Deserialize, Serialize};

use crate::app::catalog::model::Product;

/// 删除操作的响应结构
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub product: Product,
}

impl DeleteResponse {
    pub fn deleted(product: Product) -> Self {
        Self {
            message: "Product deleted successfully".to_string(),
            product,
        }
    }
}
