//! 产品内存存储

use serde_json::Value;

use super::model::Product;
use crate::core::error::CoreError;

/// 产品存储
///
/// 持有权威的产品集合，插入顺序即遍历顺序。
/// 集合只通过 `update` / `delete` 修改，进程退出即丢弃。
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new(seed: Vec<Product>) -> Self {
        Self { products: seed }
    }

    /// 返回当前完整集合（插入顺序）
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// 按 id 部分更新产品
    ///
    /// `patch` 必须是 JSON 对象；`name` 存在时必须是非空字符串，
    /// `price` 存在时必须是数字。未给出的字段保持不变，`id` 不可覆盖。
    /// 校验失败时存储不发生任何修改。
    pub fn update(&mut self, id: &str, patch: &Value) -> Result<Product, CoreError> {
        let fields = patch
            .as_object()
            .ok_or_else(|| CoreError::BadRequest("Invalid JSON".to_string()))?;

        // 先检查产品是否存在
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))?;

        // 验证输入（在任何修改之前）
        if let Some(name) = fields.get("name") {
            match name.as_str() {
                Some(s) if !s.is_empty() => {}
                _ => return Err(CoreError::BadRequest("Invalid product name".to_string())),
            }
        }

        if let Some(price) = fields.get("price") {
            if !price.is_number() {
                return Err(CoreError::BadRequest("Invalid product price".to_string()));
            }
        }

        let product = &mut self.products[index];

        // 浅合并：只覆盖给出的字段，patch 中的 id 被忽略
        if let Some(name) = fields.get("name").and_then(Value::as_str) {
            product.name = name.to_string();
        }
        if let Some(price) = fields.get("price").and_then(Value::as_f64) {
            product.price = price;
        }
        if let Some(image) = fields.get("image").and_then(Value::as_str) {
            product.image = image.to_string();
        }
        if let Some(category) = fields.get("category").and_then(Value::as_str) {
            product.category = category.to_string();
        }
        if let Some(is_new) = fields.get("isNew").and_then(Value::as_bool) {
            product.is_new = is_new;
        }

        Ok(product.clone())
    }

    /// 按 id 删除产品，返回被删除的记录
    pub fn delete(&mut self, id: &str) -> Result<Product, CoreError> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| CoreError::NotFound("Product not found".to_string()))?;

        Ok(self.products.remove(index))
    }
}
