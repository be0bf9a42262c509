//! 产品过滤引擎

use crate::app::catalog::model::Product;

/// 过滤条件
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub min_price: f64,
    pub max_price: f64,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, min_price: f64, max_price: f64) -> Self {
        Self {
            search_term: search_term.into(),
            min_price,
            max_price,
        }
    }
}

/// 从完整列表推导展示列表
///
/// 纯函数：先按名称做不区分大小写的子串匹配，再按价格闭区间过滤。
/// 不改变输入顺序，无匹配时返回空列表。
pub fn filter_products(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut filtered: Vec<Product> = products.to_vec();

    if !criteria.search_term.is_empty() {
        let term = criteria.search_term.to_lowercase();
        filtered.retain(|product| product.name.to_lowercase().contains(&term));
    }

    filtered.retain(|product| {
        product.price >= criteria.min_price && product.price <= criteria.max_price
    });

    filtered
}
