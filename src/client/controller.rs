//! 产品列表控制器

use tracing::error;

use super::api::{ApiError, ProductApi};
use super::filter::{filter_products, FilterCriteria};
use crate::app::catalog::model::Product;

/// 加载状态机
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
}

/// 编辑表单
///
/// 字段保持字符串形式，提交时再解析。
#[derive(Debug, Clone)]
pub struct EditForm {
    pub id: String,
    pub name: String,
    pub price: String,
}

/// 产品列表控制器
///
/// 持有产品快照和过滤条件，展示列表始终由两者纯推导。
/// 请求失败只记录日志并写入错误通道，不向调用方抛出。
pub struct ProductListController<A: ProductApi> {
    api: A,
    state: LoadState,
    products: Vec<Product>,
    criteria: FilterCriteria,
    observed_min: f64,
    observed_max: f64,
    edit_form: Option<EditForm>,
    last_error: Option<String>,
}

impl<A: ProductApi> ProductListController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: LoadState::Idle,
            products: Vec::new(),
            criteria: FilterCriteria::new("", 0.0, 0.0),
            observed_min: 0.0,
            observed_max: 0.0,
            edit_form: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    /// 展示列表：产品快照和过滤条件的纯推导
    pub fn displayed(&self) -> Vec<Product> {
        filter_products(&self.products, &self.criteria)
    }

    /// 拉取完整产品列表
    ///
    /// 成功后用观测到的价格上下界初始化过滤条件。
    /// 首次拉取失败回到 Idle，列表保持为空；
    /// 重新拉取失败停留在 Loaded，本地快照不变。
    pub async fn load(&mut self) {
        if self.state == LoadState::Loading {
            return;
        }

        let was_loaded = self.state == LoadState::Loaded;
        self.state = LoadState::Loading;

        match self.api.fetch_products().await {
            Ok(products) => {
                let (min, max) = observed_price_range(&products);
                self.observed_min = min;
                self.observed_max = max;
                self.criteria = FilterCriteria::new("", min, max);
                self.products = products;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                self.record_error("fetch products", &err);
                self.state = if was_loaded {
                    LoadState::Loaded
                } else {
                    LoadState::Idle
                };
            }
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
    }

    pub fn set_min_price(&mut self, price: f64) {
        self.criteria.min_price = price;
    }

    pub fn set_max_price(&mut self, price: f64) {
        self.criteria.max_price = price;
    }

    /// 清空过滤：搜索词置空，价格范围回到最近观测到的上下界
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::new("", self.observed_min, self.observed_max);
    }

    /// 打开编辑表单，预填目标产品的名称和价格
    pub fn open_edit(&mut self, id: &str) {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.edit_form = Some(EditForm {
                id: product.id.clone(),
                name: product.name.clone(),
                price: product.price.to_string(),
            });
        }
    }

    pub fn set_edit_name(&mut self, name: impl Into<String>) {
        if let Some(form) = self.edit_form.as_mut() {
            form.name = name.into();
        }
    }

    pub fn set_edit_price(&mut self, price: impl Into<String>) {
        if let Some(form) = self.edit_form.as_mut() {
            form.price = price.into();
        }
    }

    pub fn close_edit(&mut self) {
        self.edit_form = None;
    }

    /// 提交编辑表单
    ///
    /// 客户端校验：名称去空白后非空，价格可解析且大于 0。
    /// 校验失败或请求失败都保持表单打开。
    pub async fn submit_edit(&mut self) {
        let Some(form) = self.edit_form.clone() else {
            return;
        };

        let name = form.name.trim().to_string();
        if name.is_empty() {
            error!("edit rejected: empty product name");
            self.last_error = Some("Product name must not be empty".to_string());
            return;
        }

        let price = match form.price.trim().parse::<f64>() {
            Ok(p) if p > 0.0 => p,
            _ => {
                error!("edit rejected: invalid price {:?}", form.price);
                self.last_error = Some(format!("Invalid price: {}", form.price));
                return;
            }
        };

        let Some(existing) = self.products.iter().find(|p| p.id == form.id) else {
            self.edit_form = None;
            return;
        };

        // 发送完整的合并记录
        let merged = Product {
            id: existing.id.clone(),
            name,
            price,
            image: existing.image.clone(),
            category: existing.category.clone(),
            is_new: existing.is_new,
        };

        match self.api.update_product(&form.id, &merged).await {
            Ok(updated) => {
                if let Some(slot) = self.products.iter_mut().find(|p| p.id == updated.id) {
                    *slot = updated;
                }
                self.edit_form = None;
            }
            Err(err) => {
                self.record_error("update product", &err);
            }
        }
    }

    /// 删除产品
    ///
    /// `confirm` 是交互确认回调，拒绝则不发请求。
    /// 成功后按 id 移除本地记录，失败时本地状态不变。
    pub async fn delete(&mut self, id: &str, confirm: impl FnOnce(&Product) -> bool) {
        let Some(product) = self.products.iter().find(|p| p.id == id) else {
            return;
        };

        if !confirm(product) {
            return;
        }

        match self.api.delete_product(id).await {
            Ok(()) => {
                self.products.retain(|p| p.id != id);
            }
            Err(err) => {
                self.record_error("delete product", &err);
            }
        }
    }

    /// 取走最近一次记录的错误，调用方可选择是否展示
    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    fn record_error(&mut self, action: &str, err: &ApiError) {
        error!("{} failed: {}", action, err);
        self.last_error = Some(err.to_string());
    }
}

/// 观测价格范围，空列表回退到 (0, 0)
fn observed_price_range(products: &[Product]) -> (f64, f64) {
    let mut prices = products.iter().map(|p| p.price);
    let Some(first) = prices.next() else {
        return (0.0, 0.0);
    };

    prices.fold((first, first), |(min, max), price| {
        (min.min(price), max.max(price))
    })
}
