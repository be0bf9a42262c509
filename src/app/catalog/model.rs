//! 产品目录数据模型

use serde::{Deserialize, Serialize};

/// 产品记录
///
/// `id` 创建后不可变，且在存储中唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

/// 固定的示例产品集，进程启动时注入存储
pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Modern Ergonomic Chair".to_string(),
            price: 149.99,
            image: "https://images.unsplash.com/photo-1567538096630-e0c55bd6374c?w=400&q=80"
                .to_string(),
            category: "Furniture".to_string(),
            is_new: true,
        },
        Product {
            id: "2".to_string(),
            name: "Minimalist Desk Lamp".to_string(),
            price: 59.99,
            image: "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=400&q=80"
                .to_string(),
            category: "Lighting".to_string(),
            is_new: false,
        },
        Product {
            id: "3".to_string(),
            name: "Wooden Coffee Table".to_string(),
            price: 199.99,
            image: "https://ik.imagekit.io/2xkwa8s1i/img/npl_modified_images/TableWardobe/WSCFTANTCIW/WSCFTANTCIW_LS_1.jpg?tr=w-1200"
                .to_string(),
            category: "Furniture".to_string(),
            is_new: false,
        },
        Product {
            id: "4".to_string(),
            name: "Decorative Wall Clock".to_string(),
            price: 45.99,
            image: "https://images.unsplash.com/photo-1563861826100-9cb868fdbe1c?w=400&q=80"
                .to_string(),
            category: "Decor".to_string(),
            is_new: true,
        },
        Product {
            id: "5".to_string(),
            name: "Ceramic Plant Pot".to_string(),
            price: 29.99,
            image: "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=400&q=80"
                .to_string(),
            category: "Decor".to_string(),
            is_new: false,
        },
        Product {
            id: "6".to_string(),
            name: "Leather Sofa".to_string(),
            price: 899.99,
            image: "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=400&q=80"
                .to_string(),
            category: "Furniture".to_string(),
            is_new: true,
        },
        Product {
            id: "7".to_string(),
            name: "Smart LED TV".to_string(),
            price: 549.99,
            image: "https://store.in.panasonic.com/media/catalog/product/cache/40b589206cef99ab7dca1586fe425968/t/h/th-32ms550dx_info_1_new.webp"
                .to_string(),
            category: "Electronics".to_string(),
            is_new: true,
        },
        Product {
            id: "8".to_string(),
            name: "Wireless Headphones".to_string(),
            price: 129.99,
            image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&q=80"
                .to_string(),
            category: "Electronics".to_string(),
            is_new: false,
        },
    ]
}
