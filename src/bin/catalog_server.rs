//! 产品目录 API 服务器
//! 进程启动时注入固定示例数据，全部状态保存在内存中

use std::env;
use std::sync::{Arc, Mutex};

use tokio::net::TcpListener;
use tracing::{info, Level};

use product_catalog::app::catalog::handler::router;
use product_catalog::app::catalog::model::sample_products;
use product_catalog::app::catalog::store::ProductStore;
use product_catalog::infrastructure::logger::Logger;

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    info!("启动产品目录服务器...");

    // 创建产品存储并注入请求层
    let store = Arc::new(Mutex::new(ProductStore::new(sample_products())));
    let app = router(store);

    // 绑定地址，PORT 环境变量可覆盖默认端口
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(5000);

    let listener = TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("无法绑定到监听端口");

    info!("🚀 产品目录服务器运行在 http://localhost:{}", port);
    info!("📖 API 端点:");
    info!("   GET    /api/products     - 获取所有产品");
    info!("   PUT    /api/products/:id - 更新产品");
    info!("   DELETE /api/products/:id - 删除产品");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}
