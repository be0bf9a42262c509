//! 产品目录终端浏览器
//! 演示前端控制器的完整生命周期：拉取、过滤、编辑、删除

use std::io::{self, BufRead, Write};

use tracing::Level;

use product_catalog::client::api::{HttpProductApi, ProductApi};
use product_catalog::client::config::api_base_url;
use product_catalog::client::controller::ProductListController;
use product_catalog::infrastructure::logger::Logger;

#[tokio::main]
async fn main() {
    Logger::init(Level::WARN);

    let api = HttpProductApi::new(api_base_url());
    let mut controller = ProductListController::new(api);

    println!("🛒 产品目录浏览器 (输入 help 查看命令)");

    // 首次挂载：只触发一次完整拉取
    controller.load().await;
    render(&controller);
    report_error(&mut controller);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap() == 0 {
            break;
        }

        let trimmed = line.trim();
        let (command, arg) = match trimmed.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "" => continue,
            "help" => print_help(),
            "list" => render(&controller),
            "search" => {
                controller.set_search_term(arg);
                render(&controller);
            }
            "min" => match arg.parse::<f64>() {
                Ok(price) => {
                    controller.set_min_price(price);
                    render(&controller);
                }
                Err(_) => println!("无效的价格: {}", arg),
            },
            "max" => match arg.parse::<f64>() {
                Ok(price) => {
                    controller.set_max_price(price);
                    render(&controller);
                }
                Err(_) => println!("无效的价格: {}", arg),
            },
            "clear" => {
                controller.clear_filters();
                render(&controller);
            }
            "edit" => {
                edit_flow(&mut controller, arg).await;
                render(&controller);
            }
            "delete" => {
                controller
                    .delete(arg, |product| {
                        print!("确认删除 {} ? [y/N] ", product.name);
                        io::stdout().flush().unwrap();
                        let mut answer = String::new();
                        io::stdin().lock().read_line(&mut answer).unwrap();
                        answer.trim().eq_ignore_ascii_case("y")
                    })
                    .await;
                render(&controller);
            }
            "reload" => {
                controller.load().await;
                render(&controller);
            }
            "quit" | "exit" => break,
            _ => println!("未知命令: {} (输入 help 查看命令)", command),
        }

        report_error(&mut controller);
    }
}

/// 编辑流程：预填表单，回车保留原值
async fn edit_flow(controller: &mut ProductListController<HttpProductApi>, id: &str) {
    controller.open_edit(id);

    let Some(form) = controller.edit_form() else {
        println!("未找到产品: {}", id);
        return;
    };

    println!("编辑产品 {} (回车保留原值)", form.id);

    let name = prompt(&format!("名称 [{}]: ", form.name));
    if !name.is_empty() {
        controller.set_edit_name(name);
    }

    let price = prompt(&format!(
        "价格 [{}]: ",
        controller.edit_form().map(|f| f.price.clone()).unwrap_or_default()
    ));
    if !price.is_empty() {
        controller.set_edit_price(price);
    }

    controller.submit_edit().await;
}

/// 输出错误通道里的内容（如果有）
fn report_error<A: ProductApi>(controller: &mut ProductListController<A>) {
    if let Some(err) = controller.take_error() {
        println!("⚠️  {}", err);
    }
}

fn prompt(label: &str) -> String {
    print!("{}", label);
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).unwrap();
    line.trim().to_string()
}

/// 渲染展示列表，空列表时显示加载占位符
fn render<A: ProductApi>(controller: &ProductListController<A>) {
    let displayed = controller.displayed();

    if displayed.is_empty() {
        println!("Loading products...");
        return;
    }

    let criteria = controller.criteria();
    println!(
        "搜索: {:?}  价格: ${} - ${}",
        criteria.search_term, criteria.min_price, criteria.max_price
    );

    for product in &displayed {
        println!(
            "  [{}] {:<30} {:>10} {:<12} {}",
            product.id,
            product.name,
            format!("${:.2}", product.price),
            product.category,
            if product.is_new { "NEW" } else { "" }
        );
    }
}

fn print_help() {
    println!("可用命令:");
    println!("  list           - 显示当前展示列表");
    println!("  search <词>    - 按名称搜索（不区分大小写）");
    println!("  min <价格>     - 设置价格下界");
    println!("  max <价格>     - 设置价格上界");
    println!("  clear          - 清空过滤条件");
    println!("  edit <id>      - 编辑产品");
    println!("  delete <id>    - 删除产品（需确认）");
    println!("  reload         - 重新拉取产品列表");
    println!("  quit           - 退出");
}
