//! # 产品目录浏览工具
//!
//! 这个库提供了一个小型产品目录浏览系统，包括：
//! - 基于内存的产品存储（list / update / delete）
//! - Axum HTTP API 层（JSON + CORS）
//! - 前端过滤引擎（名称搜索 + 价格区间）
//! - 产品列表控制器（拉取、编辑、删除生命周期）

pub mod app;
pub mod client;
pub mod core;
pub mod infrastructure;
