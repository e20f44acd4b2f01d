//! 宠物诊所 Web 层（petclinic-web）
//!
//! axum 路由 + maud 服务端渲染页面：
//! - 表单提交经校验后转为应用层命令，成功则 302 重定向，失败则带字段错误重新渲染（200）；
//! - 资源不存在渲染 404 页面，并发修改冲突渲染 409 页面。
//!
pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod telemetry;
pub mod views;

pub use api::context::ApiContext;
pub use api::router;
