//! SchoolSys - 学校管理系统后端服务
//!
//! 基于 Actix Web 构建的用户、课程、选课与成绩管理后端。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权中间件
//! - `models`: 数据模型定义
//! - `repositories`: 按实体划分的数据访问
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
