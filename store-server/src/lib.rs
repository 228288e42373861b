//! Pizza Store Server - 订单中心
//!
//! # 架构概述
//!
//! - **订单** (`orders`): 内存订单表、事件历史、生产者事件分发
//! - **实时推送** (`live`): 按 clientId 管理 dashboard WebSocket 连接
//! - **厨房** (`kitchen`): 下单后异步通知 kitchen 开始制作
//! - **HTTP API** (`api`): RESTful 接口 + `/ws`
//!
//! # 模块结构
//!
//! ```text
//! store-server/src/
//! ├── core/          # 配置、状态、启动
//! ├── orders/        # registry / ledger / dispatch
//! ├── live/          # hub / session
//! ├── kitchen/       # cook 通知客户端
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志
//! ```

pub mod api;
pub mod core;
pub mod kitchen;
pub mod live;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState};
pub use kitchen::{HttpKitchen, KitchenNotifier, NotifyError};
pub use live::{ClientGuard, ConnectionHub};
pub use orders::{EventLedger, OrderDispatcher, OrderRegistry, normalize_status};

// Re-export unified error types from shared
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::{init_logger, init_logger_with};
