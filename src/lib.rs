// ==========================================
// 设备租赁库存盘点系统 - 核心库
// ==========================================
// 依据: Recon_Design_v0.2.md - 系统定位
// 系统定位: 纯同步推导引擎 (调用方持有状态、负责持久化)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 对账规则
pub mod engine;

// 配置层 - 盘点策略
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{QuantityWarning, QuantityWarningKind, RowStatus};

// 领域实体
pub use domain::{Material, MaterialUnit, QuantityChange, StockQuantities, UnitDescriptor};

// 配置
pub use config::ReconcilePolicy;

// 引擎
pub use engine::{
    EditOutcome, QuantityEditor, QuantityReconciler, ReconcileCore, ReconciledQuantities,
};

// API
pub use api::{ApiError, ApiResult, InventoryApi, MaterialRowView};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备租赁库存盘点系统";

// ==========================================
// 预编译检查
// ==========================================

// 确保编译时所有模块可见
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
