// ==========================================
// 设备租赁库存盘点系统 - 领域层
// ==========================================
// 依据: Recon_Design_v0.2.md - 数据模型
// 红线: 领域类型为值对象, 引擎不持久化、不变更输入
// ==========================================

pub mod material;
pub mod types;

// 重导出领域实体
pub use material::{Material, MaterialUnit, QuantityChange, StockQuantities, UnitDescriptor};
pub use types::{QuantityWarning, QuantityWarningKind, RowStatus};
