// ==========================================
// 设备租赁库存盘点系统 - API 层
// ==========================================
// 职责: 进程内业务接口（无网络协议、无持久化）
// ==========================================

pub mod error;
pub mod inventory_api;

pub use error::{ApiError, ApiResult};
pub use inventory_api::{InventoryApi, MaterialRowView};
