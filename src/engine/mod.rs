// ==========================================
// 设备租赁库存盘点系统 - 引擎层
// ==========================================
// 依据: Recon_Design_v0.2.md - 引擎模块拆分
// ==========================================
// 职责: 实现数量对账规则, 纯同步推导
// 红线: 引擎不落日志、不做 I/O, 所有修正必须输出告警
// ==========================================

pub mod editor;
pub mod reconcile_core;
pub mod reconciler;

// 重导出核心引擎
pub use editor::{EditOutcome, QuantityEditor};
pub use reconcile_core::ReconcileCore;
pub use reconciler::{QuantityReconciler, ReconciledQuantities};
