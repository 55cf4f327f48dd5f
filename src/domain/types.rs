// ==========================================
// 设备租赁库存盘点系统 - 领域类型定义
// ==========================================
// 依据: Recon_Design_v0.2.md - 告警体系与错误处理
// 红线: 每种越界修正必须可区分、可解释 (告警不阻断计算)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 数量告警类型 (Quantity Warning Kind)
// ==========================================
// 红线: 一个修正条件对应一个变体, 不允许合并
// 序列化格式: SCREAMING_SNAKE_CASE (与日志/前端一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuantityWarningKind {
    AwaitedBelowUnits,          // 总应到数量 < 应到单元数量
    ActualBelowZero,            // 实到数量 < 0
    ActualAboveAwaited,         // 严格模式下实到数量 > 总应到数量
    ActualBelowUnits,           // 实到单元数量 > 总实到数量
    ActualExternalAboveAwaited, // 散装实到数量 > 散装应到数量
    BrokenBelowZero,            // 故障数量 < 0
    BrokenAboveActual,          // 故障数量 > 实到数量
    BrokenBelowUnits,           // 故障单元数量 > 总故障数量
    BrokenExternalAboveAwaited, // 散装故障数量 > 散装应到数量
    BrokenAboveAwaited,         // 严格模式下故障数量 > 总应到数量 (编辑路径)
}

impl QuantityWarningKind {
    /// 转换为稳定的告警代码（日志/序列化用）
    pub fn code(&self) -> &'static str {
        match self {
            QuantityWarningKind::AwaitedBelowUnits => "AWAITED_BELOW_UNITS",
            QuantityWarningKind::ActualBelowZero => "ACTUAL_BELOW_ZERO",
            QuantityWarningKind::ActualAboveAwaited => "ACTUAL_ABOVE_AWAITED",
            QuantityWarningKind::ActualBelowUnits => "ACTUAL_BELOW_UNITS",
            QuantityWarningKind::ActualExternalAboveAwaited => "ACTUAL_EXTERNAL_ABOVE_AWAITED",
            QuantityWarningKind::BrokenBelowZero => "BROKEN_BELOW_ZERO",
            QuantityWarningKind::BrokenAboveActual => "BROKEN_ABOVE_ACTUAL",
            QuantityWarningKind::BrokenBelowUnits => "BROKEN_BELOW_UNITS",
            QuantityWarningKind::BrokenExternalAboveAwaited => "BROKEN_EXTERNAL_ABOVE_AWAITED",
            QuantityWarningKind::BrokenAboveAwaited => "BROKEN_ABOVE_AWAITED",
        }
    }

    /// 对应的 i18n 消息键（locales/*.yml reconcile.* 段）
    pub fn message_key(&self) -> &'static str {
        match self {
            QuantityWarningKind::AwaitedBelowUnits => "reconcile.awaited_below_units",
            QuantityWarningKind::ActualBelowZero => "reconcile.actual_below_zero",
            QuantityWarningKind::ActualAboveAwaited => "reconcile.actual_above_awaited",
            QuantityWarningKind::ActualBelowUnits => "reconcile.actual_below_units",
            QuantityWarningKind::ActualExternalAboveAwaited => {
                "reconcile.actual_external_above_awaited"
            }
            QuantityWarningKind::BrokenBelowZero => "reconcile.broken_below_zero",
            QuantityWarningKind::BrokenAboveActual => "reconcile.broken_above_actual",
            QuantityWarningKind::BrokenBelowUnits => "reconcile.broken_below_units",
            QuantityWarningKind::BrokenExternalAboveAwaited => {
                "reconcile.broken_external_above_awaited"
            }
            QuantityWarningKind::BrokenAboveAwaited => "reconcile.broken_above_awaited",
        }
    }
}

impl fmt::Display for QuantityWarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 数量告警 (Quantity Warning)
// ==========================================
// 用途: 纯推导层返回告警, 由 API 层统一落日志 (推导层无副作用)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityWarning {
    pub material_id: String,       // 材料 ID
    pub kind: QuantityWarningKind, // 告警类型
    pub raw: i32,                  // 修正前的原始值
    pub clamped: i32,              // 修正后的值
}

impl QuantityWarning {
    pub fn new(material_id: &str, kind: QuantityWarningKind, raw: i32, clamped: i32) -> Self {
        Self {
            material_id: material_id.to_string(),
            kind,
            raw,
            clamped,
        }
    }

    /// 诊断明细（JSON 格式, 可解释性）
    pub fn detail_json(&self) -> serde_json::Value {
        serde_json::json!({
            "material_id": self.material_id,
            "kind": self.kind.code(),
            "raw": self.raw,
            "clamped": self.clamped,
        })
    }
}

impl fmt::Display for QuantityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: material_id={}, raw={}, clamped={}",
            self.kind.code(),
            self.material_id,
            self.raw,
            self.clamped
        )
    }
}

// ==========================================
// 行显示状态 (Row Status)
// ==========================================
// 依据: Recon_Design_v0.2.md - 行样式标志
// 规则: has_broken → WARNING; locked 且未盘齐 → ERROR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowStatus {
    Normal,  // 正常
    Warning, // 存在故障数量
    Error,   // 已锁定但未盘齐
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowStatus::Normal => write!(f, "NORMAL"),
            RowStatus::Warning => write!(f, "WARNING"),
            RowStatus::Error => write!(f, "ERROR"),
        }
    }
}
