// ==========================================
// 设备租赁库存盘点系统 - 数量编辑操作
// ==========================================
// 依据: Recon_Design_v0.2.md - 数量编辑与跨字段一致性
// 职责: 在有效边界内修正用户录入, 上抛完整变更元组
// 红线: 只读状态下编辑为 no-op; 跨字段一致性由编辑方向决定
//       (降实到 → 压故障; 抬故障 → 抬实到)
// ==========================================

use crate::config::ReconcilePolicy;
use crate::domain::material::{Material, QuantityChange, StockQuantities};
use crate::domain::types::QuantityWarning;
use crate::engine::{QuantityReconciler, ReconcileCore};

// ==========================================
// EditOutcome - 编辑结果
// ==========================================
// 单次同步上抛: 变更事件 + 本次编辑产生的修正告警
#[derive(Debug, Clone)]
pub struct EditOutcome {
    pub change: QuantityChange,         // 待持久化的完整变更元组
    pub warnings: Vec<QuantityWarning>, // 编辑路径修正告警
}

// ==========================================
// QuantityEditor - 编辑服务
// ==========================================
pub struct QuantityEditor {
    reconciler: QuantityReconciler,
}

impl QuantityEditor {
    /// 创建新的 QuantityEditor 实例
    pub fn new() -> Self {
        Self {
            reconciler: QuantityReconciler::new(),
        }
    }

    /// 编辑实到数量
    ///
    /// # 规则
    /// 1. 只读状态（锁定或无散装余量）→ no-op, 返回 None
    /// 2. 按派生规则 5 的序列修正 new_value
    /// 3. 现有故障数量超过新实到数量 → 压低到新实到数量
    /// 4. 上抛 {actual, broken, units} 变更事件
    ///
    /// # 返回
    /// - Some(EditOutcome): 修正后的变更事件
    /// - None: 只读状态, 无变更
    pub fn set_actual_quantity(
        &self,
        material: &Material,
        quantities: &StockQuantities,
        policy: &ReconcilePolicy,
        new_value: i32,
    ) -> Option<EditOutcome> {
        let derived = self.reconciler.derive(material, quantities, policy);
        if derived.is_read_only {
            return None;
        }

        let (actual, warnings) = ReconcileCore::clamp_actual(
            &material.id,
            new_value,
            derived.effective_strict,
            material.is_unitary,
            derived.awaited_quantity,
            derived.actual_units_quantity,
            derived.awaited_external_quantity,
        );

        // 故障不得超过实到: 实到下调时同步压低故障
        let broken = derived.broken_quantity.min(actual);

        Some(EditOutcome {
            change: QuantityChange::new(&material.id, actual, broken, quantities.units.clone()),
            warnings,
        })
    }

    /// 编辑故障数量
    ///
    /// # 规则
    /// 1. 只读状态 → no-op, 返回 None
    /// 2. 按编辑路径序列修正 new_value（不含"超过实到"上限）
    /// 3. 现有实到数量低于新故障数量 → 抬升到新故障数量
    /// 4. 上抛 {actual, broken, units} 变更事件
    pub fn set_broken_quantity(
        &self,
        material: &Material,
        quantities: &StockQuantities,
        policy: &ReconcilePolicy,
        new_value: i32,
    ) -> Option<EditOutcome> {
        let derived = self.reconciler.derive(material, quantities, policy);
        if derived.is_read_only {
            return None;
        }

        let (broken, warnings) = ReconcileCore::clamp_broken_edit(
            &material.id,
            new_value,
            derived.effective_strict,
            material.is_unitary,
            derived.awaited_quantity,
            derived.broken_units_quantity,
            derived.awaited_external_quantity,
        );

        // 实到必须覆盖故障: 故障上调时同步抬升实到
        let actual = derived.actual_quantity.max(broken);

        Some(EditOutcome {
            change: QuantityChange::new(&material.id, actual, broken, quantities.units.clone()),
            warnings,
        })
    }
}

impl Default for QuantityEditor {
    fn default() -> Self {
        Self::new()
    }
}
