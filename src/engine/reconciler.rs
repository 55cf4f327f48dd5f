// ==========================================
// 设备租赁库存盘点系统 - 数量对账派生引擎
// ==========================================
// 依据: Recon_Design_v0.2.md - 数量派生流程（按编号顺序执行）
// 职责: 从原始盘点计数派生一致、有界的数量视图
// 红线: 不变更输入, 不落日志, 告警随视图返回由 API 层处理
// ==========================================

use crate::config::ReconcilePolicy;
use crate::domain::material::{Material, StockQuantities};
use crate::domain::types::QuantityWarning;
use crate::engine::ReconcileCore;
use serde::{Deserialize, Serialize};

// ==========================================
// ReconciledQuantities - 派生数量视图
// ==========================================
// 每轮评估从零重算, 不存储; 所有字段为当前输入的纯函数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciledQuantities {
    pub material_id: String, // 材料 ID

    // ===== 应到口径 =====
    pub awaited_units_quantity: i32,    // 应到单元数量
    pub awaited_quantity: i32,          // 总应到数量（必要时已提升）
    pub awaited_external_quantity: i32, // 散装应到数量

    // ===== 实到口径 =====
    pub actual_units_quantity: i32, // 实到单元数量（未丢失）
    pub actual_quantity: i32,       // 修正后实到数量

    // ===== 故障口径 =====
    pub broken_units_quantity: i32, // 故障单元数量
    pub broken_quantity: i32,       // 修正后故障数量

    // ===== 编辑上界 =====
    pub currently_awaited_actual_quantity: i32, // 实到字段当前可达上界
    pub currently_awaited_broken_quantity: i32, // 故障字段当前可达上界

    // ===== 状态标志 =====
    pub effective_strict: bool, // 有效严格模式（strict || 单元化）
    pub is_complete: bool,      // 是否盘齐（实到 ≥ 应到）
    pub is_read_only: bool,     // 字段是否只读
    pub has_broken: bool,       // 是否存在故障数量

    // ===== 诊断告警 =====
    pub warnings: Vec<QuantityWarning>, // 修正告警（不阻断计算）
}

// ==========================================
// QuantityReconciler - 派生服务
// ==========================================
pub struct QuantityReconciler;

impl QuantityReconciler {
    /// 创建新的 QuantityReconciler 实例
    pub fn new() -> Self {
        Self
    }

    /// 派生数量视图（主入口）
    ///
    /// # 参数
    /// - material: 材料目录属性（只读）
    /// - quantities: 当前盘点状态（只读, 可能不一致）
    /// - policy: 盘点策略（locked/strict）
    ///
    /// # 返回
    /// - ReconciledQuantities: 一致、有界的派生视图（含修正告警）
    pub fn derive(
        &self,
        material: &Material,
        quantities: &StockQuantities,
        policy: &ReconcilePolicy,
    ) -> ReconciledQuantities {
        let mut warnings = Vec::new();
        let effective_strict = policy.effective_strict(material.is_unitary);

        // === 步骤 1: 应到单元数量 ===
        let awaited_units_quantity = ReconcileCore::awaited_units_quantity(material);

        // === 步骤 2: 总应到数量 ===
        let (awaited_quantity, mut awaited_warnings) =
            ReconcileCore::derive_awaited_quantity(material, policy.locked);
        warnings.append(&mut awaited_warnings);

        // === 步骤 3: 散装应到数量 ===
        let awaited_external_quantity =
            ReconcileCore::awaited_external_quantity(material, awaited_quantity);

        // === 步骤 4: 实到单元数量 ===
        let actual_units_quantity =
            ReconcileCore::actual_units_quantity(material, &quantities.units);

        // === 步骤 5: 实到数量 ===
        // 默认值策略: Option 在此边界统一折算为 0
        let raw_actual = quantities.actual.unwrap_or(0);
        let actual_quantity = if policy.locked {
            // 锁定模式: 原始值直通, 不修正不告警
            raw_actual
        } else {
            let (value, mut actual_warnings) = ReconcileCore::clamp_actual(
                &material.id,
                raw_actual,
                effective_strict,
                material.is_unitary,
                awaited_quantity,
                actual_units_quantity,
                awaited_external_quantity,
            );
            warnings.append(&mut actual_warnings);
            value
        };

        // === 步骤 6: 故障单元数量 ===
        let broken_units_quantity =
            ReconcileCore::broken_units_quantity(material, &quantities.units);

        // === 步骤 7: 故障数量 ===
        let raw_broken = quantities.broken.unwrap_or(0);
        let broken_quantity = if policy.locked {
            raw_broken
        } else {
            let (value, mut broken_warnings) = ReconcileCore::clamp_broken(
                &material.id,
                raw_broken,
                actual_quantity,
                material.is_unitary,
                broken_units_quantity,
                awaited_external_quantity,
            );
            warnings.append(&mut broken_warnings);
            value
        };

        // === 步骤 8-9: 编辑上界 ===
        let (currently_awaited_actual_quantity, currently_awaited_broken_quantity) =
            if material.is_unitary {
                (
                    awaited_external_quantity + actual_units_quantity,
                    awaited_external_quantity + broken_units_quantity,
                )
            } else {
                (awaited_quantity, awaited_quantity)
            };

        // === 步骤 10: 盘齐判定 ===
        let is_complete = actual_quantity >= awaited_quantity;

        // === 步骤 11: 只读判定 ===
        // 单元化材料在期望已被单元全覆盖时没有可编辑的散装余量
        let is_read_only = policy.locked
            || (material.is_unitary && awaited_quantity <= awaited_units_quantity);

        // === 步骤 12: 故障标志 ===
        let has_broken = broken_quantity > 0;

        ReconciledQuantities {
            material_id: material.id.clone(),
            awaited_units_quantity,
            awaited_quantity,
            awaited_external_quantity,
            actual_units_quantity,
            actual_quantity,
            broken_units_quantity,
            broken_quantity,
            currently_awaited_actual_quantity,
            currently_awaited_broken_quantity,
            effective_strict,
            is_complete,
            is_read_only,
            has_broken,
            warnings,
        }
    }
}

impl Default for QuantityReconciler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::{MaterialUnit, UnitDescriptor};
    use crate::domain::types::QuantityWarningKind;

    fn unitary_material(id: &str, awaited: Option<i32>, unit_count: usize) -> Material {
        let units = (0..unit_count)
            .map(|i| UnitDescriptor::new(&format!("U{}", i + 1)))
            .collect();
        Material::unitary(id, awaited, units)
    }

    #[test]
    fn test_derive_bulk_consistent_input() {
        let reconciler = QuantityReconciler::new();
        let material = Material::bulk("M001", Some(10));
        let quantities = StockQuantities::bulk(Some(8), Some(2));

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::new());

        assert_eq!(derived.awaited_quantity, 10);
        assert_eq!(derived.awaited_external_quantity, 10);
        assert_eq!(derived.actual_quantity, 8);
        assert_eq!(derived.broken_quantity, 2);
        assert_eq!(derived.currently_awaited_actual_quantity, 10);
        assert_eq!(derived.currently_awaited_broken_quantity, 10);
        assert!(!derived.is_complete);
        assert!(!derived.is_read_only);
        assert!(derived.has_broken);
        assert!(derived.warnings.is_empty());
    }

    #[test]
    fn test_derive_missing_counts_default_zero() {
        // Option 字段缺省 → 按 0 推导, 无告警
        let reconciler = QuantityReconciler::new();
        let material = Material::bulk("M001", Some(10));
        let quantities = StockQuantities::empty();

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::new());

        assert_eq!(derived.actual_quantity, 0);
        assert_eq!(derived.broken_quantity, 0);
        assert!(!derived.has_broken);
        assert!(derived.warnings.is_empty());
    }

    #[test]
    fn test_derive_unitary_floors_and_bounds() {
        // 3 个单元: 2 未丢失, 1 丢失; 其中 1 故障
        let reconciler = QuantityReconciler::new();
        let material = unitary_material("M001", Some(5), 3);
        let quantities = StockQuantities {
            units: vec![
                MaterialUnit::new("U1", false, false),
                MaterialUnit::new("U2", false, true),
                MaterialUnit::new("U3", true, false),
            ],
            actual: Some(1), // < 实到单元数 2
            broken: Some(0), // < 故障单元数 1
        };

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::new());

        assert_eq!(derived.awaited_units_quantity, 3);
        assert_eq!(derived.awaited_external_quantity, 2);
        assert_eq!(derived.actual_units_quantity, 2);
        assert_eq!(derived.actual_quantity, 2); // 提升到单元下限
        assert_eq!(derived.broken_units_quantity, 1);
        assert_eq!(derived.broken_quantity, 1); // 提升到单元下限
        assert_eq!(derived.currently_awaited_actual_quantity, 4); // 2 + 2
        assert_eq!(derived.currently_awaited_broken_quantity, 3); // 2 + 1
        assert!(derived
            .warnings
            .iter()
            .any(|w| w.kind == QuantityWarningKind::ActualBelowUnits));
        assert!(derived
            .warnings
            .iter()
            .any(|w| w.kind == QuantityWarningKind::BrokenBelowUnits));
    }

    #[test]
    fn test_derive_unitary_implicit_strict() {
        // 单元化材料即使策略非严格也按严格封顶
        let reconciler = QuantityReconciler::new();
        let material = unitary_material("M001", Some(3), 3);
        let quantities = StockQuantities {
            units: vec![
                MaterialUnit::new("U1", false, false),
                MaterialUnit::new("U2", false, false),
                MaterialUnit::new("U3", false, false),
            ],
            actual: Some(9),
            broken: None,
        };

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::new());

        assert!(derived.effective_strict);
        assert_eq!(derived.actual_quantity, 3);
        assert!(derived
            .warnings
            .iter()
            .any(|w| w.kind == QuantityWarningKind::ActualAboveAwaited));
    }

    #[test]
    fn test_derive_broken_capped_by_actual() {
        let reconciler = QuantityReconciler::new();
        let material = Material::bulk("M001", Some(10));
        let quantities = StockQuantities::bulk(Some(3), Some(7));

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::new());

        assert_eq!(derived.actual_quantity, 3);
        assert_eq!(derived.broken_quantity, 3);
        assert!(derived
            .warnings
            .iter()
            .any(|w| w.kind == QuantityWarningKind::BrokenAboveActual));
    }

    #[test]
    fn test_derive_locked_passthrough_invalid_values() {
        // 锁定模式: 非法原始值原样直通, 无告警, 字段只读
        let reconciler = QuantityReconciler::new();
        let material = Material::bulk("M001", Some(10));
        let quantities = StockQuantities::bulk(Some(-5), Some(-2));

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::locked());

        assert_eq!(derived.actual_quantity, -5);
        assert_eq!(derived.broken_quantity, -2);
        assert!(derived.warnings.is_empty());
        assert!(derived.is_read_only);
        assert!(!derived.is_complete);
    }

    #[test]
    fn test_derive_read_only_fully_tracked_unitary() {
        // 应到数量全部由单元覆盖 → 无散装余量可编辑
        let reconciler = QuantityReconciler::new();
        let material = unitary_material("M001", Some(2), 2);
        let quantities = StockQuantities {
            units: vec![
                MaterialUnit::new("U1", false, false),
                MaterialUnit::new("U2", false, false),
            ],
            actual: Some(2),
            broken: Some(0),
        };

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::new());

        assert!(derived.is_read_only);
        assert!(derived.is_complete);
    }

    #[test]
    fn test_derive_invariants_hold_on_adversarial_input() {
        // 任意非法输入派生后不变式仍成立（非锁定）
        let reconciler = QuantityReconciler::new();
        let material = unitary_material("M001", Some(4), 3);
        let quantities = StockQuantities {
            units: vec![
                MaterialUnit::new("U1", false, true),
                MaterialUnit::new("U2", true, false),
                MaterialUnit::new("U3", false, false),
            ],
            actual: Some(-10),
            broken: Some(99),
        };

        let derived = reconciler.derive(&material, &quantities, &ReconcilePolicy::new());

        assert!(derived.actual_quantity >= 0);
        assert!(derived.broken_quantity >= 0);
        assert!(derived.broken_quantity <= derived.actual_quantity);
        assert!(derived.actual_quantity >= derived.actual_units_quantity);
        assert!(derived.broken_quantity >= derived.broken_units_quantity);
        assert!(derived.actual_quantity <= derived.awaited_quantity);
        assert!(derived.awaited_quantity >= derived.awaited_units_quantity);
    }
}
