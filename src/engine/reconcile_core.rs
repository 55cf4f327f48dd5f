// ==========================================
// 设备租赁库存盘点系统 - Reconcile Core 纯函数库
// ==========================================
// 依据: Recon_Design_v0.2.md - 数量修正规则
// 职责: 提供应到/实到/故障数量的计数、推导与修正纯逻辑
// 红线: 无状态、无副作用、无 I/O 操作; 所有修正必须输出告警
// ==========================================

use crate::domain::material::{Material, MaterialUnit};
use crate::domain::types::{QuantityWarning, QuantityWarningKind};

// ==========================================
// ReconcileCore - 纯函数工具类
// ==========================================
pub struct ReconcileCore;

impl ReconcileCore {
    /// 计算应到单元数量
    ///
    /// # 规则 (派生规则 1)
    /// - 单元化材料 → awaited_units 的长度
    /// - 散装材料 → 0
    pub fn awaited_units_quantity(material: &Material) -> i32 {
        if material.is_unitary {
            material.awaited_units.len() as i32
        } else {
            0
        }
    }

    /// 计算实到单元数量
    ///
    /// # 规则 (派生规则 4)
    /// - 单元化材料 → is_lost == false 的单元数
    /// - 散装材料 → 0
    pub fn actual_units_quantity(material: &Material, units: &[MaterialUnit]) -> i32 {
        if material.is_unitary {
            units.iter().filter(|u| !u.is_lost).count() as i32
        } else {
            0
        }
    }

    /// 计算故障单元数量
    ///
    /// # 规则 (派生规则 6)
    /// - 单元化材料 → is_broken == true 的单元数
    /// - 散装材料 → 0
    pub fn broken_units_quantity(material: &Material, units: &[MaterialUnit]) -> i32 {
        if material.is_unitary {
            units.iter().filter(|u| u.is_broken).count() as i32
        } else {
            0
        }
    }

    /// 推导总应到数量
    ///
    /// # 规则 (派生规则 2)
    /// 1. locked → 申报值直通（缺省为 0）, 不修正不告警
    /// 2. 单元化 且 申报值 < 应到单元数量 → 告警并提升为应到单元数量
    /// 3. 否则 → 申报值
    ///
    /// # 返回
    /// - (i32, Vec<QuantityWarning>): 应到数量 + 修正告警
    pub fn derive_awaited_quantity(
        material: &Material,
        locked: bool,
    ) -> (i32, Vec<QuantityWarning>) {
        // 默认值策略: Option 在此边界统一折算为 0
        let declared = material.awaited_quantity.unwrap_or(0);
        if locked {
            return (declared, Vec::new());
        }

        let awaited_units = Self::awaited_units_quantity(material);
        if material.is_unitary && declared < awaited_units {
            let warning = QuantityWarning::new(
                &material.id,
                QuantityWarningKind::AwaitedBelowUnits,
                declared,
                awaited_units,
            );
            return (awaited_units, vec![warning]);
        }

        (declared, Vec::new())
    }

    /// 计算散装应到数量（期望中未被单元覆盖的部分）
    ///
    /// # 规则 (派生规则 3)
    /// - 单元化 → awaited_quantity - 应到单元数量
    /// - 散装 → awaited_quantity
    pub fn awaited_external_quantity(material: &Material, awaited_quantity: i32) -> i32 {
        if material.is_unitary {
            awaited_quantity - Self::awaited_units_quantity(material)
        } else {
            awaited_quantity
        }
    }

    /// 修正实到数量
    ///
    /// # 规则 (派生规则 5, 编辑操作共用同一序列)
    /// a. raw < 0 → 修正为 0
    /// b. 有效严格模式 且 > awaited_quantity → 封顶为 awaited_quantity
    /// c. 单元化 且 < 实到单元数量 → 提升为实到单元数量
    /// d. 单元化 且 散装部分 > 散装应到数量 → 封顶为 实到单元数量 + 散装应到数量
    ///
    /// # 参数
    /// - raw: 原始实到数量（边界处已折算默认值）
    /// - effective_strict: 有效严格模式（strict || is_unitary, 上游计算一次）
    ///
    /// # 返回
    /// - (i32, Vec<QuantityWarning>): 修正后实到数量 + 修正告警
    pub fn clamp_actual(
        material_id: &str,
        raw: i32,
        effective_strict: bool,
        is_unitary: bool,
        awaited_quantity: i32,
        actual_units_quantity: i32,
        awaited_external_quantity: i32,
    ) -> (i32, Vec<QuantityWarning>) {
        let mut warnings = Vec::new();
        let mut value = raw;

        // 规则 a: 下限 0
        if value < 0 {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::ActualBelowZero,
                value,
                0,
            ));
            value = 0;
        }

        // 规则 b: 严格模式封顶
        if effective_strict && value > awaited_quantity {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::ActualAboveAwaited,
                value,
                awaited_quantity,
            ));
            value = awaited_quantity;
        }

        // 规则 c: 单元化下限（实到不得少于未丢失单元数）
        if is_unitary && value < actual_units_quantity {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::ActualBelowUnits,
                value,
                actual_units_quantity,
            ));
            value = actual_units_quantity;
        }

        // 规则 d: 单元化散装上限
        if is_unitary {
            let external = value - actual_units_quantity;
            if external > awaited_external_quantity {
                let ceiling = actual_units_quantity + awaited_external_quantity;
                warnings.push(QuantityWarning::new(
                    material_id,
                    QuantityWarningKind::ActualExternalAboveAwaited,
                    value,
                    ceiling,
                ));
                value = ceiling;
            }
        }

        (value, warnings)
    }

    /// 修正故障数量（推导路径）
    ///
    /// # 规则 (派生规则 7)
    /// 检查顺序: 负值 → 超过实到 → 单元化下限 → 单元化散装上限
    ///
    /// # 参数
    /// - actual_quantity: 已修正的实到数量（上界）
    ///
    /// # 返回
    /// - (i32, Vec<QuantityWarning>): 修正后故障数量 + 修正告警
    pub fn clamp_broken(
        material_id: &str,
        raw: i32,
        actual_quantity: i32,
        is_unitary: bool,
        broken_units_quantity: i32,
        awaited_external_quantity: i32,
    ) -> (i32, Vec<QuantityWarning>) {
        let mut warnings = Vec::new();
        let mut value = raw;

        // 规则 a: 下限 0
        if value < 0 {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::BrokenBelowZero,
                value,
                0,
            ));
            value = 0;
        }

        // 规则 b: 故障不得超过实到
        if value > actual_quantity {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::BrokenAboveActual,
                value,
                actual_quantity,
            ));
            value = actual_quantity;
        }

        // 规则 c: 单元化下限（故障不得少于故障单元数）
        if is_unitary && value < broken_units_quantity {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::BrokenBelowUnits,
                value,
                broken_units_quantity,
            ));
            value = broken_units_quantity;
        }

        // 规则 d: 单元化散装上限
        if is_unitary {
            let external = value - broken_units_quantity;
            if external > awaited_external_quantity {
                let ceiling = broken_units_quantity + awaited_external_quantity;
                warnings.push(QuantityWarning::new(
                    material_id,
                    QuantityWarningKind::BrokenExternalAboveAwaited,
                    value,
                    ceiling,
                ));
                value = ceiling;
            }
        }

        (value, warnings)
    }

    /// 修正故障数量（编辑路径）
    ///
    /// # 规则 (4.1 编辑操作 setBrokenQuantity)
    /// 编辑路径不含"超过实到"上限: 跨字段一致性由编辑操作
    /// 抬升实到数量完成, 而不是压低故障数量。
    /// 检查顺序: 负值 → 严格模式封顶 → 单元化下限 → 单元化散装上限
    pub fn clamp_broken_edit(
        material_id: &str,
        raw: i32,
        effective_strict: bool,
        is_unitary: bool,
        awaited_quantity: i32,
        broken_units_quantity: i32,
        awaited_external_quantity: i32,
    ) -> (i32, Vec<QuantityWarning>) {
        let mut warnings = Vec::new();
        let mut value = raw;

        // 规则 a: 下限 0
        if value < 0 {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::BrokenBelowZero,
                value,
                0,
            ));
            value = 0;
        }

        // 规则 b: 严格模式封顶
        if effective_strict && value > awaited_quantity {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::BrokenAboveAwaited,
                value,
                awaited_quantity,
            ));
            value = awaited_quantity;
        }

        // 规则 c: 单元化下限
        if is_unitary && value < broken_units_quantity {
            warnings.push(QuantityWarning::new(
                material_id,
                QuantityWarningKind::BrokenBelowUnits,
                value,
                broken_units_quantity,
            ));
            value = broken_units_quantity;
        }

        // 规则 d: 单元化散装上限
        if is_unitary {
            let external = value - broken_units_quantity;
            if external > awaited_external_quantity {
                let ceiling = broken_units_quantity + awaited_external_quantity;
                warnings.push(QuantityWarning::new(
                    material_id,
                    QuantityWarningKind::BrokenExternalAboveAwaited,
                    value,
                    ceiling,
                ));
                value = ceiling;
            }
        }

        (value, warnings)
    }
}
