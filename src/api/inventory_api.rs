// ==========================================
// 设备租赁库存盘点系统 - 盘点 API
// ==========================================
// 职责: 面向调用方的进程内接口: 前置校验 → 派生 → 告警落日志
// 红线: 告警只落运维日志, 不作为错误抛给最终用户;
//       外部 error 对象不解释、不校验, 原样透传展示
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReconcilePolicy;
use crate::domain::material::{Material, QuantityChange, StockQuantities};
use crate::domain::types::{QuantityWarning, RowStatus};
use crate::engine::{QuantityEditor, QuantityReconciler, ReconciledQuantities};
use crate::i18n::t_with_args;

// ==========================================
// MaterialRowView - 材料行视图
// ==========================================
// 展示层消费: 派生数量 + 样式标志 + 透传的外部错误
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRowView {
    pub material_id: String,              // 材料 ID
    pub derived: ReconciledQuantities,    // 派生数量视图
    pub status: RowStatus,                // 行样式标志
    pub display_error: Option<serde_json::Value>, // 外部错误（不透明, 原样透传）
}

// ==========================================
// InventoryApi - 盘点接口
// ==========================================
pub struct InventoryApi {
    reconciler: QuantityReconciler,
    editor: QuantityEditor,
}

impl InventoryApi {
    /// 创建新的 InventoryApi 实例
    pub fn new() -> Self {
        Self {
            reconciler: QuantityReconciler::new(),
            editor: QuantityEditor::new(),
        }
    }

    /// 评估一行材料的盘点状态
    ///
    /// # 参数
    /// - material: 材料目录属性
    /// - quantities: 当前盘点状态
    /// - policy: 盘点策略
    /// - display_error: 外部错误对象（调用方所有, 仅透传展示）
    ///
    /// # 返回
    /// - MaterialRowView: 派生视图 + 行样式标志
    pub fn evaluate(
        &self,
        material: &Material,
        quantities: &StockQuantities,
        policy: &ReconcilePolicy,
        display_error: Option<serde_json::Value>,
    ) -> ApiResult<MaterialRowView> {
        Self::validate_inputs(material, quantities)?;

        let derived = self.reconciler.derive(material, quantities, policy);
        Self::log_warnings(&derived.warnings);

        let status = Self::row_status(policy, &derived);

        Ok(MaterialRowView {
            material_id: material.id.clone(),
            derived,
            status,
            display_error,
        })
    }

    /// 编辑实到数量
    ///
    /// # 返回
    /// - Ok(Some(QuantityChange)): 修正后的变更事件, 调用方负责持久化并回灌
    /// - Ok(None): 行只读, 编辑为 no-op
    pub fn set_actual_quantity(
        &self,
        material: &Material,
        quantities: &StockQuantities,
        policy: &ReconcilePolicy,
        new_value: i32,
    ) -> ApiResult<Option<QuantityChange>> {
        Self::validate_inputs(material, quantities)?;

        match self
            .editor
            .set_actual_quantity(material, quantities, policy, new_value)
        {
            Some(outcome) => {
                Self::log_warnings(&outcome.warnings);
                Ok(Some(outcome.change))
            }
            None => Ok(None),
        }
    }

    /// 编辑故障数量
    ///
    /// # 返回
    /// - Ok(Some(QuantityChange)): 修正后的变更事件
    /// - Ok(None): 行只读, 编辑为 no-op
    pub fn set_broken_quantity(
        &self,
        material: &Material,
        quantities: &StockQuantities,
        policy: &ReconcilePolicy,
        new_value: i32,
    ) -> ApiResult<Option<QuantityChange>> {
        Self::validate_inputs(material, quantities)?;

        match self
            .editor
            .set_broken_quantity(material, quantities, policy, new_value)
        {
            Some(outcome) => {
                Self::log_warnings(&outcome.warnings);
                Ok(Some(outcome.change))
            }
            None => Ok(None),
        }
    }

    /// 输入形状前置校验
    ///
    /// 数值不一致由推导修正, 这里只拦截形状错误:
    /// 散装材料不应携带单元清单（目录侧或盘点侧）
    fn validate_inputs(material: &Material, quantities: &StockQuantities) -> ApiResult<()> {
        if !material.is_unitary {
            if !material.awaited_units.is_empty() {
                return Err(ApiError::InvalidInput(format!(
                    "散装材料 {} 不应携带应到单元清单",
                    material.id
                )));
            }
            if !quantities.units.is_empty() {
                return Err(ApiError::InvalidInput(format!(
                    "散装材料 {} 不应携带盘点单元清单",
                    material.id
                )));
            }
        }
        Ok(())
    }

    /// 计算行样式标志
    ///
    /// # 规则
    /// - 锁定 且 未盘齐 → ERROR
    /// - 存在故障数量 → WARNING
    /// - 否则 → NORMAL
    fn row_status(policy: &ReconcilePolicy, derived: &ReconciledQuantities) -> RowStatus {
        if policy.locked && !derived.is_complete {
            RowStatus::Error
        } else if derived.has_broken {
            RowStatus::Warning
        } else {
            RowStatus::Normal
        }
    }

    /// 将修正告警写入运维日志通道
    fn log_warnings(warnings: &[QuantityWarning]) {
        for warning in warnings {
            let raw = warning.raw.to_string();
            let clamped = warning.clamped.to_string();
            let message = t_with_args(
                warning.kind.message_key(),
                &[
                    ("material_id", warning.material_id.as_str()),
                    ("raw", raw.as_str()),
                    ("clamped", clamped.as_str()),
                ],
            );
            tracing::warn!(
                material_id = %warning.material_id,
                code = warning.kind.code(),
                raw = warning.raw,
                clamped = warning.clamped,
                "{}",
                message
            );
        }
    }
}

impl Default for InventoryApi {
    fn default() -> Self {
        Self::new()
    }
}
