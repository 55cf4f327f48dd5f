// ==========================================
// 设备租赁库存盘点系统 - 盘点策略配置
// ==========================================
// 依据: Recon_Design_v0.2.md - 盘点策略与运行模式
// 红线: strict 与单元化的隐式耦合只在 effective_strict 计算一次,
//       不允许在各修正点重复 OR 条件
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ReconcilePolicy - 盘点策略
// ==========================================
// locked: 盘点已在上游定稿, 推导直通原始值, 字段只读
// strict: 实到/故障数量硬性封顶在总应到数量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilePolicy {
    pub locked: bool, // 锁定模式
    pub strict: bool, // 严格模式
}

impl ReconcilePolicy {
    /// 创建默认策略（非锁定、非严格）
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建严格策略
    pub fn strict() -> Self {
        Self {
            locked: false,
            strict: true,
        }
    }

    /// 创建锁定策略
    pub fn locked() -> Self {
        Self {
            locked: true,
            strict: false,
        }
    }

    /// 计算有效严格模式
    ///
    /// # 规则
    /// - 单元化材料隐式进入严格模式: effective_strict = strict || is_unitary
    pub fn effective_strict(&self, is_unitary: bool) -> bool {
        self.strict || is_unitary
    }
}
