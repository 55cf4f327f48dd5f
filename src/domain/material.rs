// ==========================================
// 设备租赁库存盘点系统 - 材料领域模型
// ==========================================
// 依据: Recon_Design_v0.2.md - 数据模型
// 红线: 引擎只读输入, 修正结果通过变更事件上抛, 不回写输入
// 用途: 调用方每轮盘点评估重新提供全量输入
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// Material - 材料目录属性
// ==========================================
// 外部所有, 引擎只读
// is_unitary: 单元化材料(逐件序列号管理) vs 散装计数材料
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    // ===== 主键 =====
    pub id: String, // 材料唯一标识

    // ===== 基础信息 =====
    pub name: Option<String>, // 材料名称（展示用, 引擎不解释）

    // ===== 盘点口径 =====
    pub is_unitary: bool,                  // 是否单元化管理
    pub awaited_quantity: Option<i32>,     // 总应到数量（可缺省, 边界处默认 0）
    pub awaited_units: Vec<UnitDescriptor>, // 应到单元清单（仅单元化材料有意义）
}

impl Material {
    /// 创建散装材料
    pub fn bulk(id: &str, awaited_quantity: Option<i32>) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            is_unitary: false,
            awaited_quantity,
            awaited_units: Vec::new(),
        }
    }

    /// 创建单元化材料
    pub fn unitary(
        id: &str,
        awaited_quantity: Option<i32>,
        awaited_units: Vec<UnitDescriptor>,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            is_unitary: true,
            awaited_quantity,
            awaited_units,
        }
    }
}

// ==========================================
// UnitDescriptor - 应到单元描述
// ==========================================
// 用途: 单元化材料的期望单元（目录侧, 无盘点标志）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitDescriptor {
    pub id: String,                // 单元唯一标识
    pub reference: Option<String>, // 序列号/资产编号（展示用）
}

impl UnitDescriptor {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            reference: None,
        }
    }
}

// ==========================================
// MaterialUnit - 盘点单元
// ==========================================
// 用途: 盘点状态中的单元, 携带丢失/故障两个标志
// 标志相互独立: 一个单元可以同时丢失且故障
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialUnit {
    pub id: String,                // 单元唯一标识
    pub reference: Option<String>, // 序列号/资产编号
    pub is_lost: bool,             // 丢失标志（丢失单元不计入实到）
    pub is_broken: bool,           // 故障标志（计入故障数量下限）
}

impl MaterialUnit {
    pub fn new(id: &str, is_lost: bool, is_broken: bool) -> Self {
        Self {
            id: id.to_string(),
            reference: None,
            is_lost,
            is_broken,
        }
    }
}

// ==========================================
// StockQuantities - 盘点状态
// ==========================================
// 外部所有: 当前这一轮的原始盘点计数, 可能不一致
// 红线: Option 字段的默认值策略(0)只在推导边界应用一次
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuantities {
    pub units: Vec<MaterialUnit>, // 盘点单元清单（仅单元化材料有意义）
    pub actual: Option<i32>,      // 实到总数（原始值, 未经修正）
    pub broken: Option<i32>,      // 故障总数（原始值, 未经修正）
}

impl StockQuantities {
    /// 创建空盘点状态（全部字段缺省）
    pub fn empty() -> Self {
        Self {
            units: Vec::new(),
            actual: None,
            broken: None,
        }
    }

    /// 创建散装盘点状态
    pub fn bulk(actual: Option<i32>, broken: Option<i32>) -> Self {
        Self {
            units: Vec::new(),
            actual,
            broken,
        }
    }
}

// ==========================================
// QuantityChange - 数量变更事件
// ==========================================
// 用途: 编辑操作上抛的修正结果, 调用方负责持久化后
//       作为下一轮评估的 StockQuantities 输入回灌
// 红线: 单次同步上抛完整元组, 无部分/多步上抛
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuantityChange {
    pub event_id: String,         // 事件 ID（UUID）
    pub material_id: String,      // 材料 ID
    pub actual: i32,              // 修正后的实到数量
    pub broken: i32,              // 修正后的故障数量
    pub units: Vec<MaterialUnit>, // 单元清单（原样携带）
    pub recorded_at: DateTime<Utc>, // 事件生成时间
}

impl QuantityChange {
    pub fn new(material_id: &str, actual: i32, broken: i32, units: Vec<MaterialUnit>) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            material_id: material_id.to_string(),
            actual,
            broken,
            units,
            recorded_at: Utc::now(),
        }
    }

    /// 回灌为下一轮评估的盘点状态
    pub fn into_quantities(self) -> StockQuantities {
        StockQuantities {
            units: self.units,
            actual: Some(self.actual),
            broken: Some(self.broken),
        }
    }
}
