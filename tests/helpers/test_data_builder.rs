// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use rental_inventory::domain::material::{
    Material, MaterialUnit, StockQuantities, UnitDescriptor,
};

// ==========================================
// Material 构建器
// ==========================================

pub struct MaterialBuilder {
    id: String,
    name: Option<String>,
    is_unitary: bool,
    awaited_quantity: Option<i32>,
    awaited_units: Vec<UnitDescriptor>,
}

impl MaterialBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            is_unitary: false,
            awaited_quantity: None,
            awaited_units: Vec::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn awaited(mut self, quantity: i32) -> Self {
        self.awaited_quantity = Some(quantity);
        self
    }

    /// 声明为单元化材料并生成 count 个应到单元
    pub fn unitary(mut self, count: usize) -> Self {
        self.is_unitary = true;
        self.awaited_units = (0..count)
            .map(|i| UnitDescriptor::new(&format!("{}-U{}", self.id, i + 1)))
            .collect();
        self
    }

    pub fn build(self) -> Material {
        Material {
            id: self.id,
            name: self.name,
            is_unitary: self.is_unitary,
            awaited_quantity: self.awaited_quantity,
            awaited_units: self.awaited_units,
        }
    }
}

// ==========================================
// StockQuantities 构建器
// ==========================================

pub struct QuantitiesBuilder {
    units: Vec<MaterialUnit>,
    actual: Option<i32>,
    broken: Option<i32>,
}

impl QuantitiesBuilder {
    pub fn new() -> Self {
        Self {
            units: Vec::new(),
            actual: None,
            broken: None,
        }
    }

    pub fn actual(mut self, quantity: i32) -> Self {
        self.actual = Some(quantity);
        self
    }

    pub fn broken(mut self, quantity: i32) -> Self {
        self.broken = Some(quantity);
        self
    }

    /// 追加一个盘点单元
    pub fn unit(mut self, id: &str, is_lost: bool, is_broken: bool) -> Self {
        self.units.push(MaterialUnit::new(id, is_lost, is_broken));
        self
    }

    pub fn build(self) -> StockQuantities {
        StockQuantities {
            units: self.units,
            actual: self.actual,
            broken: self.broken,
        }
    }
}

impl Default for QuantitiesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
