// crates/mh_sww/src/dataset.rs

//! 数据集与时间步快照
//!
//! 一个 [`DataSet`] 是网格上的一个命名物理场（床面高程、水深、动量），
//! 按时间顺序拥有若干 [`Output`]。静态场恰有一个时刻为 0 的 Output。
//!
//! # 设计要点
//!
//! 1. **追加式构建**: 加载期间逐时间步 `add_output`，完成后一次性
//!    `update_value_range` 缓存取值范围
//! 2. **标量表示**: 向量场同时存储逐节点向量和其模长，模长即该
//!    数据集的标量表示（用于着色/范围）
//! 3. **激活数组**: 逐单元布尔数组标记该时刻的干湿状态

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 数据集类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSetType {
    /// 床面高程（静态）
    Bed,
    /// 标量场
    Scalar,
    /// 向量场
    Vector,
}

/// 单个时间步的快照
///
/// 数组长度约定：`values` 为节点数，`active` 为单元数，
/// `values_v`（仅向量场）为节点数。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Output {
    /// 时刻（小时）
    pub time: f64,
    /// 逐节点标量值（向量场时为模长）
    pub values: Vec<f32>,
    /// 逐节点向量值（仅向量场）
    pub values_v: Option<Vec<Vec2>>,
    /// 逐单元干湿激活状态
    pub active: Vec<bool>,
}

impl Output {
    /// 创建标量场快照，值零初始化，单元全部未激活
    pub fn scalar(n_nodes: usize, n_elements: usize) -> Self {
        Self {
            time: 0.0,
            values: vec![0.0; n_nodes],
            values_v: None,
            active: vec![false; n_elements],
        }
    }

    /// 创建向量场快照
    pub fn vector(n_nodes: usize, n_elements: usize) -> Self {
        Self {
            time: 0.0,
            values: vec![0.0; n_nodes],
            values_v: Some(vec![Vec2::ZERO; n_nodes]),
            active: vec![false; n_elements],
        }
    }

    /// 节点数量
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.values.len()
    }

    /// 单元数量
    #[inline]
    pub fn n_elements(&self) -> usize {
        self.active.len()
    }
}

/// 命名物理场
///
/// 按插入顺序（即文件时间步顺序）拥有 Output 序列。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSet {
    name: String,
    dataset_type: DataSetType,
    time_varying: bool,
    outputs: Vec<Output>,
    /// 全序列标量值范围缓存，`update_value_range` 之后有效
    value_range: Option<(f32, f32)>,
}

impl DataSet {
    /// 创建数据集
    pub fn new(name: impl Into<String>, dataset_type: DataSetType) -> Self {
        Self {
            name: name.into(),
            dataset_type,
            time_varying: false,
            outputs: Vec::new(),
            value_range: None,
        }
    }

    /// 设置是否随时间变化
    pub fn with_time_varying(mut self, time_varying: bool) -> Self {
        self.time_varying = time_varying;
        self
    }

    /// 名称
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 类型
    #[inline]
    pub fn dataset_type(&self) -> DataSetType {
        self.dataset_type
    }

    /// 是否随时间变化
    #[inline]
    pub fn is_time_varying(&self) -> bool {
        self.time_varying
    }

    /// Output 数量
    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// 获取指定时间步的 Output
    #[inline]
    pub fn output(&self, index: usize) -> Option<&Output> {
        self.outputs.get(index)
    }

    /// Output 序列（时间升序）
    #[inline]
    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    /// 追加一个时间步（获得所有权）
    pub fn add_output(&mut self, output: Output) {
        self.outputs.push(output);
    }

    /// 取值范围缓存
    #[inline]
    pub fn value_range(&self) -> Option<(f32, f32)> {
        self.value_range
    }

    /// 计算并缓存全序列标量值范围
    ///
    /// 跳过 NaN；没有任何有效值时缓存保持 `None`。
    pub fn update_value_range(&mut self) {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for output in &self.outputs {
            for &v in &output.values {
                if v.is_nan() {
                    continue;
                }
                min = min.min(v);
                max = max.max(v);
            }
        }
        if min <= max {
            self.value_range = Some((min, max));
        }
    }
}
