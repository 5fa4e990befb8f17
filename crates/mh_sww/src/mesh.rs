// crates/mh_sww/src/mesh.rs

//! 网格数据模型
//!
//! 提供解码结果的只读网格结构：节点、三角形单元以及按顺序挂载的
//! 数据集集合。
//!
//! # 设计要点
//!
//! 1. **构造后不可变**: 节点与单元在加载阶段一次性建好，下游只读
//! 2. **索引即编号**: 节点/单元的 id 等于其在数组中的下标
//! 3. **独占所有权**: Mesh 拥有 DataSet，DataSet 拥有 Output，无反向引用

use serde::{Deserialize, Serialize};

use crate::dataset::DataSet;

/// 网格节点
///
/// 平面位置已含全局偏移（`xllcorner`/`yllcorner`）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// 节点编号（等于数组下标）
    pub id: usize,
    /// X 坐标
    pub x: f64,
    /// Y 坐标
    pub y: f64,
}

impl Node {
    /// 创建节点
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

/// 单元拓扑类型
///
/// 本解码器只产出三角形（`E3T`），枚举保留是因为 SWW 所属的格式家族
/// 还定义了其他单元类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    /// 三节点三角形
    E3T,
}

/// 网格单元
///
/// 顶点索引按文件存储顺序保留（不规范化绕向）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// 单元编号（等于数组下标）
    pub id: usize,
    /// 单元拓扑类型
    pub element_type: ElementType,
    /// 三个顶点的节点索引
    pub vertices: [usize; 3],
}

impl Element {
    /// 创建三角形单元
    pub fn triangle(id: usize, vertices: [usize; 3]) -> Self {
        Self {
            id,
            element_type: ElementType::E3T,
            vertices,
        }
    }
}

/// 结果网格
///
/// 拥有节点序列、单元序列和有序的数据集集合。
///
/// # 不变量
///
/// - 每个单元的顶点索引都落在 `0..n_nodes()` 内
/// - 节点数与单元数构造后固定
/// - 数据集中每个 Output 的数组长度与网格节点数/单元数一致
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    nodes: Vec<Node>,
    elements: Vec<Element>,
    datasets: Vec<DataSet>,
}

impl Mesh {
    /// 由节点与单元序列创建网格
    pub fn new(nodes: Vec<Node>, elements: Vec<Element>) -> Self {
        Self {
            nodes,
            elements,
            datasets: Vec::new(),
        }
    }

    /// 节点数量
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// 单元数量
    #[inline]
    pub fn n_elements(&self) -> usize {
        self.elements.len()
    }

    /// 数据集数量
    #[inline]
    pub fn n_datasets(&self) -> usize {
        self.datasets.len()
    }

    /// 节点序列
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// 单元序列
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// 数据集序列（加载顺序）
    #[inline]
    pub fn datasets(&self) -> &[DataSet] {
        &self.datasets
    }

    /// 获取指定数据集
    #[inline]
    pub fn dataset(&self, index: usize) -> Option<&DataSet> {
        self.datasets.get(index)
    }

    /// 按名称查找数据集
    pub fn dataset_by_name(&self, name: &str) -> Option<&DataSet> {
        self.datasets.iter().find(|ds| ds.name() == name)
    }

    /// 追加数据集（获得所有权）
    pub fn add_dataset(&mut self, dataset: DataSet) {
        self.datasets.push(dataset);
    }
}
