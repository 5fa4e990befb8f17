// crates/mh_sww/src/lib.rs

//! SWW 水动力结果文件解码器
//!
//! SWW 是一种自描述数组容器格式，存储非结构三角网格与随时间变化的
//! 水动力结果。本 crate 把它解码为内存中的网格-时序数据模型：
//! 重建节点/单元拓扑，从原始存储变量派生多个物理结果场（床面高程、
//! 水深、干湿状态、动量向量及模长），组装为单位一致、范围已缓存的
//! 数据集序列，供可视化与分析使用。
//!
//! # 模块
//!
//! - [`mesh`]: 网格数据模型（节点、三角形单元、数据集容器）
//! - [`dataset`]: 数据集与时间步快照
//! - [`drivers`]: 数组容器访问能力接口与 NetCDF 实现
//! - [`loader`]: 四阶段加载流水线
//! - [`error`]: 统一错误类型
//!
//! # 示例
//!
//! ```ignore
//! use mh_sww::SwwLoader;
//!
//! let mesh = SwwLoader::load("results.sww")?;
//! for dataset in mesh.datasets() {
//!     println!("{}: {} outputs", dataset.name(), dataset.n_outputs());
//! }
//! ```
//!
//! # 非目标
//!
//! 不读取其他水动力格式，不写出/导出结果，不做网格编辑。

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dataset;
pub mod drivers;
pub mod error;
pub mod loader;
pub mod mesh;

// 重导出常用类型
pub use dataset::{DataSet, DataSetType, Output};
pub use drivers::{ArrayFile, DriverError, NetCdfFile};
pub use error::{SwwError, SwwResult};
pub use loader::{SwwInfo, SwwLoader, DEPTH_THRESHOLD};
pub use mesh::{Element, ElementType, Mesh, Node};
