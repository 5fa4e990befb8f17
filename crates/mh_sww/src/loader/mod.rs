// crates/mh_sww/src/loader/mod.rs

//! SWW 结果文件加载流水线
//!
//! 四个阶段严格顺序执行，产出单一结果：
//!
//! 1. **格式校验** ([`format`]): 确认必需维度/变量存在、单元为三角形
//! 2. **网格重建** ([`build`]): 读取坐标与连接表，应用全局偏移
//! 3. **静态场提取** ([`derive`]): 床面高程数据集（全部单元激活）
//! 4. **时序派生** ([`derive`]): 逐时间步计算水深、干湿状态，以及
//!    可选的动量向量场
//!
//! # 错误语义
//!
//! 任一阶段失败即整体失败：不产出部分数据集，文件句柄与已建的
//! 中间缓冲随作用域释放，对外统一报告
//! [`SwwError::UnknownFormat`]，具体原因走 `tracing` 日志。
//!
//! # 示例
//!
//! ```ignore
//! use mh_sww::loader::SwwLoader;
//!
//! let mesh = SwwLoader::load("results.sww")?;
//! println!("{} nodes, {} datasets", mesh.n_nodes(), mesh.n_datasets());
//! ```

mod build;
mod derive;
mod format;

pub use derive::DEPTH_THRESHOLD;
pub use format::SwwInfo;

use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

use crate::drivers::{ArrayFile, DriverError, NetCdfFile};
use crate::error::{SwwError, SwwResult};
use crate::mesh::Mesh;

/// 流水线内部失败原因
///
/// 仅用于阶段间传递与日志，对外折叠为 `UnknownFormat`。
#[derive(Error, Debug)]
pub(crate) enum LoadIssue {
    /// 缺少必需维度
    #[error("missing dimension `{0}`")]
    MissingDimension(&'static str),
    /// 缺少必需变量
    #[error("missing variable `{0}`")]
    MissingVariable(&'static str),
    /// 单元不是三角形
    #[error("expecting triangular elements, number_of_vertices = {0}")]
    NotTriangular(usize),
    /// 读到的数组长度与维度不符
    #[error("array size mismatch: `{name}` expected {expected}, got {actual}")]
    SizeMismatch {
        /// 变量名
        name: &'static str,
        /// 期望长度
        expected: usize,
        /// 实际长度
        actual: usize,
    },
    /// 底层驱动错误
    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// SWW 文件加载器
pub struct SwwLoader;

impl SwwLoader {
    /// 从文件路径加载
    ///
    /// 打开 NetCDF 容器并执行完整流水线；句柄在返回前随作用域关闭。
    pub fn load<P: AsRef<Path>>(path: P) -> SwwResult<Mesh> {
        let label = path.as_ref().display().to_string();
        let file = NetCdfFile::open(path.as_ref()).map_err(|err| {
            warn!(path = %label, error = %err, "无法打开 SWW 文件");
            SwwError::unknown_format(&label)
        })?;
        Self::load_from(&file, &label)
    }

    /// 从任意数组容器加载
    ///
    /// `path_label` 仅用于错误与日志标注。派生逻辑只依赖
    /// [`ArrayFile`] 能力接口，测试可注入内存实现。
    pub fn load_from(file: &impl ArrayFile, path_label: &str) -> SwwResult<Mesh> {
        Self::run(file).map_err(|err| {
            warn!(path = %path_label, error = %err, "SWW 加载失败");
            SwwError::unknown_format(path_label)
        })
    }

    fn run(file: &impl ArrayFile) -> Result<Mesh, LoadIssue> {
        let info = format::validate(file)?;
        debug!(
            n_points = info.n_points,
            n_volumes = info.n_volumes,
            n_timesteps = info.n_timesteps,
            has_momentum = info.has_momentum,
            "SWW 格式校验通过"
        );

        let (nodes, elements, bed) = build::read_geometry(file, &info)?;
        let mut mesh = Mesh::new(nodes, elements);

        mesh.add_dataset(derive::bed_dataset(&bed, mesh.n_elements()));

        let (depth, momentum) = derive::derive_time_series(file, &info, mesh.elements(), &bed)?;
        mesh.add_dataset(depth);
        if let Some(momentum) = momentum {
            mesh.add_dataset(momentum);
        }

        debug!(n_datasets = mesh.n_datasets(), "SWW 加载完成");
        Ok(mesh)
    }
}
