// crates/mh_sww/src/loader/format.rs

//! 阶段 1: 格式校验
//!
//! 只做读取与检查，不构造任何模型对象。

use super::LoadIssue;
use crate::drivers::ArrayFile;

/// 维度名: 单元数
pub(crate) const DIM_VOLUMES: &str = "number_of_volumes";
/// 维度名: 每单元顶点数（必须为 3）
pub(crate) const DIM_VERTICES: &str = "number_of_vertices";
/// 维度名: 点数
pub(crate) const DIM_POINTS: &str = "number_of_points";
/// 维度名: 时间步数
pub(crate) const DIM_TIMESTEPS: &str = "number_of_timesteps";

/// 变量名: 点 X 坐标
pub(crate) const VAR_X: &str = "x";
/// 变量名: 点 Y 坐标
pub(crate) const VAR_Y: &str = "y";
/// 变量名: 床面高程
pub(crate) const VAR_Z: &str = "z";
/// 变量名: 单元连接表 (V×3)
pub(crate) const VAR_VOLUMES: &str = "volumes";
/// 变量名: 时间 (秒)
pub(crate) const VAR_TIME: &str = "time";
/// 变量名: 水面高程 (T×P)
pub(crate) const VAR_STAGE: &str = "stage";
/// 变量名: X 方向动量 (可选, T×P)
pub(crate) const VAR_XMOMENTUM: &str = "xmomentum";
/// 变量名: Y 方向动量 (可选, T×P)
pub(crate) const VAR_YMOMENTUM: &str = "ymomentum";

/// 属性名: X 全局偏移
pub(crate) const ATTR_XLLCORNER: &str = "xllcorner";
/// 属性名: Y 全局偏移
pub(crate) const ATTR_YLLCORNER: &str = "yllcorner";

/// 校验得到的容器结构信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwwInfo {
    /// 单元数量 V
    pub n_volumes: usize,
    /// 点数量 P
    pub n_points: usize,
    /// 时间步数量 T
    pub n_timesteps: usize,
    /// 是否带成对的动量变量
    pub has_momentum: bool,
}

/// 校验容器结构，返回维度信息
///
/// 要求四个维度、六个变量齐全，且每单元顶点数为 3。动量变量按
/// 成对能力检查：两个都在才算有，避免半套向量场。
pub(crate) fn validate(file: &impl ArrayFile) -> Result<SwwInfo, LoadIssue> {
    let n_volumes = dimension(file, DIM_VOLUMES)?;
    let n_vertices = dimension(file, DIM_VERTICES)?;
    let n_points = dimension(file, DIM_POINTS)?;
    let n_timesteps = dimension(file, DIM_TIMESTEPS)?;

    if n_vertices != 3 {
        return Err(LoadIssue::NotTriangular(n_vertices));
    }

    for name in [VAR_X, VAR_Y, VAR_Z, VAR_VOLUMES, VAR_TIME, VAR_STAGE] {
        if !file.has_variable(name) {
            return Err(LoadIssue::MissingVariable(name));
        }
    }

    let has_momentum = file.has_variable(VAR_XMOMENTUM) && file.has_variable(VAR_YMOMENTUM);

    Ok(SwwInfo {
        n_volumes,
        n_points,
        n_timesteps,
        has_momentum,
    })
}

fn dimension(file: &impl ArrayFile, name: &'static str) -> Result<usize, LoadIssue> {
    file.dimension_len(name)
        .ok_or(LoadIssue::MissingDimension(name))
}
