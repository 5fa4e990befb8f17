// crates/mh_sww/src/loader/build.rs

//! 阶段 2: 网格重建
//!
//! 读取坐标与连接表，应用可选的左下角全局偏移，产出节点与单元
//! 序列。连接表索引已由阶段 1 的结构校验背书，不再逐个检查越界。

use super::format::{
    ATTR_XLLCORNER, ATTR_YLLCORNER, SwwInfo, VAR_VOLUMES, VAR_X, VAR_Y, VAR_Z,
};
use super::LoadIssue;
use crate::drivers::ArrayFile;
use crate::mesh::{Element, Node};

/// 读取几何数据，构造节点与单元
///
/// 返回值第三项是原始床面高程数组（长度 P），供阶段 3/4 复用。
pub(crate) fn read_geometry(
    file: &impl ArrayFile,
    info: &SwwInfo,
) -> Result<(Vec<Node>, Vec<Element>, Vec<f32>), LoadIssue> {
    let px = read_points(file, VAR_X, info.n_points)?;
    let py = read_points(file, VAR_Y, info.n_points)?;
    let pz = read_points(file, VAR_Z, info.n_points)?;

    let volumes = file.read_i32(VAR_VOLUMES)?;
    check_len(VAR_VOLUMES, 3 * info.n_volumes, volumes.len())?;

    // 投影坐标可能很大，偏移加法用 f64 避免精度损失
    let xll = f64::from(file.attr_f32(ATTR_XLLCORNER).unwrap_or(0.0));
    let yll = f64::from(file.attr_f32(ATTR_YLLCORNER).unwrap_or(0.0));

    let nodes = px
        .iter()
        .zip(py.iter())
        .enumerate()
        .map(|(i, (&x, &y))| Node::new(i, f64::from(x) + xll, f64::from(y) + yll))
        .collect();

    let elements = (0..info.n_volumes)
        .map(|i| {
            Element::triangle(
                i,
                [
                    volumes[3 * i] as usize,
                    volumes[3 * i + 1] as usize,
                    volumes[3 * i + 2] as usize,
                ],
            )
        })
        .collect();

    Ok((nodes, elements, pz))
}

fn read_points(
    file: &impl ArrayFile,
    name: &'static str,
    n_points: usize,
) -> Result<Vec<f32>, LoadIssue> {
    let data = file.read_f32(name)?;
    check_len(name, n_points, data.len())?;
    Ok(data)
}

pub(crate) fn check_len(
    name: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), LoadIssue> {
    if expected != actual {
        return Err(LoadIssue::SizeMismatch {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}
