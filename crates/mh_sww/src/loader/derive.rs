// crates/mh_sww/src/loader/derive.rs

//! 阶段 3/4: 静态场提取与时序派生
//!
//! 床面高程直接来自 `z` 变量；水深与动量按时间步派生：
//!
//! - 水深 = 水面高程 (stage) − 床面高程，逐节点精确相减
//! - 干湿状态：三角形任一顶点水深严格大于阈值即判湿（顶点间取
//!   OR，不取平均——格式本身不存逐单元干湿标志，这是该格式的
//!   约定近似）
//! - 动量向量由成对的 x/y 分量组成，模长作为标量表示；激活数组
//!   直接复用同时刻水深数据集的结果，不独立计算
//!
//! 时间值从秒换算为小时存储。

use glam::Vec2;
use tracing::debug;

use super::build::check_len;
use super::format::{SwwInfo, VAR_STAGE, VAR_TIME, VAR_XMOMENTUM, VAR_YMOMENTUM};
use super::LoadIssue;
use crate::dataset::{DataSet, DataSetType, Output};
use crate::drivers::ArrayFile;
use crate::mesh::Element;

/// 干湿判定阈值（米）
///
/// 单元任一顶点水深严格大于该值即视为湿单元。
pub const DEPTH_THRESHOLD: f32 = 0.0001;

/// 秒到小时的换算系数
const SECONDS_PER_HOUR: f64 = 3600.0;

/// 阶段 3: 构造床面高程数据集
///
/// 单个 Output，时刻 0，逐节点值取 `z`；床面没有干湿概念，
/// 所有单元标记为激活。
pub(crate) fn bed_dataset(bed: &[f32], n_elements: usize) -> DataSet {
    let mut dataset = DataSet::new("Bed Elevation", DataSetType::Bed).with_time_varying(false);

    let mut output = Output::scalar(bed.len(), n_elements);
    output.time = 0.0;
    output.values.copy_from_slice(bed);
    output.active.fill(true);

    dataset.add_output(output);
    dataset.update_value_range();
    dataset
}

/// 阶段 4: 逐时间步派生水深与动量数据集
///
/// 返回 (水深数据集, 可选动量数据集)。任一切片读取失败都会
/// 整体中止，已构造的部分随返回值丢弃。
pub(crate) fn derive_time_series(
    file: &impl ArrayFile,
    info: &SwwInfo,
    elements: &[Element],
    bed: &[f32],
) -> Result<(DataSet, Option<DataSet>), LoadIssue> {
    let times = file.read_f32(VAR_TIME)?;
    check_len(VAR_TIME, info.n_timesteps, times.len())?;

    let (depth, activation) = derive_depth(file, info, elements, bed, &times)?;

    let momentum = if info.has_momentum {
        Some(derive_momentum(file, info, &times, activation)?)
    } else {
        None
    };

    Ok((depth, momentum))
}

/// 水深数据集派生
///
/// 顺带返回每个时间步的激活数组副本（仅在需要动量时收集），
/// 供动量数据集复用。
fn derive_depth(
    file: &impl ArrayFile,
    info: &SwwInfo,
    elements: &[Element],
    bed: &[f32],
    times: &[f32],
) -> Result<(DataSet, Vec<Vec<bool>>), LoadIssue> {
    let mut dataset = DataSet::new("Depth", DataSetType::Scalar).with_time_varying(true);
    let mut activation = Vec::with_capacity(if info.has_momentum {
        info.n_timesteps
    } else {
        0
    });

    for t in 0..info.n_timesteps {
        let stage = file.read_f32_slice(VAR_STAGE, &[t, 0], &[1, info.n_points])?;
        check_len(VAR_STAGE, info.n_points, stage.len())?;

        let mut output = Output::scalar(info.n_points, elements.len());
        output.time = f64::from(times[t]) / SECONDS_PER_HOUR;

        for (value, (&s, &z)) in output.values.iter_mut().zip(stage.iter().zip(bed.iter())) {
            *value = s - z;
        }

        for (active, element) in output.active.iter_mut().zip(elements.iter()) {
            let [v0, v1, v2] = element.vertices;
            *active = output.values[v0] > DEPTH_THRESHOLD
                || output.values[v1] > DEPTH_THRESHOLD
                || output.values[v2] > DEPTH_THRESHOLD;
        }

        if info.has_momentum {
            activation.push(output.active.clone());
        }
        dataset.add_output(output);
    }

    dataset.update_value_range();
    debug!(n_outputs = dataset.n_outputs(), "水深数据集派生完成");
    Ok((dataset, activation))
}

/// 动量数据集派生
///
/// 每个时间步读取成对的分量切片，逐节点组成二维向量并取欧氏模长；
/// 激活数组来自水深数据集同时刻的结果。
fn derive_momentum(
    file: &impl ArrayFile,
    info: &SwwInfo,
    times: &[f32],
    activation: Vec<Vec<bool>>,
) -> Result<DataSet, LoadIssue> {
    let mut dataset = DataSet::new("Momentum", DataSetType::Vector).with_time_varying(true);

    for (t, active) in activation.into_iter().enumerate() {
        let mx = file.read_f32_slice(VAR_XMOMENTUM, &[t, 0], &[1, info.n_points])?;
        check_len(VAR_XMOMENTUM, info.n_points, mx.len())?;
        let my = file.read_f32_slice(VAR_YMOMENTUM, &[t, 0], &[1, info.n_points])?;
        check_len(VAR_YMOMENTUM, info.n_points, my.len())?;

        let values_v: Vec<Vec2> = mx
            .iter()
            .zip(my.iter())
            .map(|(&x, &y)| Vec2::new(x, y))
            .collect();
        let values = values_v.iter().map(|v| v.length()).collect();

        dataset.add_output(Output {
            time: f64::from(times[t]) / SECONDS_PER_HOUR,
            values,
            values_v: Some(values_v),
            active,
        });
    }

    dataset.update_value_range();
    debug!(n_outputs = dataset.n_outputs(), "动量数据集派生完成");
    Ok(dataset)
}
