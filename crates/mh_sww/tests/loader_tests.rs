// crates/mh_sww/tests/loader_tests.rs

//! 加载流水线端到端测试
//!
//! 通过内存实现的 `ArrayFile` 驱动整条流水线，不依赖真实 NetCDF
//! 文件。夹具是能覆盖全部派生规则的最小网格：4 个点、共享一条边
//! 的 2 个三角形、2 个时间步。

use std::collections::HashMap;

use mh_sww::{
    ArrayFile, DataSetType, DriverError, SwwLoader, DEPTH_THRESHOLD,
};

// ============================================================
// 内存数组容器
// ============================================================

/// 内存数组容器，按行主序存储二维变量
#[derive(Debug, Clone, Default)]
struct MockArrayFile {
    dimensions: HashMap<String, usize>,
    /// 变量名 -> (维度, 展平数据)
    f32_vars: HashMap<String, (Vec<usize>, Vec<f32>)>,
    i32_vars: HashMap<String, Vec<i32>>,
    attrs: HashMap<String, f32>,
}

impl MockArrayFile {
    fn with_dimension(mut self, name: &str, len: usize) -> Self {
        self.dimensions.insert(name.into(), len);
        self
    }

    fn with_f32(mut self, name: &str, dims: &[usize], data: Vec<f32>) -> Self {
        self.f32_vars.insert(name.into(), (dims.to_vec(), data));
        self
    }

    fn with_i32(mut self, name: &str, data: Vec<i32>) -> Self {
        self.i32_vars.insert(name.into(), data);
        self
    }

    fn with_attr(mut self, name: &str, value: f32) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    fn without_variable(mut self, name: &str) -> Self {
        self.f32_vars.remove(name);
        self.i32_vars.remove(name);
        self
    }
}

impl ArrayFile for MockArrayFile {
    fn dimension_len(&self, name: &str) -> Option<usize> {
        self.dimensions.get(name).copied()
    }

    fn has_variable(&self, name: &str) -> bool {
        self.f32_vars.contains_key(name) || self.i32_vars.contains_key(name)
    }

    fn read_f32(&self, name: &str) -> Result<Vec<f32>, DriverError> {
        self.f32_vars
            .get(name)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| DriverError::VariableNotFound(name.into()))
    }

    fn read_i32(&self, name: &str) -> Result<Vec<i32>, DriverError> {
        self.i32_vars
            .get(name)
            .cloned()
            .ok_or_else(|| DriverError::VariableNotFound(name.into()))
    }

    fn read_f32_slice(
        &self,
        name: &str,
        start: &[usize],
        count: &[usize],
    ) -> Result<Vec<f32>, DriverError> {
        let (dims, data) = self
            .f32_vars
            .get(name)
            .ok_or_else(|| DriverError::VariableNotFound(name.into()))?;
        if start.len() != dims.len() || count.len() != dims.len() {
            return Err(DriverError::ReadFailed(format!(
                "rank mismatch for `{name}`"
            )));
        }

        // 行主序下 (1, n) 形状的切片是连续段
        let mut offset = 0;
        let mut stride = 1;
        for (i, &dim) in dims.iter().enumerate().rev() {
            if start[i] + count[i] > dim {
                return Err(DriverError::ReadFailed(format!(
                    "slice out of bounds for `{name}`"
                )));
            }
            offset += start[i] * stride;
            stride *= dim;
        }
        let len: usize = count.iter().product();
        if offset + len > data.len() {
            return Err(DriverError::ReadFailed(format!("short read for `{name}`")));
        }
        Ok(data[offset..offset + len].to_vec())
    }

    fn attr_f32(&self, name: &str) -> Option<f32> {
        self.attrs.get(name).copied()
    }
}

// ============================================================
// 夹具
// ============================================================

const P: usize = 4;
const V: usize = 2;
const T: usize = 2;

/// 最小合法文件：单位方形上两个共边三角形，床面高程 0，
/// 时刻 0 全湿、时刻 1 全干
fn minimal_file() -> MockArrayFile {
    MockArrayFile::default()
        .with_dimension("number_of_volumes", V)
        .with_dimension("number_of_vertices", 3)
        .with_dimension("number_of_points", P)
        .with_dimension("number_of_timesteps", T)
        .with_f32("x", &[P], vec![0.0, 1.0, 1.0, 0.0])
        .with_f32("y", &[P], vec![0.0, 0.0, 1.0, 1.0])
        .with_f32("z", &[P], vec![0.0; P])
        .with_i32("volumes", vec![0, 1, 2, 0, 2, 3])
        .with_f32("time", &[T], vec![0.0, 3600.0])
        .with_f32(
            "stage",
            &[T, P],
            vec![
                1.0, 1.0, 1.0, 1.0, // t=0: 全部深于阈值
                0.0, 0.0, 0.0, 0.0, // t=1: 全干
            ],
        )
}

fn with_momentum(file: MockArrayFile) -> MockArrayFile {
    file.with_f32("xmomentum", &[T, P], vec![3.0; T * P])
        .with_f32("ymomentum", &[T, P], vec![4.0; T * P])
}

// ============================================================
// 网格重建
// ============================================================

#[test]
fn test_node_and_element_counts() {
    let mesh = SwwLoader::load_from(&minimal_file(), "minimal.sww").unwrap();
    assert_eq!(mesh.n_nodes(), P);
    assert_eq!(mesh.n_elements(), V);
}

#[test]
fn test_vertex_indices_in_range() {
    let mesh = SwwLoader::load_from(&minimal_file(), "minimal.sww").unwrap();
    for element in mesh.elements() {
        for &v in &element.vertices {
            assert!(v < mesh.n_nodes());
        }
    }
    // 连接表按存储顺序保留
    assert_eq!(mesh.elements()[0].vertices, [0, 1, 2]);
    assert_eq!(mesh.elements()[1].vertices, [0, 2, 3]);
}

#[test]
fn test_coordinate_offset_applied() {
    let file = minimal_file()
        .with_f32("x", &[P], vec![1.5, 1.0, 1.0, 0.0])
        .with_f32("y", &[P], vec![2.5, 0.0, 1.0, 1.0])
        .with_attr("xllcorner", 100.0)
        .with_attr("yllcorner", 200.0);
    let mesh = SwwLoader::load_from(&file, "offset.sww").unwrap();

    let node = &mesh.nodes()[0];
    assert!((node.x - 101.5).abs() < 1e-9);
    assert!((node.y - 202.5).abs() < 1e-9);
}

#[test]
fn test_coordinate_offset_defaults_to_zero() {
    let mesh = SwwLoader::load_from(&minimal_file(), "minimal.sww").unwrap();
    let node = &mesh.nodes()[1];
    assert!((node.x - 1.0).abs() < 1e-9);
    assert!((node.y - 0.0).abs() < 1e-9);
}

// ============================================================
// 床面高程数据集
// ============================================================

#[test]
fn test_bed_dataset_single_output_all_active() {
    let file = minimal_file().with_f32("z", &[P], vec![0.5, 1.5, -0.5, 2.0]);
    let mesh = SwwLoader::load_from(&file, "bed.sww").unwrap();

    let bed = mesh.dataset_by_name("Bed Elevation").unwrap();
    assert_eq!(bed.dataset_type(), DataSetType::Bed);
    assert!(!bed.is_time_varying());
    assert_eq!(bed.n_outputs(), 1);

    let output = bed.output(0).unwrap();
    assert_eq!(output.time, 0.0);
    assert_eq!(output.values, vec![0.5, 1.5, -0.5, 2.0]);
    assert!(output.active.iter().all(|&a| a));
    assert_eq!(bed.value_range(), Some((-0.5, 2.0)));
}

// ============================================================
// 水深数据集
// ============================================================

#[test]
fn test_depth_output_per_timestep_with_time_in_hours() {
    let mesh = SwwLoader::load_from(&minimal_file(), "minimal.sww").unwrap();

    let depth = mesh.dataset_by_name("Depth").unwrap();
    assert_eq!(depth.dataset_type(), DataSetType::Scalar);
    assert!(depth.is_time_varying());
    assert_eq!(depth.n_outputs(), T);

    // 时刻按秒/3600 换算并严格递增
    assert_eq!(depth.output(0).unwrap().time, 0.0);
    assert_eq!(depth.output(1).unwrap().time, 1.0);
    for pair in depth.outputs().windows(2) {
        assert!(pair[0].time < pair[1].time);
    }
}

#[test]
fn test_depth_is_stage_minus_bed() {
    let file = minimal_file()
        .with_f32("z", &[P], vec![0.25, 0.5, 0.75, 1.0])
        .with_f32(
            "stage",
            &[T, P],
            vec![1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 0.5, 0.5],
        );
    let mesh = SwwLoader::load_from(&file, "depth.sww").unwrap();

    let depth = mesh.dataset_by_name("Depth").unwrap();
    assert_eq!(depth.output(0).unwrap().values, vec![0.75, 0.5, 0.25, 0.0]);
    assert_eq!(depth.output(1).unwrap().values, vec![0.25, 0.0, -0.25, -0.5]);
}

#[test]
fn test_wet_dry_threshold_is_strict() {
    // 全部顶点水深恰好等于阈值：不算湿
    let file = minimal_file().with_f32("stage", &[T, P], vec![DEPTH_THRESHOLD; T * P]);
    let mesh = SwwLoader::load_from(&file, "strict.sww").unwrap();

    let depth = mesh.dataset_by_name("Depth").unwrap();
    assert_eq!(depth.output(0).unwrap().active, vec![false, false]);
}

#[test]
fn test_single_wet_vertex_activates_element() {
    // 只有点 1 湿：三角形 [0,1,2] 湿，三角形 [0,2,3] 干
    let file = minimal_file().with_f32(
        "stage",
        &[T, P],
        vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    );
    let mesh = SwwLoader::load_from(&file, "corner.sww").unwrap();

    let depth = mesh.dataset_by_name("Depth").unwrap();
    assert_eq!(depth.output(0).unwrap().active, vec![true, false]);
}

#[test]
fn test_end_to_end_wet_then_dry() {
    let mesh = SwwLoader::load_from(&minimal_file(), "minimal.sww").unwrap();

    let depth = mesh.dataset_by_name("Depth").unwrap();
    assert_eq!(depth.output(0).unwrap().active, vec![true, true]);
    assert_eq!(depth.output(1).unwrap().active, vec![false, false]);
}

#[test]
fn test_depth_value_range_spans_all_outputs() {
    let mesh = SwwLoader::load_from(&minimal_file(), "minimal.sww").unwrap();
    let depth = mesh.dataset_by_name("Depth").unwrap();
    assert_eq!(depth.value_range(), Some((0.0, 1.0)));
}

// ============================================================
// 动量数据集
// ============================================================

#[test]
fn test_no_momentum_dataset_when_variables_absent() {
    let mesh = SwwLoader::load_from(&minimal_file(), "minimal.sww").unwrap();
    assert_eq!(mesh.n_datasets(), 2);
    assert!(mesh.dataset_by_name("Momentum").is_none());
}

#[test]
fn test_momentum_requires_both_components() {
    // 只有 x 分量：按无动量处理，不报错
    let file = minimal_file().with_f32("xmomentum", &[T, P], vec![1.0; T * P]);
    let mesh = SwwLoader::load_from(&file, "half.sww").unwrap();
    assert_eq!(mesh.n_datasets(), 2);
}

#[test]
fn test_momentum_magnitude_and_vectors() {
    let mesh = SwwLoader::load_from(&with_momentum(minimal_file()), "momentum.sww").unwrap();

    let momentum = mesh.dataset_by_name("Momentum").unwrap();
    assert_eq!(momentum.dataset_type(), DataSetType::Vector);
    assert!(momentum.is_time_varying());
    assert_eq!(momentum.n_outputs(), T);

    let output = momentum.output(0).unwrap();
    let vectors = output.values_v.as_ref().unwrap();
    for (v, &m) in vectors.iter().zip(output.values.iter()) {
        assert!((v.x - 3.0).abs() < 1e-6);
        assert!((v.y - 4.0).abs() < 1e-6);
        assert!((m - 5.0).abs() < 1e-5);
    }
}

#[test]
fn test_momentum_shares_depth_activation() {
    let mesh = SwwLoader::load_from(&with_momentum(minimal_file()), "momentum.sww").unwrap();

    let depth = mesh.dataset_by_name("Depth").unwrap();
    let momentum = mesh.dataset_by_name("Momentum").unwrap();
    for t in 0..T {
        assert_eq!(
            momentum.output(t).unwrap().active,
            depth.output(t).unwrap().active
        );
    }
}

#[test]
fn test_dataset_order_is_bed_depth_momentum() {
    let mesh = SwwLoader::load_from(&with_momentum(minimal_file()), "momentum.sww").unwrap();
    let names: Vec<_> = mesh.datasets().iter().map(|ds| ds.name()).collect();
    assert_eq!(names, vec!["Bed Elevation", "Depth", "Momentum"]);
}

// ============================================================
// 格式异常
// ============================================================

#[test]
fn test_missing_stage_is_unknown_format() {
    let file = minimal_file().without_variable("stage");
    let err = SwwLoader::load_from(&file, "broken.sww").unwrap_err();
    assert!(err.is_unknown_format());
    assert!(err.to_string().contains("broken.sww"));
}

#[test]
fn test_missing_dimension_is_unknown_format() {
    let mut file = minimal_file();
    file.dimensions.remove("number_of_timesteps");
    let err = SwwLoader::load_from(&file, "broken.sww").unwrap_err();
    assert!(err.is_unknown_format());
}

#[test]
fn test_non_triangular_is_unknown_format() {
    let file = minimal_file().with_dimension("number_of_vertices", 4);
    let err = SwwLoader::load_from(&file, "quads.sww").unwrap_err();
    assert!(err.is_unknown_format());
}

#[test]
fn test_truncated_stage_read_aborts_load() {
    // stage 数据比维度声明的短，切片读取越界
    let file = minimal_file().with_f32("stage", &[T, P], vec![1.0; P]);
    let err = SwwLoader::load_from(&file, "truncated.sww").unwrap_err();
    assert!(err.is_unknown_format());
}
