// crates/mh_sww/src/drivers/mod.rs

//! 数组容器驱动模块
//!
//! SWW 文件本质是一个自描述数组容器。解码流水线只通过 [`ArrayFile`]
//! 这一窄接口访问容器：维度查询、变量存在性、整体读取、按时间步
//! 切片读取、全局标量属性。真实实现基于 NetCDF 库；测试可注入
//! 内存实现，派生逻辑无需真实文件即可验证。

pub mod netcdf;

// 重导出
pub use self::netcdf::{DriverError, NetCdfFile};

/// 数组容器只读访问能力
///
/// 所有读取均为阻塞调用，按需返回数据或错误，无重试。
pub trait ArrayFile {
    /// 查询维度长度，维度不存在时返回 `None`
    fn dimension_len(&self, name: &str) -> Option<usize>;

    /// 变量是否存在
    fn has_variable(&self, name: &str) -> bool;

    /// 整体读取一个 f32 变量（按存储顺序展平）
    fn read_f32(&self, name: &str) -> Result<Vec<f32>, DriverError>;

    /// 整体读取一个 i32 变量（按存储顺序展平）
    fn read_i32(&self, name: &str) -> Result<Vec<i32>, DriverError>;

    /// 按起点/长度读取 f32 变量的一个切片（步长固定为 1）
    ///
    /// `start` 与 `count` 的长度须等于变量的维度数。
    fn read_f32_slice(
        &self,
        name: &str,
        start: &[usize],
        count: &[usize],
    ) -> Result<Vec<f32>, DriverError>;

    /// 读取全局标量属性，属性不存在或非数值时返回 `None`
    fn attr_f32(&self, name: &str) -> Option<f32>;
}
