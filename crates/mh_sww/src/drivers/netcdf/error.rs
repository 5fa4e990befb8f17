// crates/mh_sww/src/drivers/netcdf/error.rs

//! NetCDF 驱动错误类型

use thiserror::Error;

/// 容器驱动错误
#[derive(Error, Debug)]
pub enum DriverError {
    /// 文件不存在
    #[error("File not found: {0}")]
    FileNotFound(String),
    /// 打开失败
    #[error("Failed to open file: {0}")]
    OpenFailed(String),
    /// 维度不存在
    #[error("Dimension not found: {0}")]
    DimensionNotFound(String),
    /// 变量不存在
    #[error("Variable not found: {0}")]
    VariableNotFound(String),
    /// 读取失败
    #[error("Failed to read data: {0}")]
    ReadFailed(String),
    /// NetCDF 不可用
    #[error("NetCDF support is not available")]
    NotAvailable,
}

#[cfg(feature = "netcdf")]
impl From<netcdf::error::Error> for DriverError {
    fn from(e: netcdf::error::Error) -> Self {
        DriverError::ReadFailed(e.to_string())
    }
}
