// crates/mh_sww/src/drivers/netcdf/driver.rs

//! NetCDF 驱动实现

#[cfg(feature = "netcdf")]
use std::ops::Range;
use std::path::Path;

use super::error::DriverError;
use crate::drivers::ArrayFile;

/// NetCDF 文件句柄
///
/// 句柄在 Drop 时关闭，成功或失败路径都不会泄漏。
#[cfg(feature = "netcdf")]
pub struct NetCdfFile {
    file: netcdf::File,
}

#[cfg(feature = "netcdf")]
impl NetCdfFile {
    /// 打开 NetCDF 文件
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DriverError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DriverError::FileNotFound(path.display().to_string()));
        }

        let file = netcdf::open(path).map_err(|e| DriverError::OpenFailed(e.to_string()))?;
        Ok(Self { file })
    }

    fn variable(&self, name: &str) -> Result<netcdf::Variable<'_>, DriverError> {
        self.file
            .variable(name)
            .ok_or_else(|| DriverError::VariableNotFound(name.to_string()))
    }
}

#[cfg(feature = "netcdf")]
impl ArrayFile for NetCdfFile {
    fn dimension_len(&self, name: &str) -> Option<usize> {
        self.file.dimension(name).map(|d| d.len())
    }

    fn has_variable(&self, name: &str) -> bool {
        self.file.variable(name).is_some()
    }

    fn read_f32(&self, name: &str) -> Result<Vec<f32>, DriverError> {
        let var = self.variable(name)?;
        let data = var
            .values::<f32, _>(..)
            .map_err(|e| DriverError::ReadFailed(e.to_string()))?;
        Ok(data.into_raw_vec())
    }

    fn read_i32(&self, name: &str) -> Result<Vec<i32>, DriverError> {
        let var = self.variable(name)?;
        let data = var
            .values::<i32, _>(..)
            .map_err(|e| DriverError::ReadFailed(e.to_string()))?;
        Ok(data.into_raw_vec())
    }

    fn read_f32_slice(
        &self,
        name: &str,
        start: &[usize],
        count: &[usize],
    ) -> Result<Vec<f32>, DriverError> {
        let var = self.variable(name)?;
        let extents: Vec<Range<usize>> = start
            .iter()
            .zip(count.iter())
            .map(|(&s, &c)| s..s + c)
            .collect();
        let data = var
            .values::<f32, _>(extents.as_slice())
            .map_err(|e| DriverError::ReadFailed(e.to_string()))?;
        Ok(data.into_raw_vec())
    }

    fn attr_f32(&self, name: &str) -> Option<f32> {
        let attr = self.file.attribute(name)?;
        match attr.value().ok()? {
            netcdf::AttrValue::Float(f) => Some(f),
            netcdf::AttrValue::Double(d) => Some(d as f32),
            netcdf::AttrValue::Int(i) => Some(i as f32),
            _ => None,
        }
    }
}

/// 无 NetCDF 支持时的占位实现
#[cfg(not(feature = "netcdf"))]
pub struct NetCdfFile;

#[cfg(not(feature = "netcdf"))]
impl NetCdfFile {
    /// 打开 NetCDF 文件 (无 NetCDF 支持)
    pub fn open(_path: impl AsRef<Path>) -> Result<Self, DriverError> {
        Err(DriverError::NotAvailable)
    }
}

#[cfg(not(feature = "netcdf"))]
impl ArrayFile for NetCdfFile {
    fn dimension_len(&self, _name: &str) -> Option<usize> {
        None
    }

    fn has_variable(&self, _name: &str) -> bool {
        false
    }

    fn read_f32(&self, _name: &str) -> Result<Vec<f32>, DriverError> {
        Err(DriverError::NotAvailable)
    }

    fn read_i32(&self, _name: &str) -> Result<Vec<i32>, DriverError> {
        Err(DriverError::NotAvailable)
    }

    fn read_f32_slice(
        &self,
        _name: &str,
        _start: &[usize],
        _count: &[usize],
    ) -> Result<Vec<f32>, DriverError> {
        Err(DriverError::NotAvailable)
    }

    fn attr_f32(&self, _name: &str) -> Option<f32> {
        None
    }
}
