// crates/mh_sww/src/error.rs

//! 错误处理模块
//!
//! 提供 `SwwError` 枚举和 `SwwResult` 类型别名。
//!
//! # 设计原则
//!
//! 对外只有一种加载失败类别：`UnknownFormat`。文件打不开、缺少维度或
//! 变量、单元不是三角形、任何切片读取失败，统一折叠为该类别——格式
//! 异常即视为文件损坏，不重试、不返回部分结果。驱动层的细分错误
//! （[`crate::drivers::DriverError`]）仅在 crate 内部传递，折叠前
//! 通过日志输出具体原因。

use thiserror::Error;

/// 统一结果类型
pub type SwwResult<T> = Result<T, SwwError>;

/// SWW 解码错误
#[derive(Error, Debug)]
pub enum SwwError {
    /// 无法识别的文件格式
    #[error("无法识别的 SWW 文件格式: {path}")]
    UnknownFormat {
        /// 出错的文件路径
        path: String,
    },
}

impl SwwError {
    /// 构造 `UnknownFormat`
    pub fn unknown_format(path: impl Into<String>) -> Self {
        Self::UnknownFormat { path: path.into() }
    }

    /// 是否为格式错误
    pub fn is_unknown_format(&self) -> bool {
        matches!(self, Self::UnknownFormat { .. })
    }
}
