// apps/sww_cli/src/commands/validate.rs

//! 格式校验命令
//!
//! 执行完整加载流水线，报告文件是否为合法 SWW 格式。

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use mh_sww::SwwLoader;

/// 校验参数
#[derive(Args)]
pub struct ValidateArgs {
    /// SWW 文件路径
    pub file: PathBuf,
}

/// 执行校验命令
pub fn execute(args: ValidateArgs) -> Result<()> {
    match SwwLoader::load(&args.file) {
        Ok(mesh) => {
            info!(
                n_nodes = mesh.n_nodes(),
                n_elements = mesh.n_elements(),
                n_datasets = mesh.n_datasets(),
                "格式校验通过"
            );
            println!("OK: {}", args.file.display());
            Ok(())
        }
        Err(err) => {
            bail!("{err}");
        }
    }
}
