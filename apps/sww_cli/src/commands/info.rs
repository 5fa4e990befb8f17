// apps/sww_cli/src/commands/info.rs

//! 信息显示命令
//!
//! 加载 SWW 文件并打印网格与数据集概要。

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use mh_sww::{DataSet, DataSetType, SwwLoader};

/// 信息显示参数
#[derive(Args)]
pub struct InfoArgs {
    /// SWW 文件路径
    pub file: PathBuf,
}

/// 执行信息命令
pub fn execute(args: InfoArgs) -> Result<()> {
    let mesh = SwwLoader::load(&args.file)
        .with_context(|| format!("加载失败: {}", args.file.display()))?;

    println!("=== SWW 文件概要 ===");
    println!("文件: {}", args.file.display());
    println!("节点数: {}", mesh.n_nodes());
    println!("单元数: {} (三角形)", mesh.n_elements());
    println!("数据集: {}", mesh.n_datasets());

    for dataset in mesh.datasets() {
        print_dataset(dataset);
    }

    Ok(())
}

fn print_dataset(dataset: &DataSet) {
    let kind = match dataset.dataset_type() {
        DataSetType::Bed => "床面",
        DataSetType::Scalar => "标量",
        DataSetType::Vector => "向量",
    };
    println!();
    println!("[{}] {}", kind, dataset.name());
    println!("  时间步: {}", dataset.n_outputs());
    if dataset.is_time_varying() {
        if let (Some(first), Some(last)) = (
            dataset.output(0),
            dataset.output(dataset.n_outputs().saturating_sub(1)),
        ) {
            println!("  时间范围: {:.3} h - {:.3} h", first.time, last.time);
        }
    }
    match dataset.value_range() {
        Some((min, max)) => println!("  值范围: {:.4} - {:.4}", min, max),
        None => println!("  值范围: 无有效值"),
    }
}
