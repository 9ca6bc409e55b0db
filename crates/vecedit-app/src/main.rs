//! VecEdit 命令行编辑器入口
//! 逐行读取标准输入并交给命令解释器执行

mod config;
mod editor;

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::config::EditorConfig;
use crate::editor::{Editor, Flow};

fn run(config: &EditorConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.show_banner {
        writeln!(out, "VecEdit vector editor")?;
        writeln!(out, "Type 'help' for the list of commands")?;
    }

    let mut editor = Editor::new();
    let mut line = String::new();
    loop {
        write!(out, "\n{}", config.prompt)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\nEnd of input")?;
            break;
        }

        if editor.execute(&line, &mut out)? == Flow::Exit {
            break;
        }
    }

    info!(shapes = editor.store().len(), "session finished");
    Ok(())
}

fn main() -> Result<()> {
    let (config, rejected) = EditorConfig::from_env();

    // 初始化日志（写入stderr，不与命令输出混在一起）
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(config.log_level)
            .with_writer(io::stderr)
            .finish(),
    )?;

    for setting in &rejected {
        warn!("Ignoring invalid setting {setting}");
    }

    info!("Starting VecEdit...");
    run(&config)
}
