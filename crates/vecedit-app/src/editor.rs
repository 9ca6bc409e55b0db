//! 命令解释器
//!
//! 每行输入一条命令。命令失败时输出一行错误信息，会话继续。

use anyhow::{anyhow, bail, Result};
use std::io::Write;
use tracing::{debug, info};
use vecedit_core::prelude::*;

/// 执行一条命令后的会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

const COMMANDS: [(&str, &str); 7] = [
    ("help", "Show this help"),
    ("create <type> <params> [name]", "Create a new shape"),
    ("list", "List all shapes"),
    ("info <id>", "Show shape details"),
    ("delete <id>", "Delete a shape"),
    ("clear", "Delete all shapes"),
    ("exit", "Quit the editor"),
];

/// 命令行编辑器
#[derive(Debug, Default)]
pub struct Editor {
    store: ShapeStore,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &ShapeStore {
        &self.store
    }

    /// 执行一行命令，输出写入 `out`
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> std::io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        let command = command.to_lowercase();
        let result = match command.as_str() {
            "help" => self.help(out),
            "create" => self.create(args, out),
            "list" => self.list(out),
            "info" => self.info(args, out),
            "delete" => self.delete(args, out),
            "clear" => self.clear(out),
            "exit" => {
                writeln!(out, "Exiting editor")?;
                return Ok(Flow::Exit);
            }
            _ => Err(anyhow!(
                "Unknown command '{command}'. Type 'help' for the list of commands"
            )),
        };

        if let Err(err) = result {
            // 输出失败直接上抛，命令错误只打印
            let err = match err.downcast::<std::io::Error>() {
                Ok(io_err) => return Err(io_err),
                Err(err) => err,
            };
            debug!(%command, "command failed: {err}");
            writeln!(out, "Error: {err}")?;
        }
        Ok(Flow::Continue)
    }

    fn help(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Available commands:")?;
        for (usage, description) in COMMANDS {
            writeln!(out, "  {usage:<30} - {description}")?;
        }

        for dimension in [Dimension::Planar, Dimension::Solid] {
            writeln!(out)?;
            writeln!(out, "{dimension} shapes:")?;
            for kind in ShapeKind::ALL
                .into_iter()
                .filter(|kind| kind.dimension() == dimension)
            {
                writeln!(out, "  {}", kind.usage())?;
            }
        }
        Ok(())
    }

    fn create(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let Some((keyword, tokens)) = args.split_first() else {
            bail!("Missing shape type. Type 'help' for the list of shape types");
        };
        let kind = ShapeKind::from_keyword(keyword)
            .ok_or_else(|| EditorError::UnknownShapeType(keyword.to_string()))?;

        let id = match self.store.create(kind, tokens) {
            Ok(id) => id,
            Err(EditorError::Validation(err @ ValidationError::WrongArity { .. })) => {
                bail!("{err}. Usage: {}", kind.usage());
            }
            Err(err) => return Err(err.into()),
        };

        let entity = self.store.require(id)?;
        info!(%id, %kind, "shape created");
        writeln!(out, "Created: {entity}")?;
        Ok(())
    }

    fn list(&self, out: &mut impl Write) -> Result<()> {
        if self.store.is_empty() {
            writeln!(out, "No shapes")?;
            return Ok(());
        }
        writeln!(out, "Shapes:")?;
        for entity in self.store.iter() {
            writeln!(out, "  {entity}")?;
        }
        Ok(())
    }

    fn info(&self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let id = parse_id(args)?;
        let entity = self.store.require(id)?;
        let json = serde_json::to_string_pretty(entity)?;
        writeln!(out, "Shape {id}:")?;
        writeln!(out, "{json}")?;
        Ok(())
    }

    fn delete(&mut self, args: &[&str], out: &mut impl Write) -> Result<()> {
        let id = parse_id(args)?;
        let entity = self
            .store
            .remove(id)
            .ok_or(EditorError::ShapeNotFound(id))?;
        info!(%id, "shape deleted");
        writeln!(out, "Deleted: {entity}")?;
        Ok(())
    }

    fn clear(&mut self, out: &mut impl Write) -> Result<()> {
        let count = self.store.clear();
        info!(count, "shapes cleared");
        writeln!(out, "Removed {count} shape(s)")?;
        Ok(())
    }
}

fn parse_id(args: &[&str]) -> Result<ShapeId> {
    let Some(token) = args.first() else {
        bail!("Missing shape id");
    };
    let id = token
        .parse::<u64>()
        .ok()
        .map(ShapeId::from_raw)
        .filter(|id| !id.is_null())
        .ok_or_else(|| anyhow!("Shape id must be a positive integer, got '{token}'"))?;
    Ok(id)
}
