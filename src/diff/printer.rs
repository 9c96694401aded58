//! Human-readable rendering of a diff result
//!
//! The printer flattens a diff tree into one block per leaf node,
//! prefixed with the `|`-joined path of keys leading to it, walking
//! mapping children in ascending key order. Each block is also echoed to
//! the log sink at debug level so the full diff ends up in the log file.

use crate::diff::diff_node::DiffNode;
use colored::Colorize;
use derive_new::new;
use std::io::Write;
use tracing::{debug, info};

/// Separator between key segments in printed paths.
pub const PATH_SEPARATOR: &str = "|";

/// Writes diff results to an injected writer.
#[derive(new)]
pub struct DiffPrinter<W: Write> {
    writer: W,
}

impl<W: Write> DiffPrinter<W> {
    /// Print a diff result, or a single "No diff found." line when the
    /// result is empty.
    pub fn print(&mut self, diff: Option<&DiffNode>) -> anyhow::Result<()> {
        match diff {
            None => {
                info!("No diff found.");
                writeln!(self.writer, "No diff found.")?;
            }
            Some(node) => self.print_node(node, "")?,
        }
        Ok(())
    }

    fn print_node(&mut self, node: &DiffNode, prefix: &str) -> anyhow::Result<()> {
        match node {
            DiffNode::Mapping(mapping) => {
                for (key, child) in mapping.children() {
                    let path = format!("{prefix}{PATH_SEPARATOR}{}", key.as_path_segment());
                    self.print_node(child, &path)?;
                }
            }
            leaf => {
                let block = format!("{prefix}: {leaf}");
                debug!("{block}");
                writeln!(self.writer, "{}\n", colorize_markers(&block))?;
            }
        }
        Ok(())
    }
}

/// Color the side markers the way diff output conventionally does:
/// source lines (`<`) red, destination lines (`>`) green. `colored`
/// disables itself when the output is not a terminal.
fn colorize_markers(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            if line.starts_with('<') {
                line.red().to_string()
            } else if line.starts_with('>') {
                line.green().to_string()
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
