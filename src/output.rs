//! Rendering step sequences as text and writing them to disk.

use std::fs;
use std::path::Path;

use crate::error::{Result, StepError};
use crate::script::generate_script;
use crate::step::Step;
use crate::table::StepTable;
use crate::view::Tab;

/// Text form of a step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendering {
    Table,
    Script,
}

impl Rendering {
    /// Pick the rendering for `tab`, where `table_tab` is the tab that shows
    /// the sequence as a table. Any other tab has nothing to render.
    pub fn for_tab(tab: Tab, table_tab: Tab) -> Result<Self> {
        match tab {
            Tab::Script => Ok(Rendering::Script),
            tab if tab == table_tab => Ok(Rendering::Table),
            tab => Err(StepError::TabUnavailable(tab)),
        }
    }

    pub fn render(self, steps: &[Step]) -> String {
        match self {
            Rendering::Table => StepTable::new(steps).render_text(),
            Rendering::Script => generate_script(steps),
        }
    }
}

/// Write `text` to `path`, creating missing parent directories.
///
/// A trailing newline is appended when `text` is non-empty and lacks one.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut contents = text.to_string();
    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents)?;
    Ok(())
}
