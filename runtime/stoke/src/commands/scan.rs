//! The `scan` command: show what a unit declares.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stoke_loader::LoadError;
use stoke_unit::{scan_unit, UnitDecls};

/// A unit read from disk together with its declarations.
#[derive(Debug)]
pub struct ScannedUnit {
    pub path: PathBuf,
    text: String,
    pub decls: UnitDecls,
}

impl ScannedUnit {
    /// Print the declarations.
    ///
    /// ```text
    /// class App\Models\User (3:7)
    ///   depends on App\Models\Model
    ///   init requires App\Models\Role
    /// ```
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        for decl in &self.decls.definitions {
            let (line, col) = decl.span.line_col(&self.text);
            writeln!(out, "{} {} ({line}:{col})", decl.kind, decl.name)?;
            for dependency in &decl.dependencies {
                writeln!(out, "  depends on {dependency}")?;
            }
            if let Some(init) = &decl.init {
                if init.requires.is_empty() {
                    writeln!(out, "  init")?;
                }
                for required in &init.requires {
                    writeln!(out, "  init requires {required}")?;
                }
            }
        }
        Ok(())
    }
}

/// Read and scan the unit at `path`.
pub fn scan_file(path: &Path) -> Result<ScannedUnit, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let decls = scan_unit(&text).map_err(|defect| LoadError::Malformed {
        path: path.to_path_buf(),
        defect,
    })?;

    Ok(ScannedUnit {
        path: path.to_path_buf(),
        text,
        decls,
    })
}
