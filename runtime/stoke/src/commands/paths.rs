//! The `paths` command: show where an identifier would be looked for.

use std::io::{self, Write};

use stoke_ir::{qualify, Ident};
use stoke_loader::Loader;

/// Print every candidate the loader would probe for `identifier`.
///
/// ```text
/// namespace  missing  /srv/src/models/User.unit
/// namespace  found    /srv/src/models/user.unit
/// local      missing  ./classes/App/Models/User.unit
/// ```
///
/// Unqualified identifiers also list the core symbols they could alias.
pub fn print_paths(loader: &Loader, identifier: &str, out: &mut impl Write) -> io::Result<()> {
    for probe in loader.candidates(identifier) {
        let status = if probe.exists { "found" } else { "missing" };
        writeln!(
            out,
            "{:<10} {status:<8} {}",
            probe.stage.as_str(),
            probe.path.display()
        )?;
    }

    let ident = Ident::parse(identifier);
    if !ident.is_qualified() {
        for prefix in loader.core_namespaces().iter() {
            writeln!(out, "{:<10} {:<8} {}", "core", "alias", qualify(prefix, ident.as_str()))?;
        }
    }
    Ok(())
}
