//! Identifier to relative unit path encoding.
//!
//! `App\Models\User` → `App/Models/User.unit`
//! `Model_Crud`      → `Model/Crud.unit`
//!
//! Namespace segments become directories. Inside the final segment each
//! `_` is a further directory separator. Nothing here touches the
//! filesystem.
//!
//! The result is always relative: root, drive prefix, `.` and `..`
//! components inside a segment are dropped, so joining it onto a base
//! directory never leaves that directory.

use std::path::{Component, Path, PathBuf};

use stoke_ir::{Ident, FLAT_SEPARATOR, NAMESPACE_SEPARATOR};

/// Encode an identifier as a path relative to some base directory.
///
/// An empty `extension` produces file names without a dot.
pub fn encode(identifier: &str, extension: &str) -> PathBuf {
    let ident = Ident::parse(identifier);
    let mut path = PathBuf::new();

    if ident.is_qualified() {
        for segment in ident.namespace().split(NAMESPACE_SEPARATOR) {
            push_segment(&mut path, segment);
        }
    }

    let mut parts = ident.tail().split(FLAT_SEPARATOR).peekable();
    while let Some(part) = parts.next() {
        if parts.peek().is_none() && !extension.is_empty() {
            push_segment(&mut path, &format!("{part}.{extension}"));
        } else {
            push_segment(&mut path, part);
        }
    }

    path
}

/// Append the plain components of `segment`.
fn push_segment(path: &mut PathBuf, segment: &str) {
    for component in Path::new(segment).components() {
        if let Component::Normal(name) = component {
            path.push(name);
        }
    }
}

/// The fully lowercased form of `path`, if it differs from `path`.
///
/// The whole path is lowercased, base directory included. Only ASCII
/// letters change. Paths that are not valid UTF-8 have no lowercase variant.
pub fn lowercase_variant(path: &Path) -> Option<PathBuf> {
    let text = path.to_str()?;
    let lower = text.to_ascii_lowercase();
    (lower != text).then(|| PathBuf::from(lower))
}
