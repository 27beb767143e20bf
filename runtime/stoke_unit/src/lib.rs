//! Declaration scanner for stoke units.
//!
//! A unit is a text file declaring classes, interfaces and traits inside
//! namespaces. The loader only needs to know *what* a unit defines, so this
//! crate does not parse bodies: it lexes with logos, tracks braces, and
//! extracts:
//!
//! - each definition's fully-qualified name and kind
//! - the symbols it depends on (`extends`, `implements`)
//! - its `init { require ...; }` block, if any
//!
//! ```text
//! namespace App\Models;
//! use App\Support\Model;
//!
//! class User extends Model {
//!     init {
//!         require App\Models\Role;
//!     }
//! }
//! ```

mod decl;
mod defect;
mod scan;
mod token;

pub use decl::{Declaration, InitBlock, UnitDecls};
pub use defect::UnitDefect;
pub use scan::scan_unit;
