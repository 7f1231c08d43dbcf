// NOTE: Definition tables
//
// The journal names most closed sets by short internal codes ("$economy_Agri;",
// "$SYSTEM_SECURITY_high;", "eRingClass_MetalRich"). Each family below keeps
// its canonical code alongside the display name; `from_ed_name` accepts the
// bare code or any of the decorated forms and returns None on no match.

#[macro_use]
mod macros;

mod commodity;
mod faction;
mod material;
mod rating;
mod vehicle;

pub use commodity::*;
pub use faction::*;
pub use material::*;
pub use rating::*;
pub use vehicle::*;

/// Whole credits. Money never travels through binary floating point.
pub type Credits = i64;

/// Strip journal decoration from a code: `$`, trailing `;` and any of the
/// family prefixes (case-insensitive).
pub fn strip_code<'a>(code: &'a str, prefixes: &[&str]) -> &'a str {
    let mut code = code.trim();
    code = code.strip_prefix('$').unwrap_or(code);
    code = code.strip_suffix(';').unwrap_or(code);
    for prefix in prefixes {
        if let Some(head) = code.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return &code[prefix.len()..];
            }
        }
    }
    code
}

/// Compare two codes ignoring ASCII case, spaces and underscores
pub fn codes_match(a: &str, b: &str) -> bool {
    let significant = |s: &str| {
        s.chars()
            .filter(|c| *c != ' ' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
    };
    significant(a) == significant(b)
}
