//! Token catalog: the closed set of ASL spellings.
//!
//! Entries are sorted by byte order of their spelling so that lookups can
//! binary-search. Keep it that way when adding entries; `catalog_tests`
//! rejects unsorted or duplicate spellings.

use super::token::TokenKind::{self, *};

pub(crate) const CATALOG: &[(&str, TokenKind)] = &[
    ("!=", OpNotEqual),
    ("+=", OpAddAssign),
    ("-=", OpSubAssign),
    ("<", OpLess),
    ("<=", OpLessEqual),
    ("=", OpAssign),
    ("==", OpEqual),
    (">", OpGreater),
    (">=", OpGreaterEqual),
    ("action", KwAction),
    ("activate", StActivate),
    ("active", CtActive),
    ("add", ModAdd),
    ("and", KwAnd),
    ("axis1d", TyAxis1d),
    ("axis2d", TyAxis2d),
    ("axis3d", TyAxis3d),
    ("bool", TyBool),
    ("button", TyButton),
    ("changed", CtChanged),
    ("constant", KwConstant),
    ("deactivate", StDeactivate),
    ("disabled", CtDisabled),
    ("div", ModDiv),
    ("enabled", CtEnabled),
    ("float1", TyFloat1),
    ("float2", TyFloat2),
    ("float3", TyFloat3),
    ("inactive", CtInactive),
    ("key", TyKey),
    ("layer", KwLayer),
    ("max", ModMax),
    ("min", ModMin),
    ("mod", KwMod),
    ("mul", ModMul),
    ("object", TyObject),
    ("once", KwOnce),
    ("or", KwOr),
    ("pressed", CtPressed),
    ("released", CtReleased),
    ("reset", StReset),
    ("series", KwSeries),
    ("source", KwSource),
    ("sub", ModSub),
    ("time", StTime),
    ("toggle", StToggle),
    ("toggled", KwToggled),
    ("when", KwWhen),
];

/// Looks up a word's spelling in the catalog.
pub fn lookup(text: &str) -> Option<TokenKind> {
    CATALOG
        .binary_search_by(|(spelling, _)| (*spelling).cmp(text))
        .ok()
        .map(|idx| CATALOG[idx].1)
}

pub(crate) fn spelling_of(kind: TokenKind) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(spelling, _)| *spelling)
}
