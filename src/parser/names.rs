use sqlparser::ast::{Ident, ObjectName, ObjectNamePart};

/// Normalize a configuration keyword for case-insensitive matching.
///
/// Trims whitespace, lowercases and folds `-` into `_`, so `Last-Line` and
/// `last_line` agree.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_ascii_lowercase().replace('-', "_")
}

/// Lowercase an identifier unless it was quoted.
pub fn fold_unquoted(ident: &mut Ident) {
    if ident.quote_style.is_none() {
        ident.value.make_ascii_lowercase();
    }
}

/// Lowercase every unquoted part of a (possibly qualified) name.
pub fn fold_object_name(name: &mut ObjectName) {
    for part in &mut name.0 {
        if let ObjectNamePart::Identifier(ident) = part {
            fold_unquoted(ident);
        }
    }
}
