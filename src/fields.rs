// src/fields.rs
//
// Semantic fields of a move sheet and the header resolver that finds them.
//
// Sheets come from different hands, so the columns are located by matching
// header text against a fixed alias list per field (English + Spanish).
// Resolution is two passes over the header row:
//   1) exact: first header equal to any alias
//   2) substring: first header containing an alias (aliases in declared order)
// A precise "Name" column therefore wins over "Character Name" no matter
// where either one sits.

use std::fmt;

pub const NAME_ALIASES: &[&str] = &["name", "nombre", "titulo", "title"];
pub const DESCRIPTION_ALIASES: &[&str] = &["description", "descripción", "descripcion", "desc"];
pub const TAGS_ALIASES: &[&str] = &["tags", "etiquetas", "tag"];
pub const IMAGE_ALIASES: &[&str] = &["img", "image", "imagen"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Description,
    Tags,
    Image,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Description, Field::Tags, Field::Image];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
            Field::Tags => "tags",
            Field::Image => "img",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ordered alias list per field.
#[derive(Clone, Copy, Debug)]
pub struct FieldAliases<'a> {
    pub name: &'a [&'a str],
    pub description: &'a [&'a str],
    pub tags: &'a [&'a str],
    pub image: &'a [&'a str],
}

pub const DEFAULT_ALIASES: FieldAliases<'static> = FieldAliases {
    name: NAME_ALIASES,
    description: DESCRIPTION_ALIASES,
    tags: TAGS_ALIASES,
    image: IMAGE_ALIASES,
};

impl<'a> FieldAliases<'a> {
    pub fn for_field(&self, field: Field) -> &'a [&'a str] {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Tags => self.tags,
            Field::Image => self.image,
        }
    }
}

/// Comparison form of a header cell: trimmed, BOM-free, lowercase.
fn header_key(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Find the column supplying a field, or `None`.
///
/// Exact matches anywhere in the row beat substring matches. Within a pass
/// the leftmost header wins. Only "alias inside header" counts, never the
/// reverse, and an empty alias never matches as a substring.
///
/// Headers are compared trimmed, lowercased and with a leading UTF-8 BOM
/// removed, so a sheet saved with a BOM still gets its first column matched
/// exactly. A single-pass "exact or substring per header" scan would differ:
/// for `["\u{feff}Character Name", "Title"]` it stops at column 0, while
/// here the exact `title` at column 1 wins.
pub fn resolve<H: AsRef<str>>(headers: &[H], aliases: &[&str]) -> Option<usize> {
    let keys: Vec<String> = headers.iter().map(|h| header_key(h.as_ref())).collect();
    let aliases: Vec<String> = aliases.iter().map(|a| a.to_lowercase()).collect();

    // Exact pass
    if let Some(ix) = keys.iter().position(|k| aliases.iter().any(|a| a == k)) {
        return Some(ix);
    }

    // Substring pass
    keys.iter().position(|k| {
        aliases
            .iter()
            .any(|a| !a.is_empty() && k.contains(a.as_str()))
    })
}

/// Resolved column per field. Built once per table, reused for every row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub description: Option<usize>,
    pub tags: Option<usize>,
    pub image: Option<usize>,
}

impl ColumnMap {
    /// Resolve with the built-in alias lists.
    pub fn resolve<H: AsRef<str>>(headers: &[H]) -> Self {
        Self::with_aliases(headers, &DEFAULT_ALIASES)
    }

    pub fn with_aliases<H: AsRef<str>>(headers: &[H], aliases: &FieldAliases<'_>) -> Self {
        Self {
            name: resolve(headers, aliases.name),
            description: resolve(headers, aliases.description),
            tags: resolve(headers, aliases.tags),
            image: resolve(headers, aliases.image),
        }
    }

    pub fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::Name => self.name,
            Field::Description => self.description,
            Field::Tags => self.tags,
            Field::Image => self.image,
        }
    }

    /// No name column means no row can ever produce a move.
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_takes_first_header_position() {
        assert_eq!(resolve(&["Name", "Title"], &["name", "title"]), Some(0));
        // alias order does not override header order
        assert_eq!(resolve(&["Name", "Title"], &["title", "name"]), Some(0));
    }

    #[test]
    fn substring_fallback_when_no_exact_header() {
        assert_eq!(resolve(&["Character Name"], &["name"]), Some(0));
        assert_eq!(resolve(&["Id", "Move Title (EN)"], NAME_ALIASES), Some(1));
    }

    #[test]
    fn exact_pass_beats_earlier_substring_match() {
        assert_eq!(resolve(&["Character Name", "Name"], NAME_ALIASES), Some(1));
    }

    #[test]
    fn no_match_is_none() {
        assert_eq!(resolve(&["Foo", "Bar"], &["name", "nombre"]), None);
        let empty: [&str; 0] = [];
        assert_eq!(resolve(&empty, NAME_ALIASES), None);
    }

    #[test]
    fn header_never_matches_inside_alias() {
        // "ta" sits inside "tags", but only alias-in-header counts
        assert_eq!(resolve(&["ta"], TAGS_ALIASES), None);
    }

    #[test]
    fn empty_alias_is_ignored_in_substring_pass() {
        assert_eq!(resolve(&["Foo", "Bar"], &[""]), None);
        // but an empty header still equals an empty alias exactly
        assert_eq!(resolve(&["Foo", ""], &[""]), Some(1));
    }

    #[test]
    fn comparison_ignores_case_padding_and_bom() {
        assert_eq!(resolve(&["  NOMBRE  "], NAME_ALIASES), Some(0));
        assert_eq!(resolve(&["\u{feff}Name", "Title"], NAME_ALIASES), Some(0));
        assert_eq!(resolve(&["DESCRIPCIÓN"], DESCRIPTION_ALIASES), Some(0));
    }

    #[test]
    fn bom_prefixed_substring_header_loses_to_later_exact() {
        assert_eq!(resolve(&["\u{feff}Character Name", "Title"], NAME_ALIASES), Some(1));
        assert_eq!(resolve(&["\u{feff}Character Name", "Notes"], NAME_ALIASES), Some(0));
    }

    #[test]
    fn column_map_resolves_every_field_independently() {
        let headers = ["Img", "Tags", "Descripcion", "Nombre"];
        let map = ColumnMap::resolve(&headers);
        assert_eq!(map.name, Some(3));
        assert_eq!(map.description, Some(2));
        assert_eq!(map.tags, Some(1));
        assert_eq!(map.image, Some(0));
        assert_eq!(map.get(Field::Tags), Some(1));
        for field in Field::ALL {
            assert_eq!(map.get(field), resolve(&headers, DEFAULT_ALIASES.for_field(field)));
        }
    }

    #[test]
    fn column_map_with_custom_aliases() {
        let aliases = FieldAliases { name: &["move"], ..DEFAULT_ALIASES };
        let map = ColumnMap::with_aliases(&["Move", "Notes"], &aliases);
        assert_eq!(map.name, Some(0));
        assert!(map.description.is_none());
        assert!(!ColumnMap::resolve(&["Move"]).has_name());
    }
}
