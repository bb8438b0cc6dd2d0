// src/config/consts.rs

// Input
pub const DEFAULT_INPUT: &str = "moves.csv";

// Preview
pub const PREVIEW_LIMIT: usize = 10;
pub const JSON_INDENT: &[u8] = b"  ";

// Export
pub const TAG_SEPARATOR: char = ',';
pub const EXPORT_TAG_JOIN: &str = ", ";
pub const EXPORT_HEADERS: [&str; 4] = ["Name", "Description", "Tags", "Image"];
