/// Collapse a multi-line "Where" cell into a single line, joining the
/// non-blank lines with ", ".
pub fn normalize_location(input: &str) -> String {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
