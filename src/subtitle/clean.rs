use once_cell::sync::Lazy;
use regex::Regex;

// Hearing-impaired annotations such as `[door creaks]`
static ANNOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[.*?\]").expect("annotation pattern is valid")
});

/// Drop every line that contains a bracketed annotation anywhere in it
pub fn strip_annotations(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .filter(|line| !ANNOTATION.is_match(line))
        .collect()
}
