//! Tech-stack heuristics over the languages API and the root directory listing.

use serde_json::Value;

/// Languages kept from the languages API (in response order).
pub const MAX_LANGUAGES: usize = 5;

/// Root marker files and the technology each one implies, checked in this order.
pub const MARKERS: &[(&[&str], &str)] = &[
    (&["package.json"], "Node.js/npm"),
    (&["requirements.txt", "pyproject.toml"], "Python"),
    (&["Dockerfile"], "Docker"),
    (&["Cargo.toml"], "Rust"),
    (&["go.mod"], "Go"),
];

pub const FALLBACK_TECH: &str = "software";
pub const NO_DESCRIPTION: &str = "No description provided.";

/// Keys of the languages object, in order; anything else yields nothing.
pub fn language_names(languages: &Value) -> Vec<String> {
    languages
        .as_object()
        .map(|o| o.keys().cloned().collect())
        .unwrap_or_default()
}

/// `name` of every object entry in a contents listing; other entries are ignored.
pub fn root_file_names(contents: &Value) -> Vec<String> {
    contents
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|e| e.as_object()?.get("name")?.as_str())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Top languages followed by marker-file technologies, before deduplication.
pub fn detect_stack(languages: &[String], files: &[String]) -> Vec<String> {
    let mut stack: Vec<String> = languages.iter().take(MAX_LANGUAGES).cloned().collect();
    for (markers, tech) in MARKERS {
        if markers.iter().any(|m| files.iter().any(|f| f == m)) {
            stack.push(tech.to_string());
        }
    }
    stack
}

/// Drops repeats, keeping the first occurrence of each entry.
pub fn dedupe(stack: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(stack.len());
    for tech in stack {
        if !out.contains(tech) {
            out.push(tech.clone());
        }
    }
    out
}

/// `"A {primary} repository. {description}"`.
pub fn summarize(primary: Option<&str>, description: &str) -> String {
    format!(
        "A {} repository. {}",
        primary.unwrap_or(FALLBACK_TECH),
        description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn languages_keep_response_order() {
        let langs = json!({"Rust": 900, "Shell": 50, "Python": 10});
        assert_eq!(language_names(&langs), strings(&["Rust", "Shell", "Python"]));
        assert!(language_names(&json!([])).is_empty());
    }

    #[test]
    fn contents_skip_non_objects() {
        let contents = json!([{"name": "Cargo.toml"}, "junk", {"path": "x"}, {"name": "go.mod"}]);
        assert_eq!(root_file_names(&contents), strings(&["Cargo.toml", "go.mod"]));
    }

    #[test]
    fn stack_truncates_languages_and_appends_markers_in_order() {
        let langs = strings(&["A", "B", "C", "D", "E", "F"]);
        let files = strings(&["go.mod", "Dockerfile", "pyproject.toml", "package.json"]);
        assert_eq!(
            detect_stack(&langs, &files),
            strings(&["A", "B", "C", "D", "E", "Node.js/npm", "Python", "Docker", "Go"])
        );
    }

    #[test]
    fn python_marker_counts_once() {
        let files = strings(&["requirements.txt", "pyproject.toml"]);
        assert_eq!(detect_stack(&[], &files), strings(&["Python"]));
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let stack = strings(&["Rust", "Python", "Rust", "Docker", "Python"]);
        assert_eq!(dedupe(&stack), strings(&["Rust", "Python", "Docker"]));
    }

    #[test]
    fn summary_falls_back_to_software() {
        assert_eq!(summarize(None, "desc"), "A software repository. desc");
        assert_eq!(summarize(Some("Rust"), ""), "A Rust repository. ");
    }
}
