// Light singularization: folds regular English plurals onto one root.
//
// Every rule's output is a fixed point of the rules, so applying
// `singularize` twice is the same as applying it once. Normalization relies
// on that to stay idempotent.

/// Tokens at or below this many characters are left alone.
const MIN_CHARS: usize = 3;

/// Map a lowercase token to its singular root.
///
/// Only purely alphabetic tokens longer than three characters are touched:
///
/// - `flies` → `fly` (`-ies` → `-y`, more than four characters)
/// - `classes` → `class`, `boxes` → `box`, `churches` → `church`
/// - `glass`, `status`, `analysis` are kept (`-ss`, `-us`, `-is`)
/// - `words` → `word` (trailing `s` dropped)
pub fn singularize(token: &str) -> String {
    let len = token.chars().count();
    if len <= MIN_CHARS || !token.chars().all(char::is_alphabetic) {
        return token.to_string();
    }

    if len > MIN_CHARS + 1 {
        if let Some(stem) = token.strip_suffix("ies") {
            return format!("{stem}y");
        }
        for suffix in ["sses", "xes", "ches", "shes"] {
            if token.ends_with(suffix) {
                return token[..token.len() - 2].to_string();
            }
        }
    }

    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }

    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}
