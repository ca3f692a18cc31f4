//! Page-text tokenisation shared by the reference classifier and embedder.

/// Lowercased alphanumeric runs of `text`, in order, duplicates kept.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}
