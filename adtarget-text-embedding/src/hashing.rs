use base64::{engine::general_purpose::STANDARD, Engine};

/// Content fingerprint for page text: blake3 of the UTF-8 bytes, standard base64.
pub fn hash_text(text: &str) -> String {
    STANDARD.encode(blake3::hash(text.as_bytes()).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_text_same_hash() {
        assert_eq!(hash_text("laptop deals"), hash_text("laptop deals"));
        assert_ne!(hash_text("laptop deals"), hash_text("laptop deal"));
    }

    #[test]
    fn hash_is_padded_base64_of_32_bytes() {
        let hash = hash_text("");
        assert_eq!(hash.len(), 44);
        assert!(hash.ends_with('='));
    }
}
