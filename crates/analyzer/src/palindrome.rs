//! Palindrome detection.
//!
//! # Normalization
//!
//! Before comparison the input is normalized as follows:
//! 1. Every Unicode whitespace character is removed
//! 2. Every remaining character is lowercased (`char::to_lowercase`)
//!
//! Punctuation is kept. So `"Never odd or even"` is a palindrome, while
//! `"A man, a plan, a canal: Panama"` is not, because the commas and colon
//! take part in the comparison.
//!
//! The empty string and strings made only of whitespace are palindromes.
//!
//! ```rust
//! use analyzer::is_palindrome;
//!
//! assert!(is_palindrome("Racecar"));
//! assert!(is_palindrome("taco cat"));
//! assert!(!is_palindrome("hello"));
//! ```

/// Normalize `value` for palindrome comparison: drop whitespace, lowercase
/// the rest.
pub fn normalize_for_palindrome(value: &str) -> Vec<char> {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns `true` if `value` reads the same forward and backward after
/// [`normalize_for_palindrome`].
pub fn is_palindrome(value: &str) -> bool {
    let normalized = normalize_for_palindrome(value);
    normalized.iter().eq(normalized.iter().rev())
}
