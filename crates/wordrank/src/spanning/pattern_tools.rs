//! # Pattern Tools

/// A macro to concatenate multiple string literals with a specified separator.
///
/// # Examples
///
/// ```rust
/// use wordrank::join_strs;
///
/// let result = join_strs!(",", ("Hello", "World", "Rust"));
/// assert_eq!(result, "Hello,World,Rust");
///
/// let result = join_strs!(";", ("OnlyOne"));
/// assert_eq!(result, "OnlyOne");
/// ```
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// An extension of [`join_strs!()`] which uses the "|" as the separator.
///
/// Used to assemble alternation split patterns.
#[macro_export]
macro_rules! join_patterns {
    ($($e:literal),* $(,)?) => { $crate::join_strs!("|", ($($e),*)) };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_join_patterns() {
        assert_eq!(join_patterns!("a", "b", "c"), "a|b|c");
        assert_eq!(join_patterns!(r"\s+", r"\p{N}{1,3}",), r"\s+|\p{N}{1,3}");
    }

    #[test]
    fn test_join_strs() {
        assert_eq!(join_strs!("+", ("a", "b", "c")), "a+b+c");
    }
}
