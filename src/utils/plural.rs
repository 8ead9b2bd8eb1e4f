//! Count formatting for log lines.

/// `"1 icon"`, `"3 icons"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "icon"), "0 icons");
        assert_eq!(plural_count(1, "image"), "1 image");
        assert_eq!(plural_count(18, "icon"), "18 icons");
    }
}
