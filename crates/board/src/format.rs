/// `"1 step"`, `"3 steps"`, `"0 steps"`.
pub fn counted(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_pluralizes_everything_but_one() {
        assert_eq!(counted(1, "user"), "1 user");
        assert_eq!(counted(2, "user"), "2 users");
        assert_eq!(counted(0, "step"), "0 steps");
    }
}
