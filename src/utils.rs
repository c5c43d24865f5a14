pub(crate) fn divup(dividend: usize, divisor: usize) -> usize {
    let quotient = dividend / divisor;
    match dividend % divisor {
        0 => quotient,
        _ => quotient + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divup() {
        assert_eq!(divup(8, 5), 2);
        assert_eq!(divup(10, 5), 2);
        assert_eq!(divup(0, 5), 0);
        assert_eq!(divup(11, 5), 3);
    }
}
