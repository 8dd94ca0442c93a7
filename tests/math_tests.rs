use aoc_search::math::{divisors, gcd, gcd_multiple, lcm, lcm_multiple, sign};

#[test]
fn test_gcd() {
    assert_eq!(gcd(48, 18), 6);
    assert_eq!(gcd(-48, 18), 6);
    assert_eq!(gcd(0, 5), 5);
    assert_eq!(gcd(0, 0), 0);
    assert_eq!(gcd(17u64, 13), 1);
}

#[test]
fn test_lcm() {
    assert_eq!(lcm(4, 6), 12);
    assert_eq!(lcm(-4, 6), 12);
    assert_eq!(lcm(0, 5), 0);
    assert_eq!(lcm(7i64, 7), 7);
}

#[test]
fn test_multiple_values() {
    assert_eq!(gcd_multiple([12, 18, 24]), Some(6));
    assert_eq!(gcd_multiple([9]), Some(9));
    assert_eq!(gcd_multiple(Vec::<i64>::new()), None);

    // Cycle lengths of independent orbits meet at their lcm
    assert_eq!(lcm_multiple([18i64, 28, 44]), Some(2772));
    assert_eq!(lcm_multiple(1..=10u64), Some(2520));
    assert_eq!(lcm_multiple(Vec::<u64>::new()), None);
}

#[test]
fn test_divisors() {
    assert_eq!(divisors(1), vec![1]);
    assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
    assert_eq!(divisors(36), vec![1, 2, 3, 4, 6, 9, 12, 18, 36]);
    assert_eq!(divisors(13), vec![1, 13]);
    assert_eq!(divisors(0), Vec::<u64>::new());
}

#[test]
fn test_sign() {
    assert_eq!(sign(-7), -1);
    assert_eq!(sign(0), 0);
    assert_eq!(sign(42u8), 1);
    assert_eq!(sign(-0.5f64), -1);
}
