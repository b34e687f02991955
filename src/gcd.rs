// Euclid with truncating remainder. The sign of the result follows the
// remainder sequence, so gcd(k*a, k*b) == k*gcd(a, b) for any nonzero k.
// m and n must not both be zero.
pub fn gcd(mut m: i64, mut n: i64) -> i64 {
    while n != 0 {
        let t = n;
        n = m % n;
        m = t;
    }
    m
}
