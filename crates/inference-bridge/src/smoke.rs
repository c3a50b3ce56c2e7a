//! Scalar connectivity smoke operations
//!
//! These carry no product logic; they exist so an integrator can verify the
//! boundary end to end with trivial inputs before shipping real payloads.
//! Arithmetic wraps in two's complement, matching the 32-bit platform ints
//! the boundary originally carried.

/// Sum of two 32-bit integers, wrapping on overflow
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Square of a 32-bit integer, wrapping on overflow; sign is discarded
pub fn square(n: i32) -> i32 {
    n.wrapping_mul(n)
}

/// Deterministic greeting containing `name` unmodified
pub fn hello(name: &str) -> String {
    format!("Hello {name}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_handles_negatives_and_zero() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-7, 7), 0);
        assert_eq!(add(-4, -6), -10);
        assert_eq!(add(0, 0), 0);
    }

    #[test]
    fn add_wraps_at_the_boundary() {
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn square_discards_sign() {
        assert_eq!(square(5), 25);
        assert_eq!(square(-5), 25);
        assert_eq!(square(0), 0);
        assert_eq!(square(-1), 1);
    }

    #[test]
    fn square_wraps_on_overflow() {
        assert_eq!(square(i32::MAX), i32::MAX.wrapping_mul(i32::MAX));
    }

    #[test]
    fn hello_echoes_name_unmodified() {
        assert_eq!(hello("world"), "Hello world!");
        assert_eq!(hello(""), "Hello !");
        assert!(hello("Grace Hopper").contains("Grace Hopper"));
        assert_eq!(hello("x"), hello("x"));
    }
}
