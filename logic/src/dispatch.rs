pub const LOCAL_WORK_SIZE: usize = 256;

/// Smallest multiple of `local` that covers `n` work items
pub fn round_up_global(n: usize, local: usize) -> usize {
    n.div_ceil(local) * local
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_keep_exact_multiples() {
        assert_eq!(round_up_global(256, 256), 256);
        assert_eq!(round_up_global(1024, 256), 1024);
    }

    #[test]
    fn should_round_partial_groups_up() {
        assert_eq!(round_up_global(1, 256), 256);
        assert_eq!(round_up_global(257, 256), 512);
        assert_eq!(round_up_global(1000, 256), 1024);
    }

    #[test]
    fn should_return_zero_for_an_empty_dispatch() {
        assert_eq!(round_up_global(0, 256), 0);
    }

    #[test]
    fn should_produce_the_smallest_covering_multiple() {
        for n in 1..=2048 {
            let global = round_up_global(n, LOCAL_WORK_SIZE);
            assert_eq!(global % LOCAL_WORK_SIZE, 0);
            assert!(global >= n);
            assert!(global - n < LOCAL_WORK_SIZE);
        }
    }
}
