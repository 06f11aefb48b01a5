// tests/exit_code_property.rs

#![cfg(unix)]

use proptest::prelude::*;
use shellrun::run;

proptest! {
    // Each case spawns a shell, so keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn exit_n_returns_n_truncated_to_eight_bits(n in 0u32..2048) {
        let status = run(format!("exit {n}"));
        prop_assert_eq!(status, (n % 256) as i32);
    }
}
