use feedsim_core::noise;
use proptest::prelude::*;

// ── Noise bounds and determinism ─────────────────────────────────────────

proptest! {
    #[test]
    fn unit_stays_in_half_open_interval(seed in any::<u64>(), salt in any::<u64>()) {
        let v = noise::unit(seed, salt);
        prop_assert!((0.0..1.0).contains(&v), "unit out of range: {}", v);
    }

    #[test]
    fn unit_is_a_pure_function(seed in any::<u64>(), salt in any::<u64>()) {
        prop_assert_eq!(noise::unit(seed, salt), noise::unit(seed, salt));
    }

    #[test]
    fn signed_is_bounded_by_amplitude(
        seed in any::<u64>(),
        salt in any::<u64>(),
        amplitude in 0.0f64..1.0,
    ) {
        let v = noise::signed(seed, salt, amplitude);
        prop_assert!(v.abs() <= amplitude + f64::EPSILON, "signed out of range: {}", v);
    }

    #[test]
    fn oscillation_is_bounded_by_amplitude(
        index in 0usize..10_000,
        seed in any::<u64>(),
        frequency in 0.01f64..10.0,
        amplitude in 0.0f64..1.0,
    ) {
        let v = noise::oscillation(index, seed, frequency, amplitude);
        prop_assert!(v.abs() <= amplitude + f64::EPSILON, "oscillation out of range: {}", v);
    }
}
