// Unlock timing (ms, relative to phase entry)
pub const STRESS_DURATION_MS: u64 = 400;
pub const IMPACT_DELAY_MS: u64 = 100;
pub const CRACK_FADE_MS: u64 = 250;
pub const SHARD_DURATION_MS: u64 = 500;
pub const BREAK_DURATION_MS: u64 = 700;
pub const FLASH_FADE_MS: u64 = 200;
pub const DEFAULT_CELEBRATION_MS: u64 = 1800;

// Stress phase
pub const CRACK_COUNT: usize = 5;
pub const CRACK_STAGGER_MS: u64 = 60;
pub const CRACK_ANGLE_JITTER_RAD: f64 = 0.15;
pub const CRACK_LENGTH_RANGE: (f64, f64) = (0.30, 0.50); // fraction of cell size
pub const TREMOR_AMPLITUDE: f64 = 1.5;
pub const TREMOR_FREQUENCY_HZ: f64 = 28.0;

// Break phase scale beats: (ms from break entry, scale)
pub const SCALE_KEYFRAMES: [(u64, f64); 5] = [
    (0, 1.00),
    (100, 1.06), // tension
    (160, 1.18), // overshoot
    (240, 0.92), // recoil
    (320, 0.92), // hold
];
pub const SPRING_DAMPING: f64 = 6.0;
pub const SPRING_FREQUENCY_HZ: f64 = 3.0;

// Shards
pub const SHARD_RADIUS_RANGE: (f64, f64) = (0.02, 0.12); // fraction of cell size
pub const SHARD_ANGLE_JITTER_RAD: f64 = 0.4;
pub const SHARD_SPEED_RANGE: (f64, f64) = (60.0, 120.0); // units/s
pub const SHARD_SIZE_RANGE: (f64, f64) = (10.0, 20.0);
pub const SHARD_STAGGER_MS: u64 = 80;
pub const SHARD_GRAVITY: f64 = 420.0; // units/s²
pub const SHARD_SPIN_DEG_PER_SEC: f64 = 540.0;

// Feedback names
pub const SOUND_GLASS_BREAK: &str = "glass_break";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_floor_is_1100ms() {
        assert_eq!(STRESS_DURATION_MS + BREAK_DURATION_MS, 1100);
    }

    #[test]
    fn test_impact_inside_break() {
        assert!(IMPACT_DELAY_MS < BREAK_DURATION_MS);
        assert!(IMPACT_DELAY_MS + SHARD_STAGGER_MS + SHARD_DURATION_MS <= BREAK_DURATION_MS);
    }

    #[test]
    fn test_last_crack_starts_within_stress() {
        let last_crack = (CRACK_COUNT as u64 - 1) * CRACK_STAGGER_MS;
        assert!(last_crack < STRESS_DURATION_MS);
    }

    #[test]
    fn test_scale_keyframes_ordered() {
        assert!(SCALE_KEYFRAMES.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(SCALE_KEYFRAMES[1].0, IMPACT_DELAY_MS);
    }
}
