//! Debris shards and stress cracks.
//!
//! Motion is closed-form in elapsed time, so any instant can be sampled
//! directly without stepping through the frames before it.

use crate::achievements::Rarity;
use crate::constants::{
    CRACK_ANGLE_JITTER_RAD, CRACK_COUNT, CRACK_FADE_MS, CRACK_LENGTH_RANGE, CRACK_STAGGER_MS,
    IMPACT_DELAY_MS, SHARD_ANGLE_JITTER_RAD, SHARD_DURATION_MS, SHARD_GRAVITY,
    SHARD_RADIUS_RANGE, SHARD_SIZE_RANGE, SHARD_SPEED_RANGE, SHARD_SPIN_DEG_PER_SEC,
    SHARD_STAGGER_MS,
};
use rand::Rng;
use std::f64::consts::TAU;

/// One debris fragment, generated fresh for each break.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShardDescriptor {
    /// Offset from the cell center.
    pub start_x: f64,
    pub start_y: f64,
    /// Direction of travel in radians.
    pub angle: f64,
    /// Units per second.
    pub speed: f64,
    pub size: f64,
    /// Ms after break-phase entry before the shard appears.
    pub appearance_delay_ms: u64,
}

/// Sampled shard position relative to the cell center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShardPose {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    /// Degrees.
    pub rotation: f64,
    pub size: f64,
}

impl ShardDescriptor {
    /// Pose at `elapsed_ms` since break-phase entry. `None` before the shard
    /// appears or once its duration window has passed.
    pub fn pose_at(&self, elapsed_ms: u64) -> Option<ShardPose> {
        if elapsed_ms < self.appearance_delay_ms {
            return None;
        }
        let local_ms = elapsed_ms - self.appearance_delay_ms;
        if local_ms > SHARD_DURATION_MS {
            return None;
        }

        let t = local_ms as f64 / 1000.0;
        let x = self.start_x + self.angle.cos() * self.speed * t;
        let y = self.start_y + self.angle.sin() * self.speed * t + SHARD_GRAVITY * t * t;
        let opacity = 1.0 - local_ms as f64 / SHARD_DURATION_MS as f64;
        let rotation = self.angle.to_degrees() + SHARD_SPIN_DEG_PER_SEC * t;

        Some(ShardPose {
            x,
            y,
            opacity,
            rotation,
            size: self.size,
        })
    }
}

/// Shards for a cell of the given rarity and pixel size.
///
/// Shards fan out evenly around the circle with bounded jitter, start a
/// short distance from the center, and appear staggered after the impact.
pub fn generate_shards(rarity: Rarity, cell_size: f64, rng: &mut impl Rng) -> Vec<ShardDescriptor> {
    let count = rarity.shard_count();
    let step = TAU / count as f64;

    (0..count)
        .map(|i| {
            let angle = i as f64 * step
                + rng.gen_range(-SHARD_ANGLE_JITTER_RAD..=SHARD_ANGLE_JITTER_RAD);
            let radius = cell_size * rng.gen_range(SHARD_RADIUS_RANGE.0..=SHARD_RADIUS_RANGE.1);

            ShardDescriptor {
                start_x: angle.cos() * radius,
                start_y: angle.sin() * radius,
                angle,
                speed: rng.gen_range(SHARD_SPEED_RANGE.0..=SHARD_SPEED_RANGE.1),
                size: rng.gen_range(SHARD_SIZE_RANGE.0..=SHARD_SIZE_RANGE.1),
                appearance_delay_ms: IMPACT_DELAY_MS + rng.gen_range(0..=SHARD_STAGGER_MS),
            }
        })
        .collect()
}

/// A hairline crack drawn during the stress phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackDescriptor {
    /// Radians from the cell center.
    pub angle: f64,
    /// Units.
    pub length: f64,
    /// Ms after stress entry before the crack starts fading in.
    pub delay_ms: u64,
}

impl CrackDescriptor {
    /// Opacity at `elapsed_ms` since stress entry.
    pub fn opacity_at(&self, elapsed_ms: u64) -> f64 {
        if elapsed_ms <= self.delay_ms {
            return 0.0;
        }
        ((elapsed_ms - self.delay_ms) as f64 / CRACK_FADE_MS as f64).min(1.0)
    }
}

/// Evenly spaced cracks with staggered fade-in.
pub fn generate_cracks(cell_size: f64, rng: &mut impl Rng) -> Vec<CrackDescriptor> {
    let step = TAU / CRACK_COUNT as f64;
    (0..CRACK_COUNT)
        .map(|i| CrackDescriptor {
            angle: i as f64 * step
                + rng.gen_range(-CRACK_ANGLE_JITTER_RAD..=CRACK_ANGLE_JITTER_RAD),
            length: cell_size * rng.gen_range(CRACK_LENGTH_RANGE.0..=CRACK_LENGTH_RANGE.1),
            delay_ms: i as u64 * CRACK_STAGGER_MS,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_shard_count_by_rarity() {
        let mut rng = create_test_rng();
        for (rarity, expected) in Rarity::ALL.iter().zip([8, 10, 12, 14, 16]) {
            for _ in 0..20 {
                assert_eq!(generate_shards(*rarity, 48.0, &mut rng).len(), expected);
            }
        }
    }

    #[test]
    fn test_shard_ranges() {
        let mut rng = create_test_rng();
        let cell = 50.0;
        for _ in 0..50 {
            for shard in generate_shards(Rarity::Legendary, cell, &mut rng) {
                let radius = shard.start_x.hypot(shard.start_y);
                assert!(radius >= cell * 0.02 - 1e-9 && radius <= cell * 0.12 + 1e-9);
                assert!((60.0..=120.0).contains(&shard.speed));
                assert!((10.0..=20.0).contains(&shard.size));
                assert!((100..=180).contains(&shard.appearance_delay_ms));
            }
        }
    }

    #[test]
    fn test_shard_angles_stay_near_their_slot() {
        let mut rng = create_test_rng();
        let shards = generate_shards(Rarity::Rare, 40.0, &mut rng);
        let step = TAU / shards.len() as f64;
        for (i, shard) in shards.iter().enumerate() {
            let slot = i as f64 * step;
            assert!((shard.angle - slot).abs() <= SHARD_ANGLE_JITTER_RAD + 1e-9);
        }
    }

    #[test]
    fn test_same_seed_same_shards() {
        let a = generate_shards(Rarity::Epic, 40.0, &mut ChaCha8Rng::seed_from_u64(7));
        let b = generate_shards(Rarity::Epic, 40.0, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_consecutive_runs_differ() {
        let mut rng = create_test_rng();
        let a = generate_shards(Rarity::Common, 40.0, &mut rng);
        let b = generate_shards(Rarity::Common, 40.0, &mut rng);
        assert_ne!(a, b);
    }

    #[test]
    fn test_pose_follows_parabola() {
        let shard = ShardDescriptor {
            start_x: 1.0,
            start_y: 2.0,
            angle: 0.0,
            speed: 100.0,
            size: 12.0,
            appearance_delay_ms: 100,
        };
        assert!(shard.pose_at(99).is_none());

        let start = shard.pose_at(100).unwrap();
        assert_eq!((start.x, start.y), (1.0, 2.0));
        assert_eq!(start.opacity, 1.0);

        // 250ms in: x = 1 + 100*0.25, y = 2 + g*0.0625
        let mid = shard.pose_at(350).unwrap();
        assert!((mid.x - 26.0).abs() < 1e-9);
        assert!((mid.y - (2.0 + SHARD_GRAVITY * 0.0625)).abs() < 1e-9);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
        assert!(mid.rotation > start.rotation);

        let end = shard.pose_at(600).unwrap();
        assert_eq!(end.opacity, 0.0);
        assert!(shard.pose_at(601).is_none());
    }

    #[test]
    fn test_cracks_stagger_by_60ms() {
        let cracks = generate_cracks(40.0, &mut create_test_rng());
        let delays: Vec<u64> = cracks.iter().map(|c| c.delay_ms).collect();
        assert_eq!(delays, vec![0, 60, 120, 180, 240]);
        for crack in &cracks {
            assert!(crack.length >= 12.0 && crack.length <= 20.0);
        }
    }

    #[test]
    fn test_crack_fade_in() {
        let crack = CrackDescriptor {
            angle: 0.0,
            length: 10.0,
            delay_ms: 60,
        };
        assert_eq!(crack.opacity_at(0), 0.0);
        assert_eq!(crack.opacity_at(60), 0.0);
        assert!((crack.opacity_at(185) - 0.5).abs() < 1e-9);
        assert_eq!(crack.opacity_at(400), 1.0);
    }
}
