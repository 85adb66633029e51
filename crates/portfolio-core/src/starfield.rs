//! Background Star Field
//!
//! Generates the decorative star descriptors rendered behind the page.
//! Each descriptor is drawn once per page load and never mutated; the UI
//! layer is responsible for generating exactly once per component lifetime.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of stars rendered behind the page.
pub const STAR_COUNT: usize = 100;

/// Render parameters for one decorative background star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDescriptor {
    /// Unique within one generation (the star's index)
    pub id: u32,

    /// Diameter in pixels, in [1, 4)
    pub size: f32,

    /// Vertical position as a percentage of the viewport, in [0, 100)
    pub top_percent: f32,

    /// Horizontal position as a percentage of the viewport, in [0, 100)
    pub left_percent: f32,

    /// Twinkle animation duration in seconds, in [2, 5)
    pub animation_duration_secs: f32,
}

/// Generate `count` star descriptors from the thread-local RNG.
pub fn generate(count: usize) -> Vec<StarDescriptor> {
    generate_with(&mut rand::rng(), count)
}

/// Generate `count` star descriptors from an explicit RNG.
///
/// Every field is drawn uniformly from its half-open range; `id` is the
/// star's index within the generation.
pub fn generate_with<R: Rng>(rng: &mut R, count: usize) -> Vec<StarDescriptor> {
    (0..count)
        .map(|i| StarDescriptor {
            id: i as u32,
            size: rng.random_range(1.0..4.0),
            top_percent: rng.random_range(0.0..100.0),
            left_percent: rng.random_range(0.0..100.0),
            animation_duration_secs: rng.random_range(2.0..5.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_exact_count() {
        assert_eq!(generate(STAR_COUNT).len(), STAR_COUNT);
        assert_eq!(generate(0).len(), 0);
        assert_eq!(generate(7).len(), 7);
    }

    #[test]
    fn test_fields_within_bounds() {
        for star in generate(STAR_COUNT) {
            assert!((1.0..4.0).contains(&star.size), "size {}", star.size);
            assert!(
                (0.0..100.0).contains(&star.top_percent),
                "top {}",
                star.top_percent
            );
            assert!(
                (0.0..100.0).contains(&star.left_percent),
                "left {}",
                star.left_percent
            );
            assert!(
                (2.0..5.0).contains(&star.animation_duration_secs),
                "duration {}",
                star.animation_duration_secs
            );
        }
    }

    #[test]
    fn test_ids_are_sequential_and_unique() {
        let stars = generate(STAR_COUNT);
        for (i, star) in stars.iter().enumerate() {
            assert_eq!(star.id, i as u32);
        }
    }

    #[test]
    fn test_independent_calls_share_shape_not_values() {
        // Same count and bounds every call; positions almost surely differ.
        let a = generate(STAR_COUNT);
        let b = generate(STAR_COUNT);
        assert_eq!(a.len(), b.len());
        assert_ne!(a, b);
    }
}
