//! Property-based tests for the star field generator and modal controller
//!
//! Uses proptest to verify invariants across arbitrary inputs.

use portfolio_core::{starfield, Activation, ModalState};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any activation a card can receive
fn activation_strategy() -> impl Strategy<Value = Activation> {
    prop_oneof![
        Just(Activation::Card),
        Just(Activation::Close),
        Just(Activation::OverlayBackground),
        Just(Activation::PanelInterior),
    ]
}

/// Sequences of activations of arbitrary length
fn activation_seq_strategy(max_len: usize) -> impl Strategy<Value = Vec<Activation>> {
    prop::collection::vec(activation_strategy(), 0..max_len)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// generate(count) always returns exactly count descriptors
    #[test]
    fn generate_returns_exact_count(count in 0usize..500) {
        prop_assert_eq!(starfield::generate(count).len(), count);
    }

    /// Every generated field stays within its declared half-open bound
    #[test]
    fn generated_fields_within_bounds(count in 1usize..300) {
        for star in starfield::generate(count) {
            prop_assert!((1.0..4.0).contains(&star.size));
            prop_assert!((0.0..100.0).contains(&star.top_percent));
            prop_assert!((0.0..100.0).contains(&star.left_percent));
            prop_assert!((2.0..5.0).contains(&star.animation_duration_secs));
        }
    }

    /// Ids are the generation indices, so they are unique per generation
    #[test]
    fn generated_ids_unique(count in 0usize..300) {
        let stars = starfield::generate(count);
        for (i, star) in stars.iter().enumerate() {
            prop_assert_eq!(star.id, i as u32);
        }
    }

    /// The controller tracks a reference boolean model under any sequence
    #[test]
    fn modal_matches_boolean_model(seq in activation_seq_strategy(64)) {
        let mut modal = ModalState::new();
        let mut model_open = false;

        for activation in seq {
            let expected_consumed = match activation {
                Activation::Card => !model_open,
                Activation::Close
                | Activation::OverlayBackground
                | Activation::PanelInterior => model_open,
            };
            model_open = match activation {
                Activation::Card => true,
                Activation::Close | Activation::OverlayBackground => false,
                Activation::PanelInterior => model_open,
            };

            prop_assert_eq!(modal.activate(activation), expected_consumed);
            prop_assert_eq!(modal.is_open(), model_open);
        }
    }
}
