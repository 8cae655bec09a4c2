/// Property-based tests for the renderer and the copy round trip.
///
/// Uses `proptest` to generate random trees and verify the properties the
/// hand-written tests can't cover exhaustively:
/// - rendering is deterministic and total (never panics, any shape)
/// - output is independent of map insertion/iteration order
/// - `Map::copy` of a JSON-portable tree preserves value equality and
///   rendered output
///
/// Strategies generate finite floats only (an integer mantissa divided by a
/// power of ten); non-finite floats are covered by hand-written tests since
/// they intentionally fail the copy path.
use proptest::prelude::*;

use maptree_core::{render, Map, Value};

// ============================================================================
// Strategies
// ============================================================================

/// Mapping keys: short identifier-like strings.
fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,12}").unwrap()
}

/// Finite floats with 1-4 decimal places.
fn arb_float() -> impl Strategy<Value = f64> {
    (-100_000_000i64..100_000_000i64, 1u32..5u32)
        .prop_map(|(mantissa, decimals)| mantissa as f64 / 10f64.powi(decimals as i32))
}

/// Scalar tree nodes, including null.
fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1_000_000i64..1_000_000i64).prop_map(Value::Int),
        arb_float().prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ]
}

/// Trees of bounded depth: scalars at the leaves, sequences and maps above.
fn arb_value(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_scalar().boxed()
    } else {
        prop_oneof![
            4 => arb_scalar(),
            2 => prop::collection::vec(arb_value(depth - 1), 0..4).prop_map(Value::Seq),
            2 => prop::collection::hash_map(arb_key(), arb_value(depth - 1), 0..4)
                .prop_map(|m| Value::Map(m.into_iter().collect())),
        ]
        .boxed()
    }
}

/// Root maps holding trees up to 3 levels deep.
fn arb_map() -> impl Strategy<Value = Map> {
    prop::collection::hash_map(arb_key(), arb_value(2), 0..6).prop_map(|m| m.into_iter().collect())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Rendering the same tree twice yields the same string, in both modes.
    #[test]
    fn render_is_deterministic(value in arb_value(3), typed in any::<bool>()) {
        prop_assert_eq!(render(&value, typed, 0), render(&value, typed, 0));
    }

    /// Maps built from the same pairs in opposite insertion orders render
    /// identically — sorting removes any insertion-order dependence.
    #[test]
    fn render_is_insertion_order_invariant(
        pairs in prop::collection::hash_map(arb_key(), arb_value(2), 0..6)
    ) {
        let pairs: Vec<(String, Value)> = pairs.into_iter().collect();
        let forward: Map = pairs.iter().cloned().collect();
        let mut reversed = Map::new();
        for (k, v) in pairs.iter().rev() {
            reversed.insert(k.clone(), v.clone());
        }
        prop_assert_eq!(forward.string_indent(0), reversed.string_indent(0));
        prop_assert_eq!(
            forward.string_indent_no_type_info(0),
            reversed.string_indent_no_type_info(0)
        );
    }

    /// Rendering is total over any generated shape, mode, and offset.
    #[test]
    fn render_never_panics(value in arb_value(3), typed in any::<bool>(), offset in 0usize..4) {
        let _ = render(&value, typed, offset);
    }

    /// Root map rendering never carries a trailing newline.
    #[test]
    fn no_trailing_newline(map in arb_map()) {
        prop_assert!(!map.string_indent(0).ends_with('\n'));
        prop_assert!(!map.string_indent_no_type_info(0).ends_with('\n'));
    }

    /// Copying a JSON-portable tree preserves both value equality and the
    /// rendered output.
    #[test]
    fn copy_round_trip_preserves_tree(map in arb_map()) {
        let copied = map.copy().unwrap();
        prop_assert_eq!(&copied, &map);
        prop_assert_eq!(copied.string_indent(0), map.string_indent(0));
    }

    /// Two value-equal maps render identically even when their internal
    /// iteration orders differ (freshly built `HashMap`s hash keys with
    /// different random seeds).
    #[test]
    fn value_equal_maps_render_identically(map in arb_map()) {
        let rebuilt: Map = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        prop_assert_eq!(&rebuilt, &map);
        prop_assert_eq!(rebuilt.string_indent(0), map.string_indent(0));
    }
}
