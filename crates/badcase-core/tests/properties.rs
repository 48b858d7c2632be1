//! Randomized structural properties, driven by proptest over RNG seeds.

use badcase_core::{assemble, table, Domain};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn assembled_documents_hold_separator_invariant(
        seed in any::<u64>(),
        n in 1usize..8,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        for domain in Domain::ALL {
            let doc = assemble(&mut rng, domain, n);
            prop_assert!(!doc.is_empty());
            prop_assert!(doc.matches("\n\n").count() >= n - 1);
        }
    }

    #[test]
    fn every_table_subformat_keeps_min_row_count(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for format in table::TableFormat::ALL {
            let rendered = table::broken_table_with(&mut rng, format);
            prop_assert!(rendered.lines().count() >= 3);
        }
    }

    #[test]
    fn corruption_never_empties_a_table(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let rendered = table::broken_table(&mut rng);
        let corrupted = table::inject_errors(&mut rng, &rendered);
        prop_assert!(!corrupted.is_empty());
    }
}
