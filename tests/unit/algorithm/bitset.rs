//! Tests for `TileBitset` operations including set operations and conversions

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use wavetile::algorithm::bitset::TileBitset;

    #[test]
    fn new_bitset_is_empty() {
        let bitset = TileBitset::new(10);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
    }

    #[test]
    fn all_bitset_contains_every_index() {
        let bitset = TileBitset::all(5);
        for i in 1..=5 {
            assert!(bitset.contains(i));
        }
        assert_eq!(bitset.count(), 5);
    }

    #[test]
    fn singleton_contains_only_its_member() {
        let bitset = TileBitset::singleton(4, 10);
        assert!(bitset.contains(4));
        assert!(!bitset.contains(3));
        assert_eq!(bitset.single(), Some(4));
    }

    #[test]
    fn single_is_none_when_more_than_one_member() {
        let mut bitset = TileBitset::new(10);
        bitset.insert(1);
        bitset.insert(2);
        assert_eq!(bitset.single(), None);
    }

    #[test]
    fn insert_and_contains() {
        let mut bitset = TileBitset::new(10);
        bitset.insert(5);
        assert!(bitset.contains(5));
        assert!(!bitset.contains(3));
        assert_eq!(bitset.count(), 1);
    }

    #[test]
    fn insert_ignores_zero_and_out_of_range() {
        let mut bitset = TileBitset::new(4);
        bitset.insert(0);
        bitset.insert(5);
        assert!(bitset.is_empty());
    }

    #[test]
    fn intersection_keeps_only_shared_members() {
        let mut set1 = TileBitset::new(10);
        set1.insert(1);
        set1.insert(3);
        set1.insert(5);

        let mut set2 = TileBitset::new(10);
        set2.insert(3);
        set2.insert(5);
        set2.insert(7);

        let intersection = set1.intersection(&set2);
        assert_eq!(intersection.to_vec(), vec![3, 5]);
        assert_eq!(intersection.count(), 2);
    }

    #[test]
    fn intersect_with_mutates_in_place() {
        let mut set1 = TileBitset::new(10);
        set1.insert(1);
        set1.insert(2);

        let mut set2 = TileBitset::new(10);
        set2.insert(2);

        set1.intersect_with(&set2);
        assert_eq!(set1.to_vec(), vec![2]);
    }

    #[test]
    fn disjoint_sets_intersect_to_empty() {
        let mut set1 = TileBitset::new(10);
        set1.insert(1);
        set1.insert(2);

        let mut set2 = TileBitset::new(10);
        set2.insert(3);
        set2.insert(4);

        let intersection = set1.intersection(&set2);
        assert!(intersection.is_empty());
        assert_eq!(intersection.to_vec(), Vec::<usize>::new());
    }

    #[test]
    fn from_hashset_round_trips_membership() {
        let mut hashset = HashSet::new();
        hashset.insert(1);
        hashset.insert(3);
        hashset.insert(5);

        let bitset = TileBitset::from_hashset(&hashset, 10);
        assert!(bitset.contains(1));
        assert!(bitset.contains(3));
        assert!(bitset.contains(5));
        assert!(!bitset.contains(2));
        assert_eq!(bitset.count(), 3);
    }

    #[test]
    fn display_includes_member_count() {
        let bitset = TileBitset::singleton(4, 10);
        assert!(bitset.to_string().contains('1'));
    }
}
