#![cfg(feature = "serde")]

extern crate strict_arrays;
extern crate toml;

#[cfg(test)]
mod tests {
    use strict_arrays::arrays::indexing::IndexSet;
    use strict_arrays::arrays::slices::StridedRange;
    use strict_arrays::arrays::{Array, FixedArray};

    #[test]
    fn test_serialize_array() {
        let array = Array::from(vec![1.5, 2.0]);
        let encoded = toml::to_string(&array).unwrap();
        let decoded: Array<f64> = toml::from_str(&encoded).unwrap();
        assert_eq!(decoded, array);
    }

    #[test]
    fn test_deserialize_fixed_array() {
        let decoded: FixedArray<i32, 3> = toml::from_str("data = [1, 2, 3]").unwrap();
        assert_eq!(decoded, FixedArray::from([1, 2, 3]));
        let wrong_size: Result<FixedArray<i32, 2>, _> = toml::from_str("data = [1, 2, 3]");
        assert!(wrong_size.is_err());
    }

    #[test]
    fn test_deserialize_descriptors() {
        let range: StridedRange = toml::from_str("start = 4\ncount = 2\nstride = -2").unwrap();
        assert_eq!(range, StridedRange::new(4, 2, -2));
        let set: IndexSet = toml::from_str("positions = [0, 3]").unwrap();
        assert_eq!(set, IndexSet::from([0, 3]));
    }
}
