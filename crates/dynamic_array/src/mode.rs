use crate::array::DynamicArray;

/// Most frequent values of a sorted array and their run length.
///
/// Equal values must be contiguous. Every value whose run reaches the maximum
/// is reported, in order of first occurrence. An empty array yields `([], 0)`.
pub fn find_mode<T: PartialEq + Clone>(arr: &DynamicArray<T>) -> (DynamicArray<T>, usize) {
    let mut best = 0;
    let mut current: Option<&T> = None;
    let mut run = 0;
    for value in arr {
        if current == Some(value) {
            run += 1;
        } else {
            current = Some(value);
            run = 1;
        }
        best = best.max(run);
    }

    let mut modes = DynamicArray::new();
    let mut run = 0;
    let mut values = arr.iter().peekable();
    while let Some(value) = values.next() {
        run += 1;
        if values.peek() != Some(&value) {
            if run == best {
                modes.append(value.clone());
            }
            run = 0;
        }
    }
    (modes, best)
}

#[cfg(test)]
mod tests {
    use super::find_mode;
    use crate::array::DynamicArray;

    fn modes<T: Clone + PartialEq>(values: Vec<T>) -> (Vec<T>, usize) {
        let (mode, frequency) = find_mode(&DynamicArray::from(values));
        (mode.iter().cloned().collect(), frequency)
    }

    #[test]
    fn ties_are_all_reported() {
        assert_eq!(modes(vec![1, 1, 2, 3, 3, 4]), (vec![1, 3], 2));
    }

    #[test]
    fn all_distinct_and_all_equal() {
        assert_eq!(modes(vec![1, 2, 3, 4, 5]), (vec![1, 2, 3, 4, 5], 1));
        assert_eq!(modes(vec![9, 9, 9, 9]), (vec![9], 4));
        assert_eq!(modes(vec![42]), (vec![42], 1));
        assert_eq!(modes(Vec::<i64>::new()), (vec![], 0));
    }

    #[test]
    fn strings_and_trailing_run() {
        let words = vec![
            "Apple", "Banana", "Banana", "Carrot", "Carrot", "Date", "Date", "Date", "Eggplant",
            "Eggplant", "Eggplant", "Fig", "Fig", "Grape",
        ];
        assert_eq!(modes(words), (vec!["Date", "Eggplant"], 3));
        assert_eq!(modes(vec![1, 2, 2, 3, 3, 3]), (vec![3], 3));
    }

    #[test]
    fn growing_prefixes() {
        let case = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
        let expected = [
            (vec![4], 1),
            (vec![4, 3], 1),
            (vec![3], 2),
            (vec![3], 2),
            (vec![3, 2], 2),
            (vec![2], 3),
            (vec![2], 3),
            (vec![2], 3),
            (vec![2, 1], 3),
            (vec![1], 4),
        ];
        for (len, want) in (1..=case.len()).zip(expected) {
            assert_eq!(modes(case[..len].to_vec()), want, "prefix_len={len}");
        }
    }
}
