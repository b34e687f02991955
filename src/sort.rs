use log::debug;

use crate::comparable::Comparable;
use crate::rational::Rational;

pub fn insertion_sort<T: Comparable>(arr: &mut [T]) -> &mut [T] {
    insertion_sort_by(arr, |a, b| a.less_than(b))
}

// Stable, sorts ascending by is_less. Slices shorter than 2 are left untouched.
pub fn insertion_sort_by<T, F>(arr: &mut [T], is_less: F) -> &mut [T]
where
    F: Fn(&T, &T) -> bool,
{
    if arr.len() < 2 {
        return arr;
    }
    debug!("Insertion sort on {} elements", arr.len());

    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && is_less(&arr[j], &arr[j - 1]) {
            arr.swap(j, j - 1);
            j -= 1;
        }
    }
    arr
}

pub fn sort_ints(arr: &mut [i64]) -> &mut [i64] {
    insertion_sort(arr)
}

pub fn sort_strings(arr: &mut [String]) -> &mut [String] {
    insertion_sort(arr)
}

pub fn sort_rationals(arr: &mut [Rational]) -> &mut [Rational] {
    insertion_sort(arr)
}

pub fn is_sorted<T: Comparable>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| !w[1].less_than(&w[0]))
}
