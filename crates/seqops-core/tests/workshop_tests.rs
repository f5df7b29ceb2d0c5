//! The applicative-programming workshop exercises, solved with the typed
//! operations. Each exercise pairs a hand-written loop with the
//! higher-order version and checks they agree.

use pretty_assertions::assert_eq;
use seqops_core::helpers::{exists, plus, times, truthy};
use seqops_core::{filter_seq, filter_seq_with, fold_seq, map_seq, reduce_seq, SeqExt};

// ══════════════════════════════════════════════════════════════════════════════
// map
// ══════════════════════════════════════════════════════════════════════════════

fn square_loop(arr: &[i32]) -> Vec<i32> {
    let mut out = Vec::new();
    for v in arr {
        out.push(v * v);
    }
    out
}

fn square(arr: &[i32]) -> Vec<i32> {
    map_seq(arr, |v, _| v * v)
}

fn add_index(arr: &[usize]) -> Vec<usize> {
    map_seq(arr, |v, i| v + i)
}

#[test]
fn squares() {
    assert_eq!(square_loop(&[1, 2, 3]), vec![1, 4, 9]);
    assert_eq!(square(&[1, 2, 3]), vec![1, 4, 9]);
}

#[test]
fn adds_index() {
    assert_eq!(add_index(&[1, 2, 3]), vec![1, 3, 5]);
}

#[test]
fn value_times_index() {
    assert_eq!(map_seq(&[1usize, 2, 3, 4], |v, i| v * i), vec![0, 2, 6, 12]);
}

// ══════════════════════════════════════════════════════════════════════════════
// filter
// ══════════════════════════════════════════════════════════════════════════════

fn remove_odd_indices(arr: &[i32]) -> Vec<i32> {
    filter_seq(arr, |_, i| i % 2 == 0)
}

#[test]
fn removes_odd_indices() {
    assert_eq!(remove_odd_indices(&[1, 2, 3, 4, 5]), vec![1, 3, 5]);
}

#[test]
fn product_with_index_above_four() {
    assert_eq!(filter_seq(&[1usize, 2, 3, 4], |v, i| v * i > 4), vec![3, 4]);
}

#[test]
fn filter_present_values_point_free() {
    let values = [Some("user"), None, Some("test")];
    assert_eq!(filter_seq(&values, exists), vec![Some("user"), Some("test")]);
}

#[test]
fn filter_truthy_keeps_zero_point_free() {
    let counts = [Some(0), None, Some(1)];
    assert_eq!(filter_seq(&counts, truthy), vec![Some(0), Some(1)]);

    let flags = [Some(true), None, Some(false)];
    assert_eq!(filter_seq(&flags, truthy), vec![Some(true)]);
}

// ══════════════════════════════════════════════════════════════════════════════
// reduce
// ══════════════════════════════════════════════════════════════════════════════

fn sum(arr: &[i32]) -> i32 {
    fold_seq(arr, 0, |acc, v, _| acc + v)
}

fn multiply(arr: &[i32]) -> i32 {
    fold_seq(arr, 1, times)
}

fn join(arr: &[&str], sep: &str) -> Option<String> {
    let words: Vec<String> = map_seq(arr, |s, _| s.to_string());
    reduce_seq(&words, |memo, s, _| format!("{memo}{sep}{s}"), None).ok()
}

fn longest<'a>(words: &[&'a str]) -> Option<&'a str> {
    words
        .reduce_seq(|a, b, _| if a.len() > b.len() { a } else { *b }, None)
        .ok()
}

#[test]
fn sums() {
    assert_eq!(sum(&[1, 2, 3, 4]), 10);
    assert_eq!(sum(&[0, 0, -1]), -1);
    assert_eq!(fold_seq(&[1, 2, 3, 4, 5], 0, plus), 15);
}

#[test]
fn multiplies() {
    assert_eq!(multiply(&[1, 2, 3, 4]), 24);
    assert_eq!(multiply(&[0, 1, 2, 3]), 0);
}

#[test]
fn joins() {
    assert_eq!(join(&["a"], ":").as_deref(), Some("a"));
    assert_eq!(join(&["a", "b", "c"], ":").as_deref(), Some("a:b:c"));
    assert_eq!(join(&[], ":"), None);
}

#[test]
fn finds_longest_word() {
    assert_eq!(longest(&["test", "kim", "winning", "lol"]), Some("winning"));
}

// ══════════════════════════════════════════════════════════════════════════════
// context
// ══════════════════════════════════════════════════════════════════════════════

struct People {
    max_age: u32,
}

impl People {
    fn valid_ages(&self, ages: &[u32]) -> Vec<u32> {
        filter_seq_with(ages, |this: &Self, age, _| *age < this.max_age, self)
    }
}

#[test]
fn valid_ages_with_context() {
    let people = People { max_age: 120 };
    assert_eq!(people.valid_ages(&[20, 30, 75, 156, 200]), vec![20, 30, 75]);
}
