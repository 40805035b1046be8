use grove_mixer::mixer::mix_pass;
use grove_mixer::{apply_decryption_key, mix, read_ints, CircularList, Int, ListIndex, MixError, MAX_NODES};

const EXAMPLE: &str = "\
1
2
-3
3
-2
0
4
";

// Deterministic values spread over a wide range, with a single zero.
fn scrambled(n: usize) -> Vec<Int> {
    let mut x: Int = 12345;
    let mut vals: Vec<Int> = (0..n)
        .map(|_| {
            x = (x * 1103515245 + 12345) % 2147483648;
            x % 20001 - 10000
        })
        .map(|v| if v == 0 { 1 } else { v })
        .collect();
    vals[n / 3] = 0;
    vals
}

fn sorted(mut vals: Vec<Int>) -> Vec<Int> {
    vals.sort();
    vals
}

#[test]
fn test_example_from_text() {
    let ints = read_ints(EXAMPLE.as_bytes()).unwrap();
    assert_eq!(mix(&ints, 1), Ok(3));

    let mut ints = ints;
    apply_decryption_key(&mut ints).unwrap();
    assert_eq!(mix(&ints, 10), Ok(1623178306));
}

#[test]
fn test_passes_permute_values() {
    let vals = scrambled(200);
    let mut cl: CircularList = vals.as_slice().into();
    for _ in 0..3 {
        mix_pass(&mut cl);
        assert_eq!(sorted(cl.values_from(ListIndex(0))), sorted(vals.clone()));
        for i in 0..cl.len() {
            assert_eq!(cl.walk(ListIndex(i), cl.len() as Int), ListIndex(i));
            assert_eq!(cl.walk(ListIndex(i), -(cl.len() as Int)), ListIndex(i));
        }
    }
}

#[test]
fn test_deterministic() {
    let mut vals = scrambled(500);
    assert_eq!(mix(&vals, 2), mix(&vals, 2));
    apply_decryption_key(&mut vals).unwrap();
    assert_eq!(mix(&vals, 3), mix(&vals, 3));
}

#[test]
fn test_zero_iterations_reads_input_order() {
    let vals: Vec<Int> = (0..7).collect();
    // 1000 % 7 = 6, then 5, then 4.
    assert_eq!(mix(&vals, 0), Ok(6 + 5 + 4));
}

#[test]
fn test_capacity_boundary() {
    let mut vals = scrambled(MAX_NODES);
    assert!(mix(&vals, 1).is_ok());
    vals.push(1);
    assert_eq!(
        mix(&vals, 1),
        Err(MixError::TooManyNodes { len: MAX_NODES + 1, max: MAX_NODES }),
    );
}

#[test]
fn test_single_element() {
    for iterations in [0, 1, 10] {
        assert_eq!(mix(&[0], iterations), Ok(0));
    }
    assert_eq!(mix(&[3], 1), Err(MixError::NoZero));
}
