use arrayvec::ArrayVec;

use super::{ErrorKind, IStr, Nl, NonEmpty, Split, B, W, Ws};

fn input(data: &'static [u8]) -> IStr {
    IStr::new(data, 0)
}

#[test]
fn words_and_tuples() {
    let mut p = input(b"move 3 from 1 to 2\n");
    let (_, count, _, from, _, to) = p.next::<(W, usize, W, usize, W, usize)>().unwrap();
    assert_eq!((count, from, to), (3, 1, 2));
    assert!(p.try_next::<(W, usize)>().unwrap().is_none());
}

#[test]
fn lines() {
    let mut p = input(b"1 2\n3 4\n");
    assert_eq!(p.line::<(u32, u32)>().unwrap(), (1, 2));
    assert_eq!(p.try_line::<(u32, u32)>().unwrap(), Some((3, 4)));
    assert_eq!(p.try_line::<(u32, u32)>().unwrap(), None);
}

#[test]
fn line_terminated_values() {
    let mut p = input(b"17\nrest");
    let Nl(n) = p.next::<Nl<u32>>().unwrap();
    assert_eq!(n, 17);
    assert_eq!(p.next::<&str>().unwrap(), "rest");
}

#[test]
fn whitespace_counts_lines() {
    let mut p = input(b"1\n\n2");
    assert_eq!(p.next::<u32>().unwrap(), 1);
    assert_eq!(p.ws().unwrap(), 2);
    assert_eq!(p.next::<u32>().unwrap(), 2);
    assert_eq!(p.ws().unwrap(), 0);
}

#[test]
fn split_sequences() {
    let mut p = input(b"2-4,6-8");
    let Split((Split([a, b]), Split((c, d)))) = p
        .next::<Split<',', (Split<'-', [u32; 2]>, Split<'-', (u32, u32)>)>>()
        .unwrap();
    assert_eq!((a, b, c, d), (2, 4, 6, 8));
}

#[test]
fn collections() {
    let mut p = input(b"1 2 3");
    assert_eq!(p.next::<Vec<u32>>().unwrap(), vec![1, 2, 3]);

    let mut p = input(b"1 2 3");
    assert_eq!(p.next::<[u32; 3]>().unwrap(), [1, 2, 3]);

    let mut p = input(b"1 2 3");
    let values = p.next::<ArrayVec<u32, 4>>().unwrap();
    assert_eq!(&values[..], &[1, 2, 3]);
}

#[test]
fn array_capacity_overflow() {
    let mut p = input(b"1 2 3");
    let error = p.next::<ArrayVec<u32, 2>>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::ArrayCapacity(2)));
}

#[test]
fn bad_integer_span() {
    let mut p = input(b"12 abc");
    assert_eq!(p.next::<u32>().unwrap(), 12);
    let error = p.next::<u32>().unwrap_err();
    assert!(matches!(error.kind(), ErrorKind::NotInteger("abc")));
    assert_eq!(error.span(), 3..6);
}

#[test]
fn single_bytes() {
    let mut p = input(b"ab");
    let B(a) = p.next::<B>().unwrap();
    let B(b) = p.next::<B>().unwrap();
    assert_eq!((a, b), (b'a', b'b'));
    assert!(p.try_next::<B>().unwrap().is_none());
}

#[test]
fn non_empty_filter() {
    let mut p = input(b"");
    assert!(p.try_next::<NonEmpty<&str>>().unwrap().is_none());

    let mut p = input(b"x");
    let NonEmpty(value) = p.next::<NonEmpty<&str>>().unwrap();
    assert_eq!(value, "x");
}

#[test]
fn typed_iteration() {
    let mut p = input(b"1\n2\n3\n");
    let mut total = 0;

    for value in p.iter::<(u32, Ws)>() {
        let (n, _) = value.unwrap();
        total += n;
    }

    assert_eq!(total, 6);
}
