use lib::prelude::*;

lib::entry!(input = "d03.txt", expect = (157, 70), solve);

fn solve(input: &mut IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    let mut badge = u64::MAX;
    let mut index = 0;

    while let Some(data) = input.try_line::<&[u8]>()? {
        let (first, second) = data.split_at(data.len() / 2);
        part1 += (set(first) & set(second)).trailing_zeros();

        badge &= set(data);
        index += 1;

        if index == 3 {
            part2 += badge.trailing_zeros();
            badge = u64::MAX;
            index = 0;
        }
    }

    Ok((part1, part2))
}

/// Item set as a bit mask indexed by priority.
fn set(items: &[u8]) -> u64 {
    items.iter().fold(0, |n, &c| n | 1u64 << priority(c))
}

fn priority(c: u8) -> u32 {
    match c {
        b'a'..=b'z' => (c - b'a') as u32 + 1,
        b'A'..=b'Z' => (c - b'A') as u32 + 27,
        _ => 0,
    }
}
