use lib::prelude::*;

lib::entry!(input = "d06.txt", expect = (7, 19), solve);

fn solve(input: &mut IStr) -> Result<(usize, usize)> {
    let data = input.line::<&BStr>()?;

    let part1 = marker(data, 4).context("no packet marker")?;
    let part2 = marker(data, 14).context("no message marker")?;
    Ok((part1, part2))
}

/// Index just past the first window of `len` pairwise-distinct characters.
fn marker(data: &BStr, len: usize) -> Option<usize> {
    let distinct = |w: &[u8]| {
        let set = w.iter().fold(0u64, |n, &d| n | 1 << (d - b'a') as u64);
        set.count_ones() as usize == len
    };

    Some(data.windows(len).position(distinct)? + len)
}
