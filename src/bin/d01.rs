use lib::prelude::*;

lib::entry!(input = "d01.txt", expect = (24000, 45000), solve);

fn solve(input: &mut IStr) -> Result<(u32, u32)> {
    let mut totals = Vec::new();
    let mut block = 0u32;

    while let Some((n, Ws(lines))) = input.try_next::<(u32, Ws)>()? {
        block += n;

        if lines == 2 {
            totals.push(std::mem::take(&mut block));
        }
    }

    if block != 0 {
        totals.push(block);
    }

    totals.sort_unstable();

    let part1 = totals.last().copied().context("no blocks")?;
    let part2 = totals.iter().rev().take(3).sum();
    Ok((part1, part2))
}
