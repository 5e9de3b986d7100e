use lib::prelude::*;

lib::entry!(input = "d05.txt", expect = ("CMZ", "MCD"), solve);

fn solve(input: &mut IStr) -> Result<(ArrayString, ArrayString)> {
    let mut stacks1 = ArrayVec::<ArrayVec<u8, 64>, 10>::new();

    // The drawing, one 4-byte column per stack, ends at the blank line. The
    // stack number line carries no crates and falls out on its own.
    while let Some(line) = input.try_line::<IStr>()?.filter(|s| !s.is_empty()) {
        for (n, chunk) in line.as_bstr().chunks(4).enumerate() {
            let Some(&d) = chunk.get(1).filter(|d| d.is_ascii_uppercase()) else {
                continue;
            };

            for _ in stacks1.len()..=n {
                stacks1
                    .try_push(ArrayVec::new())
                    .ok()
                    .context("stacks capacity")?;
            }

            stacks1
                .get_mut(n)
                .and_then(|s| s.try_push(d).ok())
                .context("stack capacity")?;
        }
    }

    stacks1.iter_mut().for_each(|s| s.reverse());

    let mut stacks2 = stacks1.clone();

    let one_at_a_time = |st: &mut [ArrayVec<u8, 64>], f, t, c: usize| {
        let (from, to) = st.get_mut2(f, t)?;
        to.extend(from.drain(from.len().checked_sub(c)?..).rev());
        Some(())
    };

    let in_bulk = |st: &mut [ArrayVec<u8, 64>], f, t, c: usize| {
        let (from, to) = st.get_mut2(f, t)?;
        to.extend(from.drain(from.len().checked_sub(c)?..));
        Some(())
    };

    for line in input.iter::<(W, usize, W, usize, W, usize)>() {
        let (_, c, _, from, _, to) = line?;
        let from = from.checked_sub(1).context("move underflow")?;
        let to = to.checked_sub(1).context("move underflow")?;

        one_at_a_time(&mut stacks1, from, to, c).context("bad move")?;
        in_bulk(&mut stacks2, from, to, c).context("bad move")?;
    }

    let mut part1 = ArrayString::new();
    let mut part2 = ArrayString::new();

    for (s1, s2) in stacks1.iter().zip(&stacks2) {
        if let Some(&d) = s1.last() {
            part1.push(d as char);
        }

        if let Some(&d) = s2.last() {
            part2.push(d as char);
        }
    }

    Ok((part1, part2))
}
