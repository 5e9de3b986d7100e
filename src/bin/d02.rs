use lib::prelude::*;

lib::entry!(input = "d02.txt", expect = (15, 12), solve);

fn solve(input: &mut IStr) -> Result<(i32, i32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    for value in input.iter() {
        let (Hand(a), Hand(b)) = value?;
        // Column two is the hand to play.
        part1 += (2 - (a - b + 1).rem_euclid(3)) * 3 + b + 1;
        // Column two is the required outcome: lose, draw or win.
        part2 += b * 3 + (a + b - 1).rem_euclid(3) + 1;
    }

    Ok((part1, part2))
}

struct Hand(i32);

lib::from_input! {
    |W(v): W<&'static str>| -> Hand {
        Ok(Hand(match v {
            "A" | "X" => 0,
            "B" | "Y" => 1,
            "C" | "Z" => 2,
            c => bail!("bad hand `{c}`"),
        }))
    }
}
