use lib::prelude::*;

lib::entry!(input = "d04.txt", expect = (2, 4), solve);

fn solve(input: &mut IStr) -> Result<(u32, u32)> {
    let mut part1 = 0;
    let mut part2 = 0;

    while let Some(Split((a, b))) = input.try_line::<Split<',', (Assignment, Assignment)>>()? {
        if a.contains(&b) || b.contains(&a) {
            part1 += 1;
        }

        if a.overlaps(&b) {
            part2 += 1;
        }
    }

    Ok((part1, part2))
}

struct Assignment {
    start: u32,
    end: u32,
}

impl Assignment {
    fn contains(&self, other: &Assignment) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    fn overlaps(&self, other: &Assignment) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

lib::from_input! {
    |Split((start, end)): Split<'-', (u32, u32)>| -> Assignment {
        Ok(Assignment { start, end })
    }
}
