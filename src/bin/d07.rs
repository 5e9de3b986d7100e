use lib::prelude::*;

lib::entry!(input = "d07.txt", expect = (95437, 24933642), solve);

const DISK_CAPACITY: u64 = 70000000;
const NEEDED_FREE: u64 = 30000000;
const DELETE_AT_MOST: u64 = 100000;

fn solve(input: &mut IStr) -> Result<(u64, u64)> {
    let tree = fs::Tree::parse(input.next::<&str>()?)?;

    let free = DISK_CAPACITY - tree.size(tree.root());
    let shortfall = NEEDED_FREE.saturating_sub(free);

    let part1 = tree.sum_at_most(DELETE_AT_MOST);

    let part2 = tree
        .smallest_at_least(shortfall)
        .context("no directory frees enough space")?;

    Ok((part1, part2))
}
