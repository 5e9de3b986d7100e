use super::{ParseError, Tree};

const TRANSCRIPT: &str = "\
cd /
ls
dir a
14848514 b.txt
8504156 c.dat
dir d
cd a
ls
dir e
29116 f
2557 g
62596 h.lst
cd e
ls
584 i
cd ..
cd ..
cd d
ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

#[test]
fn canonical_transcript() {
    let tree = Tree::parse(TRANSCRIPT).unwrap();

    assert_eq!(tree.size(tree.root()), 48381165);
    assert_eq!(tree.sum_at_most(100000), 95437);

    let shortfall = 30000000 - (70000000 - tree.size(tree.root()));
    assert_eq!(tree.smallest_at_least(shortfall), Some(24933642));
}

#[test]
fn prompt_prefixed_transcript() {
    let prompted = TRANSCRIPT
        .lines()
        .map(|line| {
            if line.starts_with("cd") || line == "ls" {
                format!("$ {line}\n")
            } else {
                format!("{line}\n")
            }
        })
        .collect::<String>();

    let tree = Tree::parse(&prompted).unwrap();
    assert_eq!(tree.size(tree.root()), 48381165);
}

#[test]
fn empty_directory_has_size_zero() {
    let mut tree = Tree::with_root("/");
    assert_eq!(tree.size(tree.root()), 0);

    let sub = tree.alloc("sub", Some(tree.root()));
    assert_eq!(tree.size(sub), 0);
    assert_eq!(tree.size(tree.root()), 0);
}

#[test]
fn attach_is_idempotent() {
    let mut tree = Tree::with_root("/");
    let root = tree.root();
    let sub = tree.alloc("sub", Some(root));
    tree.add_file(sub, "f", 7);

    tree.attach(root, sub);
    tree.attach(root, sub);

    assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![sub]);
    assert_eq!(tree.size(root), 7);
}

#[test]
fn size_tracks_mutation() {
    let mut tree = Tree::with_root("/");
    let root = tree.root();
    let sub = tree.alloc("sub", Some(root));

    tree.add_file(sub, "f", 10);
    assert_eq!(tree.size(sub), 10);

    tree.add_file(sub, "g", 5);
    assert_eq!(tree.size(sub), 15);

    // Overwriting a filename replaces its size rather than accumulating.
    tree.add_file(sub, "f", 25);
    assert_eq!(tree.size(sub), 30);

    assert_eq!(tree.size(root), 30);
}

#[test]
fn sizes_are_independent_of_attachment_order() {
    let mut a = Tree::with_root("/");
    let sub = a.alloc("sub", Some(a.root()));
    a.add_file(a.root(), "top", 1);
    a.add_file(sub, "inner", 2);

    let mut b = Tree::with_root("/");
    b.add_file(b.root(), "top", 1);
    let sub = b.alloc("sub", None);
    b.add_file(sub, "inner", 2);
    b.attach(b.root(), sub);

    assert_eq!(a.size(a.root()), 3);
    assert_eq!(b.size(b.root()), 3);
}

#[test]
fn children_iterate_in_insertion_order() {
    let mut tree = Tree::with_root("/");
    let root = tree.root();
    let x = tree.alloc("x", Some(root));
    let y = tree.alloc("y", Some(root));
    let z = tree.alloc("z", Some(root));

    assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![x, y, z]);
    // Restartable, a fresh traversal each call.
    assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![x, y, z]);
}

#[test]
fn descendants_are_preorder_and_complete() {
    let tree = Tree::parse(TRANSCRIPT).unwrap();
    let root = tree.root();

    let names = tree
        .descendants(root)
        .map(|id| tree.name(id))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "e", "d"]);

    // Every non-root node exactly once, parents before their children.
    let order = tree.descendants(root).collect::<Vec<_>>();
    assert_eq!(order.len(), tree.len() - 1);

    for (n, &id) in order.iter().enumerate() {
        let parent = tree.parent(id).unwrap();
        assert!(parent == root || order[..n].contains(&parent));
        assert!(!order[..n].contains(&id));

        // No node is its own descendant.
        assert!(tree.descendants(id).all(|d| d != id));
    }

    // Restartable.
    assert_eq!(tree.descendants(root).count(), order.len());
}

#[test]
fn listed_but_never_entered_directory_is_absent() {
    let tree = Tree::parse("cd /\nls\ndir ghost\n100 real.txt\n").unwrap();

    assert_eq!(tree.len(), 1);
    assert_eq!(tree.size(tree.root()), 100);
}

#[test]
fn reentering_a_directory_reuses_it() {
    let tree = Tree::parse("cd /\ncd a\nls\n1 f\ncd ..\ncd a\nls\n2 g\n").unwrap();
    let root = tree.root();

    assert_eq!(tree.children(root).count(), 1);
    assert_eq!(tree.size(root), 3);
}

#[test]
fn cd_root_resets_the_cursor() {
    let tree = Tree::parse("cd /\ncd a\ncd b\ncd /\ncd c\nls\n4 f\n").unwrap();
    let root = tree.root();

    let names = tree
        .children(root)
        .map(|id| tree.name(id))
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a", "c"]);
    assert_eq!(tree.size(root), 4);
}

#[test]
fn duplicate_sibling_names_are_distinct_nodes() {
    let mut tree = Tree::with_root("/");
    let root = tree.root();
    let first = tree.alloc("twin", Some(root));
    let second = tree.alloc("twin", Some(root));
    assert_ne!(first, second);

    tree.add_file(first, "f", 1);
    tree.add_file(second, "f", 2);
    assert_eq!(tree.size(root), 3);
}

#[test]
fn ascend_above_root_is_fatal() {
    assert!(matches!(
        Tree::parse("cd /\ncd ..\n"),
        Err(ParseError::AscendAboveRoot { line: 2 })
    ));
}

#[test]
fn listing_before_cd_is_fatal() {
    assert!(matches!(
        Tree::parse("ls\n100 f\n"),
        Err(ParseError::NoCurrentDirectory { line: 2 })
    ));
}

#[test]
fn bad_file_size_is_fatal() {
    assert!(matches!(
        Tree::parse("cd /\nls\n99999999999999999999999 big\n"),
        Err(ParseError::BadFileSize { line: 3, .. })
    ));

    assert!(matches!(
        Tree::parse("cd /\nls\n-5 negative\n"),
        Err(ParseError::BadFileSize { line: 3, .. })
    ));
}

#[test]
fn unrecognized_lines_are_fatal() {
    assert!(matches!(
        Tree::parse("cd /\nwat\n"),
        Err(ParseError::UnrecognizedLine { line: 2, .. })
    ));

    assert!(matches!(
        Tree::parse("cd /\ntouch file\n"),
        Err(ParseError::UnrecognizedLine { line: 2, .. })
    ));
}

#[test]
fn empty_transcript_is_fatal() {
    assert!(matches!(Tree::parse(""), Err(ParseError::EmptyTranscript)));
    assert!(matches!(
        Tree::parse("\n\n"),
        Err(ParseError::EmptyTranscript)
    ));
}

#[test]
fn threshold_queries_are_inclusive() {
    let tree = Tree::parse("cd /\nls\n60 a\ncd x\nls\n40 b\n").unwrap();

    assert_eq!(tree.sum_at_most(40), 40);
    assert_eq!(tree.sum_at_most(39), 0);
    assert_eq!(tree.sum_at_most(100), 140);

    assert_eq!(tree.smallest_at_least(100), Some(100));
    assert_eq!(tree.smallest_at_least(41), Some(100));
    assert_eq!(tree.smallest_at_least(101), None);
}
