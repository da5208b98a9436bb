use id3tree::prelude::*;

// Insurance risk classes.
// Splitting at `Area` and then `Experience` leaves the
// `>7` examples with `Gender` only, and its `f` part
// still holds one `l` and one `h`.
//
//          Area
//       u/     \r
//       l    Experience
//        2-7/  |>7   \1-2
//          h  Gender  h
//           f/   \m
//           l     h


fn risk_class() -> Table {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/risk_class.csv");

    Table::from_csv(path, true).unwrap()
}


#[test]
fn dot_records() {
    let table = risk_class();
    let (_, records) = build_tree(&table, false);

    let exp = vec![
        r#""l0" [label="l"]"#,
        r#""Area" -> "l0" [label="u"]"#,
        r#""h10" [label="h"]"#,
        r#""Experience1" -> "h10" [label="2-7"]"#,
        r#""l110" [label="l"]"#,
        r#""Gender11" -> "l110" [label="f"]"#,
        r#""h111" [label="h"]"#,
        r#""Gender11" -> "h111" [label="m"]"#,
        r#""Gender11" [label="Gender"]"#,
        r#""Experience1" -> "Gender11" [label=">7"]"#,
        r#""h12" [label="h"]"#,
        r#""Experience1" -> "h12" [label="1-2"]"#,
        r#""Experience1" [label="Experience"]"#,
        r#""Area" -> "Experience1" [label="r"]"#,
    ];
    assert_eq!(exp, records, "expected {exp:?}, got {records:?}.");
}


#[test]
fn tie_goes_to_the_earlier_attribute() {
    let table = risk_class();
    let tree = Id3Builder::new().build().fit(&table);

    let Node::Split(root) = tree.root() else {
        panic!("expected a split at the root, got {:?}.", tree.root());
    };
    let Node::Split(rural) = root.branches()[1].child() else {
        panic!("expected a split, got {:?}.", root.branches()[1].child());
    };

    // `Experience` and `Gender` have the same gain on the rural part.
    let gains = rural.gains();
    assert_eq!("Experience", gains[0].attribute);
    assert_eq!("Gender", gains[1].attribute);
    assert_eq!(gains[0].gain, gains[1].gain);
    assert_eq!("Experience", rural.attribute());
}


#[test]
fn exhausted_attributes_take_the_majority() {
    let table = risk_class();
    let tree = Id3Builder::new().build().fit(&table);

    let Node::Split(root) = tree.root() else { panic!() };
    let Node::Split(rural) = root.branches()[1].child() else { panic!() };
    let Node::Split(gender) = rural.branches()[1].child() else { panic!() };

    assert_eq!("Gender", gender.attribute());
    let Node::Leaf(female) = gender.branches()[0].child() else { panic!() };

    // One `l` and one `h`: the tie goes to the label seen first.
    assert_eq!("l", female.label());
    assert_eq!(LeafReason::Majority, female.reason());
}


#[test]
fn depth_is_bounded_by_attributes() {
    let table = risk_class();
    let tree = Id3Builder::new().build().fit(&table);

    assert_eq!(3, tree.depth());
    assert!(tree.depth() <= table.attributes().len());
}


#[test]
fn detailed_log_names_the_majority_vote() {
    let table = risk_class();
    let (lines, _) = build_tree(&table, false);

    let exp = "\t\t\tChoose the target attribute value with the most occurrences \
               as the child node. --> Create l as the child node.";
    assert!(
        lines.iter().any(|line| line == exp),
        "no line {exp:?} in the log."
    );
}
