use id3tree::prelude::*;
use id3tree::id3::entropy;

// The classic weather data set.
// 14 days, 9 of which are good for tennis.
//
//            Outlook
//      Sunny/   |Overcast  \Rain
//    Humidity  Yes         Wind
//  High/ \Normal      Weak/  \Strong
//    No   Yes           Yes    No


fn weather() -> Table {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/play_tennis.csv");

    TableReader::default()
        .file(path)
        .has_header(true)
        .target("PlayTennis")
        .read()
        .unwrap()
}


#[test]
fn root_entropy() {
    let table = weather();
    let labels = table.target().iter().map(String::as_str);
    let res = entropy(labels);
    assert!((res - 0.940).abs() < 1e-3, "expected 0.940, got {res}.");
}


#[test]
fn root_is_outlook() {
    let table = weather();
    let tree = Id3Builder::new().build().fit(&table);

    assert_eq!("Outlook", tree.split_attribute());

    let Node::Split(root) = tree.root() else {
        panic!("expected a split at the root, got {:?}.", tree.root());
    };
    let gains = root.gains()
        .iter()
        .map(|g| (g.attribute.as_str(), (g.gain * 1000.0).round() / 1000.0))
        .collect::<Vec<_>>();
    let exp = vec![
        ("Outlook", 0.247),
        ("Temperature", 0.029),
        ("Humidity", 0.152),
        ("Wind", 0.048),
    ];
    assert_eq!(exp, gains, "expected {exp:?}, got {gains:?}.");
}


#[test]
fn overcast_is_a_pure_leaf() {
    let table = weather();
    let tree = Id3Builder::new().build().fit(&table);

    let Node::Split(root) = tree.root() else {
        panic!("expected a split at the root, got {:?}.", tree.root());
    };
    let overcast = root.branches()
        .iter()
        .find(|b| b.value() == "Overcast")
        .expect("no branch for Overcast");

    let Node::Leaf(leaf) = overcast.child() else {
        panic!("expected a leaf, got {:?}.", overcast.child());
    };
    assert_eq!("Yes", leaf.label());
    assert_eq!(LeafReason::Pure, leaf.reason());
}


#[test]
fn dot_records() {
    let table = weather();
    let (_, records) = build_tree(&table, true);

    let exp = vec![
        r#""No00" [label="No"]"#,
        r#""Humidity0" -> "No00" [label="High"]"#,
        r#""Yes01" [label="Yes"]"#,
        r#""Humidity0" -> "Yes01" [label="Normal"]"#,
        r#""Humidity0" [label="Humidity"]"#,
        r#""Outlook" -> "Humidity0" [label="Sunny"]"#,
        r#""Yes1" [label="Yes"]"#,
        r#""Outlook" -> "Yes1" [label="Overcast"]"#,
        r#""Yes20" [label="Yes"]"#,
        r#""Wind2" -> "Yes20" [label="Weak"]"#,
        r#""No21" [label="No"]"#,
        r#""Wind2" -> "No21" [label="Strong"]"#,
        r#""Wind2" [label="Wind"]"#,
        r#""Outlook" -> "Wind2" [label="Rain"]"#,
    ];
    assert_eq!(exp, records, "expected {exp:?}, got {records:?}.");
}


#[test]
fn depth_is_bounded_by_attributes() {
    let table = weather();
    let tree = Id3Builder::new().build().fit(&table);

    let n_attribute = table.attributes().len();
    assert_eq!(2, tree.depth());
    assert!(tree.depth() <= n_attribute);
    assert_eq!(5, tree.leaves());
}


#[test]
fn predicts_the_training_rows() {
    let table = weather();
    let tree = Id3Builder::new().build().fit(&table);

    let predictions = tree.predict_all(&table);
    for (i, (p, y)) in predictions.iter().zip(table.target().iter()).enumerate() {
        assert_eq!(Some(y), p.as_ref(), "row {i}: expected {y:?}, got {p:?}.");
    }
}


#[test]
fn building_twice_gives_the_same_output() {
    let table = weather();
    let snapshot = table.clone();

    for compact in [true, false] {
        let first = build_tree(&table, compact);
        let second = build_tree(&table, compact);
        assert_eq!(first, second);
    }
    assert_eq!(snapshot, table, "the input table was modified.");
}


#[test]
fn json_round_trip() {
    let table = weather();
    let tree = Id3Builder::new().build().fit(&table);

    let json = tree.to_json().unwrap();
    let restored = DecisionTree::from_json(&json).unwrap();

    assert_eq!(tree.dot_records(), restored.dot_records());
    assert_eq!(tree.target(), restored.target());
}
