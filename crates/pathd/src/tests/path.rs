use crate::{Coordinates, ErrorKind, ParseError, PathCommand, SvgPath};

fn parse(path: &str) -> SvgPath {
    path.parse().unwrap()
}

fn command(letter: char, values: &[f64]) -> PathCommand {
    PathCommand::from_parts(letter, values).unwrap()
}

#[test]
fn parses_a_simple_path() {
    let path = parse("M0,0 L10,10 z");
    assert_eq!(
        path.commands(),
        &[
            command('M', &[0.0, 0.0]),
            command('L', &[10.0, 10.0]),
            PathCommand::Close,
        ]
    );
    assert_eq!(path.len(), 3);
    assert!(!path.is_fragment());
}

#[test]
fn empty_input_is_an_empty_path() {
    let path = parse("");
    assert!(path.is_empty());
    assert!(!path.is_fragment());
    assert_eq!(path.to_string(), "");
    assert_eq!(path.to_compact_string(), "");
}

#[test]
fn implicit_move_repetition_becomes_lines_of_the_same_case() {
    assert_eq!(
        parse("M0,0 1,2 3,4").commands(),
        &[
            command('M', &[0.0, 0.0]),
            command('L', &[1.0, 2.0]),
            command('L', &[3.0, 4.0]),
        ]
    );
    assert_eq!(
        parse("m0,0 1,2").commands(),
        &[command('m', &[0.0, 0.0]), command('l', &[1.0, 2.0])]
    );
}

#[test]
fn repetition_splits_one_command_per_tuple() {
    assert_eq!(
        parse("M0,0 C1,1,2,2,3,3 4,4,5,5,6,6").commands(),
        &[
            command('M', &[0.0, 0.0]),
            command('C', &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
            command('C', &[4.0, 4.0, 5.0, 5.0, 6.0, 6.0]),
        ]
    );
}

#[test]
fn axis_line_repetition_splits_per_value() {
    // Splitting (rather than summing) keeps absolute coordinates meaningful.
    assert_eq!(
        parse("M0,0 h1 2 3").commands(),
        &[
            command('M', &[0.0, 0.0]),
            command('h', &[1.0]),
            command('h', &[2.0]),
            command('h', &[3.0]),
        ]
    );
    assert_eq!(
        parse("M0,0 V5 10").commands(),
        &[
            command('M', &[0.0, 0.0]),
            command('V', &[5.0]),
            command('V', &[10.0]),
        ]
    );
}

#[test]
fn strict_parsing_rejects_the_whole_string() {
    let err = "M0,0,1".parse::<SvgPath>().unwrap_err();
    assert_eq!(
        err,
        ParseError {
            kind: ErrorKind::UnexpectedNumber,
            index: 5,
        }
    );
    assert_eq!(err.to_string(), "Syntax Error: Unexpected number at index 5");

    let err = "L1,2".parse::<SvgPath>().unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnexpectedCommand);
    assert_eq!(err.index, 0);
}

#[test]
fn lenient_parsing_keeps_the_valid_prefix() {
    let (path, err) = SvgPath::parse_lenient("M0,0,1");
    assert_eq!(path.commands(), &[command('M', &[0.0, 0.0])]);
    assert_eq!(
        err,
        Some(ParseError {
            kind: ErrorKind::UnexpectedNumber,
            index: 5,
        })
    );

    let (path, err) = SvgPath::parse_lenient("M0,0 L1,1");
    assert_eq!(path.len(), 2);
    assert_eq!(err, None);
}

#[test]
fn fragments_parse_without_a_leading_move() {
    let path = SvgPath::parse_fragment("L1,2").unwrap();
    assert!(path.is_fragment());
    assert_eq!(path.commands(), &[command('L', &[1.0, 2.0])]);
    assert_eq!(path.to_string(), "M0,0\nL1,2");
    assert_eq!(path.to_compact_string(), "M0,0,1,2");

    // The other grammar rules still hold.
    assert!(SvgPath::parse_fragment(",5").is_err());
}

#[test]
fn to_absolute_walks_the_cursor() {
    let mut path = parse("m1,2 l2,2 h3 v4 z l1,1");
    path.to_absolute();
    assert_eq!(
        path.commands(),
        &[
            command('M', &[1.0, 2.0]),
            command('L', &[3.0, 4.0]),
            command('H', &[6.0]),
            command('V', &[8.0]),
            PathCommand::Close,
            // Close-path put the cursor back on the subpath start.
            command('L', &[2.0, 3.0]),
        ]
    );
}

#[test]
fn to_absolute_translates_control_points_but_not_arc_geometry() {
    let mut path = parse("m10,10 c1,1,2,2,3,3 q1,0,2,0 a5,6,45,0,1,2,2");
    path.to_absolute();
    assert_eq!(
        path.commands(),
        &[
            command('M', &[10.0, 10.0]),
            command('C', &[11.0, 11.0, 12.0, 12.0, 13.0, 13.0]),
            command('Q', &[14.0, 13.0, 15.0, 13.0]),
            command('A', &[5.0, 6.0, 45.0, 0.0, 1.0, 17.0, 15.0]),
        ]
    );
}

#[test]
fn to_relative_inverts_to_absolute() {
    let mut path = parse("M1,2 L3,4 H6 V8 z");
    path.to_relative();
    assert_eq!(
        path.commands(),
        &[
            command('m', &[1.0, 2.0]),
            command('l', &[2.0, 2.0]),
            command('h', &[3.0]),
            command('v', &[4.0]),
            PathCommand::Close,
        ]
    );

    path.to_absolute();
    assert_eq!(path, parse("M1,2 L3,4 H6 V8 z"));
}

#[test]
fn mixed_modes_normalize_in_one_pass() {
    let mut path = parse("M1,1 l1,0 V5 h2 z");
    path.to_absolute();
    assert_eq!(
        path.commands(),
        &[
            command('M', &[1.0, 1.0]),
            command('L', &[2.0, 1.0]),
            command('V', &[5.0]),
            command('H', &[4.0]),
            PathCommand::Close,
        ]
    );
}

#[test]
fn second_subpath_restarts_from_its_own_move() {
    let mut path = parse("m1,1 h1 z m10,10 h1 z");
    path.to_absolute();
    assert_eq!(
        path.commands(),
        &[
            command('M', &[1.0, 1.0]),
            command('H', &[2.0]),
            PathCommand::Close,
            command('M', &[11.0, 11.0]),
            command('H', &[12.0]),
            PathCommand::Close,
        ]
    );
}

#[test]
fn verbose_form_is_one_command_per_line() {
    assert_eq!(parse("M0,0 L1,1 z").to_string(), "M0,0\nL1,1\nz");
    assert_eq!(parse("M0,0 1,2").to_string(), "M0,0\nL1,2");
}

#[test]
fn compact_form_merges_repeated_letters() {
    assert_eq!(parse("M0,0 L1,2 L3,4").to_compact_string(), "M0,0,1,2,3,4");
    assert_eq!(parse("M0,0 h1 2").to_compact_string(), "M0,0h1,2");
    assert_eq!(parse("M0,0 z M1,1 z").to_compact_string(), "M0,0zM1,1z");
    // Moves never merge with each other.
    assert_eq!(parse("M0,0 M1,1").to_compact_string(), "M0,0M1,1");
    // A case change breaks the merge.
    assert_eq!(parse("m0,0 L1,1").to_compact_string(), "m0,0L1,1");
    assert_eq!(
        parse("m0,0 l1,1 l2,2 h5 h6").to_compact_string(),
        "m0,0,1,1,2,2h5,6"
    );
}

#[test]
fn print_then_parse_is_the_identity() {
    let inputs = [
        "M0,0 L10,10 z",
        "m1,2 l2,2 h3 v4 z",
        "M0,0 1,2 3,4",
        "M0,0 C1,1,2,2,3,3 q1,0,2,0 a5,6,45,0,1,2,2 z",
    ];
    for input in inputs {
        let path = parse(input);
        assert_eq!(parse(&path.to_string()), path, "{input:?}");
        assert_eq!(parse(&path.to_compact_string()), path, "{input:?}");
    }
}

#[test]
fn paths_serialize_to_nested_arrays() {
    let path = parse("M0,0 L1,2 a5,5,0,0,1,2,2 z");
    assert_eq!(
        serde_json::to_value(&path).unwrap(),
        serde_json::json!([
            ["M", 0.0, 0.0],
            ["L", 1.0, 2.0],
            ["a", 5.0, 5.0, 0.0, 0, 1, 2.0, 2.0],
            ["z"]
        ])
    );
}

#[test]
fn paths_collect_and_iterate() {
    let path: SvgPath = [command('M', &[0.0, 0.0]), command('L', &[1.0, 1.0])]
        .into_iter()
        .collect();
    assert_eq!(path.to_compact_string(), "M0,0,1,1");

    let letters: Vec<char> = (&path).into_iter().map(PathCommand::letter).collect();
    assert_eq!(letters, vec!['M', 'L']);

    let mut path = path;
    path.push(PathCommand::Close);
    assert_eq!(path.to_string(), "M0,0\nL1,1\nz");

    let origin = Coordinates::default();
    assert_eq!(origin, Coordinates::new(0.0, 0.0));
}
