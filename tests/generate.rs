//! End-to-end generation against an on-disk acoustic model directory.

use std::fs;
use std::path::Path;

use voxgram::{
    generate_grammar, phonetics::DEFAULT_LOOKUP_LIST, GeneratorConfig, GrammarError,
    GrammarGenerator,
};

const LOOKUP_LIST: &str = "\
;;; test lookup list
10\tT EH N
20\tT W EH N T IY
DO\tD UW
EXECUTE\tEH K S AH K Y UW T
FORWARD\tF AO R W ER D
GO\tG OW
HELLO\tHH AH L OW
HELLO(2)\tHH EH L OW
IT\tIH T
LEFT\tL EH F T
MOVE\tM UW V
RIGHT\tR AY T
THANK\tTH AE NG K
YOU\tY UW
";

const ROBOT_SPEC: &str = r#"{"ThisWillBeSaidOnce": [
    {"OneOfTheseCanBeSaidOnce": ["HELLO"]},
    {"OneOfTheseWillBeSaidOnce": ["GO", "MOVE"]},
    {"ThisWillBeSaidWithOptionalRepetitions": [
        {"OneOfTheseWillBeSaidOnce": ["10", "20"]},
        {"OneOfTheseWillBeSaidOnce": ["LEFT", "RIGHT", "FORWARD"]}
    ]},
    {"OneOfTheseWillBeSaidOnce": ["EXECUTE", "DO IT"]},
    {"ThisCanBeSaidOnce": ["THANK YOU"]}
]}"#;

fn acoustic_model(dir: &Path) -> std::path::PathBuf {
    let model = dir.join("AcousticModelEnglish");
    fs::create_dir_all(&model).unwrap();
    fs::write(model.join(DEFAULT_LOOKUP_LIST), LOOKUP_LIST).unwrap();
    model
}

fn file_count(dir: &Path) -> usize {
    match fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

#[test]
fn test_generate_robot_grammar() {
    let dir = tempfile::tempdir().unwrap();
    let model = acoustic_model(dir.path());
    let out = dir.path().join("out");

    let generator = GrammarGenerator::new(GeneratorConfig::new().with_output_dir(&out));
    let files = generator.generate(ROBOT_SPEC, "robot", &model).unwrap();

    assert_eq!(files.grammar_path, out.join("robot.gram"));
    assert_eq!(files.dictionary_path, out.join("robot.dic"));

    let grammar = fs::read_to_string(&files.grammar_path).unwrap();
    assert_eq!(
        grammar,
        "#JSGF V1.0;\n\
         grammar robot;\n\
         public <robot> = [ HELLO ] ( GO | MOVE ) ( ( 10 | 20 ) ( LEFT | RIGHT | FORWARD ) )+ \
         ( EXECUTE | DO IT ) [ THANK YOU ];\n"
    );

    let dictionary = fs::read_to_string(&files.dictionary_path).unwrap();
    assert_eq!(
        dictionary,
        "HELLO\tHH AH L OW\n\
         HELLO(2)\tHH EH L OW\n\
         GO\tG OW\n\
         MOVE\tM UW V\n\
         10\tT EH N\n\
         20\tT W EH N T IY\n\
         LEFT\tL EH F T\n\
         RIGHT\tR AY T\n\
         FORWARD\tF AO R W ER D\n\
         EXECUTE\tEH K S AH K Y UW T\n\
         DO\tD UW\n\
         IT\tIH T\n\
         THANK\tTH AE NG K\n\
         YOU\tY UW\n"
    );
}

#[test]
fn test_rule_name_override() {
    let dir = tempfile::tempdir().unwrap();
    let model = acoustic_model(dir.path());
    let generator = GrammarGenerator::new(
        GeneratorConfig::new()
            .with_output_dir(dir.path())
            .with_rule_name("commands"),
    );
    let files = generator
        .generate(r#"{"ThisWillBeSaidOnce": ["HELLO"]}"#, "first", &model)
        .unwrap();
    let grammar = fs::read_to_string(files.grammar_path).unwrap();
    assert!(grammar.contains("grammar commands;"));
    assert!(grammar.contains("public <commands> = HELLO;"));
}

#[test]
fn test_lowercase_token_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let model = acoustic_model(dir.path());
    let out = dir.path().join("out");
    let generator = GrammarGenerator::new(GeneratorConfig::new().with_output_dir(&out));

    let err = generator
        .generate(
            r#"{"ThisWillBeSaidOnce": [{"OneOfTheseWillBeSaidOnce": ["GO", {"ThisCanBeSaidOnce": ["hello"]}]}]}"#,
            "robot",
            &model,
        )
        .unwrap_err();
    assert!(matches!(err, GrammarError::LowercaseToken { ref token, .. } if token == "hello"));
    assert_eq!(file_count(&out), 0);
}

#[test]
fn test_unknown_words_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let model = acoustic_model(dir.path());
    let out = dir.path().join("out");
    let generator = GrammarGenerator::new(GeneratorConfig::new().with_output_dir(&out));

    let err = generator
        .generate(
            r#"{"OneOfTheseWillBeSaidOnce": ["FLY", "GO", "SWIM FAST", "FLY"]}"#,
            "robot",
            &model,
        )
        .unwrap_err();
    match err {
        GrammarError::UnknownWordPronunciation { words } => {
            assert_eq!(words, vec!["FLY", "SWIM", "FAST"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(file_count(&out), 0);
}

#[test]
fn test_validation_happens_before_model_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let missing_model = dir.path().join("no_such_model");
    let err = generate_grammar(r#"{"ThisWillBeSaidOnce": []}"#, "robot", &missing_model)
        .unwrap_err();
    assert!(matches!(err, GrammarError::EmptyRuleBody { .. }));
}

#[test]
fn test_missing_acoustic_model() {
    let dir = tempfile::tempdir().unwrap();
    let missing_model = dir.path().join("no_such_model");
    let err = generate_grammar(r#"{"ThisWillBeSaidOnce": ["GO"]}"#, "robot", &missing_model)
        .unwrap_err();
    assert!(matches!(err, GrammarError::FileReadError { .. }));
}

#[test]
fn test_dotted_base_name_needs_rule_name() {
    let dir = tempfile::tempdir().unwrap();
    let model = acoustic_model(dir.path());
    let spec = r#"{"ThisWillBeSaidOnce": ["GO"]}"#;

    let err = GrammarGenerator::new(GeneratorConfig::new().with_output_dir(dir.path()))
        .generate(spec, "robot.v2", &model)
        .unwrap_err();
    assert!(matches!(err, GrammarError::InvalidRuleName { ref name } if name == "robot.v2"));

    let files = GrammarGenerator::new(
        GeneratorConfig::new()
            .with_output_dir(dir.path())
            .with_rule_name("robot_v2"),
    )
    .generate(spec, "robot.v2", &model)
    .unwrap();
    assert_eq!(files.grammar_path, dir.path().join("robot.v2.gram"));
    assert!(fs::read_to_string(files.grammar_path)
        .unwrap()
        .contains("public <robot_v2> = GO;"));
}
