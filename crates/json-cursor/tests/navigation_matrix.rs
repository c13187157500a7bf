use json_cursor::{dumps, from_map, from_value, loads, CursorError, Document, Step};
use serde_json::{json, Map, Value};

const NESTED: &str = r#"
{
  "r": "yo",
  "key_1": "value_1",
  "key_2": {
    "key_21": [
      [2100, 2101],
      [2110, 2111]
    ],
    "key_22": ["l1", "l2"],
    "key_23": {"key_231":"v"},
    "key_24": {
      "key_241": 502,
      "key_242": [
        [5, 0],
        [7, 0]
      ],
      "key_243": {
        "key_2431": [0, 0],
        "key_2432": 504,
        "key_2433": [
          [11451, 0],
          [11452, 0]
        ]
      },
      "key_244": {
        "key_2441": {
          "key_24411": {
            "key_244111": "v_24411",
            "key_244112": [[5549, 0]]
          },
          "key_24412": "v_24412"
        },
        "key_2442": ["ll1", "ll2"]
      }
    }
  }
}
"#;

fn nested() -> Document {
    loads(NESTED).expect("fixture parses")
}

#[test]
fn wrapper_roundtrip_matrix() {
    let plain = json!({"foo": "bar"});

    let doc = loads(&dumps(&plain).unwrap()).unwrap();
    assert_eq!(doc.resolve().unwrap(), &plain);
    assert_eq!(dumps(&plain).unwrap(), serde_json::to_string(&plain).unwrap());

    let mut map = Map::new();
    map.insert("foo".to_string(), json!("bar"));
    assert_eq!(from_map(map).get("foo").resolve().unwrap(), &plain["foo"]);

    assert_eq!(doc, from_value(plain.clone()));
}

#[test]
fn access_matrix() {
    let doc = nested();
    assert_eq!(doc.get("key_1").resolve().unwrap(), &json!("value_1"));
    assert_eq!(doc.get("r").resolve().unwrap(), &json!("yo"));
    assert_eq!(
        doc.get("key_2").get("key_21").get(1).get(1).resolve().unwrap(),
        &json!(2111)
    );
    assert_eq!(
        doc.get("key_2")
            .get("key_24")
            .get("key_244")
            .get("key_2441")
            .get("key_24411")
            .get("key_244112")
            .get(0)
            .get(0)
            .resolve()
            .unwrap(),
        &json!(5549)
    );
}

#[test]
fn chain_matches_direct_indexing() {
    let doc = nested();
    let raw: Value = serde_json::from_str(NESTED).unwrap();
    assert_eq!(
        doc.get("key_2").get("key_24").get("key_243").resolve().unwrap(),
        &raw["key_2"]["key_24"]["key_243"]
    );
    assert_eq!(
        doc.get("key_2").get("key_21").get(0).resolve().unwrap(),
        &json!([2100, 2101])
    );
}

#[test]
fn missing_key_matrix() {
    let doc = nested();

    let cases: Vec<(Result<&Value, CursorError>, Step)> = vec![
        (doc.get("key_2").get("nonexistent").get(0).resolve(), Step::from("nonexistent")),
        (doc.get("key_2").get("key_21").get(7).resolve(), Step::from(7)),
        (doc.get("key_1").get("key_2").resolve(), Step::from("key_2")),
        (
            doc.get("key_2")
                .get("key_24")
                .get("key_244")
                .get("key_2442")
                .get(0)
                .get(7)
                .resolve(),
            Step::from(7),
        ),
    ];

    for (result, expected) in cases {
        let err = result.expect_err("chain should be missing");
        assert!(err.is_not_found());
        assert_eq!(err.step(), Some(&expected));
    }
}

#[test]
fn resolved_values_index_as_plain_json() {
    let doc = nested();
    let item = doc
        .get("key_2")
        .get("key_24")
        .get("key_244")
        .get("key_2442")
        .get(0)
        .resolve()
        .unwrap();
    assert_eq!(item.as_str().unwrap().chars().next(), Some('l'));
    // Past resolution, lookups are plain serde_json behaviour.
    assert_eq!(item.get(7), None);
}

#[test]
fn fallback_matrix() {
    let doc = nested();
    assert_eq!(doc.get("key_1").get("key_2").resolve_or(&Value::Null), &Value::Null);
    assert_eq!(
        doc.get("key_2").get("nonexistent").get(0).resolve_or(&json!("default")),
        &json!("default")
    );
    assert_eq!(
        doc.get("key_2").get("key_21").get(7).resolve_or(&json!("default")),
        &json!("default")
    );
    assert_eq!(
        doc.get("key_2").get("key_21").get(0).resolve_or(&json!("default")),
        &json!([2100, 2101])
    );
    assert_eq!(doc.get("key_1").get("key_2").found(), None);
}

#[test]
fn absorbing_chain_keeps_first_key() {
    let doc = from_value(json!({"a": {"b": [1, 2, 3]}}));
    let missing = doc.get("a").get("b").get(5);
    assert_eq!(missing.missing_key(), Some(&Step::from(5)));

    let deeper = missing.get("c");
    assert_eq!(deeper.missing_key(), Some(&Step::from(5)));
    assert_eq!(deeper.resolve_or(&json!("z")), &json!("z"));
}

#[test]
fn pointer_matrix() {
    let doc = nested();
    assert_eq!(
        doc.pointer("/key_2/key_21/1/1").resolve().unwrap(),
        &json!(2111)
    );
    assert_eq!(doc.pointer("key_2/key_23/key_231").resolve().unwrap(), &json!("v"));
    assert_eq!(
        doc.pointer("/key_2/key_21/01").missing_key(),
        Some(&Step::from("01"))
    );
    assert_eq!(
        doc.get("key_2").pointer("/key_22/1").resolve().unwrap(),
        &json!("l2")
    );

    let escaped = from_value(json!({"a/b": {"c~d": 1}}));
    assert_eq!(escaped.pointer("/a~1b/c~0d").resolve().unwrap(), &json!(1));
}

#[test]
fn membership_matrix() {
    let doc = nested();
    assert!(doc.contains("key_1"));
    assert!(!doc.contains("value_1"));
    assert!(doc.get("key_2").get("key_22").contains("l1"));
    assert!(!doc.get("key_2").get("key_22").contains("l"));
    assert!(!doc.get("key_1").contains("value"));
    assert!(!doc.get("nope").contains("key_1"));
}

#[test]
fn iteration_yields_cursors_in_order() {
    let doc = nested();
    let firsts: Vec<i64> = doc
        .get("key_2")
        .get("key_21")
        .iter()
        .map(|row| row.get(0).cast_i64().unwrap())
        .collect();
    assert_eq!(firsts, [2100, 2110]);

    let keys: Vec<&str> = doc.get("key_2").keys().collect();
    assert_eq!(keys, ["key_21", "key_22", "key_23", "key_24"]);

    assert_eq!(
        doc.get("key_2").get("key_24").members().unwrap(),
        ["key_241", "key_242", "key_243", "key_244"]
    );
}
