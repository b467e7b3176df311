use pathlight::extract::{collect_direct, extract_direct, extract_from_list, format_value, Entry, Report};
use pathlight::{ErrorKind, ExtractError};
use serde_json::{json, Value};

fn doc(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn direct_params_root_reads_data() {
    let d = doc(r#"{"data":{"id":82850,"affiliation":"Acme"}}"#);
    let out = extract_direct(&d, &["params.affiliation"]).unwrap();
    assert_eq!(out, "params.affiliation: Acme\n");
}

#[test]
fn direct_lines_follow_input_order() {
    let d = doc(r#"{"data":{"id":82850,"affiliation":"Acme"}}"#);
    let out = extract_direct(&d, &["data.affiliation", "params.id"]).unwrap();
    assert_eq!(out, "data.affiliation: Acme\nparams.id: 82850\n");
}

#[test]
fn direct_structured_values_are_indented() {
    let d = doc(r#"{"data":{"address":{"street":"123 Main St","city":"Anytown"}}}"#);
    let out = extract_direct(&d, &["params.address"]).unwrap();
    assert_eq!(
        out,
        "params.address: {\n  \"street\": \"123 Main St\",\n  \"city\": \"Anytown\"\n}\n"
    );
}

#[test]
fn direct_primitives_render_literally() {
    let d = doc(r#"{"data":{"n":1.5,"b":true,"z":null,"s":"quoted \"text\""}}"#);
    let out = extract_direct(&d, &["data.n", "data.b", "data.z", "data.s"]).unwrap();
    assert_eq!(out, "data.n: 1.5\ndata.b: true\ndata.z: null\ndata.s: quoted \"text\"\n");
}

#[test]
fn direct_missing_key_names_original_path() {
    let d = doc(r#"{"data":{"id":1}}"#);
    let err = extract_direct(&d, &["params.missing"]).unwrap_err();
    assert!(matches!(&err, ExtractError::InvalidPath(p) if p == "params.missing"));
    assert_eq!(err.to_string(), "Invalid variable: params.missing");
    assert_eq!(err.kind(), ErrorKind::InvalidPath);
}

#[test]
fn direct_cannot_step_through_null() {
    let d = doc(r#"{"data":{"z":null}}"#);
    assert!(extract_direct(&d, &["data.z.inner"]).is_err());
}

#[test]
fn direct_aborts_on_first_failure() {
    let d = doc(r#"{"data":{"id":1}}"#);
    let err = extract_direct(&d, &["data.id", "data.nope", "data.also_nope"]).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidPath(p) if p == "data.nope"));
}

#[test]
fn direct_other_roots_are_used_as_is() {
    let d = doc(r#"{"other":{"x":1}}"#);
    assert_eq!(extract_direct(&d, &["other.x"]).unwrap(), "other.x: 1\n");
}

#[test]
fn direct_literal_params_key_is_not_reachable() {
    // The root is always rewritten to `data` before the walk.
    let d = doc(r#"{"params":{"x":1}}"#);
    assert!(extract_direct(&d, &["params.x"]).is_err());
}

#[test]
fn direct_indexes_arrays_by_decimal_segment() {
    let d = doc(r#"{"data":{"items":[10,20]}}"#);
    assert_eq!(extract_direct(&d, &["data.items.1"]).unwrap(), "data.items.1: 20\n");
    assert!(extract_direct(&d, &["data.items.01"]).is_err());
    assert!(extract_direct(&d, &["data.items.2"]).is_err());
}

#[test]
fn direct_empty_spec_yields_empty_report() {
    let d = doc(r#"{"data":{}}"#);
    let none: [&str; 0] = [];
    assert_eq!(extract_direct(&d, &none).unwrap(), "");
}

#[test]
fn list_example_blocks() {
    let d = doc(r#"{"data":{"items":[{"name":"A","price":1},{"name":"B","price":2}]}}"#);
    let out = extract_from_list(&d, "data.items", &["item.name", "item.price"]).unwrap();
    assert_eq!(out, "item.name: A\nitem.price: 1\n\nitem.name: B\nitem.price: 2\n\n");
}

#[test]
fn list_params_root_is_normalized() {
    let d = doc(r#"{"data":{"items":[{"name":"A"}]}}"#);
    let out = extract_from_list(&d, "params.items", &["product.name"]).unwrap();
    assert_eq!(out, "product.name: A\n\n");
}

#[test]
fn list_produces_one_block_per_element() {
    let d = doc(r#"{"data":{"rows":[{"a":1,"b":2},{"a":3,"b":4},{"a":5,"b":6}]}}"#);
    let out = extract_from_list(&d, "data.rows", &["r.a", "r.b"]).unwrap();
    let blocks: Vec<&str> = out.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    for block in blocks {
        assert_eq!(block.lines().count(), 2);
    }
    assert_eq!(out.lines().count(), 3 * 3);
}

#[test]
fn list_empty_array_yields_empty_report() {
    let d = doc(r#"{"data":{"items":[]}}"#);
    assert_eq!(extract_from_list(&d, "data.items", &["item.name"]).unwrap(), "");
}

#[test]
fn list_not_an_array() {
    let d = doc(r#"{"data":{"items":{"name":"A"}}}"#);
    let err = extract_from_list(&d, "data.items", &["item.name"]).unwrap_err();
    assert_eq!(err.to_string(), "data.items is not an array");
    assert_eq!(err.kind(), ErrorKind::ListNotFound);
}

#[test]
fn list_null_is_not_an_array() {
    let d = doc(r#"{"data":{"items":null}}"#);
    let err = extract_from_list(&d, "params.items", &["item.name"]).unwrap_err();
    assert!(matches!(err, ExtractError::NotAnArray(p) if p == "params.items"));
}

#[test]
fn list_missing_path() {
    let d = doc(r#"{"data":{"items":[]}}"#);
    let err = extract_from_list(&d, "data.products", &["item.name"]).unwrap_err();
    assert_eq!(err.to_string(), "List not found: data.products");
    assert_eq!(err.kind(), ErrorKind::ListNotFound);
}

#[test]
fn list_null_step_is_not_found() {
    let d = json!({"data": null});
    let err = extract_from_list(&d, "data.items", &["item.name"]).unwrap_err();
    assert_eq!(err.to_string(), "List not found: data.items");
    assert_eq!(err.kind(), ErrorKind::ListNotFound);
}

#[test]
fn list_property_presence_accepts_null() {
    let d = doc(r#"{"data":{"items":[{"name":null}]}}"#);
    assert_eq!(extract_from_list(&d, "data.items", &["item.name"]).unwrap(), "item.name: null\n\n");
}

#[test]
fn list_missing_property_fails_whole_extraction() {
    let d = doc(r#"{"data":{"items":[{"name":"A","price":1},{"name":"B"}]}}"#);
    let err = extract_from_list(&d, "data.items", &["item.name", "item.price"]).unwrap_err();
    assert!(matches!(err, ExtractError::InvalidPath(p) if p == "item.price"));
}

#[test]
fn list_item_path_needs_a_property_segment() {
    let d = doc(r#"{"data":{"items":[{"name":"A"}]}}"#);
    assert!(extract_from_list(&d, "data.items", &["name"]).is_err());
}

#[test]
fn list_only_second_segment_is_used() {
    let d = doc(r#"{"data":{"items":[{"name":"A","deep":{"x":1}}]}}"#);
    let out = extract_from_list(&d, "data.items", &["anything.name", "i.deep.x"]).unwrap();
    assert_eq!(out, "anything.name: A\ni.deep.x: {\n  \"x\": 1\n}\n\n");
}

#[test]
fn list_primitive_elements_have_no_properties() {
    let d = doc(r#"{"data":{"items":[1,2]}}"#);
    assert!(extract_from_list(&d, "data.items", &["item.name"]).is_err());
}

#[test]
fn report_serializes_with_mode_tag() {
    let d = doc(r#"{"data":{"id":7}}"#);
    let report = collect_direct(&d, &["params.id"]).unwrap();
    assert_eq!(report, Report::Direct(vec![Entry { path: "params.id".into(), value: json!(7) }]));
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({"mode": "direct", "entries": [{"path": "params.id", "value": 7}]})
    );
}

#[test]
fn format_value_shapes() {
    assert_eq!(format_value(&json!("a")), "a");
    assert_eq!(format_value(&json!(false)), "false");
    assert_eq!(format_value(&json!([1, 2])), "[\n  1,\n  2\n]");
    assert_eq!(format_value(&json!({})), "{}");
}

#[test]
fn whole_floats_render_without_fraction() {
    let d = doc(r#"{"data":{"a":1e2,"b":100.0,"c":-0.0,"d":2.5,"e":7}}"#);
    let out = extract_direct(&d, &["data.a", "data.b", "data.c", "data.d", "data.e"]).unwrap();
    assert_eq!(out, "data.a: 100\ndata.b: 100\ndata.c: 0\ndata.d: 2.5\ndata.e: 7\n");
    assert_eq!(format_value(&json!(-3.0)), "-3");
}
