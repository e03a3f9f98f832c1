use onboard_core::{
    load_flow_str, load_flow_version, parse_flow_str, validate_flow, FlowError, FlowFormat,
    Validate, ValidationKind,
};

fn minimal_valid_yaml() -> &'static str {
    r#"
version: v2
steps:
  - id: welcome
    name: Welcome
    route: /onboarding/welcome
    required: [displayName]
  - id: photos
    name: Photos
    route: /onboarding/photos
    required: [photos]
    minItems: 3
    validation:
      type: backend
      endpoint: media.validatePhotos
decisionPoints: []
"#
}

#[test]
fn parse_yaml_and_validate_ok() {
    let parsed = parse_flow_str(minimal_valid_yaml(), FlowFormat::Yaml).unwrap();
    validate_flow(&parsed.flow).unwrap();
    assert_eq!(parsed.flow.steps[1].min_items, Some(3));
    assert_eq!(
        parsed.flow.steps[1].validation.as_ref().unwrap().kind,
        ValidationKind::Backend
    );
}

#[test]
fn parse_auto_detects_yaml() {
    let parsed = parse_flow_str(minimal_valid_yaml(), FlowFormat::Auto).unwrap();
    assert_eq!(parsed.format, FlowFormat::Yaml);
}

#[test]
fn parse_json_with_camel_case_fields() {
    let json = r#"
{
  "version": "v2",
  "steps": [
    { "id": "representation", "name": "Rep", "route": "/r", "required": ["status"] },
    { "id": "agency", "name": "Agency", "route": "/a", "required": [],
      "conditional": { "field": "status", "value": "represented", "show": true } }
  ],
  "decisionPoints": [
    { "stepId": "representation", "field": "status",
      "branches": [ { "value": "represented", "nextStep": "agency" } ] }
  ]
}
"#;
    let parsed = parse_flow_str(json, FlowFormat::Auto).unwrap();
    assert_eq!(parsed.format, FlowFormat::Json);
    parsed.flow.validate().unwrap();
    assert_eq!(parsed.flow.decision_points[0].branches[0].next_step, "agency");
    assert!(parsed.flow.steps[1].conditional.as_ref().unwrap().show);
}

#[test]
fn decision_points_default_to_empty() {
    let parsed = parse_flow_str(
        r#"{ "version": "v1", "steps": [ { "id": "a", "route": "/a" } ] }"#,
        FlowFormat::Json,
    )
    .unwrap();
    assert!(parsed.flow.decision_points.is_empty());
    assert!(parsed.flow.steps[0].required.is_empty());
}

#[test]
fn parse_garbage_is_rejected() {
    let err = parse_flow_str("not: [valid", FlowFormat::Auto).unwrap_err();
    assert!(format!("{err}").contains("failed to parse as YAML"));
}

#[test]
fn empty_flow_is_valid() {
    let parsed = parse_flow_str(r#"{"version": "v2", "steps": []}"#, FlowFormat::Auto).unwrap();
    validate_flow(&parsed.flow).unwrap();
    assert!(parsed.flow.is_empty());
}

#[test]
fn duplicate_step_ids_are_rejected() {
    let bad = r#"
version: v1
steps:
  - { id: a, route: /a }
  - { id: a, route: /b }
"#;
    let parsed = parse_flow_str(bad, FlowFormat::Yaml).unwrap();
    let err = validate_flow(&parsed.flow).unwrap_err();
    assert!(err
        .violations
        .iter()
        .any(|v| v.path == "$.steps[1].id" && v.message.contains("must be unique")));
}

#[test]
fn step_ids_and_routes_are_checked() {
    let bad = r#"
version: ""
steps:
  - { id: "has space", route: "  " }
"#;
    let parsed = parse_flow_str(bad, FlowFormat::Yaml).unwrap();
    let err = validate_flow(&parsed.flow).unwrap_err();
    let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
    assert!(paths.contains(&"$.version"));
    assert!(paths.contains(&"$.steps[0].id"));
    assert!(paths.contains(&"$.steps[0].route"));
}

#[test]
fn dangling_branch_targets_are_rejected() {
    let bad = r#"
version: v1
steps:
  - { id: representation, route: /r }
  - { id: agency, route: /a }
decisionPoints:
  - stepId: representation
    field: status
    branches:
      - { value: represented, nextStep: agency }
      - { value: represented, nextStep: nowhere }
  - stepId: ghost
    field: status
    branches: []
"#;
    let parsed = parse_flow_str(bad, FlowFormat::Yaml).unwrap();
    let err = validate_flow(&parsed.flow).unwrap_err();
    let has = |path: &str| err.violations.iter().any(|v| v.path == path);

    assert!(has("$.decisionPoints[0].branches[1].nextStep"));
    assert!(has("$.decisionPoints[0].branches[1].value"));
    assert!(has("$.decisionPoints[1].stepId"));
    assert!(has("$.decisionPoints[1].branches"));
    assert!(!has("$.decisionPoints[0].branches[0].nextStep"));
}

#[test]
fn one_decision_point_per_step() {
    let bad = r#"
version: v1
steps:
  - { id: a, route: /a }
  - { id: b, route: /b }
decisionPoints:
  - { stepId: a, field: f, branches: [ { value: x, nextStep: b } ] }
  - { stepId: a, field: g, branches: [ { value: y, nextStep: b } ] }
"#;
    let parsed = parse_flow_str(bad, FlowFormat::Yaml).unwrap();
    let err = validate_flow(&parsed.flow).unwrap_err();
    assert_eq!(err.violations.len(), 1);
    assert_eq!(err.violations[0].path, "$.decisionPoints[1].stepId");
}

#[test]
fn backend_validation_needs_endpoint_and_min_items_needs_required() {
    let bad = r#"
version: v1
steps:
  - id: photos
    route: /photos
    minItems: 2
    validation: { type: backend }
  - id: bio
    route: /bio
    conditional: { field: "", value: x, show: true }
"#;
    let parsed = parse_flow_str(bad, FlowFormat::Yaml).unwrap();
    let err = validate_flow(&parsed.flow).unwrap_err();
    let paths: Vec<&str> = err.violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "$.steps[0].minItems",
            "$.steps[0].validation.endpoint",
            "$.steps[1].conditional.field",
        ]
    );
}

#[test]
fn load_flow_str_combines_parse_and_validation() {
    let err = load_flow_str(
        r#"{"version": "v1", "steps": [{"id": "a", "route": ""}]}"#,
        FlowFormat::Json,
    )
    .unwrap_err();
    assert!(matches!(err, FlowError::Validation(_)));

    let err = load_flow_str("{", FlowFormat::Json).unwrap_err();
    assert!(matches!(err, FlowError::Parse(_)));

    load_flow_str(minimal_valid_yaml(), FlowFormat::Auto).unwrap();
}

#[test]
fn load_flow_version_rejects_other_versions() {
    let parsed = load_flow_version(minimal_valid_yaml(), FlowFormat::Auto, "v2").unwrap();
    assert_eq!(parsed.flow.version, "v2");

    let err = load_flow_version(minimal_valid_yaml(), FlowFormat::Auto, "v3").unwrap_err();
    match err {
        FlowError::VersionMismatch { expected, found } => {
            assert_eq!(expected, "v3");
            assert_eq!(found, "v2");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn validation_error_names_flow_and_groups_by_step() {
    let err = load_flow_str(
        r#"{"version": "v7", "steps": [
            {"id": "a", "route": "/a"},
            {"id": "b", "route": "", "required": [""]},
            {"id": "b1", "route": "/b1", "conditional": {"field": "", "value": "x", "show": true}}
        ]}"#,
        FlowFormat::Json,
    )
    .unwrap_err();
    let FlowError::Validation(err) = err else {
        panic!("expected validation error");
    };

    assert_eq!(err.version, "v7");
    let msg = err.to_string();
    assert!(msg.starts_with("flow v7 has 3 invalid entries"), "{msg}");
    assert!(msg.ends_with("$.steps[1].route"), "{msg}");

    let step_one: Vec<&str> = err.under("$.steps[1]").map(|v| v.path.as_str()).collect();
    assert_eq!(step_one, vec!["$.steps[1].route", "$.steps[1].required[0]"]);
    assert_eq!(err.under("$.steps[2]").count(), 1);
}
