use apigraph::{
    codes, placeholder_model, require_success_model, select_error_model, select_success_model,
    AppError, CollectingSink, Field, ObjectType, Operation, OperationRegistry, ScalarKind,
    ScalarType, TupleType, UnionType,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn status_field(scalar: ScalarType) -> Field {
    Field::new("statusCode", scalar).status_code()
}

#[test]
fn test_explicit_status_codes_pick_the_2xx_response() {
    let not_found = ObjectType::new("NotFoundError")
        .with_field(status_field(ScalarType::string_literal("404")))
        .mark_error();
    let page = ObjectType::new("WidgetPage")
        .with_field(status_field(ScalarType::number_literal(200)))
        .with_field(Field::new("value", ScalarType::plain(ScalarKind::Other)));

    let op = Operation::new("listWidgets")
        .with_response(not_found)
        .with_response(page);

    let model = select_success_model(&op).unwrap().unwrap();
    assert_eq!(model.name, "WidgetPage");
}

#[test]
fn test_single_response_without_status_field_is_the_success_body() {
    let op = Operation::new("getWidget").with_response(
        ObjectType::new("Widget")
            .with_field(Field::new("id", ScalarType::plain(ScalarKind::String))),
    );

    let model = select_success_model(&op).unwrap().unwrap();
    assert_eq!(model.name, "Widget");
}

#[test]
fn test_error_only_operation_reports_exactly_one_diagnostic() {
    let op = Operation::new("brokenOp")
        .with_response(ObjectType::new("Problem").mark_error());

    assert_eq!(select_success_model(&op).unwrap(), None);

    let sink = CollectingSink::new();
    let model = require_success_model(&op, &sink).unwrap();
    assert!(Arc::ptr_eq(&model, &placeholder_model()));

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].code, codes::EXPECTED_SUCCESS_RESPONSE);
    assert_eq!(entries[0].target, "brokenOp");
}

#[test]
fn test_union_and_tuple_bodies_classify_identically() {
    let problem = || ObjectType::new("Problem").mark_error();
    let created =
        || ObjectType::new("Created").with_field(status_field(ScalarType::number_literal(201)));

    let union_op = Operation::new("createViaUnion").with_response(
        UnionType::new()
            .with_variant(problem())
            .with_variant(created()),
    );
    let tuple_op = Operation::new("createViaTuple").with_response(
        TupleType::new()
            .with_element(problem())
            .with_element(created()),
    );

    let from_union = select_success_model(&union_op).unwrap().unwrap();
    let from_tuple = select_success_model(&tuple_op).unwrap().unwrap();
    assert_eq!(from_union.name, "Created");
    assert_eq!(from_union, from_tuple);
}

#[test]
fn test_candidate_order_spans_responses_in_declaration_order() {
    // Two non-error candidates; the first declared response wins even though
    // both qualify.
    let first = ObjectType::new("First");
    let second = ObjectType::new("Second");
    let op = Operation::new("ambiguousOp")
        .with_response(first)
        .with_response(second);

    let model = select_success_model(&op).unwrap().unwrap();
    assert_eq!(model.name, "First");
}

#[test]
fn test_error_body_is_the_first_error_marked_candidate() {
    let op = Operation::new("getWidget")
        .with_response(ObjectType::new("Widget"))
        .with_response(
            UnionType::new()
                .with_variant(ObjectType::new("Conflict").mark_error())
                .with_variant(ObjectType::new("ServerError").mark_error()),
        );

    let model = select_error_model(&op).unwrap().unwrap();
    assert_eq!(model.name, "Conflict");
}

#[test]
fn test_registry_batch_keeps_going_past_offenders() {
    let mut registry = OperationRegistry::new();
    registry
        .register(Operation::new("listWidgets").with_response(ObjectType::new("WidgetPage")))
        .unwrap();
    registry
        .register(
            Operation::new("brokenOp").with_response(ObjectType::new("Problem").mark_error()),
        )
        .unwrap();
    registry
        .register(Operation::new("getWidget").with_response(ObjectType::new("Widget")))
        .unwrap();

    let sink = CollectingSink::new();
    let resolved = registry.resolve_success_bodies(&sink).unwrap();

    let names: Vec<&str> = resolved.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["listWidgets", "brokenOp", "getWidget"]);
    assert!(Arc::ptr_eq(&resolved[1].1, &placeholder_model()));
    assert_eq!(sink.entries().len(), 1);
    assert_eq!(sink.entries()[0].target, "brokenOp");
}

#[test]
fn test_cyclic_inheritance_is_a_hard_error_not_absent() {
    // Two distinct nodes named "Widget" along one chain violate the upstream
    // uniqueness/acyclicity contract.
    let impostor = Arc::new(ObjectType::new("Widget"));
    let base = Arc::new(ObjectType::new("Resource").with_base(impostor));
    let leaf = ObjectType::new("Widget")
        .with_field(status_field(ScalarType::number_literal(200)))
        .with_base(base);
    let op = Operation::new("cyclicOp").with_response(leaf);

    let err = select_success_model(&op).unwrap_err();
    assert!(matches!(err, AppError::CyclicInheritance(name) if name == "Widget"));
}
