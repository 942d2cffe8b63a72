#![deny(missing_docs)]

//! # Response Shape Normalization
//!
//! Enumerates the concrete object types reachable from each declared
//! response body, in declaration order, filtered by a caller-supplied
//! predicate.

use crate::error::AppResult;
use crate::graph::models::{ObjectType, Operation, TypeNode};
use std::sync::Arc;

/// Collects every object type reachable from `op`'s response bodies that
/// satisfies `predicate`, in declaration order.
///
/// Object bodies are tested directly. Union variants and tuple elements are
/// tested element-wise in declared order; non-object members are skipped,
/// not errors. The predicate is fallible so callers may flatten fields while
/// selecting candidates.
///
/// Returns `None` when nothing matched. The sentinel is deliberate: callers
/// distinguish "no response qualified" from an empty downstream filter.
pub fn collect_response_models<P>(
    op: &Operation,
    mut predicate: P,
) -> AppResult<Option<Vec<Arc<ObjectType>>>>
where
    P: FnMut(&Arc<ObjectType>) -> AppResult<bool>,
{
    let mut matched = Vec::new();
    for response in &op.responses {
        match &response.body {
            TypeNode::Object(model) => {
                if predicate(model)? {
                    matched.push(Arc::clone(model));
                }
            }
            TypeNode::Union(union) => {
                for variant in &union.variants {
                    if let TypeNode::Object(model) = &variant.ty {
                        if predicate(model)? {
                            matched.push(Arc::clone(model));
                        }
                    }
                }
            }
            TypeNode::Tuple(tuple) => {
                for element in &tuple.elements {
                    if let TypeNode::Object(model) = element {
                        if predicate(model)? {
                            matched.push(Arc::clone(model));
                        }
                    }
                }
            }
            // Scalar bodies carry no object shape to enumerate.
            TypeNode::Scalar(_) => {}
        }
    }

    Ok(if matched.is_empty() {
        None
    } else {
        Some(matched)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::models::{ScalarType, TupleType, UnionType};

    #[test]
    fn test_object_body_collected_in_order() {
        let op = Operation::new("listWidgets")
            .with_response(ObjectType::new("Page"))
            .with_response(ObjectType::new("Problem").mark_error());

        let models = collect_response_models(&op, |_| Ok(true)).unwrap().unwrap();
        let names: Vec<&str> = models.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Page", "Problem"]);
    }

    #[test]
    fn test_union_variants_tested_elementwise() {
        let body = UnionType::new()
            .with_named_variant("ok", ObjectType::new("Widget"))
            .with_variant(ScalarType::string_literal("gone"))
            .with_variant(ObjectType::new("Problem").mark_error());
        let op = Operation::new("getWidget").with_response(body);

        let models = collect_response_models(&op, |m| Ok(!m.is_error))
            .unwrap()
            .unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "Widget");
    }

    #[test]
    fn test_tuple_elements_tested_elementwise() {
        let body = TupleType::new()
            .with_element(ScalarType::number_literal(201))
            .with_element(ObjectType::new("Created"));
        let op = Operation::new("createWidget").with_response(body);

        let models = collect_response_models(&op, |_| Ok(true)).unwrap().unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "Created");
    }

    #[test]
    fn test_no_match_is_absent_not_empty() {
        let op = Operation::new("ping").with_response(ScalarType::string_literal("pong"));
        let collected = collect_response_models(&op, |_| Ok(true)).unwrap();
        assert!(collected.is_none());

        let filtered = collect_response_models(
            &Operation::new("getWidget").with_response(ObjectType::new("Widget")),
            |_| Ok(false),
        )
        .unwrap();
        assert!(filtered.is_none());
    }

    #[test]
    fn test_predicate_errors_propagate() {
        let op = Operation::new("getWidget").with_response(ObjectType::new("Widget"));
        let err = collect_response_models(&op, |_| {
            Err(crate::error::AppError::General("boom".into()))
        })
        .unwrap_err();
        assert!(matches!(err, crate::error::AppError::General(_)));
    }
}
