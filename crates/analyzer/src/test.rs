use syntax::ast::*;
use syntax::{NodeId, NodeIdGen};

use crate::checker::{CLOSURE_NAME, check};
use crate::error::SemanticError;
use crate::options::CheckOptions;

/// 按顺序声明若干顶层函数，每项为 (函数名, 形参, 是否可变参数)
fn unit(imports: &[&str], functions: &[(&str, &[&str], bool)]) -> CompilationUnit {
    let mut ids = NodeIdGen::new();
    let unit_id = ids.next_id();
    let imports: Vec<_> = imports
        .iter()
        .map(|name| ImportDeclaration::new(ids.next_id(), name.to_string()))
        .collect();
    let functions: Vec<_> = functions
        .iter()
        .map(|(name, params, variadic)| {
            let decl_id = ids.next_id();
            let function = Function::builder(ids.next_id())
                .parameters(params.iter().copied())
                .variadic(*variadic)
                .build();
            FunctionDeclaration::new(decl_id, name.to_string(), false, function)
        })
        .collect();
    CompilationUnit::new(unit_id, None, imports, functions)
}

fn analyze(unit: &CompilationUnit) -> Vec<SemanticError> {
    check(unit, &CheckOptions::default())
}

#[test]
fn test_clean_unit() {
    let unit = unit(
        &["java.util.List"],
        &[("main", &["args"], false), ("printAll", &["items"], true)],
    );
    assert!(analyze(&unit).is_empty());
}

#[test]
fn test_variadic_without_parameters() {
    let unit = unit(&[], &[("broken", &[], true)]);
    let errors = analyze(&unit);
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        SemanticError::VariadicWithoutParameters { function, id } => {
            assert_eq!(function, "broken");
            assert_eq!(*id, unit.functions()[0].function().id());
        }
        _ => panic!("Expected VariadicWithoutParameters error"),
    }
}

#[test]
fn test_duplicate_parameter() {
    let unit = unit(&[], &[("f", &["a", "b", "a", "a"], false)]);
    let errors = analyze(&unit);
    assert_eq!(
        errors,
        [SemanticError::DuplicateParameter {
            function: "f".into(),
            name: "a".into(),
            id: unit.functions()[0].function().id(),
        }]
    );
}

#[test]
fn test_overload_by_arity() {
    let unit = unit(&[], &[("f", &["a"], false), ("f", &["a", "b"], false)]);
    assert!(analyze(&unit).is_empty());
}

#[test]
fn test_duplicate_function() {
    let unit = unit(&[], &[("f", &["a"], false), ("f", &["b"], false)]);
    let errors = analyze(&unit);
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        SemanticError::DuplicateFunction {
            name,
            arity,
            id,
            previous,
        } => {
            assert_eq!(name, "f");
            assert_eq!(*arity, 1);
            assert_eq!(*id, unit.functions()[1].id());
            assert_eq!(*previous, unit.functions()[0].id());
        }
        _ => panic!("Expected DuplicateFunction error"),
    }
}

#[test]
fn test_duplicate_import() {
    let unit = unit(&["a.B", "c.D", "a.B"], &[]);
    let errors = analyze(&unit);
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        SemanticError::DuplicateImport { name, id, previous } => {
            assert_eq!(name, "a.B");
            assert_eq!(*id, unit.imports()[2].id());
            assert_eq!(*previous, unit.imports()[0].id());
        }
        _ => panic!("Expected DuplicateImport error"),
    }
}

#[test]
fn test_duplicate_node_id() {
    let shared = NodeId::new(1);
    let unit = CompilationUnit::new(
        NodeId::new(0),
        Some(ModuleDeclaration::new(shared, "m".into())),
        vec![ImportDeclaration::new(shared, "x.Y".into())],
        vec![],
    );
    let errors = analyze(&unit);
    assert_eq!(errors, [SemanticError::DuplicateNodeId { id: shared }]);
}

#[test]
fn test_closure_checked() {
    let closure = Function::builder(NodeId::new(4)).variadic(true).build();
    let body = Block::new(NodeId::new(3), vec![closure.into()]);
    let function = Function::builder(NodeId::new(2))
        .parameters(["x"])
        .body(body)
        .build();
    let unit = CompilationUnit::new(
        NodeId::new(0),
        None,
        vec![],
        vec![FunctionDeclaration::new(NodeId::new(1), "outer".into(), false, function)],
    );
    let errors = analyze(&unit);
    assert_eq!(
        errors,
        [SemanticError::VariadicWithoutParameters {
            function: CLOSURE_NAME.into(),
            id: NodeId::new(4),
        }]
    );
}

#[test]
fn test_permissive_options() {
    let unit = unit(
        &["a.B", "a.B"],
        &[("f", &[], true), ("f", &[], false), ("g", &["x", "x"], false)],
    );
    assert_eq!(analyze(&unit).len(), 4);
    assert!(check(&unit, &CheckOptions::permissive()).is_empty());

    let only_variadic = CheckOptions {
        variadic_without_parameters: true,
        ..CheckOptions::permissive()
    };
    let errors = check(&unit, &only_variadic);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        SemanticError::VariadicWithoutParameters { .. }
    ));
}

#[test]
fn test_max_errors() {
    let unit = unit(&[], &[("f", &[], true), ("g", &[], true), ("h", &[], true)]);
    let errors = check(&unit, &CheckOptions::default().with_max_errors(2));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_max_errors_zero_still_reports() {
    let unit = unit(&[], &[("f", &[], true), ("g", &[], true)]);
    let options = CheckOptions::default().with_max_errors(0);
    assert_eq!(options.max_errors, Some(1));
    assert_eq!(check(&unit, &options).len(), 1);

    let literal_zero = CheckOptions {
        max_errors: Some(0),
        ..CheckOptions::default()
    };
    assert_eq!(literal_zero.error_limit(), Some(1));
    assert_eq!(check(&unit, &literal_zero).len(), 1);
}

#[test]
fn test_error_messages() {
    let error = SemanticError::VariadicWithoutParameters {
        function: "f".into(),
        id: NodeId::new(3),
    };
    assert_eq!(
        error.to_string(),
        "function 'f' is variadic but declares no parameters (node #3)"
    );
    assert_eq!(error.node(), NodeId::new(3));

    let code = miette::Diagnostic::code(&error).map(|c| c.to_string());
    assert_eq!(code.as_deref(), Some("semantic::variadic_without_parameters"));
}
