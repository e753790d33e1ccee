use syntax::ast::*;
use syntax::{AstNode, NodeIdGen};

use crate::{CheckOptions, FrontendError, SemanticError, Settings, check_unit, check_units};

fn unit_with(ids: &mut NodeIdGen, module: &str, variadic_empty: bool) -> CompilationUnit {
    let unit_id = ids.next_id();
    let module = ModuleDeclaration::new(ids.next_id(), module.to_string());
    let decl_id = ids.next_id();
    let function = Function::builder(ids.next_id()).variadic(variadic_empty).build();
    CompilationUnit::new(
        unit_id,
        Some(module),
        vec![],
        vec![FunctionDeclaration::new(decl_id, "run".into(), false, function)],
    )
}

#[test]
fn test_clean_unit() {
    let mut ids = NodeIdGen::new();
    let unit = unit_with(&mut ids, "ok", false);
    assert!(check_unit(&unit, &Settings::default()).is_ok());
}

#[test]
fn test_errors_grouped_by_unit() {
    let mut ids = NodeIdGen::new();
    let units = [
        unit_with(&mut ids, "first", true),
        unit_with(&mut ids, "second", false),
        unit_with(&mut ids, "third", true),
    ];
    let Err(FrontendError::Semantic(errors)) = check_units(&units, &Settings::default()) else {
        panic!("Expected semantic errors");
    };
    let indices: Vec<_> = errors.iter().map(|unit| unit.index).collect();
    assert_eq!(indices, [0, 2]);
    let roots: Vec<_> = errors.iter().map(|unit| unit.root).collect();
    assert_eq!(roots, [units[0].id(), units[2].id()]);
    assert!(errors.iter().all(|unit| unit.errors.len() == 1));
}

#[test]
fn test_units_with_same_root_id() {
    let units = [
        unit_with(&mut NodeIdGen::new(), "first", true),
        unit_with(&mut NodeIdGen::new(), "second", true),
    ];
    assert_eq!(units[0].id(), units[1].id());

    let error = check_units(&units, &Settings::default()).unwrap_err();
    assert_eq!(error.semantic_errors().count(), 2);
    assert_eq!(error.to_string(), "semantic errors in 2 compilation unit(s)");
    let FrontendError::Semantic(errors) = error else {
        panic!("Expected semantic errors");
    };
    let indices: Vec<_> = errors.iter().map(|unit| unit.index).collect();
    assert_eq!(indices, [0, 1]);
}

#[test]
fn test_zero_max_errors_still_fails() {
    let mut ids = NodeIdGen::new();
    let unit = unit_with(&mut ids, "m", true);
    let settings = Settings::default().with_check(CheckOptions::default().with_max_errors(0));
    let error = check_unit(&unit, &settings).unwrap_err();
    assert_eq!(error.semantic_errors().count(), 1);
}

#[test]
fn test_semantic_errors_iter() {
    let mut ids = NodeIdGen::new();
    let unit = unit_with(&mut ids, "m", true);
    let error = check_unit(&unit, &Settings::default()).unwrap_err();
    let all: Vec<_> = error.semantic_errors().collect();
    assert_eq!(all.len(), 1);
    assert!(matches!(
        all[0],
        SemanticError::VariadicWithoutParameters { .. }
    ));
    assert_eq!(error.to_string(), "semantic errors in 1 compilation unit(s)");
}

#[test]
fn test_settings_disable_checks() {
    let mut ids = NodeIdGen::new();
    let unit = unit_with(&mut ids, "m", true);
    let settings = Settings::default().with_check(CheckOptions::permissive());
    assert!(check_unit(&unit, &settings).is_ok());
}

#[test]
fn test_no_input() {
    let result = check_units(&[], &Settings::default());
    assert!(matches!(result, Err(FrontendError::NoInput)));
    assert_eq!(result.unwrap_err().semantic_errors().count(), 0);
}

#[test]
fn test_settings_defaults() {
    let settings = Settings::default().with_log_filter("golo_front=debug");
    assert_eq!(settings.log_filter, "golo_front=debug");
    assert_eq!(settings.check, CheckOptions::default());
    assert_eq!(Settings::default().log_filter, "warn");
}

#[test]
fn test_logging_init_once() {
    let settings = Settings::default();
    let _ = crate::logging::init(&settings);
    assert!(matches!(
        crate::logging::init(&settings),
        Err(FrontendError::Logging(_))
    ));
}
