use syntax::AstNode;
use syntax::ast::CompilationUnit;

use crate::error::{FrontendError, Result, UnitErrors};
use crate::settings::Settings;

/// 检查单个编译单元
pub fn check_unit(unit: &CompilationUnit, settings: &Settings) -> Result<()> {
    check_units(std::slice::from_ref(unit), settings)
}

/// 检查所有编译单元，按单元在输入中的位置收集错误
pub fn check_units(units: &[CompilationUnit], settings: &Settings) -> Result<()> {
    if units.is_empty() {
        return Err(FrontendError::NoInput);
    }

    let mut failed = Vec::new();
    for (index, unit) in units.iter().enumerate() {
        let module = unit.module().map_or("<anonymous>", |m| m.name());
        let _span =
            tracing::info_span!("check_unit", index, root = %unit.id(), module).entered();

        let errors = analyzer::check(unit, &settings.check);
        if errors.is_empty() {
            tracing::info!("unit is clean");
        } else {
            failed.push(UnitErrors {
                index,
                root: unit.id(),
                errors,
            });
        }
    }

    if !failed.is_empty() {
        return Err(FrontendError::Semantic(failed));
    }
    Ok(())
}
