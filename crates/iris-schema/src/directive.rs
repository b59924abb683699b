//! Directive definitions as they appear in a built `Schema` (as opposed to
//! `DirectiveDefinitionNode`, their AST form).

use iris_ast::DirectiveLocation;

use crate::types::IrisArgument;

pub struct Directive {
    pub name: String,
    pub description: Option<String>,
    pub args: Vec<IrisArgument>,
    pub is_repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
}

impl Directive {
    pub fn find_arg(&self, name: &str) -> Option<&IrisArgument> {
        self.args.iter().find(|a| a.name == name)
    }
}
