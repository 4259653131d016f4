use super::{Pretty, Printer};
use crate::doc::Doc;
use hs98_syntax::{ExportSpec, ImportDecl, ImportSpec, ImportSpecs, Module};

impl Pretty for Module {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        let exports = match &self.exports {
            Some(specs) => p.paren_list(specs.iter().map(|e| e.pretty(p)).collect()),
            None => Doc::empty(),
        };
        let header = p.layout_sep(vec![
            Doc::text("module"),
            self.name.pretty(p),
            exports,
            Doc::text("where"),
        ]);
        let body = self
            .imports
            .iter()
            .map(|i| i.pretty(p))
            .chain(self.decls.iter().map(|d| d.pretty(p)))
            .collect();
        p.mark_line(&self.loc, p.top_level(header, body))
    }
}

impl Pretty for ExportSpec {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        match self {
            ExportSpec::Var { name } | ExportSpec::Abs { name } => name.pretty(p),
            ExportSpec::ThingAll { name } => name.pretty(p).append(Doc::text("(..)")),
            ExportSpec::ThingWith { name, items } => name
                .pretty(p)
                .append(p.paren_list(items.iter().map(|c| c.pretty(p)).collect())),
            ExportSpec::ModuleContents { module } => {
                Doc::text("module").append_space(module.pretty(p))
            }
        }
    }
}

impl Pretty for ImportDecl {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        let qualified = if self.qualified {
            Doc::text("qualified")
        } else {
            Doc::empty()
        };
        let alias = match &self.alias {
            Some(alias) => Doc::text("as").append_space(alias.pretty(p)),
            None => Doc::empty(),
        };
        let specs = match &self.specs {
            Some(specs) => specs.pretty(p),
            None => Doc::empty(),
        };
        p.mark_line(
            &self.loc,
            p.layout_sep(vec![
                Doc::text("import"),
                qualified,
                self.module.pretty(p),
                alias,
                specs,
            ]),
        )
    }
}

/// `(a, b)` or `hiding (a, b)`
impl Pretty for ImportSpecs {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        let items = p.paren_list(self.items.iter().map(|i| i.pretty(p)).collect());
        if self.hiding {
            Doc::text("hiding").append_space(items)
        } else {
            items
        }
    }
}

impl Pretty for ImportSpec {
    fn pretty(&self, p: &Printer<'_>) -> Doc {
        match self {
            ImportSpec::Var { name } | ImportSpec::Abs { name } => name.pretty(p),
            ImportSpec::ThingAll { name } => name.pretty(p).append(Doc::text("(..)")),
            ImportSpec::ThingWith { name, items } => name
                .pretty(p)
                .append(p.paren_list(items.iter().map(|c| c.pretty(p)).collect())),
        }
    }
}
