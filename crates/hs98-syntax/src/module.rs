use crate::decl::Decl;
use crate::loc::SrcLoc;
use crate::names::{CName, ModuleName, Name, QName};
use serde::{Deserialize, Serialize};

/// A complete source module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Module {
    #[serde(default)]
    pub loc: SrcLoc,
    pub name: ModuleName,
    /// `None` when the header has no export list
    #[serde(default)]
    pub exports: Option<Vec<ExportSpec>>,
    #[serde(default)]
    pub imports: Vec<ImportDecl>,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

impl Module {
    pub fn new(name: impl Into<ModuleName>, decls: Vec<Decl>) -> Self {
        Self {
            loc: SrcLoc::unknown(),
            name: name.into(),
            exports: None,
            imports: Vec::new(),
            decls,
        }
    }
}

/// Entry of a module's export list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExportSpec {
    /// `x`
    Var { name: QName },
    /// `T`
    Abs { name: QName },
    /// `T(..)`
    ThingAll { name: QName },
    /// `T(a, B)`
    ThingWith { name: QName, items: Vec<CName> },
    /// `module M`
    ModuleContents { module: ModuleName },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportDecl {
    #[serde(default)]
    pub loc: SrcLoc,
    pub module: ModuleName,
    #[serde(default)]
    pub qualified: bool,
    /// `as N`
    #[serde(default)]
    pub alias: Option<ModuleName>,
    #[serde(default)]
    pub specs: Option<ImportSpecs>,
}

impl ImportDecl {
    pub fn new(module: impl Into<ModuleName>) -> Self {
        Self {
            loc: SrcLoc::unknown(),
            module: module.into(),
            qualified: false,
            alias: None,
            specs: None,
        }
    }
}

/// Import list, optionally a `hiding` list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportSpecs {
    #[serde(default)]
    pub hiding: bool,
    pub items: Vec<ImportSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ImportSpec {
    Var { name: Name },
    Abs { name: Name },
    ThingAll { name: Name },
    ThingWith { name: Name, items: Vec<CName> },
}
