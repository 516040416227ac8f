use crate::error::Result;
use crate::gomod::Module;

/// Anything that can produce the resolved dependency set of a project.
pub trait ModuleSource {
    fn list_modules(&self) -> Result<Vec<Module>>;
}

/// Fixed set of modules, used where no `go` toolchain should be involved.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct StaticModuleSource {
    modules: Vec<Module>,
}

#[cfg(test)]
impl StaticModuleSource {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }
}

#[cfg(test)]
impl ModuleSource for StaticModuleSource {
    fn list_modules(&self) -> Result<Vec<Module>> {
        Ok(self.modules.clone())
    }
}
