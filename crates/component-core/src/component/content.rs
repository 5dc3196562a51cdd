//! Content generation for the files of a component
//!
//! Every function here is a pure string builder over the component name, the
//! option set and the product's `use_packages` mode. The same inputs always
//! produce byte-identical output.

use super::name::ComponentName;
use super::options::{OptionKey, OptionSet};

/// Module that provides the shared `CFC` component type
pub const PACKAGES_MODULE: &str = "@packages/common";

/// Content of the barrel files placed in module subdirectories
pub const EMPTY_BARREL_CONTENT: &str = "\n";

/// Generates the text of each file belonging to one component
#[derive(Debug, Clone)]
pub struct ContentGenerator {
    name: ComponentName,
    options: OptionSet,
    use_packages: bool,
    packages_module: String,
}

impl ContentGenerator {
    pub fn new(name: ComponentName, options: OptionSet, use_packages: bool) -> Self {
        Self {
            name,
            options,
            use_packages,
            packages_module: PACKAGES_MODULE.to_string(),
        }
    }

    /// Import `CFC` from `module` instead of [`PACKAGES_MODULE`]
    pub fn with_packages_module(mut self, module: impl Into<String>) -> Self {
        self.packages_module = module.into();
        self
    }

    pub fn name(&self) -> &ComponentName {
        &self.name
    }

    pub fn options(&self) -> &OptionSet {
        &self.options
    }

    pub fn use_packages(&self) -> bool {
        self.use_packages
    }

    /// Source of `{Name}.tsx`
    pub fn component_file_content(&self) -> String {
        let is_fc = self.options.get(OptionKey::CreateFc);
        let is_memo = self.options.get(OptionKey::CreateMemo);
        let is_types = self.options.get(OptionKey::CreateType);
        let use_packages = self.use_packages;
        let props_type = self.name.props_type();

        let mut imports = vec![react_import(is_fc, is_memo)];
        if use_packages && !is_fc {
            imports.push(format!("import {{ CFC }} from '{}'", self.packages_module));
        }
        if is_types {
            imports.push(format!("import {{ {} }} from './types'", props_type));
        }

        // Binding annotation: FC, else the shared CFC, else nothing
        let mut type_suffix = if is_fc {
            ": FC".to_string()
        } else if use_packages {
            ": CFC".to_string()
        } else {
            String::new()
        };
        if is_types && (is_fc || use_packages) {
            type_suffix.push_str(&format!("<{}>", props_type));
        }

        let params = if is_types {
            if !is_fc && !use_packages {
                format!("props: {}", props_type)
            } else {
                "props".to_string()
            }
        } else if is_fc {
            "{ children }".to_string()
        } else {
            String::new()
        };

        let return_type = if is_fc || use_packages {
            ""
        } else {
            ": JSX.Element"
        };

        let (memo_prefix, memo_suffix) = if is_memo { ("memo(", ")") } else { ("", "") };

        format!(
            "{imports}\n\
             \n\
             export const {name}{type_suffix} = {memo_prefix}({params}){return_type} => {{\n    \
             return (\n        \
             <></>\n    \
             )\n\
             }}{memo_suffix}\n",
            imports = imports.join("\n"),
            name = self.name,
        )
    }

    /// Source of the component's `index.ts` barrel
    pub fn index_file_content(&self) -> String {
        let mut content = format!("export {{ {name} }} from './{name}'", name = self.name);
        if self.options.get(OptionKey::CreateType) {
            content.push_str(&format!(
                "\nexport type {{ {} }} from './types'",
                self.name.props_type()
            ));
        }
        content.push('\n');
        content
    }

    /// Source of `types.ts`; only written when types are enabled
    pub fn types_file_content(&self) -> String {
        format!("export type {} = {{}}\n", self.name.props_type())
    }
}

/// `import React ... from 'react'` with the named imports the options need
fn react_import(is_fc: bool, is_memo: bool) -> String {
    let mut named = Vec::new();
    if is_fc {
        named.push("FC");
    }
    if is_memo {
        named.push("memo");
    }

    if named.is_empty() {
        "import React from 'react'".to_string()
    } else {
        format!("import React, {{ {} }} from 'react'", named.join(", "))
    }
}
