//! Component creation options

use clap::Args;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of options a component can be created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionKey {
    CreateFc,
    CreateType,
    CreateConstants,
    CreateUtils,
    CreateModule,
    CreateMemo,
}

impl OptionKey {
    /// All keys, in prompt display order
    pub const ALL: [OptionKey; 6] = [
        OptionKey::CreateFc,
        OptionKey::CreateMemo,
        OptionKey::CreateType,
        OptionKey::CreateConstants,
        OptionKey::CreateUtils,
        OptionKey::CreateModule,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            OptionKey::CreateFc => "CREATE_FC",
            OptionKey::CreateType => "CREATE_TYPE",
            OptionKey::CreateConstants => "CREATE_CONSTANTS",
            OptionKey::CreateUtils => "CREATE_UTILS",
            OptionKey::CreateModule => "CREATE_MODULE",
            OptionKey::CreateMemo => "CREATE_MEMO",
        }
    }

    /// Label shown next to the checkbox in the options prompt
    pub fn label(&self) -> &'static str {
        match self {
            OptionKey::CreateFc => "Create Functional Component",
            OptionKey::CreateType => "Create Types",
            OptionKey::CreateConstants => "Create Constants",
            OptionKey::CreateUtils => "Create Utils",
            OptionKey::CreateModule => "Create Module Structure",
            OptionKey::CreateMemo => "Create as Memo",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A flag for every [`OptionKey`]
///
/// Every key always has a value, so a missing option cannot be confused
/// with a disabled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionSet {
    #[serde(rename = "CREATE_FC")]
    create_fc: bool,
    #[serde(rename = "CREATE_TYPE")]
    create_type: bool,
    #[serde(rename = "CREATE_CONSTANTS")]
    create_constants: bool,
    #[serde(rename = "CREATE_UTILS")]
    create_utils: bool,
    #[serde(rename = "CREATE_MODULE")]
    create_module: bool,
    #[serde(rename = "CREATE_MEMO")]
    create_memo: bool,
}

impl Default for OptionSet {
    /// Matches the initial state of the options prompt: only types checked
    fn default() -> Self {
        Self {
            create_fc: false,
            create_type: true,
            create_constants: false,
            create_utils: false,
            create_module: false,
            create_memo: false,
        }
    }
}

impl OptionSet {
    /// Every option disabled
    pub fn none() -> Self {
        Self::from_enabled([])
    }

    /// Enable exactly the given keys, disabling all others
    pub fn from_enabled(keys: impl IntoIterator<Item = OptionKey>) -> Self {
        let mut set = Self {
            create_fc: false,
            create_type: false,
            create_constants: false,
            create_utils: false,
            create_module: false,
            create_memo: false,
        };
        for key in keys {
            set.set(key, true);
        }
        set
    }

    pub fn get(&self, key: OptionKey) -> bool {
        match key {
            OptionKey::CreateFc => self.create_fc,
            OptionKey::CreateType => self.create_type,
            OptionKey::CreateConstants => self.create_constants,
            OptionKey::CreateUtils => self.create_utils,
            OptionKey::CreateModule => self.create_module,
            OptionKey::CreateMemo => self.create_memo,
        }
    }

    pub fn set(&mut self, key: OptionKey, value: bool) {
        let flag = match key {
            OptionKey::CreateFc => &mut self.create_fc,
            OptionKey::CreateType => &mut self.create_type,
            OptionKey::CreateConstants => &mut self.create_constants,
            OptionKey::CreateUtils => &mut self.create_utils,
            OptionKey::CreateModule => &mut self.create_module,
            OptionKey::CreateMemo => &mut self.create_memo,
        };
        *flag = value;
    }

    /// Builder-style variant of [`OptionSet::set`]
    pub fn with(mut self, key: OptionKey, value: bool) -> Self {
        self.set(key, value);
        self
    }

    /// Keys that are currently enabled, in display order
    pub fn enabled(&self) -> Vec<OptionKey> {
        OptionKey::ALL
            .iter()
            .copied()
            .filter(|key| self.get(*key))
            .collect()
    }
}

/// Command-line flags for the component options, shared by every product CLI
#[derive(Args, Debug, Clone, Default)]
pub struct OptionFlags {
    /// Type the component as a functional component (FC)
    #[arg(long)]
    pub fc: bool,

    /// Wrap the component in memo()
    #[arg(long)]
    pub memo: bool,

    /// Do not create types.ts
    #[arg(long = "no-types")]
    pub no_types: bool,

    /// Create an empty constants.ts
    #[arg(long)]
    pub constants: bool,

    /// Create an empty utils.ts
    #[arg(long)]
    pub utils: bool,

    /// Create containers/ and components/ module directories
    #[arg(long)]
    pub module: bool,
}

impl OptionFlags {
    /// Options from the flags, or None when no option flag was given
    ///
    /// Types stay enabled unless `--no-types` is passed.
    pub fn to_options(&self) -> Option<OptionSet> {
        let any_given =
            self.fc || self.memo || self.no_types || self.constants || self.utils || self.module;
        if !any_given {
            return None;
        }

        let flags = [
            (OptionKey::CreateFc, self.fc),
            (OptionKey::CreateMemo, self.memo),
            (OptionKey::CreateType, !self.no_types),
            (OptionKey::CreateConstants, self.constants),
            (OptionKey::CreateUtils, self.utils),
            (OptionKey::CreateModule, self.module),
        ];
        Some(
            flags
                .into_iter()
                .fold(OptionSet::none(), |set, (key, on)| set.with(key, on)),
        )
    }
}
