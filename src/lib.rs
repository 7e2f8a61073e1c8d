//! ng-i18n: manage Angular workspace i18n locale configuration.
//!
//! The tool edits `angular.json` to initialize i18n for a project and to
//! add or remove translation target locales. Each invocation is one
//! load/mutate/save cycle; the mutation engine keeps three substructures in
//! step: `i18n.locales`, `architect.build.configurations`, and
//! `architect["extract-i18n"].options.targetFiles`.
//!
//! Module map:
//! - `store`: load/save boundary for `angular.json` and `package.json`
//! - `workspace`: typed schema plus lazy-creating navigation accessors
//! - `ops`: the init / add / remove mutations
//! - `preconditions`: host version and setup-step checks
//! - `locale`: locale code validation via display-name resolution
//! - `prompt`: injected interactive capability
//! - `commands`: per-command orchestration
//! - `error`: the failure taxonomy

pub mod commands;
pub mod error;
pub mod locale;
pub mod ops;
pub mod preconditions;
pub mod prompt;
pub mod store;
pub mod workspace;
