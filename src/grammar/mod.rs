//! Grammar text generation.
//!
//! A validated rule tree is expanded leaf-first into an [`Expansion`], which
//! renders as a JSGF rule body. Each rule type maps onto JSGF operators:
//!
//! | Rule type | JSGF |
//! |-----------|------|
//! | ThisWillBeSaidOnce | `A B` |
//! | ThisCanBeSaidOnce | `[ A B ]` |
//! | ThisWillBeSaidWithOptionalRepetitions | `( A B )+` |
//! | ThisCanBeSaidWithOptionalRepetitions | `( A B )*` |
//! | OneOfTheseWillBeSaidOnce | `( A \| B )` |
//! | OneOfTheseCanBeSaidOnce | `[ A \| B ]` |
//! | OneOfTheseWillBeSaidWithOptionalRepetitions | `( A \| B ) [ A \| B ]` |
//! | OneOfTheseCanBeSaidWithOptionalRepetitions | `[ ( A \| B ) [ A \| B ] ]` |
//!
//! Repeated selections are limited to a single extra choice.

mod expansion;
mod jsgf;

pub use expansion::Expansion;
pub use jsgf::{render_grammar, validate_rule_name, JSGF_HEADER};
