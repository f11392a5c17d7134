//! Declension of Ukrainian personal names.
//!
//! A [`Person`] collects the words of one name, labelled or not, works out
//! which word is the first name, the family name and the patronymic, guesses
//! the gender, and declines every word into all seven cases.
//!
//! ```
//! use namecase_person::{NamePart, Person};
//!
//! let mut person = Person::new();
//! person.set_full_name("Петренко", "Олена", "Петрівна");
//! let genitive = person.decline_case(NamePart::FirstName, 1).unwrap();
//! assert_eq!(genitive, "Олени");
//! ```

pub mod error;
pub mod person;
pub mod tokenize;
pub mod word;

pub use error::{NameCaseError, Result};
pub use person::{Person, Stage, VERSION};
pub use word::WordRecord;

pub use namecase_morph::{LanguageProfile, Ukrainian};
pub use namecase_protocol::{Case, Declension, Gender, GenderScore, NamePart, RuleId};
