use namecase_person::{NameCaseError, Person};
use namecase_protocol::{Case, Gender, NamePart};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

#[derive(Debug, Serialize)]
pub struct CaseForms {
    pub case: Case,
    pub form: String,
}

/// Declined name as sent back to JavaScript.
#[derive(Debug, Serialize)]
pub struct DeclensionReport {
    pub gender: Option<Gender>,
    pub first_name: Vec<CaseForms>,
    pub last_name: Vec<CaseForms>,
    pub father_name: Vec<CaseForms>,
}

#[derive(Debug, Serialize)]
pub struct GenderReport {
    pub gender: Option<Gender>,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
pub struct ClassifiedWord {
    pub word: String,
    pub role: NamePart,
    pub letter: char,
}

fn parse_gender(gender: Option<String>) -> Result<Option<Gender>, JsValue> {
    match gender.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some("man") | Some("m") => Ok(Some(Gender::Man)),
        Some("woman") | Some("w") => Ok(Some(Gender::Woman)),
        Some(other) => Err(JsValue::from_str(&format!("unknown gender '{other}'"))),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn js_error(err: NameCaseError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Name declension engine living in the browser.
#[wasm_bindgen]
#[derive(Default)]
pub struct NameCaser {
    person: Person,
}

impl NameCaser {
    fn forms(&mut self, role: NamePart) -> Result<Vec<CaseForms>, NameCaseError> {
        let forms = self.person.decline(role)?;
        if forms.iter().all(String::is_empty) {
            return Ok(Vec::new());
        }
        Ok(Case::ALL
            .into_iter()
            .zip(forms)
            .map(|(case, form)| CaseForms { case, form })
            .collect())
    }

    pub fn declension_report(
        &mut self,
        first: &str,
        last: &str,
        father: &str,
        gender: Option<Gender>,
    ) -> Result<DeclensionReport, NameCaseError> {
        self.person.reset().set_full_name(last, first, father);
        if let Some(gender) = gender {
            self.person.set_gender(gender);
        }
        Ok(DeclensionReport {
            first_name: self.forms(NamePart::FirstName)?,
            last_name: self.forms(NamePart::FamilyName)?,
            father_name: self.forms(NamePart::Patronymic)?,
            gender: self.person.detect_gender(),
        })
    }

    pub fn classified_words(&mut self, full_name: &str) -> Vec<ClassifiedWord> {
        self.person.classify(full_name);
        self.person
            .words()
            .iter()
            .filter_map(|w| {
                let role = w.name_part()?;
                Some(ClassifiedWord { word: w.original().to_owned(), role, letter: role.letter() })
            })
            .collect()
    }
}

#[wasm_bindgen]
impl NameCaser {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declines the given parts; `gender` is `"man"`, `"woman"` or empty to detect it.
    pub fn decline(
        &mut self,
        first: &str,
        last: &str,
        father: &str,
        gender: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let gender = parse_gender(gender)?;
        let report = self
            .declension_report(first, last, father, gender)
            .map_err(js_error)?;
        to_js(&report)
    }

    #[wasm_bindgen(js_name = detectGender)]
    pub fn detect_gender(&mut self, full_name: &str) -> Result<JsValue, JsValue> {
        let gender = self.person.detect_gender_of(full_name);
        let report = GenderReport { gender, confidence: self.person.gender_confidence() };
        to_js(&report)
    }

    pub fn classify(&mut self, full_name: &str) -> Result<JsValue, JsValue> {
        to_js(&self.classified_words(full_name))
    }

    pub fn version(&self) -> String {
        self.person.version().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_holds_only_given_parts() {
        let mut caser = NameCaser::new();
        let report = caser.declension_report("Олена", "", "Петрівна", None).unwrap();
        assert_eq!(report.gender, Some(Gender::Woman));
        assert_eq!(report.first_name[1].form, "Олени");
        assert_eq!(report.father_name[1].form, "Петрівни");
        assert!(report.last_name.is_empty());
    }

    #[test]
    fn empty_name_is_an_error() {
        let mut caser = NameCaser::new();
        assert_eq!(
            caser.declension_report("", " ", "", Some(Gender::Man)).unwrap_err(),
            NameCaseError::NoWords
        );
    }

    #[test]
    fn classifies_full_name() {
        let mut caser = NameCaser::new();
        let letters: String = caser
            .classified_words("Іванов Петро Петрович")
            .iter()
            .map(|w| w.letter)
            .collect();
        assert_eq!(letters, "SNF");
    }
}
