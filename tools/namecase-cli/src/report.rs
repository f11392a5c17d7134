use namecase_protocol::{Case, Gender, NamePart};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CaseForm {
    pub case: Case,
    pub form: String,
}

#[derive(Debug, Serialize)]
pub struct RoleForms {
    pub role: NamePart,
    pub forms: Vec<CaseForm>,
}

impl RoleForms {
    pub fn new(role: NamePart, forms: Vec<String>) -> Self {
        let forms = Case::ALL
            .into_iter()
            .zip(forms)
            .map(|(case, form)| CaseForm { case, form })
            .collect();
        Self { role, forms }
    }
}

#[derive(Debug, Serialize)]
pub struct DeclineReport {
    pub gender: Option<Gender>,
    pub roles: Vec<RoleForms>,
}

#[derive(Debug, Serialize)]
pub struct WordRole {
    pub word: String,
    pub role: NamePart,
}

#[derive(Debug, Serialize)]
pub struct ClassifyReport {
    pub format: String,
    pub words: Vec<WordRole>,
}

#[derive(Debug, Serialize)]
pub struct GenderReport {
    pub gender: Option<Gender>,
    pub confidence: f64,
}
