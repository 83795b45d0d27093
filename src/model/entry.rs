use std::fmt;

use serde::{Deserialize, Serialize};

/// One phone book record. Names are not unique, the phonebook happily stores duplicates
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub first_name: String,
    pub last_name: String,
    pub patronymic: Option<String>,
    pub personal_number: String,
    pub office_number: Option<String>,
    pub company_name: Option<String>,
}

impl Entry {
    pub fn new(first_name: String, last_name: String, personal_number: String) -> Self {
        Entry {
            first_name,
            last_name,
            patronymic: None,
            personal_number,
            office_number: None,
            company_name: None,
        }
    }

    pub fn with_patronymic(mut self, patronymic: Option<String>) -> Self {
        self.patronymic = patronymic;
        self
    }

    pub fn with_office_number(mut self, office_number: Option<String>) -> Self {
        self.office_number = office_number;
        self
    }

    pub fn with_company_name(mut self, company_name: Option<String>) -> Self {
        self.company_name = company_name;
        self
    }

    pub fn new_test() -> Self {
        Entry {
            first_name: "Ivan".to_string(),
            last_name: "Petrov".to_string(),
            patronymic: Some("Sergeevich".to_string()),
            personal_number: "+7 900 000 00 01".to_string(),
            office_number: Some("+7 495 000 00 01".to_string()),
            company_name: Some("Horns and Hooves".to_string()),
        }
    }
}

// Rendered as a single line: "last first [patronymic] | personal: .. | office: .. | company: .."
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.last_name, self.first_name)?;

        if let Some(patronymic) = &self.patronymic {
            write!(f, " {}", patronymic)?;
        }

        write!(
            f,
            " | personal: {} | office: {} | company: {}",
            self.personal_number,
            self.office_number.as_deref().unwrap_or("-"),
            self.company_name.as_deref().unwrap_or("-"),
        )
    }
}

/// Names the columns of an [`Entry`], used when a field is cleared
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum EntryField {
    FirstName,
    LastName,
    Patronymic,
    PersonalNumber,
    OfficeNumber,
    CompanyName,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::FirstName => "first_name",
            EntryField::LastName => "last_name",
            EntryField::Patronymic => "patronymic",
            EntryField::PersonalNumber => "personal_number",
            EntryField::OfficeNumber => "office_number",
            EntryField::CompanyName => "company_name",
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            EntryField::Patronymic | EntryField::OfficeNumber | EntryField::CompanyName => true,
            EntryField::FirstName | EntryField::LastName | EntryField::PersonalNumber => false,
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
