use crate::model::entry::{Entry, EntryField};

use super::table::ApplyErrors;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum UpdateStatement {
    Set(String),
    Unset,
    #[default]
    NoChanges,
}

impl UpdateStatement {
    pub fn from_option(value: Option<String>) -> Self {
        match value {
            Some(value) => UpdateStatement::Set(value),
            None => UpdateStatement::NoChanges,
        }
    }
}

/// The fields to overwrite on every matching entry
#[derive(Clone, Debug, PartialEq, Default)]
pub struct UpdateEntryData {
    pub first_name: UpdateStatement,
    pub last_name: UpdateStatement,
    pub patronymic: UpdateStatement,
    pub personal_number: UpdateStatement,
    pub office_number: UpdateStatement,
    pub company_name: UpdateStatement,
}

impl UpdateEntryData {
    fn statements(&self) -> [(EntryField, &UpdateStatement); 6] {
        [
            (EntryField::FirstName, &self.first_name),
            (EntryField::LastName, &self.last_name),
            (EntryField::Patronymic, &self.patronymic),
            (EntryField::PersonalNumber, &self.personal_number),
            (EntryField::OfficeNumber, &self.office_number),
            (EntryField::CompanyName, &self.company_name),
        ]
    }

    /// Replaces the statement for a single field
    pub fn set_statement(mut self, field: EntryField, statement: UpdateStatement) -> Self {
        let target = match field {
            EntryField::FirstName => &mut self.first_name,
            EntryField::LastName => &mut self.last_name,
            EntryField::Patronymic => &mut self.patronymic,
            EntryField::PersonalNumber => &mut self.personal_number,
            EntryField::OfficeNumber => &mut self.office_number,
            EntryField::CompanyName => &mut self.company_name,
        };

        *target = statement;
        self
    }

    pub fn has_changes(&self) -> bool {
        self.statements()
            .iter()
            .any(|(_, statement)| **statement != UpdateStatement::NoChanges)
    }

    /// Checked once per update so that a rejected update never leaves the table half written
    pub fn validate(&self) -> Result<(), ApplyErrors> {
        if !self.has_changes() {
            return Err(ApplyErrors::NoFieldsToUpdate);
        }

        for (field, statement) in self.statements() {
            if statement == &UpdateStatement::Unset && !field.is_nullable() {
                return Err(ApplyErrors::NotNullConstraintViolation(field));
            }
        }

        Ok(())
    }

    /// Expects [`UpdateEntryData::validate`] to have passed, unsetting a required field is ignored
    pub fn apply(&self, entry: &mut Entry) {
        apply_required(&self.first_name, &mut entry.first_name);
        apply_required(&self.last_name, &mut entry.last_name);
        apply_required(&self.personal_number, &mut entry.personal_number);

        apply_nullable(&self.patronymic, &mut entry.patronymic);
        apply_nullable(&self.office_number, &mut entry.office_number);
        apply_nullable(&self.company_name, &mut entry.company_name);
    }
}

fn apply_required(statement: &UpdateStatement, value: &mut String) {
    if let UpdateStatement::Set(new_value) = statement {
        *value = new_value.clone();
    }
}

fn apply_nullable(statement: &UpdateStatement, value: &mut Option<String>) {
    match statement {
        UpdateStatement::Set(new_value) => *value = Some(new_value.clone()),
        UpdateStatement::Unset => *value = None,
        UpdateStatement::NoChanges => {}
    }
}
