use std::{num::NonZeroUsize, path::PathBuf};

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::{
    consts::consts::{PageNumber, DEFAULT_PHONEBOOK_FILE},
    database::table::{
        query::QueryEntryData,
        row::{UpdateEntryData, UpdateStatement},
    },
    model::{
        entry::{Entry, EntryField},
        statement::Statement,
    },
};

/// 📒 Phonebook, page through, add, edit and search phone book entries kept in a JSON file
///
/// Example: `phonebook insert --first-name Ivan --last-name Petrov --personal-number 123`
#[derive(Parser, Debug)]
#[command(name = "phonebook", version)]
pub struct Cli {
    /// Location of the phonebook file, created on the first write. Note: Does not support shell paths, e.g. ~
    #[arg(long, global = true, env = "PHONEBOOK_FILE", default_value = DEFAULT_PHONEBOOK_FILE)]
    pub file: PathBuf,

    /// Number of entries shown per page
    #[arg(long, global = true, default_value = "30")]
    pub page_size: NonZeroUsize,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Adds a new entry to the phonebook
    Insert(InsertArgs),
    /// Shows the phonebook page by page
    All(AllArgs),
    /// Finds entries by first name, last name or both
    Search(SearchArgs),
    /// Changes fields on every entry matching the search, --search-first-name and / or --search-last-name is required
    Update(UpdateArgs),
}

#[derive(Args, Debug)]
pub struct InsertArgs {
    #[arg(long, alias = "first_name")]
    pub first_name: String,

    #[arg(long, alias = "last_name")]
    pub last_name: String,

    #[arg(long)]
    pub patronymic: Option<String>,

    #[arg(long, alias = "personal_number")]
    pub personal_number: String,

    #[arg(long, alias = "office_number")]
    pub office_number: Option<String>,

    #[arg(long, alias = "company_name")]
    pub company_name: Option<String>,
}

impl InsertArgs {
    pub fn into_statement(self) -> Statement {
        let entry = Entry::new(self.first_name, self.last_name, self.personal_number)
            .with_patronymic(self.patronymic)
            .with_office_number(self.office_number)
            .with_company_name(self.company_name);

        Statement::Insert(entry)
    }
}

#[derive(Args, Debug)]
pub struct AllArgs {
    /// Shows a single page (starting at 1) instead of paging interactively
    #[arg(long)]
    pub page: Option<NonZeroUsize>,
}

impl AllArgs {
    pub fn page_number(&self) -> Option<PageNumber> {
        self.page
            .map(|page| PageNumber::from_display_number(page.get()))
    }
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Exact, case sensitive first name
    #[arg(long, alias = "search_first_name")]
    pub search_first_name: Option<String>,

    /// Exact, case sensitive last name
    #[arg(long, alias = "search_last_name")]
    pub search_last_name: Option<String>,
}

impl SearchArgs {
    pub fn query(&self) -> QueryEntryData {
        QueryEntryData::new(
            self.search_first_name.clone(),
            self.search_last_name.clone(),
        )
    }

    pub fn into_statement(self) -> Statement {
        Statement::Search(self.query())
    }
}

#[derive(Args, Debug)]
#[command(group(
    ArgGroup::new("filter")
        .required(true)
        .multiple(true)
        .args(["search_first_name", "search_last_name"]),
))]
#[command(group(
    ArgGroup::new("changes")
        .required(true)
        .multiple(true)
        .args([
            "first_name",
            "last_name",
            "patronymic",
            "personal_number",
            "office_number",
            "company_name",
            "unset",
        ]),
))]
pub struct UpdateArgs {
    #[command(flatten)]
    pub search: SearchArgs,

    #[arg(long, alias = "first_name")]
    pub first_name: Option<String>,

    #[arg(long, alias = "last_name")]
    pub last_name: Option<String>,

    #[arg(long)]
    pub patronymic: Option<String>,

    #[arg(long, alias = "personal_number")]
    pub personal_number: Option<String>,

    #[arg(long, alias = "office_number")]
    pub office_number: Option<String>,

    #[arg(long, alias = "company_name")]
    pub company_name: Option<String>,

    /// Clears a field on the matching entries, only optional fields can be cleared
    #[arg(long, value_enum)]
    pub unset: Vec<EntryField>,
}

impl UpdateArgs {
    pub fn into_statement(self) -> Statement {
        let update = UpdateEntryData {
            first_name: UpdateStatement::from_option(self.first_name),
            last_name: UpdateStatement::from_option(self.last_name),
            patronymic: UpdateStatement::from_option(self.patronymic),
            personal_number: UpdateStatement::from_option(self.personal_number),
            office_number: UpdateStatement::from_option(self.office_number),
            company_name: UpdateStatement::from_option(self.company_name),
        };

        let update = self
            .unset
            .into_iter()
            .fold(update, |update, field| {
                update.set_statement(field, UpdateStatement::Unset)
            });

        Statement::Update(self.search.query(), update)
    }
}
