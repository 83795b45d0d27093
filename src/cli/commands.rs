use std::io::{BufRead, Write};

use anyhow::Context;

use crate::{
    consts::consts::PageNumber,
    database::database::Database,
    model::statement::{Page, Statement, StatementResult},
};

use super::{
    args::Command,
    display::{self, EMPTY_PHONEBOOK, LAST_PAGE, NEXT_PAGE_PROMPT, SAVED},
};

/// Runs one command against the database. `input` is only read by the interactive pager
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    database: &mut Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Insert(args) => {
            database
                .run_statement(args.into_statement())
                .context("Unable to insert entry")?;

            writeln!(output, "{}", SAVED)?;
        }
        Command::All(args) => match args.page_number() {
            Some(page) => {
                let page = list_page(database, page)?;

                if page.entries.is_empty() {
                    if page.number == PageNumber::new_first_page() {
                        writeln!(output, "{}", EMPTY_PHONEBOOK)?;
                    } else {
                        writeln!(output, "No entries on page {}", page.number)?;
                    }
                } else {
                    display::write_page(output, &page)?;
                }
            }
            None => page_through(database, input, output)?,
        },
        Command::Search(args) => {
            let result = database
                .run_statement(args.into_statement())
                .context("Unable to search the phonebook")?;

            if let StatementResult::List(entries) = result {
                display::write_search_result(output, &entries)?;
            }
        }
        Command::Update(args) => {
            let result = database
                .run_statement(args.into_statement())
                .context("Unable to update the phonebook")?;

            if let StatementResult::Updated(entries) = result {
                display::write_update_result(output, &entries)?;
            }
        }
    }

    output.flush()?;

    Ok(())
}

fn list_page(database: &mut Database, page: PageNumber) -> anyhow::Result<Page> {
    let page_size = database.options().page_size;

    let result = database
        .run_statement(Statement::ListPage { page, page_size })
        .context("Unable to list the phonebook")?;

    match result {
        StatementResult::Page(page) => Ok(page),
        other => Err(anyhow::anyhow!("Unexpected result for page listing: {:?}", other)),
    }
}

/// Shows one page at a time, asking before each following page. Stops on anything but "y" or at end of input
fn page_through<R: BufRead, W: Write>(
    database: &mut Database,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<()> {
    let mut page_number = PageNumber::new_first_page();

    loop {
        let page = list_page(database, page_number)?;

        if page_number == PageNumber::new_first_page() && page.entries.is_empty() {
            writeln!(output, "{}", EMPTY_PHONEBOOK)?;
            return Ok(());
        }

        display::write_page(output, &page)?;

        if !page.has_next {
            writeln!(output, "{}", LAST_PAGE)?;
            return Ok(());
        }

        write!(output, "{}", NEXT_PAGE_PROMPT)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            // End of input, finish the prompt line
            writeln!(output)?;
            return Ok(());
        }

        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }

        page_number = page_number.increment();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::{
        cli::args::{AllArgs, InsertArgs, SearchArgs, UpdateArgs},
        database::options::DatabaseOptions,
        model::entry::{Entry, EntryField},
    };

    fn database_with(count: usize, page_size: usize) -> Database {
        let mut database = Database::new(DatabaseOptions::new_test().set_page_size(page_size));

        for i in 0..count {
            database
                .run_statement(Statement::Insert(Entry::new(
                    format!("First{}", i),
                    "Last".to_string(),
                    i.to_string(),
                )))
                .expect("should insert");
        }

        database
    }

    fn run(database: &mut Database, command: Command, input: &str) -> String {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();

        execute(command, database, &mut input, &mut output).expect("command should succeed");

        String::from_utf8(output).expect("output is utf8")
    }

    fn all(page: Option<usize>) -> Command {
        Command::All(AllArgs {
            page: page.and_then(std::num::NonZeroUsize::new),
        })
    }

    mod all {
        use super::*;

        #[test]
        fn empty_phonebook() {
            let mut database = database_with(0, 30);

            assert_eq!(run(&mut database, all(None), ""), "Phonebook is empty\n");
            assert_eq!(run(&mut database, all(Some(1)), ""), "Phonebook is empty\n");
        }

        #[test]
        fn pager_stops_when_user_declines() {
            let mut database = database_with(5, 2);

            let output = run(&mut database, all(None), "y\nn\n");

            assert_eq!(output.matches("-- Page").count(), 2);
            assert_eq!(output.matches(NEXT_PAGE_PROMPT).count(), 2);
            assert!(output.contains("First3"));
            assert!(!output.contains("First4"));
        }

        #[test]
        fn pager_does_not_prompt_after_last_page() {
            let mut database = database_with(5, 2);

            let output = run(&mut database, all(None), "y\ny\ny\ny\n");

            assert_eq!(output.matches("-- Page").count(), 3);
            assert_eq!(output.matches(NEXT_PAGE_PROMPT).count(), 2);
            assert!(output.ends_with(&format!(
                "First4 | personal: 4 | office: - | company: -\n{}\n",
                LAST_PAGE
            )));
        }

        #[test]
        fn single_page_is_followed_by_last_page_notice() {
            let mut database = database_with(2, 30);

            let output = run(&mut database, all(None), "");

            assert_eq!(output.matches(NEXT_PAGE_PROMPT).count(), 0);
            assert_eq!(output.lines().last(), Some(LAST_PAGE));
        }

        #[test]
        fn pager_stops_at_end_of_input() {
            let mut database = database_with(5, 2);

            let output = run(&mut database, all(None), "");

            assert_eq!(output.matches("-- Page").count(), 1);
            assert!(output.ends_with(&format!("{}\n", NEXT_PAGE_PROMPT)));
        }

        #[test]
        fn single_page_past_the_end() {
            let mut database = database_with(5, 2);

            assert_eq!(
                run(&mut database, all(Some(4)), ""),
                "No entries on page 4\n"
            );
        }

        #[test]
        fn running_twice_gives_identical_output() {
            let mut database = database_with(7, 3);

            let first = run(&mut database, all(None), "y\n");
            let second = run(&mut database, all(None), "y\n");

            assert_eq!(first, second);
        }
    }

    #[test]
    fn insert_then_search_prints_entry() {
        let mut database = database_with(0, 30);

        let output = run(
            &mut database,
            Command::Insert(InsertArgs {
                first_name: "Ivan".to_string(),
                last_name: "Petrov".to_string(),
                patronymic: None,
                personal_number: "1".to_string(),
                office_number: None,
                company_name: None,
            }),
            "",
        );
        assert_eq!(output, "Saved successfully\n");

        let output = run(
            &mut database,
            Command::Search(SearchArgs {
                search_first_name: Some("Ivan".to_string()),
                search_last_name: None,
            }),
            "",
        );
        assert_eq!(
            output,
            "Petrov Ivan | personal: 1 | office: - | company: -\n"
        );
    }

    #[test]
    fn search_without_match() {
        let mut database = database_with(3, 30);

        let output = run(
            &mut database,
            Command::Search(SearchArgs {
                search_first_name: None,
                search_last_name: Some("Nobody".to_string()),
            }),
            "",
        );

        assert_eq!(output, "No entries matching the criteria\n");
    }

    #[test]
    fn update_unsetting_required_field_fails() {
        let mut database = database_with(1, 30);

        let result = execute(
            Command::Update(UpdateArgs {
                search: SearchArgs {
                    search_first_name: Some("First0".to_string()),
                    search_last_name: None,
                },
                first_name: None,
                last_name: None,
                patronymic: None,
                personal_number: None,
                office_number: None,
                company_name: None,
                unset: vec![EntryField::PersonalNumber],
            }),
            &mut database,
            &mut Cursor::new(Vec::new()),
            &mut Vec::new(),
        );

        let error = result.expect_err("should fail");
        assert_eq!(
            format!("{:#}", error),
            "Unable to update the phonebook: Cannot set field to null: personal_number"
        );
    }
}
