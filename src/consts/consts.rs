// Values
pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const DEFAULT_PHONEBOOK_FILE: &str = "phonebook.json";

// New Type Pattern -- https://doc.rust-lang.org/rust-by-example/generics/new_types.html
/// Zero based page index into the phonebook
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PageNumber(pub usize);

impl PageNumber {
    pub fn new_first_page() -> PageNumber {
        PageNumber(0)
    }

    /// Pages are shown to users starting at 1
    pub fn from_display_number(display_number: usize) -> PageNumber {
        PageNumber(display_number.saturating_sub(1))
    }

    pub fn display_number(&self) -> usize {
        self.0.saturating_add(1)
    }

    pub fn increment(&self) -> PageNumber {
        PageNumber(self.0.saturating_add(1))
    }

    pub fn to_number(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_number())
    }
}
