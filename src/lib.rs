pub mod cli;
pub mod persistence;

pub mod consts {
    pub mod consts;
}

pub mod model {
    pub mod entry;
    pub mod statement;
}

pub mod database {
    pub mod database;
    pub mod options;

    pub mod table {
        pub mod query;
        pub mod row;
        pub mod table;
    }
}
