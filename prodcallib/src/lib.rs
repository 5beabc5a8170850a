//! prodcallib — разбор производственного календаря (строка на год)
//! и выгрузка его в посуточный CSV.

pub mod error;
pub mod model;
pub mod parse;
pub mod traits;
pub mod convert;

pub mod formats {
    pub mod csv;
}
