use crate::domain::grade::GradeTable;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn grade_table(&self) -> GradeTable;
    fn placeholder_name(&self) -> &str;
    fn precision(&self) -> usize;
}
