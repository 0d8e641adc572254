use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Configuration {
    pub db_path: PathBuf,
    pub log_file: Option<PathBuf>,
    pub reset: bool,
}
